//! 공통 유틸리티 모듈
//!
//! 외부 라이브러리를 프레젠테이션 계층 계약에 맞추는 어댑터들을 제공합니다.
//!
//! # Modules
//!
//! - [`email_validator`] - `validator` 크레이트 기반 [`EmailValidator`](crate::handlers::EmailValidator) 구현

pub mod email_validator;

pub use email_validator::EmailValidatorAdapter;
