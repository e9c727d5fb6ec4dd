//! 유스케이스 계약 모듈
//!
//! 프레젠테이션 계층이 호출하는 도메인 연산의 인터페이스입니다.
//! 구현체는 `services` 모듈에 있습니다.

pub mod add_account;

pub use add_account::AddAccount;
