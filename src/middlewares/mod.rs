//! 컨트롤러 횡단 관심사 모듈
//!
//! 컨트롤러를 감싸 공통 동작을 추가하는 데코레이터들을 제공합니다.
//!
//! - [`log_controller::LogControllerDecorator`] - 500 응답의 에러 트레이스를 `errors` 컬렉션에 기록

pub mod log_controller;

pub use log_controller::LogControllerDecorator;
