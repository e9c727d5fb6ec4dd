//! # Data Transfer Objects (DTO) Module
//!
//! 계층 간에 전달되는 입력 객체를 정의합니다.
//! 요청 본문 자체는 프레젠테이션 계층에서 불투명한 JSON 맵으로 다루며,
//! 모든 검증을 통과한 뒤에만 이 모듈의 타입으로 변환됩니다.

pub mod add_account;

pub use add_account::AddAccountInput;
