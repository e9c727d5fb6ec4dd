//! # Error Handling Module
//!
//! - [`errors`] - 인프라/유스케이스 계층 에러 (`AppError`)
//! - [`presentation`] - 컨트롤러 응답 본문으로 쓰이는 에러 디스크립터

pub mod errors;
pub mod presentation;

pub use errors::*;
pub use presentation::*;
