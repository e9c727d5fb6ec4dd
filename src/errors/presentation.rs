//! # 프레젠테이션 에러 디스크립터
//!
//! 컨트롤러가 응답 본문에 담아 돌려주는 에러 값 객체입니다.
//! 예외처럼 던져지지 않고 항상 [`HttpResponse`](crate::handlers::HttpResponse)의
//! `body`로 반환됩니다.
//!
//! | 변형 | `error` | `message` | 상태 코드 |
//! |------|---------|-----------|-----------|
//! | `MissingParam` | `MissingParamError` | `Missing param: {field}` | 400 |
//! | `InvalidParam` | `InvalidParamError` | `Invalid param: {field}` | 400 |
//! | `Server` | `ServerError` | `Internal server error` | 500 |
//!
//! ## 직렬화 형식
//!
//! ```json
//! { "error": "MissingParamError", "message": "Missing param: email" }
//! ```
//!
//! `ServerError`의 스택은 직렬화되지 않습니다. 스택은 메모리에만 남아
//! `LogControllerDecorator`가 `errors` 컬렉션에 기록할 때 사용합니다.

use std::error::Error as StdError;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// 컨트롤러 응답용 에러 디스크립터
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresentationError {
    /// 필수 필드가 요청에 없음 (400)
    #[error("Missing param: {0}")]
    MissingParam(String),

    /// 필드는 있으나 의미 검증 실패 (이메일 형식, 비밀번호 불일치 등) (400)
    #[error("Invalid param: {0}")]
    InvalidParam(String),

    /// 협력 객체의 예상치 못한 실패 (500)
    #[error("{0}")]
    Server(ServerError),
}

impl PresentationError {
    pub fn missing_param(field: impl Into<String>) -> Self {
        PresentationError::MissingParam(field.into())
    }

    pub fn invalid_param(field: impl Into<String>) -> Self {
        PresentationError::InvalidParam(field.into())
    }

    /// 직렬화 시 `error` 필드에 쓰이는 이름
    pub fn name(&self) -> &'static str {
        match self {
            PresentationError::MissingParam(_) => "MissingParamError",
            PresentationError::InvalidParam(_) => "InvalidParamError",
            PresentationError::Server(_) => "ServerError",
        }
    }
}

impl Serialize for PresentationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("PresentationError", 2)?;
        state.serialize_field("error", self.name())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// 서버 에러
///
/// 원본 실패의 진단 트레이스(에러 체인)를 보관합니다.
/// 메시지는 항상 `Internal server error`이며 원본 에러는 호출자에게 노출되지 않습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Internal server error")]
pub struct ServerError {
    stack: String,
}

impl ServerError {
    pub fn new(stack: impl Into<String>) -> Self {
        Self { stack: stack.into() }
    }

    /// 에러와 그 `source()` 체인을 따라가며 트레이스를 만듭니다.
    ///
    /// ```text
    /// Database error: connection refused
    ///   caused by: ...
    /// ```
    pub fn from_error(error: &(dyn StdError + 'static)) -> Self {
        let mut stack = error.to_string();
        let mut source = error.source();

        while let Some(cause) = source {
            stack.push_str("\n  caused by: ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }

        Self { stack }
    }

    pub fn stack(&self) -> &str {
        &self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[derive(Error, Debug)]
    #[error("outer failure")]
    struct Outer {
        #[source]
        inner: AppError,
    }

    #[test]
    fn test_messages() {
        assert_eq!(PresentationError::missing_param("name").to_string(), "Missing param: name");
        assert_eq!(
            PresentationError::invalid_param("passwordConfirmation").to_string(),
            "Invalid param: passwordConfirmation"
        );
        assert_eq!(
            PresentationError::Server(ServerError::new("any")).to_string(),
            "Internal server error"
        );
    }

    #[test]
    fn test_serialization_hides_stack() {
        let value = serde_json::to_value(PresentationError::Server(ServerError::new("secret trace"))).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "error": "ServerError", "message": "Internal server error" })
        );
    }

    #[test]
    fn test_serialization_of_client_errors() {
        let value = serde_json::to_value(PresentationError::missing_param("email")).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "error": "MissingParamError", "message": "Missing param: email" })
        );
    }

    #[test]
    fn test_server_error_from_error_walks_source_chain() {
        let error = Outer {
            inner: AppError::DatabaseError("connection refused".to_string()),
        };

        let server_error = ServerError::from_error(&error);

        assert_eq!(
            server_error.stack(),
            "outer failure\n  caused by: Database error: connection refused"
        );
    }

    #[test]
    fn test_server_error_equality_is_by_stack() {
        assert_eq!(ServerError::new("any"), ServerError::new("any"));
        assert_ne!(ServerError::new("any"), ServerError::new("other"));
    }
}
