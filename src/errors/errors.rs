//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 유스케이스와 리포지토리, 인프라 초기화 과정의 실패를 표현합니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 컨트롤러는 이 에러를 밖으로 던지지 않습니다. 협력 객체가 돌려준 `AppError`는
//! 컨트롤러 경계에서 `ServerError` 응답으로 정규화됩니다
//! ([`crate::errors::presentation`] 참고). `ResponseError` 구현은
//! 라우트 어댑터의 JSON 본문 파싱 실패처럼 컨트롤러 밖에서 발생하는 에러에만 쓰입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn add(&self, account: AddAccountInput) -> Result<Account, AppError> {
//!     let result = self.collection()
//!         .insert_one(&document)
//!         .await
//!         .map_err(|e| AppError::DatabaseError(e.to_string()))?;
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와
    /// `{ "error": <이름>, "message": <메시지> }` 형식의 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.name(),
                "message": self.to_string()
            }))
    }
}

impl AppError {
    /// 응답 본문의 `error` 필드에 쓰이는 이름
    pub fn name(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "DatabaseError",
            AppError::ValidationError(_) => "ValidationError",
            AppError::InternalError(_) => "InternalError",
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[actix_web::test]
    async fn test_error_response_body_shape() {
        let error = AppError::ValidationError("Json deserialize error".to_string());
        let response = error.error_response();

        let bytes = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "error": "ValidationError",
                "message": "Validation error: Json deserialize error"
            })
        );
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Json deserialize error".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_with_context_is_lazy() {
        let ok: Result<u8, &str> = Ok(1);
        let value = ok.with_context(|| panic!("must not be evaluated")).unwrap();
        assert_eq!(value, 1);

        let err: Result<u8, &str> = Err("boom");
        let app_result = err.with_context(|| format!("step {}", 3));
        assert_eq!(app_result.unwrap_err().to_string(), "Internal server error: step 3: boom");
    }
}
