//! # 프레젠테이션 계층 프로토콜
//!
//! 컨트롤러가 소비하고 생산하는 타입과 협력 객체의 계약입니다.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use crate::errors::{AppResult, PresentationError, ServerError};

/// 컨트롤러 입력
///
/// `body`는 필드 이름 → 값의 불투명한 JSON 맵입니다.
/// 전송 계층은 어떤 불변식도 보장하지 않으며 모든 검증은 컨트롤러의 책임입니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn new(body: Value) -> Self {
        Self { body: Some(body) }
    }

    /// 본문에서 필드 값을 꺼냅니다. 본문이 없거나 객체가 아니면 `None`입니다.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.as_ref().and_then(|body| body.get(name))
    }
}

/// 응답 본문: 에러 디스크립터 또는 성공 페이로드
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody<T> {
    Error(PresentationError),
    Data(T),
}

/// 컨트롤러의 유일한 출력 타입
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse<T> {
    pub status_code: u16,
    pub body: ResponseBody<T>,
}

impl<T> HttpResponse<T> {
    /// 본문이 `ServerError`인 경우 그 값을 돌려줍니다.
    pub fn server_error(&self) -> Option<&ServerError> {
        match &self.body {
            ResponseBody::Error(PresentationError::Server(error)) => Some(error),
            _ => None,
        }
    }
}

/// 요청을 받아 응답 봉투를 만드는 컨트롤러
///
/// `handle`은 실패하지 않습니다. 모든 경로가 올바른 형태의 [`HttpResponse`]를 반환합니다.
#[async_trait]
pub trait Controller: Send + Sync {
    type Body: Serialize + Send;

    async fn handle(&self, request: HttpRequest) -> HttpResponse<Self::Body>;
}

/// 이메일 주소의 구문 유효성을 판단하는 협력 객체
///
/// `Err`는 컨트롤러의 catch-all 경로로 전달되어 500 응답이 됩니다.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> AppResult<bool>;
}
