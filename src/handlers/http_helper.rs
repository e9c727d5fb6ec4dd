//! HTTP 응답 헬퍼
//!
//! 표준화된 응답 봉투를 만드는 순수 함수들입니다. 부수 효과와 실패가 없습니다.

use std::error::Error as StdError;
use crate::errors::{PresentationError, ServerError};
use super::protocols::{HttpResponse, ResponseBody};

/// `400 Bad Request`
pub fn bad_request<T>(error: PresentationError) -> HttpResponse<T> {
    HttpResponse {
        status_code: 400,
        body: ResponseBody::Error(error),
    }
}

/// `500 Internal Server Error`
///
/// 원인이 된 에러를 받아 그 트레이스를 `ServerError`에 첨부합니다.
pub fn server_error<T>(error: &(dyn StdError + 'static)) -> HttpResponse<T> {
    HttpResponse {
        status_code: 500,
        body: ResponseBody::Error(PresentationError::Server(ServerError::from_error(error))),
    }
}

/// `200 OK`
pub fn success_request<T>(body: T) -> HttpResponse<T> {
    HttpResponse {
        status_code: 200,
        body: ResponseBody::Data(body),
    }
}
