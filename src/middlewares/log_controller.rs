//! # 에러 로깅 컨트롤러 데코레이터
//!
//! 감싼 컨트롤러의 응답이 `500 ServerError`이면 그 트레이스를
//! [`LogErrorRepository`]에 기록합니다. 감싸진 컨트롤러는 로그 저장소를 알지 못합니다.
//!
//! ```rust,ignore
//! let controller = LogControllerDecorator::new(
//!     SignupController::new(email_validator, add_account),
//!     Arc::new(LogErrorMongoRepository::new(database.clone())),
//! );
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use crate::handlers::{Controller, HttpRequest, HttpResponse};
use crate::repositories::LogErrorRepository;

pub struct LogControllerDecorator<C> {
    controller: C,
    log_error_repository: Arc<dyn LogErrorRepository>,
}

impl<C> LogControllerDecorator<C> {
    pub fn new(controller: C, log_error_repository: Arc<dyn LogErrorRepository>) -> Self {
        Self {
            controller,
            log_error_repository,
        }
    }
}

#[async_trait]
impl<C> Controller for LogControllerDecorator<C>
where
    C: Controller,
{
    type Body = C::Body;

    async fn handle(&self, request: HttpRequest) -> HttpResponse<C::Body> {
        let response = self.controller.handle(request).await;

        if let Some(server_error) = response.server_error() {
            // 기록 실패는 응답에 영향을 주지 않음
            if let Err(e) = self.log_error_repository.log_error(server_error.stack()).await {
                log::error!("에러 로그 저장 실패: {} (원본: {})", e, server_error.stack());
            }
        }

        response
    }
}
