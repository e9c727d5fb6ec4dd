//! API 라우트 설정 모듈
//!
//! 회원가입 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! | 메서드 | 경로 | 처리 |
//! |--------|------|------|
//! | `GET` | `/health` | 서비스 상태 |
//! | `POST` | `/api/signup` | [`adapt_route`] → [`SignupRouteController`] |
//!
//! 컨트롤러 인스턴스는 `main`에서 `web::Data`로 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let controller = web::Data::new(factories::make_signup_controller(database.clone()));
//! let app = App::new()
//!     .app_data(controller.clone())
//!     .configure(configure_all_routes);
//! ```

pub mod adapter;

pub use adapter::adapt_route;

use actix_web::web;
use serde_json::json;
use crate::handlers::SignupController;
use crate::middlewares::LogControllerDecorator;

/// `POST /api/signup`에 연결되는 컨트롤러 타입
pub type SignupRouteController = LogControllerDecorator<SignupController>;

/// 모든 라우트를 설정합니다
///
/// ```rust,ignore
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_signup_routes(cfg);
}

/// 회원가입 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:5050/api/signup \
///   -H "Content-Type: application/json" \
///   -d '{"name":"any_name","email":"any_email@email.com","password":"123","passwordConfirmation":"123"}'
/// ```
fn configure_signup_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/signup", web::post().to(adapt_route::<SignupRouteController>))
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "signup_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "signup_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use crate::domain::{dto::AddAccountInput, entities::Account, usecases::AddAccount};
    use crate::errors::{AppError, AppResult};
    use crate::repositories::LogErrorRepository;
    use crate::utils::EmailValidatorAdapter;

    struct InMemoryAddAccount;

    #[async_trait]
    impl AddAccount for InMemoryAddAccount {
        async fn add(&self, account: AddAccountInput) -> AppResult<Account> {
            if account.name == "explode" {
                return Err(AppError::DatabaseError("connection refused".to_string()));
            }
            Ok(Account {
                id: "valid_id".to_string(),
                name: account.name,
                email: account.email,
                password: account.password,
            })
        }
    }

    struct NoopLogErrorRepository;

    #[async_trait]
    impl LogErrorRepository for NoopLogErrorRepository {
        async fn log_error(&self, _stack: &str) -> AppResult<()> {
            Ok(())
        }
    }

    fn make_controller() -> web::Data<SignupRouteController> {
        web::Data::new(LogControllerDecorator::new(
            SignupController::new(Arc::new(EmailValidatorAdapter), Arc::new(InMemoryAddAccount)),
            Arc::new(NoopLogErrorRepository),
        ))
    }

    fn signup_body(name: &str, email: &str) -> Value {
        json!({
            "name": name,
            "email": email,
            "password": "any_password",
            "passwordConfirmation": "any_password"
        })
    }

    macro_rules! signup_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(make_controller())
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = signup_app!();

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_signup_returns_account() {
        let app = signup_app!();

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(signup_body("any_name", "any_email@email.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "id": "valid_id",
                "name": "any_name",
                "email": "any_email@email.com",
                "password": "any_password"
            })
        );
    }

    #[actix_web::test]
    async fn test_signup_rejects_invalid_email() {
        let app = signup_app!();

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(signup_body("any_name", "invalid_email"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "error": "InvalidParamError", "message": "Invalid param: email" })
        );
    }

    #[actix_web::test]
    async fn test_signup_hides_server_error_cause() {
        let app = signup_app!();

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(signup_body("explode", "any_email@email.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "error": "ServerError", "message": "Internal server error" })
        );
    }

    #[actix_web::test]
    async fn test_signup_without_body_reports_missing_name() {
        let app = signup_app!();

        let req = test::TestRequest::post().uri("/api/signup").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "error": "MissingParamError", "message": "Missing param: name" })
        );
    }

    #[actix_web::test]
    async fn test_signup_requires_post() {
        let app = signup_app!();

        let req = test::TestRequest::get().uri("/api/signup").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
