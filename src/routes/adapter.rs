//! # actix-web 라우트 어댑터
//!
//! 전송 계층 요청에서 JSON 본문을 꺼내 [`HttpRequest`]로 만들고,
//! 컨트롤러의 [`HttpResponse`]를 상태 코드와 JSON 본문으로 되돌려 씁니다.
//! 컨트롤러는 `web::Data<C>`로 등록된 인스턴스를 사용합니다.
//!
//! ## 본문 처리
//!
//! | 요청 | 컨트롤러 입력 |
//! |------|---------------|
//! | 본문 없음 (공백만 있는 경우 포함) | `body: None` |
//! | `Content-Type`이 JSON이 아님 | `body: None` |
//! | JSON `Content-Type` + 올바른 JSON | `body: Some(value)` |
//! | JSON `Content-Type` + 잘못된 JSON | 컨트롤러 호출 없이 `400 ValidationError` |
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(controller))
//!     .route("/signup", web::post().to(adapt_route::<SignupRouteController>))
//! ```

use actix_web::{http::StatusCode, web, HttpMessage};
use serde_json::Value;
use crate::errors::{AppError, AppResult};
use crate::handlers::{Controller, HttpRequest};

/// 컨트롤러를 actix 핸들러로 변환합니다.
pub async fn adapt_route<C>(
    controller: web::Data<C>,
    req: actix_web::HttpRequest,
    payload: web::Bytes,
) -> AppResult<actix_web::HttpResponse>
where
    C: Controller + 'static,
{
    let request = HttpRequest {
        body: parse_body(req.content_type(), &payload)?,
    };
    let response = controller.handle(request).await;

    let status = StatusCode::from_u16(response.status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    Ok(actix_web::HttpResponse::build(status).json(response.body))
}

/// 요청 본문을 JSON 값으로 변환합니다. 본문이 없거나 JSON 요청이 아니면 `None`입니다.
fn parse_body(content_type: &str, payload: &[u8]) -> AppResult<Option<Value>> {
    if payload.iter().all(u8::is_ascii_whitespace) || !is_json_content_type(content_type) {
        return Ok(None);
    }

    serde_json::from_slice(payload)
        .map(Some)
        .map_err(|e| AppError::ValidationError(format!("Json deserialize error: {}", e)))
}

/// `application/json`, `application/*+json`
fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::json;
    use crate::errors::PresentationError;
    use crate::handlers::{bad_request, success_request, HttpResponse};

    /// 본문에 `fail`이 있으면 400, 아니면 받은 본문을 `{ "body": ... }`로 돌려주는 컨트롤러
    struct EchoController;

    #[async_trait]
    impl Controller for EchoController {
        type Body = Value;

        async fn handle(&self, request: HttpRequest) -> HttpResponse<Value> {
            if request.field("fail").is_some() {
                return bad_request(PresentationError::missing_param("name"));
            }
            success_request(json!({ "body": request.body }))
        }
    }

    macro_rules! echo_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(EchoController))
                    .route("/signup", web::post().to(adapt_route::<EchoController>)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_writes_success_status_and_body() {
        let app = echo_app!();

        let req = test::TestRequest::post()
            .uri("/signup")
            .set_json(json!({ "name": "any_name" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "body": { "name": "any_name" } }));
    }

    #[actix_web::test]
    async fn test_writes_error_descriptor() {
        let app = echo_app!();

        let req = test::TestRequest::post()
            .uri("/signup")
            .set_json(json!({ "fail": true }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "error": "MissingParamError", "message": "Missing param: name" })
        );
    }

    #[actix_web::test]
    async fn test_empty_body_reaches_controller_as_none() {
        let app = echo_app!();

        let req = test::TestRequest::post().uri("/signup").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "body": null }));
    }

    #[actix_web::test]
    async fn test_non_json_content_type_reaches_controller_as_none() {
        let app = echo_app!();

        let req = test::TestRequest::post()
            .uri("/signup")
            .insert_header(("content-type", "text/plain"))
            .set_payload("name=any_name")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "body": null }));
    }

    #[actix_web::test]
    async fn test_json_content_type_with_charset() {
        let app = echo_app!();

        let req = test::TestRequest::post()
            .uri("/signup")
            .insert_header(("content-type", "application/json; charset=utf-8"))
            .set_payload(r#"{"name":"any_name"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "body": { "name": "any_name" } }));
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = echo_app!();

        let req = test::TestRequest::post()
            .uri("/signup")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "ValidationError");
        assert!(body["message"].as_str().unwrap().starts_with("Validation error: Json deserialize error"));
    }

    #[::core::prelude::v1::test]
    fn test_json_content_type_detection() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("Application/JSON; charset=utf-8"));
        assert!(is_json_content_type("application/merge-patch+json"));
        assert!(!is_json_content_type(""));
        assert!(!is_json_content_type("text/plain"));
    }
}
