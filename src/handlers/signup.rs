//! # Signup Controller
//!
//! 회원가입 요청을 검증하고, 유효하면 계정 생성을 `AddAccount` 유스케이스에 위임합니다.
//! 모든 결과는 [`HttpResponse`]로 변환되며 `handle`에서 에러가 새어 나가지 않습니다.
//!
//! ## 처리 순서
//!
//! 1. 필수 필드 `name`, `email`, `password`, `passwordConfirmation`을 이 순서로 확인하고
//!    처음 누락된 필드 하나만 `MissingParamError`로 보고
//!    (키 없음, `null`, `false`, `0`, `""`는 누락)
//! 2. `password != passwordConfirmation`이면 `InvalidParamError("passwordConfirmation")`
//!    (JSON 값 그대로 비교)
//! 3. `email`이 문자열이 아니거나 `EmailValidator`가 거부하면 `InvalidParamError("email")`
//! 4. `name`, `password`가 문자열이 아니면 `InvalidParamError(field)`
//! 5. `AddAccount::add({ name, email, password })`
//! 6. 성공 시 `200` + 생성된 계정, 3·5단계의 `Err`는 `500` + `ServerError`
//!
//! ## 응답 예제
//!
//! ```json
//! // 400
//! { "error": "MissingParamError", "message": "Missing param: email" }
//!
//! // 200
//! { "id": "65f1c2...", "name": "any_name", "email": "any_email@email.com", "password": "$2b$12$..." }
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use serde_json::Value;
use crate::domain::dto::AddAccountInput;
use crate::domain::entities::Account;
use crate::domain::usecases::AddAccount;
use crate::errors::PresentationError;
use super::http_helper::{bad_request, server_error, success_request};
use super::protocols::{Controller, EmailValidator, HttpRequest, HttpResponse};

/// 필수 필드. 순서대로 검사하며 처음 누락된 필드만 보고합니다.
const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "password", "passwordConfirmation"];

/// 회원가입 컨트롤러
///
/// 생성 시 한 번 협력 객체를 주입받고 이후에는 상태를 변경하지 않으므로
/// `Arc`로 감싸 여러 워커에서 동시에 재사용할 수 있습니다.
///
/// 타임아웃이나 취소 토큰은 적용하지 않습니다. `AddAccount`가 응답하지 않으면
/// `handle`도 끝나지 않으며, 반환된 future를 drop하는 것(클라이언트 연결 종료 시
/// actix가 하는 것처럼)이 유일한 취소 수단입니다.
pub struct SignupController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignupController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }
}

#[async_trait]
impl Controller for SignupController {
    type Body = Account;

    async fn handle(&self, request: HttpRequest) -> HttpResponse<Account> {
        if let Err(error) = check_required_fields(&request) {
            log::debug!("회원가입 요청 거부: {}", error);
            return bad_request(error);
        }

        // 문자열 변환 전 원본 값끼리 비교
        if request.field("password") != request.field("passwordConfirmation") {
            return bad_request(PresentationError::invalid_param("passwordConfirmation"));
        }

        let email = match string_field(&request, "email") {
            Ok(email) => email,
            Err(error) => return bad_request(error),
        };

        match self.email_validator.is_valid(email) {
            Ok(true) => {}
            Ok(false) => return bad_request(PresentationError::invalid_param("email")),
            Err(e) => {
                log::error!("이메일 검증 실패: {}", e);
                return server_error(&e);
            }
        }

        let account = match build_account_input(&request, email) {
            Ok(account) => account,
            Err(error) => return bad_request(error),
        };

        match self.add_account.add(account).await {
            Ok(account) => success_request(account),
            Err(e) => {
                log::error!("계정 생성 실패: {}", e);
                server_error(&e)
            }
        }
    }
}

/// 처음 누락된 필수 필드를 `MissingParamError`로 돌려줍니다.
fn check_required_fields(request: &HttpRequest) -> Result<(), PresentationError> {
    match REQUIRED_FIELDS.into_iter().find(|field| is_missing(request.field(field))) {
        Some(field) => Err(PresentationError::missing_param(field)),
        None => Ok(()),
    }
}

/// 키 없음, `null`, `false`, `0`, 빈 문자열은 누락으로 취급
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

fn string_field<'a>(request: &'a HttpRequest, field: &str) -> Result<&'a str, PresentationError> {
    match request.field(field) {
        Some(Value::String(value)) => Ok(value.as_str()),
        _ => Err(PresentationError::invalid_param(field)),
    }
}

/// 유스케이스 입력을 만듭니다. 문자열이 아닌 `name`, `password`는 여기서 거부됩니다.
fn build_account_input(request: &HttpRequest, email: &str) -> Result<AddAccountInput, PresentationError> {
    Ok(AddAccountInput {
        name: string_field(request, "name")?.to_owned(),
        email: email.to_owned(),
        password: string_field(request, "password")?.to_owned(),
    })
}
