//! # 이메일 검증 어댑터

use validator::ValidateEmail;
use crate::errors::AppResult;
use crate::handlers::EmailValidator;

/// `validator` 크레이트의 이메일 구문 검사를 사용하는 [`EmailValidator`]
///
/// HTML5 / RFC 5322 기반 형식 검사만 수행하며 실패하지 않습니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> AppResult<bool> {
        Ok(email.validate_email())
    }
}
