//! # AddAccount 유스케이스

use async_trait::async_trait;
use crate::domain::dto::AddAccountInput;
use crate::domain::entities::Account;
use crate::errors::AppResult;

/// 검증된 회원가입 데이터로 새 계정을 영속화하는 유스케이스
///
/// 실패는 `Err(AppError)`로 전달되며, 컨트롤러는 이를 500 응답으로 정규화합니다.
///
/// ```rust,ignore
/// let account = add_account.add(AddAccountInput {
///     name: "any_name".to_string(),
///     email: "any_email@email.com".to_string(),
///     password: "any_password".to_string(),
/// }).await?;
/// ```
#[async_trait]
pub trait AddAccount: Send + Sync {
    async fn add(&self, account: AddAccountInput) -> AppResult<Account>;
}
