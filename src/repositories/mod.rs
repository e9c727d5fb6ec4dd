//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 상위 계층이 의존하는 저장소 계약(trait)과 MongoDB 구현체를 제공합니다.
//! 구현체는 명시적으로 전달받은 [`Database`](crate::db::Database) 핸들만 사용합니다.
//!
//! | 계약 | 구현체 | 컬렉션 |
//! |------|--------|--------|
//! | [`AddAccountRepository`] | [`accounts::AccountMongoRepository`] | `accounts` |
//! | [`LogErrorRepository`] | [`log_error::LogErrorMongoRepository`] | `errors` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::accounts::AccountMongoRepository;
//!
//! let repo = AccountMongoRepository::new(database.clone());
//! let account = repo.add(input).await?;
//! ```

use async_trait::async_trait;
use crate::domain::dto::AddAccountInput;
use crate::domain::entities::Account;
use crate::errors::AppResult;

pub mod accounts;
pub mod log_error;

/// 계정 문서를 저장하고 할당된 ID와 함께 돌려주는 저장소
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    async fn add(&self, account: AddAccountInput) -> AppResult<Account>;
}

/// 서버 에러 트레이스를 기록하는 저장소
#[async_trait]
pub trait LogErrorRepository: Send + Sync {
    async fn log_error(&self, stack: &str) -> AppResult<()>;
}
