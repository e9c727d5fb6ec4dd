//! # 계정 리포지토리 구현
//!
//! 계정 엔티티를 MongoDB `accounts` 컬렉션에 저장합니다.
//! 스키마와 인덱스는 다루지 않습니다. 문서는 `{ _id, name, email, password }` 형태입니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::Collection;
use crate::{
    db::Database,
    domain::{
        dto::AddAccountInput,
        entities::{Account, AccountDocument},
    },
    errors::{AppError, AppResult},
};
use crate::repositories::AddAccountRepository;

/// `accounts` 컬렉션 리포지토리
///
/// ```rust,ignore
/// let repo = AccountMongoRepository::new(database.clone());
///
/// let account = repo.add(AddAccountInput {
///     name: "any_name".to_string(),
///     email: "any_email@email.com".to_string(),
///     password: "hash_password".to_string(),
/// }).await?;
///
/// println!("새 계정 ID: {}", account.id);
/// ```
pub struct AccountMongoRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl AccountMongoRepository {
    pub const COLLECTION: &'static str = "accounts";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<AccountDocument> {
        self.db.collection::<AccountDocument>(Self::COLLECTION)
    }
}

#[async_trait]
impl AddAccountRepository for AccountMongoRepository {
    /// 새 계정 저장
    ///
    /// MongoDB가 생성한 `_id`를 16진수 문자열 `id`로 노출한 [`Account`]를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Account)` - 생성된 계정 (ID 포함)
    /// * `Err(AppError::DatabaseError)` - 삽입 실패 또는 ObjectId가 아닌 `_id`
    async fn add(&self, account: AddAccountInput) -> AppResult<Account> {
        let document = AccountDocument::from(account);

        let result = self.collection()
            .insert_one(&document)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(format!("예상하지 못한 _id 형식: {}", result.inserted_id))
        })?;

        log::debug!("계정 문서 저장 완료: {}", id.to_hex());

        Ok(document.into_account(id))
    }
}
