//! # 계정 생성 유스케이스 구현
//!
//! 비밀번호를 해싱한 뒤 저장소에 계정을 저장합니다.
//!
//! ```text
//! SignupController ──add──▶ DbAddAccount ──add──▶ AddAccountRepository
//!                                    │
//!                                    └─ bcrypt::hash(password, cost)
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use bcrypt::hash;
use crate::{
    domain::{
        dto::AddAccountInput,
        entities::Account,
        usecases::AddAccount,
    },
    errors::{AppResult, ErrorContext},
    repositories::AddAccountRepository,
};

/// 데이터베이스 기반 `AddAccount` 구현
pub struct DbAddAccount {
    /// 계정 저장소
    add_account_repository: Arc<dyn AddAccountRepository>,
    /// bcrypt cost (4-31)
    bcrypt_cost: u32,
}

impl DbAddAccount {
    pub fn new(add_account_repository: Arc<dyn AddAccountRepository>, bcrypt_cost: u32) -> Self {
        Self {
            add_account_repository,
            bcrypt_cost,
        }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    /// 새 계정 생성
    ///
    /// # 처리 과정
    ///
    /// 1. **비밀번호 해싱**: 설정된 cost로 bcrypt 해시 생성 (소요 시간 로깅)
    /// 2. **저장**: 해시된 비밀번호로 교체한 입력을 저장소에 전달
    ///
    /// # 반환값
    ///
    /// * `Ok(Account)` - 저장소가 돌려준 계정
    /// * `Err(AppError::InternalError)` - 해싱 실패 (잘못된 cost 등)
    /// * 저장소 에러는 그대로 전파
    ///
    /// # 로그 예제
    ///
    /// ```text
    /// [INFO] Password hashing took: 156ms
    /// [INFO] Total account creation took: 171ms
    /// ```
    async fn add(&self, account: AddAccountInput) -> AppResult<Account> {
        let start_time = std::time::Instant::now();

        let hash_start = std::time::Instant::now();
        let hashed_password = hash(&account.password, self.bcrypt_cost)
            .with_context(|| format!("비밀번호 해싱 실패 (cost {})", self.bcrypt_cost))?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let created = self.add_account_repository
            .add(AddAccountInput {
                password: hashed_password,
                ..account
            })
            .await?;

        log::info!("Total account creation took: {:?}", start_time.elapsed());

        Ok(created)
    }
}
