//! # 에러 로그 리포지토리 구현
//!
//! 서버 에러 트레이스를 `errors` 컬렉션에 `{ stack, date }` 문서로 기록합니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    db::Database,
    domain::entities::ErrorLog,
    errors::{AppError, AppResult},
};
use crate::repositories::LogErrorRepository;

pub struct LogErrorMongoRepository {
    db: Arc<Database>,
}

impl LogErrorMongoRepository {
    pub const COLLECTION: &'static str = "errors";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LogErrorRepository for LogErrorMongoRepository {
    async fn log_error(&self, stack: &str) -> AppResult<()> {
        self.db
            .collection::<ErrorLog>(Self::COLLECTION)
            .insert_one(ErrorLog::new(stack))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
