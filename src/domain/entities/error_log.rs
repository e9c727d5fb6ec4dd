//! Error Log Entity
//!
//! 서버 에러(500) 발생 시 `errors` 컬렉션에 기록되는 문서입니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorLog {
    /// 원본 에러의 진단 트레이스
    pub stack: String,
    /// 기록 시각
    pub date: DateTime,
}

impl ErrorLog {
    pub fn new(stack: impl Into<String>) -> Self {
        Self {
            stack: stack.into(),
            date: DateTime::now(),
        }
    }
}
