//! Account Entity Implementation
//!
//! 회원가입으로 생성되는 계정 엔티티입니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::domain::dto::AddAccountInput;

/// 계정
///
/// `AddAccount` 유스케이스가 반환하는 불변 값입니다.
/// `id`는 영속 계층이 할당한 식별자(ObjectId의 16진수 표현)이며,
/// 컨트롤러 입장에서는 의미를 해석하지 않는 불투명한 문자열입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    /// 해시된 비밀번호
    pub password: String,
}

/// `accounts` 컬렉션에 저장되는 문서
///
/// 삽입 전에는 `id`가 비어 있으며 MongoDB가 `_id`를 생성합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AccountDocument {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 삽입 결과로 받은 `_id`를 붙여 도메인 [`Account`]로 변환합니다.
    pub fn into_account(self, id: ObjectId) -> Account {
        Account {
            id: id.to_hex(),
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

impl From<AddAccountInput> for AccountDocument {
    fn from(input: AddAccountInput) -> Self {
        Self {
            id: None,
            name: input.name,
            email: input.email,
            password: input.password,
        }
    }
}
