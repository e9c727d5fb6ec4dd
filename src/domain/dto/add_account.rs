//! # 계정 생성 입력 DTO

use serde::{Deserialize, Serialize};

/// `AddAccount` 유스케이스의 입력
///
/// 회원가입 요청에서 검증을 통과한 부분집합입니다.
/// `passwordConfirmation`은 컨트롤러에서 일치 여부만 확인하고 여기에는 포함되지 않습니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "name": "any_name",
///   "email": "any_email@email.com",
///   "password": "any_password"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAccountInput {
    pub name: String,
    pub email: String,
    pub password: String,
}
