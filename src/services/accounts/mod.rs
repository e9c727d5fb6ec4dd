//! 계정 관리 서비스 모듈
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost, `PasswordConfig` 참고)
//! - 평문 비밀번호는 저장하거나 로그에 남기지 않음

pub mod db_add_account;

pub use db_add_account::DbAddAccount;
