//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인 유스케이스 계약의 구현체를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::accounts::DbAddAccount;
//!
//! let add_account = DbAddAccount::new(account_repository, PasswordConfig::bcrypt_cost());
//! let account = add_account.add(input).await?;
//! ```

pub mod accounts;
