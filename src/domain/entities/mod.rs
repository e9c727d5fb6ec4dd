//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티와, 유스케이스가 반환하는 도메인 값 객체를 정의합니다.
//!
//! ```text
//! entities/
//! ├── account.rs     ← Account (도메인 값) + AccountDocument (`accounts` 컬렉션)
//! └── error_log.rs   ← ErrorLog (`errors` 컬렉션)
//! ```

pub mod account;
pub mod error_log;

pub use account::{Account, AccountDocument};
pub use error_log::ErrorLog;
