//! 계정 데이터 액세스 모듈
//!
//! [`AccountMongoRepository`](account_repo::AccountMongoRepository)를 통해
//! `accounts` 컬렉션에 계정을 저장합니다.

pub mod account_repo;

pub use account_repo::AccountMongoRepository;
