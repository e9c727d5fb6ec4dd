//! 에러 로그 데이터 액세스 모듈

pub mod log_error_repo;

pub use log_error_repo::LogErrorMongoRepository;
