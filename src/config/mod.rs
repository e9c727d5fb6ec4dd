//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며,
//! `.env.dev` / `.env.prod` 파일은 `main`에서 `PROFILE`에 따라 먼저 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 데이터베이스, 서버, CORS, 속도 제한, 비밀번호 해싱 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, Environment, ServerConfig};
//!
//! let env = Environment::current();
//! let mongo_url = DatabaseConfig::mongo_url();
//! println!("Server will bind to {}:{}", ServerConfig::host(), ServerConfig::port());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 데이터베이스
//! export MONGO_URL="mongodb://localhost:27017"
//! export DATABASE_NAME="signup_service"
//!
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="5050"
//! export CORS_ALLOWED_ORIGINS="https://signup.example.com"  # 쉼표 구분, 기본값 없음
//!
//! # 요청 속도 제한
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # 보안
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;

pub use data_config::*;
