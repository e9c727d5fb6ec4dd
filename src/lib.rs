//! 회원가입 서비스 백엔드
//!
//! 클린 아키텍처 계층을 따르는 계정 생성(회원가입) HTTP 서비스입니다.
//! 요청 본문을 검증하고, 비밀번호를 해싱한 뒤 MongoDB에 계정을 저장합니다.
//!
//! # Features
//!
//! - **회원가입 검증**: 필수 필드, 비밀번호 확인, 이메일 형식 검사
//! - **일관된 응답**: 400/500/200 응답을 만드는 순수 헬퍼 함수
//! - **에러 로깅**: 500 응답의 스택을 `errors` 컬렉션에 기록하는 데코레이터
//! - **MongoDB**: 계정 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← adapt_route (actix-web)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← LogControllerDecorator
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← SignupController
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← DbAddAccount (AddAccount 유스케이스)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use signup_service_backend::core::factories::make_signup_controller;
//! use signup_service_backend::db::Database;
//! use signup_service_backend::handlers::{Controller, HttpRequest};
//!
//! let database = Arc::new(Database::new().await?);
//! let controller = make_signup_controller(database);
//!
//! let response = controller.handle(HttpRequest::new(body)).await;
//! assert_eq!(response.status_code, 200);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
