//! # Domain Layer Module
//!
//! 회원가입 도메인을 구성하는 핵심 모듈입니다.
//! 전송 계층(HTTP)과 영속 계층(MongoDB)에 의존하지 않는 타입과 계약만 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities     - 계정, 에러 로그 등 영속 가능한 도메인 객체
//! ├── dto          - 계층 간 전달되는 입력 객체 (AddAccountInput)
//! └── usecases     - 프레젠테이션 계층이 호출하는 유스케이스 계약 (AddAccount)
//!      │
//!      ▼
//! Services (DbAddAccount)  →  Repositories (MongoDB)
//! ```
//!
//! ## 의존 방향
//!
//! 컨트롤러는 [`usecases::AddAccount`] trait만 알고 있으며,
//! 실제 구현체(`services::accounts::DbAddAccount`)는 조립 시점에 주입됩니다.

pub mod entities;
pub mod dto;
pub mod usecases;
