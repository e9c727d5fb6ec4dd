//! # Presentation Layer Module
//!
//! 전송 계층과 무관한 컨트롤러와 HTTP 응답 헬퍼를 정의하는 모듈입니다.
//! actix-web에 대한 의존은 `routes::adapter`에만 있으며,
//! 이 모듈의 컨트롤러는 [`HttpRequest`]를 받아 [`HttpResponse`]를 돌려주는 순수한 계약만 따릅니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   routes::adapter - actix 요청 → HttpRequest      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   middlewares - LogControllerDecorator            ← Cross-cutting
//! ├─────────────────────────────────────────────┤
//!   handlers (이 모듈) - SignupController, helpers   ← Presentation
//! ├─────────────────────────────────────────────┤
//!   domain::usecases - AddAccount                   ← Domain
//! ├─────────────────────────────────────────────┤
//!   services / repositories - bcrypt, MongoDB       ← Infrastructure
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`protocols`**: `Controller`, `EmailValidator` trait과 요청/응답 타입
//! - **`http_helper`**: `bad_request`, `server_error`, `success_request`
//! - **`signup`**: 회원가입 요청 검증 및 디스패치 (`POST /api/signup`)

pub mod protocols;
pub mod http_helper;
pub mod signup;

pub use protocols::*;
pub use http_helper::{bad_request, server_error, success_request};
pub use signup::SignupController;
