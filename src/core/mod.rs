//! 애플리케이션 조립 계층
//!
//! 구현체를 생성하고 인터페이스에 주입하는 팩토리를 제공합니다.

pub mod factories;
