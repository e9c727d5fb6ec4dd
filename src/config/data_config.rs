//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 보안 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URL
    ///
    /// # Environment Variables
    ///
    /// - `MONGO_URL` (기본값: `mongodb://localhost:27017`)
    pub fn mongo_url() -> String {
        env::var("MONGO_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름
    ///
    /// # Environment Variables
    ///
    /// - `DATABASE_NAME` (기본값: `signup_service_dev`)
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "signup_service_dev".to_string())
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 5050
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "5050".to_string())
            .parse()
            .unwrap_or(5050)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 교차 출처 요청을 허용할 Origin 목록
    ///
    /// 쉼표로 구분하며 빈 항목은 무시합니다. 설정하지 않으면 빈 목록이며,
    /// 이 경우 교차 출처 요청은 모두 거부됩니다.
    ///
    /// # Environment Variables
    ///
    /// - `CORS_ALLOWED_ORIGINS` (예: `https://signup.example.com,http://localhost:5050`)
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default())
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// 요청 속도 제한(governor) 설정
pub struct RateLimitConfig;

impl RateLimitConfig {
    /// 초당 허용 요청 수. 기본값: 100
    ///
    /// # Environment Variables
    ///
    /// - `RATE_LIMIT_PER_SECOND`
    pub fn per_second() -> u64 {
        Self::parse_or("RATE_LIMIT_PER_SECOND", 100)
    }

    /// 버스트 허용량. 기본값: 200
    ///
    /// # Environment Variables
    ///
    /// - `RATE_LIMIT_BURST_SIZE`
    pub fn burst_size() -> u32 {
        Self::parse_or("RATE_LIMIT_BURST_SIZE", 200)
    }

    /// 0이거나 숫자가 아니면 기본값을 사용합니다.
    fn parse_or<T>(key: &str, default: T) -> T
    where
        T: std::str::FromStr + PartialEq + Default,
    {
        match env::var(key).ok().and_then(|value| value.trim().parse::<T>().ok()) {
            Some(value) if value != T::default() => value,
            _ => default,
        }
    }
}
