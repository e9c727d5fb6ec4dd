//! # 컨트롤러 팩토리
//!
//! 구체 구현체를 생성자 주입으로 연결합니다.
//! 전역 상태 없이 `main`에서 만든 [`Database`] 핸들을 그대로 전달합니다.
//!
//! ```text
//! LogControllerDecorator
//!  ├── SignupController
//!  │    ├── EmailValidatorAdapter
//!  │    └── DbAddAccount ── AccountMongoRepository ── Database
//!  └── LogErrorMongoRepository ── Database
//! ```

use std::sync::Arc;
use crate::config::PasswordConfig;
use crate::db::Database;
use crate::handlers::SignupController;
use crate::middlewares::LogControllerDecorator;
use crate::repositories::accounts::AccountMongoRepository;
use crate::repositories::log_error::LogErrorMongoRepository;
use crate::routes::SignupRouteController;
use crate::services::accounts::DbAddAccount;
use crate::utils::EmailValidatorAdapter;

/// 에러 로깅이 적용된 회원가입 컨트롤러를 생성합니다
///
/// bcrypt 비용은 `PasswordConfig::bcrypt_cost()`에서 읽습니다.
pub fn make_signup_controller(database: Arc<Database>) -> SignupRouteController {
    let account_repository = Arc::new(AccountMongoRepository::new(database.clone()));
    let add_account = Arc::new(DbAddAccount::new(
        account_repository,
        PasswordConfig::bcrypt_cost(),
    ));

    let signup_controller = SignupController::new(Arc::new(EmailValidatorAdapter), add_account);
    let log_error_repository = Arc::new(LogErrorMongoRepository::new(database));

    LogControllerDecorator::new(signup_controller, log_error_repository)
}
