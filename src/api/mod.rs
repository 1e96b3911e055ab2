pub mod health;
pub mod metrics;
pub mod swagger;
pub mod users;

use actix_web::web;

use crate::utils::error::AppError;

/// Falhas de binding do body JSON viram 400 com `{"message": ...}`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("⚠️  Rejected request body: {}", err);
        AppError::InvalidRequest(err.to_string()).into()
    })
}
