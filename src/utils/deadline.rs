//! Prazo por requisição aplicado a cada chamada de persistência.
//!
//! Criado como extractor do actix a partir de `AppConfig::request_timeout`,
//! então cada handler recebe um prazo novo que expira junto com a requisição.

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use std::future::{ready, Future, Ready};
use std::time::Duration;
use tokio::time::Instant;

use crate::config::AppConfig;
use crate::utils::error::AppError;

/// Usado quando `timeout` estoura o relógio (~30 anos à frente)
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Instant,
}

impl Deadline {
    pub fn after(timeout: Duration) -> Self {
        let now = Instant::now();
        let expires_at = now
            .checked_add(timeout)
            .unwrap_or_else(|| now + FAR_FUTURE);
        Self { expires_at }
    }

    /// Tempo restante (zero quando já expirou)
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_zero()
    }

    /// Executa `fut` limitado pelo prazo. Ao expirar o future é descartado,
    /// o que cancela a operação em andamento no driver.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        match tokio::time::timeout_at(self.expires_at, fut).await {
            Ok(result) => result,
            Err(_) => Err(AppError::Timeout("request deadline exceeded".into())),
        }
    }
}

impl FromRequest for Deadline {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let timeout = req
            .app_data::<web::Data<AppConfig>>()
            .map(|cfg| cfg.request_timeout)
            .unwrap_or_else(|| AppConfig::default().request_timeout);
        ready(Ok(Deadline::after(timeout)))
    }
}
