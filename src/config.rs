use actix_web::http::Uri;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::time::Duration;

/// Teto para REQUEST_TIMEOUT_SECS (um dia)
const MAX_REQUEST_TIMEOUT_SECS: u64 = 24 * 60 * 60;

/// Origem CORS precisa ser `scheme://host[:port]` explícito (sem `*`)
fn parse_origin(origin: &str) -> Result<String> {
    if origin == "*" {
        return Err(anyhow!("CORS_ALLOWED_ORIGINS must list explicit origins, not '*' (leave it empty to allow any origin)"));
    }
    let uri = origin
        .parse::<Uri>()
        .with_context(|| format!("invalid CORS origin '{}'", origin))?;
    if uri.scheme().is_none() || uri.host().is_none() {
        return Err(anyhow!("invalid CORS origin '{}': expected scheme://host[:port]", origin));
    }
    Ok(origin.to_string())
}

/// Configuração do processo, lida do ambiente (após `dotenv`)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
    pub users_collection: String,
    pub request_timeout: Duration,
    /// Vazio = qualquer origem
    pub cors_allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            database_url: "mongodb://localhost:27017".into(),
            database_name: "userCrudApp".into(),
            users_collection: "users".into(),
            request_timeout: Duration::from_secs(10),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Monta a configuração a partir de uma função de lookup (facilita testes)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("MONGODB_URI")
            .or_else(|| lookup("DATABASE_URL"))
            .ok_or_else(|| anyhow!("MONGODB_URI (or DATABASE_URL) must be set"))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid PORT '{}'", raw))?,
            None => defaults.port,
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("invalid REQUEST_TIMEOUT_SECS '{}'", raw))?;
                if secs == 0 || secs > MAX_REQUEST_TIMEOUT_SECS {
                    return Err(anyhow!(
                        "REQUEST_TIMEOUT_SECS must be between 1 and {}",
                        MAX_REQUEST_TIMEOUT_SECS
                    ));
                }
                Duration::from_secs(secs)
            }
            None => defaults.request_timeout,
        };

        let cors_allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(parse_origin)
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            database_url,
            database_name: lookup("MONGODB_DATABASE").unwrap_or(defaults.database_name),
            users_collection: lookup("USERS_COLLECTION").unwrap_or(defaults.users_collection),
            request_timeout,
            cors_allowed_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
