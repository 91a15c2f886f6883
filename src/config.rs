use std::env;
use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_NAME: &str = "mailVerification";
const DEFAULT_DATABASE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got {value:?}")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Connection settings for the user store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `DATABASE`. `None` means the connector has nothing to dial.
    pub url: Option<String>,
    pub name: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Reads the process environment. Call `dotenv()` first so `.env` values are visible.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match non_empty("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                expected: "port number",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match non_empty("DATABASE_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "DATABASE_TIMEOUT_SECS",
                        expected: "positive number of seconds",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_DATABASE_TIMEOUT_SECS,
        };

        let cors_allowed_origins = non_empty("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            host,
            port,
            database: DatabaseConfig {
                url: non_empty("DATABASE"),
                name: non_empty("DATABASE_NAME")
                    .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
            cors_allowed_origins,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
