use std::{env, str::FromStr, time::Duration};

use thiserror::Error;

pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://127.0.0.1:11434";

/// Ten years either way.
pub const MAX_SEED_OFFSET_HOURS: i64 = 24 * 366 * 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be an integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must be between -{max} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        max: i64,
    },
}

/// Process-wide settings, read once at startup and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub app_name: String,
    pub environment: String,
    pub ollama_base_url: String,
    /// `*` anywhere in the list allows every origin.
    pub allowed_origins: Vec<String>,
    pub data_refresh_seconds: u64,
    pub seed_offset_hours: i64,
    pub listen_addr: String,
    pub upstream_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "Synapse Intelligence Backend".to_string(),
            environment: "development".to_string(),
            ollama_base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
            allowed_origins: vec!["*".to_string()],
            data_refresh_seconds: 60,
            seed_offset_hours: 0,
            listen_addr: "0.0.0.0:8000".to_string(),
            upstream_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl Settings {
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a numeric variable is malformed or out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] when a numeric variable is malformed or out of range.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let text = |name: &str, default: String| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(default)
        };

        let allowed_origins = lookup("CORS_ALLOW_ORIGINS")
            .map(|value| parse_origins(&value))
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.allowed_origins);

        Ok(Self {
            app_name: text("APP_NAME", defaults.app_name),
            environment: text("ENVIRONMENT", defaults.environment),
            ollama_base_url: text("OLLAMA_BASE_URL", defaults.ollama_base_url),
            allowed_origins,
            data_refresh_seconds: number(
                &lookup,
                "DATA_REFRESH_SECONDS",
                defaults.data_refresh_seconds,
            )?,
            seed_offset_hours: seed_offset(number(
                &lookup,
                "DATA_SEED_OFFSET_HOURS",
                defaults.seed_offset_hours,
            )?)?,
            listen_addr: text("LISTEN", defaults.listen_addr),
            upstream_timeout: Duration::from_secs(number(
                &lookup,
                "OLLAMA_TIMEOUT",
                defaults.upstream_timeout.as_secs(),
            )?),
            connect_timeout: Duration::from_secs(number(
                &lookup,
                "CONNECTION_TIMEOUT",
                defaults.connect_timeout.as_secs(),
            )?),
        })
    }

    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

fn number<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}

fn seed_offset(hours: i64) -> Result<i64, ConfigError> {
    if (-MAX_SEED_OFFSET_HOURS..=MAX_SEED_OFFSET_HOURS).contains(&hours) {
        Ok(hours)
    } else {
        Err(ConfigError::OutOfRange {
            name: "DATA_SEED_OFFSET_HOURS",
            value: hours,
            max: MAX_SEED_OFFSET_HOURS,
        })
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToString::to_string)
        .collect()
}
