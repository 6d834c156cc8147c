//! Load settings from environment variables (optionally seeded from a `.env` file).

use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

/// Load `.env` if present, then read settings from the process environment.
pub fn load_from_env() -> Result<Settings, ConfigError> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env file");
    }
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Build settings from an arbitrary key lookup. Empty values count as unset.
pub fn load_from_lookup<F>(lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let target = match get("DATABASE_URL") {
        Some(url) => DatabaseTarget::Url(url),
        None => DatabaseTarget::Parts {
            host: get("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.into()),
            port: parse_or("DB_PORT", get("DB_PORT"), DEFAULT_DB_PORT)?,
            name: get("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?,
            user: get("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?,
            // Passwords may legitimately carry surrounding spaces.
            password: lookup("DB_PASS").unwrap_or_default(),
        },
    };

    let settings = Settings {
        database: DatabaseSettings {
            target,
            max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?,
            connect_timeout: Duration::from_secs(parse_or(
                "DB_CONNECT_TIMEOUT_SECS",
                get("DB_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?),
        },
        http: HttpSettings {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            request_timeout: Duration::from_secs(parse_or(
                "REQUEST_TIMEOUT_SECS",
                get("REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
            shutdown_grace: Duration::from_secs(parse_or(
                "SHUTDOWN_GRACE_SECS",
                get("SHUTDOWN_GRACE_SECS"),
                DEFAULT_SHUTDOWN_GRACE_SECS,
            )?),
        },
    };
    validate(&settings)?;
    Ok(settings)
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value }),
    }
}
