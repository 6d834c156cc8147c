//! Settings validation: values that parse but cannot be used.

use crate::config::{DatabaseTarget, Settings};
use crate::error::ConfigError;
use std::time::Duration;

pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if let DatabaseTarget::Url(url) = &settings.database.target {
        if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
            return Err(ConfigError::DatabaseUrl("expected a postgres:// or postgresql:// URL".into()));
        }
    }
    if settings.database.max_connections == 0 {
        return Err(ConfigError::Invalid {
            key: "DB_MAX_CONNECTIONS",
            value: "0".into(),
        });
    }
    let durations = [
        ("DB_CONNECT_TIMEOUT_SECS", settings.database.connect_timeout),
        ("REQUEST_TIMEOUT_SECS", settings.http.request_timeout),
    ];
    for (key, d) in durations {
        if d == Duration::ZERO {
            return Err(ConfigError::Invalid { key, value: "0".into() });
        }
    }
    if settings.http.host.contains(char::is_whitespace) {
        return Err(ConfigError::Invalid {
            key: "HOST",
            value: settings.http.host.clone(),
        });
    }
    Ok(())
}
