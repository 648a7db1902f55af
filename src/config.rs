//! Application configuration loaded from environment variables.
//!
//! | Variable                 | Default | Meaning                                 |
//! |--------------------------|---------|-----------------------------------------|
//! | `DATABASE_URL`           | unset   | `PostgreSQL` URL; unset means in-memory |
//! | `APP_DEBUG`              | `false` | Debug-level action logging              |
//! | `TASKBOARD_LOG`          | `info`  | Fallback `tracing` filter directive     |
//! | `DASHBOARD_RECENT_LIMIT` | `10`    | Tasks listed on the dashboard           |

use crate::task::services::{ActionLogger, DEFAULT_DASHBOARD_RECENT_TASKS};
use std::env;
use thiserror::Error;

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Errors returned while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing required variable {key}")]
    Missing {
        /// Variable name.
        key: &'static str,
    },
    /// A variable holds a value that cannot be parsed.
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `PostgreSQL` connection URL, if persistent storage is configured.
    pub database_url: Option<String>,
    /// Enables debug-level action logging.
    pub debug: bool,
    /// Filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Number of recent tasks on the dashboard.
    pub dashboard_recent_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            debug: false,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            dashboard_recent_limit: DEFAULT_DASHBOARD_RECENT_TASKS,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment, reading a `.env`
    /// file first when one exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is not an error.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let debug = lookup("APP_DEBUG")
            .map(|value| parse_flag("APP_DEBUG", value))
            .transpose()?
            .unwrap_or(defaults.debug);
        let log_filter = lookup("TASKBOARD_LOG")
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or(defaults.log_filter);
        let dashboard_recent_limit = lookup("DASHBOARD_RECENT_LIMIT")
            .map(|value| parse_limit("DASHBOARD_RECENT_LIMIT", value))
            .transpose()?
            .unwrap_or(defaults.dashboard_recent_limit);

        Ok(Self {
            database_url,
            debug,
            log_filter,
            dashboard_recent_limit,
        })
    }

    /// Returns the configured `PostgreSQL` URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when `DATABASE_URL` was not set.
    pub fn require_database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or(ConfigError::Missing {
                key: "DATABASE_URL",
            })
    }

    /// Builds the action logger matching this configuration.
    #[must_use]
    pub const fn action_logger(&self) -> ActionLogger {
        ActionLogger::new(self.debug)
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value,
            reason: "expected a boolean",
        }),
    }
}

fn parse_limit(key: &'static str, value: String) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::Invalid {
            key,
            value,
            reason: "expected a positive integer",
        }),
    }
}
