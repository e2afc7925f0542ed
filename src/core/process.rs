//! Process-scoped logger defaults
//!
//! Host identity and the default minimum level are read once and held in an
//! immutable [`ProcessContext`]. Every logger is constructed from one; none of
//! its fields change after initialization.

use super::error::{LoggerError, Result};
use super::log_context::LogContext;
use super::log_level::LogLevel;
use once_cell::sync::OnceCell;

/// Environment variable holding the default minimum level
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

static GLOBAL: OnceCell<ProcessContext> = OnceCell::new();

/// Immutable host identity and default level shared by loggers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessContext {
    hostname: String,
    pid: u32,
    default_level: LogLevel,
}

impl ProcessContext {
    pub fn new(hostname: impl Into<String>, pid: u32, default_level: LogLevel) -> Self {
        Self {
            hostname: hostname.into(),
            pid,
            default_level,
        }
    }

    /// Read host identity and `LOG_LEVEL` from the running process
    ///
    /// An unset or empty `LOG_LEVEL` means `INFO`; any other unrecognized
    /// value is an [`LoggerError::InvalidConfiguration`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ProcessContext::from_env`] with a custom variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let default_level = match lookup(LOG_LEVEL_ENV).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse::<LogLevel>().map_err(|_| {
                LoggerError::config(LOG_LEVEL_ENV, format!("unknown level '{}'", raw))
            })?,
            None => LogLevel::Info,
        };

        Ok(Self {
            hostname: gethostname::gethostname().to_string_lossy().into_owned(),
            pid: std::process::id(),
            default_level,
        })
    }

    /// The process-wide context, initialized from the environment on first use
    ///
    /// Initialization happens at most once. A failed attempt (bad `LOG_LEVEL`)
    /// is not cached, so every construction keeps reporting the error.
    pub fn global() -> Result<&'static ProcessContext> {
        GLOBAL.get_or_try_init(Self::from_env)
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn default_level(&self) -> LogLevel {
        self.default_level
    }

    /// Seed fields for every logger's base context
    pub fn identity_fields(&self) -> LogContext {
        LogContext::new()
            .with_field("hostname", self.hostname.as_str())
            .with_field("pid", self.pid)
    }
}
