//! Resolved per-logger configuration
//!
//! A [`LoggerConfig`] is the snapshot a logger reads on every call. It starts
//! from a [`ProcessContext`], then options and an identity are applied on top.

use super::error::Result;
use super::log_context::LogContext;
use super::log_level::LogLevel;
use super::options::{KeyList, LoggerOptions};
use super::process::ProcessContext;
use std::fmt;
use std::sync::Arc;

/// Default placeholder written over redacted values
pub const DEFAULT_REDACT_VALUE: &str = "[REDACTED]";
/// Default field name for the message
pub const DEFAULT_MESSAGE_KEY: &str = "msg";
/// Default field name for error descriptions
pub const DEFAULT_ERROR_KEY: &str = "error";

/// Callback producing extra fields for every emitted record
pub type Mixin = Arc<dyn Fn() -> LogContext + Send + Sync>;

/// Name or base-context patch given at construction or to `child`
#[derive(Debug, Clone, PartialEq)]
pub enum LoggerIdentity {
    /// Sets the logger's `name` field
    Name(String),
    /// Merged into the logger's base context
    ContextPatch(LogContext),
}

impl From<&str> for LoggerIdentity {
    fn from(name: &str) -> Self {
        LoggerIdentity::Name(name.to_string())
    }
}

impl From<String> for LoggerIdentity {
    fn from(name: String) -> Self {
        LoggerIdentity::Name(name)
    }
}

impl From<LogContext> for LoggerIdentity {
    fn from(patch: LogContext) -> Self {
        LoggerIdentity::ContextPatch(patch)
    }
}

#[derive(Clone)]
pub struct LoggerConfig {
    pub(crate) min_level: LogLevel,
    pub(crate) name: Option<String>,
    pub(crate) base_context: LogContext,
    pub(crate) omitted_keys: KeyList,
    pub(crate) redacted_keys: KeyList,
    pub(crate) redact_value: String,
    pub(crate) newline_suffix: bool,
    pub(crate) log_null_values: bool,
    pub(crate) message_key: String,
    pub(crate) error_key: String,
    pub(crate) enabled: bool,
    pub(crate) mixin: Option<Mixin>,
}

impl LoggerConfig {
    /// Defaults seeded from the process: host identity and default level
    pub fn from_process(process: &ProcessContext) -> Self {
        Self {
            min_level: process.default_level(),
            name: None,
            base_context: process.identity_fields(),
            omitted_keys: KeyList::new(),
            redacted_keys: KeyList::new(),
            redact_value: DEFAULT_REDACT_VALUE.to_string(),
            newline_suffix: false,
            log_null_values: false,
            message_key: DEFAULT_MESSAGE_KEY.to_string(),
            error_key: DEFAULT_ERROR_KEY.to_string(),
            enabled: true,
            mixin: None,
        }
    }

    /// Apply every option that is present
    ///
    /// The level is validated first; on error nothing is changed.
    pub fn apply(&mut self, options: &LoggerOptions) -> Result<()> {
        let level = options.parsed_level()?;

        if let Some(level) = level {
            self.min_level = level;
        }
        if let Some(ref keys) = options.omit {
            self.omitted_keys = keys.clone();
        }
        if let Some(ref keys) = options.redact {
            self.redacted_keys = keys.clone();
        }
        if let Some(ref placeholder) = options.redact_value {
            self.redact_value = placeholder.clone();
        }
        if let Some(newlines) = options.newlines {
            self.newline_suffix = newlines;
        }
        if let Some(log_none) = options.log_none {
            self.log_null_values = log_none;
        }
        if let Some(ref base) = options.base {
            self.base_context.merge(base);
        }
        if let Some(key) = options.msg_key.as_ref().filter(|k| !k.is_empty()) {
            self.message_key = key.clone();
        }
        if let Some(key) = options.error_key.as_ref().filter(|k| !k.is_empty()) {
            self.error_key = key.clone();
        }
        if let Some(enabled) = options.enabled {
            self.enabled = enabled;
        }
        Ok(())
    }

    pub fn apply_identity(&mut self, identity: LoggerIdentity) {
        match identity {
            LoggerIdentity::Name(name) => self.name = Some(name),
            LoggerIdentity::ContextPatch(patch) => self.base_context.merge(&patch),
        }
    }

    /// Whether a call at `level` passes every filter
    #[inline]
    pub fn should_emit(&self, level: LogLevel) -> bool {
        self.enabled
            && self.min_level.is_emittable()
            && level.is_emittable()
            && level >= self.min_level
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn base_context(&self) -> &LogContext {
        &self.base_context
    }

    pub fn omitted_keys(&self) -> &KeyList {
        &self.omitted_keys
    }

    pub fn redacted_keys(&self) -> &KeyList {
        &self.redacted_keys
    }

    pub fn redact_value(&self) -> &str {
        &self.redact_value
    }

    pub fn newline_suffix(&self) -> bool {
        self.newline_suffix
    }

    pub fn log_null_values(&self) -> bool {
        self.log_null_values
    }

    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    pub fn error_key(&self) -> &str {
        &self.error_key
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn has_mixin(&self) -> bool {
        self.mixin.is_some()
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("min_level", &self.min_level)
            .field("name", &self.name)
            .field("base_context", &self.base_context)
            .field("omitted_keys", &self.omitted_keys)
            .field("redacted_keys", &self.redacted_keys)
            .field("redact_value", &self.redact_value)
            .field("newline_suffix", &self.newline_suffix)
            .field("log_null_values", &self.log_null_values)
            .field("message_key", &self.message_key)
            .field("error_key", &self.error_key)
            .field("enabled", &self.enabled)
            .field("mixin", &self.mixin.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;
    use crate::core::log_context::FieldValue;

    fn process() -> ProcessContext {
        ProcessContext::new("test-host", 7, LogLevel::Info)
    }

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::from_process(&process());

        assert_eq!(config.min_level(), LogLevel::Info);
        assert_eq!(config.name(), None);
        assert_eq!(config.redact_value(), "[REDACTED]");
        assert_eq!(config.message_key(), "msg");
        assert_eq!(config.error_key(), "error");
        assert!(config.enabled());
        assert!(!config.newline_suffix());
        assert!(!config.log_null_values());
        assert_eq!(
            config.base_context().get("hostname"),
            Some(&FieldValue::from("test-host"))
        );
    }

    #[test]
    fn test_apply_options() {
        let mut config = LoggerConfig::from_process(&process());
        config
            .apply(
                &LoggerOptions::new()
                    .level("TRACE")
                    .omit("a,b")
                    .redact(["c"])
                    .redact_value("***")
                    .newlines(true)
                    .log_none(true)
                    .msg_key("message")
                    .error_key("err")
                    .enabled(false),
            )
            .unwrap();

        assert_eq!(config.min_level(), LogLevel::Trace);
        assert!(config.omitted_keys().contains("b"));
        assert!(config.redacted_keys().contains("c"));
        assert_eq!(config.redact_value(), "***");
        assert!(config.newline_suffix());
        assert!(config.log_null_values());
        assert_eq!(config.message_key(), "message");
        assert_eq!(config.error_key(), "err");
        assert!(!config.enabled());
    }

    #[test]
    fn test_base_merges_without_dropping_identity() {
        let mut config = LoggerConfig::from_process(&process());
        config
            .apply(&LoggerOptions::new().base(LogContext::new().with_field("service", "api")))
            .unwrap();

        assert_eq!(
            config.base_context().keys().collect::<Vec<_>>(),
            ["hostname", "pid", "service"]
        );
    }

    #[test]
    fn test_empty_key_names_ignored() {
        let mut config = LoggerConfig::from_process(&process());
        config
            .apply(&LoggerOptions::new().msg_key("").error_key(""))
            .unwrap();

        assert_eq!(config.message_key(), "msg");
        assert_eq!(config.error_key(), "error");
    }

    #[test]
    fn test_invalid_level_leaves_config_untouched() {
        let mut config = LoggerConfig::from_process(&process());
        let err = config
            .apply(&LoggerOptions::new().level("NOPE").newlines(true))
            .unwrap_err();

        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(!config.newline_suffix());
        assert_eq!(config.min_level(), LogLevel::Info);
    }

    #[test]
    fn test_identity() {
        let mut config = LoggerConfig::from_process(&process());
        config.apply_identity("worker".into());
        config.apply_identity(LogContext::new().with_field("shard", 3).into());

        assert_eq!(config.name(), Some("worker"));
        assert_eq!(config.base_context().get("shard"), Some(&FieldValue::Int(3)));
    }

    #[test]
    fn test_should_emit() {
        let mut config = LoggerConfig::from_process(&process());

        assert!(config.should_emit(LogLevel::Info));
        assert!(config.should_emit(LogLevel::Fatal));
        assert!(!config.should_emit(LogLevel::Debug));
        assert!(!config.should_emit(LogLevel::Silent));

        config.apply(&LoggerOptions::new().level("SILENT")).unwrap();
        assert!(!config.should_emit(LogLevel::Fatal));

        config.apply(&LoggerOptions::new().level("TRACE").enabled(false)).unwrap();
        assert!(!config.should_emit(LogLevel::Fatal));
    }
}
