//! Per-call log record assembly
//!
//! Field layering, lowest priority first:
//!
//! 1. `time`, `name` and the base context
//! 2. `level` and the message key
//! 3. fields extracted from the call payload
//! 4. mixin output
//!
//! Then omission, redaction and null-dropping run in that order, so they win
//! over any value set above.

use super::config::LoggerConfig;
use super::error::Result;
use super::log_context::{FieldValue, LogContext};
use super::log_level::LogLevel;

/// One assembled record, ready for serialization
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    fields: LogContext,
}

impl LogRecord {
    /// Build the record for an already filtered call
    ///
    /// Invokes the configured mixin exactly once.
    pub fn assemble(
        config: &LoggerConfig,
        level: LogLevel,
        time: i64,
        message: Option<String>,
        call_fields: LogContext,
    ) -> Self {
        let mut fields = LogContext::new().with_field("time", time);
        if let Some(ref name) = config.name {
            fields.add_field("name", name);
        }
        fields.merge(&config.base_context);

        fields.add_field("level", i64::from(level.severity()));
        fields.add_field(config.message_key.as_str(), message);

        fields.extend(call_fields);

        if let Some(ref mixin) = config.mixin {
            fields.extend(mixin());
        }

        let mut record = Self { fields };
        record.apply_transforms(config);
        record
    }

    fn apply_transforms(&mut self, config: &LoggerConfig) {
        for key in config.omitted_keys.iter() {
            self.fields.remove(key);
        }

        for key in config.redacted_keys.iter() {
            if let Some(value) = self.fields.get_mut(key) {
                *value = FieldValue::String(config.redact_value.clone());
            }
        }

        if !config.log_null_values {
            self.fields.retain(|_, value| !value.is_null());
        }
    }

    pub fn fields(&self) -> &LogContext {
        &self.fields
    }

    pub fn into_fields(self) -> LogContext {
        self.fields
    }

    /// Render as one line of JSON, optionally followed by `\n`
    pub fn to_json_line(&self, newline_suffix: bool) -> Result<String> {
        let value = self.fields.to_json_value()?;
        let mut line = serde_json::to_string(&value)?;
        if newline_suffix {
            line.push('\n');
        }
        Ok(line)
    }
}
