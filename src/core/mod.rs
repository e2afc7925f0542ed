//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod log_context;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod payload;
pub mod process;
pub mod timestamp;

pub use appender::Appender;
pub use config::{
    LoggerConfig, LoggerIdentity, Mixin, DEFAULT_ERROR_KEY, DEFAULT_MESSAGE_KEY,
    DEFAULT_REDACT_VALUE,
};
pub use error::{LoggerError, Result};
pub use log_context::{FieldValue, LogContext};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder, SharedAppender};
pub use metrics::LoggerMetrics;
pub use options::{KeyList, LoggerOptions};
pub use payload::LoggablePayload;
pub use process::{ProcessContext, LOG_LEVEL_ENV};
pub use timestamp::{Clock, FixedClock, SharedClock, SystemClock};
