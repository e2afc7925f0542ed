//! # Rust JSON Logger
//!
//! A structured, leveled logger that writes each record as one line of JSON.
//!
//! ## Features
//!
//! - **Level filtering**: numeric severities from TRACE (10) to FATAL (60), with SILENT to mute
//! - **Context layering**: base context, call payload and a per-record mixin, merged in order
//! - **Field transforms**: omission, redaction and null-dropping applied before output
//! - **Flexible calls**: message and payload accepted in either argument order
//! - **Child loggers**: independent copies that extend the name or base context
//!
//! ```
//! use rust_json_logger::prelude::*;
//! use serde_json::json;
//!
//! let sink = MemoryAppender::new();
//! let logger = Logger::builder()
//!     .process_context(ProcessContext::new("docs-host", 1, LogLevel::Info))
//!     .options(LoggerOptions::new().redact("password"))
//!     .appender(sink.clone())
//!     .build()?;
//!
//! logger.info("user created", json!({"user": "ada", "password": "hunter2"}));
//!
//! let record = &sink.records()[0];
//! assert_eq!(record["msg"], "user created");
//! assert_eq!(record["password"], "[REDACTED]");
//! # Ok::<(), rust_json_logger::LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryAppender};
    pub use crate::core::{
        Appender, Clock, FieldValue, FixedClock, KeyList, LogContext, LogLevel, LogRecord,
        LoggablePayload, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerIdentity,
        LoggerMetrics, LoggerOptions, Mixin, ProcessContext, Result, SystemClock,
    };
}

pub use crate::appenders::{ConsoleAppender, MemoryAppender};
pub use crate::core::{
    Appender, Clock, FieldValue, FixedClock, KeyList, LogContext, LogLevel, LogRecord,
    LoggablePayload, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerIdentity,
    LoggerMetrics, LoggerOptions, Mixin, ProcessContext, Result, SystemClock,
};
