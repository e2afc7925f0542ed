//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` and log the result as
//! the record's message, with no context fields.
//!
//! # Examples
//!
//! ```
//! use rust_json_logger::prelude::*;
//! use rust_json_logger::info;
//!
//! let sink = MemoryAppender::new();
//! let logger = Logger::builder()
//!     .process_context(ProcessContext::new("macro-host", 1, LogLevel::Info))
//!     .appender(sink.clone())
//!     .build()
//!     .unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! assert_eq!(sink.records()[0]["msg"], "Server listening on port 8080");
//! ```

/// Log a formatted message at a typed level.
///
/// # Examples
///
/// ```
/// # use rust_json_logger::prelude::*;
/// # let logger = Logger::builder()
/// #     .process_context(ProcessContext::new("h", 1, LogLevel::Info))
/// #     .appender(MemoryAppender::new())
/// #     .build()
/// #     .unwrap();
/// use rust_json_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at($level, format!($($arg)+), ())
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_json_logger::prelude::*;
/// # let logger = Logger::builder()
/// #     .process_context(ProcessContext::new("h", 1, LogLevel::Info))
/// #     .appender(MemoryAppender::new())
/// #     .build()
/// #     .unwrap();
/// use rust_json_logger::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
