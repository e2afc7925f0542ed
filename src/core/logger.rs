//! Main logger implementation

use super::{
    appender::Appender,
    config::{LoggerConfig, LoggerIdentity, Mixin},
    error::Result,
    log_context::LogContext,
    log_level::LogLevel,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    options::LoggerOptions,
    payload::{self, LoggablePayload},
    process::ProcessContext,
    timestamp::{Clock, SharedClock, SystemClock},
};
use crate::appenders::ConsoleAppender;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Appender handle shared by a logger and its children
pub type SharedAppender = Arc<Mutex<Box<dyn Appender>>>;

/// Structured JSON line logger
///
/// Each call is filtered, assembled into one record and written synchronously
/// before returning. Configuration changes need `&mut self`, so they can never
/// race with a log call on the same instance.
pub struct Logger {
    config: LoggerConfig,
    sink: SharedAppender,
    clock: SharedClock,
    /// Metrics for observability (emitted, filtered, failures)
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Logger writing to stdout with the process-wide defaults
    ///
    /// Fails if `LOG_LEVEL` or `options.level` is not a known level.
    pub fn new(options: LoggerOptions) -> Result<Self> {
        Self::builder().options(options).build()
    }

    /// Construct from options, an optional mixin and an optional name or base-context patch
    pub fn construct(
        options: LoggerOptions,
        mixin: Option<Mixin>,
        identity: Option<LoggerIdentity>,
    ) -> Result<Self> {
        let mut builder = Self::builder().options(options);
        builder.mixin = mixin;
        builder.identity = identity;
        builder.build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_json_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .process_context(ProcessContext::new("example-host", 1, LogLevel::Info))
    ///     .options(LoggerOptions::new().level("DEBUG").redact("password"))
    ///     .name("billing")
    ///     .mixin(|| LogContext::new().with_field("request_id", "abc-123"))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(logger.config().min_level(), LogLevel::Debug);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Log at a level given by name
    ///
    /// Unknown names fail with `InvalidLevel` and write nothing. `"SILENT"` is
    /// accepted and writes nothing.
    pub fn log<D, M>(&self, level: &str, data: D, message: M) -> Result<()>
    where
        D: Into<LoggablePayload>,
        M: Into<LoggablePayload>,
    {
        let level: LogLevel = level.parse()?;
        self.log_at(level, data, message);
        Ok(())
    }

    /// Log at a typed level
    ///
    /// `data` and `message` may come in either order: whichever is text becomes
    /// the message and the other supplies context fields.
    pub fn log_at<D, M>(&self, level: LogLevel, data: D, message: M)
    where
        D: Into<LoggablePayload>,
        M: Into<LoggablePayload>,
    {
        if !self.config.should_emit(level) {
            self.metrics.record_filtered();
            return;
        }

        let (message, fields) =
            payload::resolve(data.into(), message.into(), &self.config.error_key);
        let record = LogRecord::assemble(
            &self.config,
            level,
            self.clock.epoch_seconds(),
            message,
            fields,
        );
        self.emit(&record);
    }

    fn emit(&self, record: &LogRecord) {
        let (line, serialized) = match record.to_json_line(self.config.newline_suffix) {
            Ok(line) => (line, true),
            Err(e) => {
                self.metrics.record_serialization_failure();
                (format!("Error logging: {}", e), false)
            }
        };

        let mut sink = self.sink.lock();
        let append_result =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.append(&line)));

        match append_result {
            Ok(Ok(())) => {
                if serialized {
                    self.metrics.record_emitted();
                }
            }
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", sink.name(), e);
                self.metrics.record_write_failure();
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Appender '{}' panicked: {}",
                    sink.name(),
                    panic_msg
                );
                self.metrics.record_write_failure();
            }
        }
    }

    #[inline]
    pub fn trace<D: Into<LoggablePayload>, M: Into<LoggablePayload>>(&self, data: D, message: M) {
        self.log_at(LogLevel::Trace, data, message);
    }

    #[inline]
    pub fn debug<D: Into<LoggablePayload>, M: Into<LoggablePayload>>(&self, data: D, message: M) {
        self.log_at(LogLevel::Debug, data, message);
    }

    #[inline]
    pub fn info<D: Into<LoggablePayload>, M: Into<LoggablePayload>>(&self, data: D, message: M) {
        self.log_at(LogLevel::Info, data, message);
    }

    #[inline]
    pub fn warning<D: Into<LoggablePayload>, M: Into<LoggablePayload>>(&self, data: D, message: M) {
        self.log_at(LogLevel::Warning, data, message);
    }

    #[inline]
    pub fn warn<D: Into<LoggablePayload>, M: Into<LoggablePayload>>(&self, data: D, message: M) {
        self.warning(data, message);
    }

    #[inline]
    pub fn error<D: Into<LoggablePayload>, M: Into<LoggablePayload>>(&self, data: D, message: M) {
        self.log_at(LogLevel::Error, data, message);
    }

    #[inline]
    pub fn fatal<D: Into<LoggablePayload>, M: Into<LoggablePayload>>(&self, data: D, message: M) {
        self.log_at(LogLevel::Fatal, data, message);
    }

    /// Derive an independent logger
    ///
    /// The child copies this logger's whole configuration (level, omission,
    /// redaction, key names, enabled flag, mixin, name and base context) and
    /// writes to the same appender. A name replaces the inherited name; a
    /// context patch is merged into the inherited base context. Later changes
    /// to either logger do not affect the other.
    pub fn child(&self, identity: impl Into<LoggerIdentity>) -> Logger {
        let mut config = self.config.clone();
        config.apply_identity(identity.into());

        Logger {
            config,
            sink: Arc::clone(&self.sink),
            clock: Arc::clone(&self.clock),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Apply options on top of the current configuration
    ///
    /// On error the configuration is left unchanged.
    pub fn set_config(&mut self, options: &LoggerOptions) -> Result<()> {
        self.config.apply(options)
    }

    pub fn set_mixin<F>(&mut self, mixin: F)
    where
        F: Fn() -> LogContext + Send + Sync + 'static,
    {
        self.config.mixin = Some(Arc::new(mixin));
    }

    pub fn clear_mixin(&mut self) {
        self.config.mixin = None;
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Get the logger metrics
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("appender", &self.sink.lock().name())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_json_logger::prelude::*;
///
/// let sink = MemoryAppender::new();
/// let logger = Logger::builder()
///     .process_context(ProcessContext::new("example-host", 1, LogLevel::Info))
///     .options(LoggerOptions::new().omit("pid"))
///     .context(LogContext::new().with_field("service", "api"))
///     .appender(sink.clone())
///     .build()
///     .unwrap();
///
/// logger.info("started", ());
/// assert_eq!(sink.records()[0]["service"], "api");
/// ```
pub struct LoggerBuilder {
    options: LoggerOptions,
    mixin: Option<Mixin>,
    identity: Option<LoggerIdentity>,
    process: Option<ProcessContext>,
    appender: Option<Box<dyn Appender>>,
    clock: Option<SharedClock>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            options: LoggerOptions::default(),
            mixin: None,
            identity: None,
            process: None,
            appender: None,
            clock: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn options(mut self, options: LoggerOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a callback whose fields are merged into every emitted record
    #[must_use = "builder methods return a new value"]
    pub fn mixin<F>(mut self, mixin: F) -> Self
    where
        F: Fn() -> LogContext + Send + Sync + 'static,
    {
        self.mixin = Some(Arc::new(mixin));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(self, name: impl Into<String>) -> Self {
        self.identity(LoggerIdentity::Name(name.into()))
    }

    /// Merge fields into the base context
    #[must_use = "builder methods return a new value"]
    pub fn context(self, patch: LogContext) -> Self {
        self.identity(LoggerIdentity::ContextPatch(patch))
    }

    #[must_use = "builder methods return a new value"]
    pub fn identity(mut self, identity: impl Into<LoggerIdentity>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Use an explicit process context instead of [`ProcessContext::global`]
    #[must_use = "builder methods return a new value"]
    pub fn process_context(mut self, process: ProcessContext) -> Self {
        self.process = Some(process);
        self
    }

    /// Replace the default stdout appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Build the Logger
    ///
    /// Fails with `InvalidConfiguration` when the default or requested level is
    /// not a known level name.
    pub fn build(self) -> Result<Logger> {
        let process = match self.process {
            Some(process) => process,
            None => ProcessContext::global()?.clone(),
        };

        let mut config = LoggerConfig::from_process(&process);
        if let Some(identity) = self.identity {
            config.apply_identity(identity);
        }
        config.apply(&self.options)?;
        config.mixin = self.mixin;

        let appender = self
            .appender
            .unwrap_or_else(|| Box::new(ConsoleAppender::new()));

        Ok(Logger {
            config,
            sink: Arc::new(Mutex::new(appender)),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            metrics: Arc::new(LoggerMetrics::new()),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
