//! Log level definitions

use super::error::LoggerError;
use std::fmt;
use std::str::FromStr;

/// Named severity with its numeric rank.
///
/// `Silent` is a sentinel: as a minimum level it disables all output, and it
/// is never emitted itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum LogLevel {
    Silent = 0,
    Trace = 10,
    Debug = 20,
    #[default]
    Info = 30,
    Warning = 40,
    Error = 50,
    Fatal = 60,
}

impl LogLevel {
    /// Every level in ascending severity order
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Silent,
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Silent => "SILENT",
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Numeric severity written to the `level` field
    #[inline]
    pub fn severity(&self) -> u8 {
        *self as u8
    }

    /// Whether a record can be written at this level
    #[inline]
    pub fn is_emittable(&self) -> bool {
        *self != LogLevel::Silent
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SILENT" => Ok(LogLevel::Silent),
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_str().to_string()
    }
}
