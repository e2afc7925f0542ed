//! Appender trait for log output destinations

use super::error::Result;

/// Destination for rendered log lines
///
/// `append` receives one complete record (or diagnostic) and must write it as
/// a single unit.
pub trait Appender: Send + Sync {
    fn append(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
