//! Console appender implementation

use crate::core::{Appender, Result};
use std::io::Write;

/// Writes each line to standard output
///
/// The stdout lock is held for the whole line so concurrent loggers never
/// interleave within a record.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleAppender;

impl ConsoleAppender {
    pub fn new() -> Self {
        Self
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
