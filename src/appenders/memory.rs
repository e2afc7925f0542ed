//! In-memory appender for tests and embedding

use crate::core::{Appender, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects lines in a shared buffer
///
/// Clones share the same buffer, so one clone can be handed to a logger while
/// another is kept to inspect what was written.
///
/// # Example
///
/// ```
/// use rust_json_logger::prelude::*;
///
/// let sink = MemoryAppender::new();
/// let logger = Logger::builder()
///     .process_context(ProcessContext::new("example-host", 1, LogLevel::Info))
///     .appender(sink.clone())
///     .build()
///     .unwrap();
///
/// logger.info("hello", ());
/// assert_eq!(sink.len(), 1);
/// assert!(sink.lines()[0].contains(r#""msg":"hello""#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Every line parsed as JSON; lines that are not JSON are skipped
    pub fn records(&self) -> Vec<serde_json::Value> {
        self.lines
            .lock()
            .iter()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
