//! Basic logger usage example
//!
//! Demonstrates level filtering, payloads, redaction and child loggers, all
//! written as JSON lines to stdout.
//!
//! Run with: cargo run --example basic_usage

use rust_json_logger::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== Rust JSON Logger - Basic Usage Example ===\n");

    // Minimum level comes from LOG_LEVEL unless the options override it
    let mut logger = Logger::builder()
        .options(
            LoggerOptions::new()
                .level("TRACE")
                .redact("password")
                .omit("pid"),
        )
        .name("demo")
        .build()?;

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message", ());
    logger.debug("This is a debug message", ());
    logger.info("This is an info message", ());
    logger.warn("This is a warning message", ());
    logger.error("This is an error message", ());
    logger.fatal("This is a fatal message", ());

    println!("\n2. Structured payloads:");
    logger.info(json!({"user": "ada", "password": "hunter2"}), "user signed in");
    logger.info("either order works", json!({"attempt": 2}));
    logger.info(["first", "second"], "sequence payload");

    let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
    logger.error(&err, "request failed");

    println!("\n3. Raising the minimum level to INFO:");
    logger.set_config(&LoggerOptions::new().level("INFO"))?;
    logger.debug("Debug message (hidden)", ());
    logger.info("Info message (visible)", ());

    println!("\n4. Child logger:");
    let child = logger.child(LogContext::new().with_field("component", "worker"));
    child.info("child shares config and output", ());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
