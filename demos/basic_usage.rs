//! Basic logger usage example
//!
//! Demonstrates the default console routing and minimum level filtering.
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::prelude::*;
use leveled_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Leveled Logger - Basic Usage Example ===\n");

    // Defaults: minimum level Debug, date + microseconds + short file
    let logger = Logger::default();

    println!("1. Logging at different levels (Debug/Info on stdout, the rest on stderr):");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. The three message forms:");
    logger.info(concat(&[&"user", &42, &" logged in"]));
    logger.infoln("line terminated");
    logger.infof(format_args!("listening on port {}", 8080));
    info!(logger, "macro form, {} items", 3);

    println!("\n3. Minimum level Warn - debug and info won't show:");
    let logger = Logger::new([with_level(LogLevel::Warn)]);
    logger.debug("Debug message (hidden)");
    logger.info("Info message (hidden)");
    warn!(logger, "Warning message (visible)");

    logger.close()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
