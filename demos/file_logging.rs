//! File logging example
//!
//! Demonstrates mirroring the low and high groups into separate files.
//!
//! Run with: cargo run --example file_logging

use leveled_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Leveled Logger - File Logging Example ===\n");

    let logger = Logger::builder()
        .min_level(LogLevel::Info)
        .info_log_file(FileDestination::new("application.log")?)
        .error_log_file(FileDestination::new("application.err.log")?)
        .build();

    println!("1. Logging to the console and the files:");
    logger.info("Application started");
    logger.debug("Loading configuration... (below Info, dropped)");
    logger.info("Configuration loaded successfully");
    logger.warn("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        logger.infof(format_args!("Processing item {}/5", i));
        if i == 3 {
            logger.warn("Item 3 took longer than expected");
        }
    }

    logger.info("All operations completed");

    // Release the file handles
    logger.close()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' and 'application.err.log' for the output");

    Ok(())
}
