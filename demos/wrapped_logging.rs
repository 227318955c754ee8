//! Wrapped logging example
//!
//! Demonstrates keeping the reported `file:line` at the real call site when
//! logging goes through helper functions.
//!
//! Run with: cargo run --example wrapped_logging

use leveled_logger::prelude::*;

/// Transparent helper: `#[track_caller]` forwards the caller's location.
#[track_caller]
fn audit(logger: &Logger, action: &str) {
    logger.info(concat(&[&"audit: ", &action]));
}

/// Plain helper one frame deep: compensates with an explicit depth.
#[inline(never)]
fn report(logger: &Logger, failures: usize) {
    logger.warn_depth(1, format_args!("{} checks failed", failures));
}

fn main() -> Result<()> {
    println!("=== Leveled Logger - Wrapped Logging Example ===\n");

    let logger = Logger::new([with_log_flags(LogFlags::TIME | LogFlags::SHORT_FILE)]);

    // Both lines report wrapped_logging.rs at the lines below, not the helpers
    audit(&logger, "config reloaded");
    report(&logger, 2);

    logger.close()?;
    Ok(())
}
