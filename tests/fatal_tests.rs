//! Fatal path tests
//!
//! A fatal write terminates the process, so each scenario re-runs this test
//! binary as a child with `LEVELED_LOGGER_FATAL_CHILD` set and inspects the
//! child's exit status, stderr and log files.

use leveled_logger::prelude::*;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CHILD_ENV: &str = "LEVELED_LOGGER_FATAL_CHILD";
const LOG_DIR_ENV: &str = "LEVELED_LOGGER_FATAL_DIR";

fn run_child(test_name: &str, log_dir: &Path) -> Output {
    Command::new(std::env::current_exe().expect("test binary path"))
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, test_name)
        .env(LOG_DIR_ENV, log_dir)
        .output()
        .expect("failed to run child test process")
}

fn is_child(test_name: &str) -> bool {
    std::env::var(CHILD_ENV).is_ok_and(|name| name == test_name)
}

fn child_logger() -> Logger {
    let dir = std::env::var(LOG_DIR_ENV).expect("log dir for child");
    let dir = Path::new(&dir);
    Logger::builder()
        .flags(LogFlags::NONE)
        .info_log_file(FileDestination::new(dir.join("info.log")).expect("open info log"))
        .error_log_file(FileDestination::new(dir.join("error.log")).expect("open error log"))
        .build()
}

#[test]
fn test_fatal_writes_closes_and_exits() {
    const NAME: &str = "test_fatal_writes_closes_and_exits";
    if is_child(NAME) {
        let logger = child_logger();
        logger.info("before fatal");
        logger.fatal("unrecoverable");
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_child(NAME, temp_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FATAL: unrecoverable"), "stderr: {stderr}");

    // Buffered lines were flushed by the close on the fatal path
    let error = fs::read_to_string(temp_dir.path().join("error.log")).unwrap();
    assert_eq!(error, "FATAL: unrecoverable\n");
    let info = fs::read_to_string(temp_dir.path().join("info.log")).unwrap();
    assert_eq!(info, "INFO : before fatal\n");
}

#[test]
fn test_fatalf_formats_before_exit() {
    const NAME: &str = "test_fatalf_formats_before_exit";
    if is_child(NAME) {
        let logger = child_logger();
        logger.fatalf(format_args!("code {}", 70));
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_child(NAME, temp_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let error = fs::read_to_string(temp_dir.path().join("error.log")).unwrap();
    assert_eq!(error, "FATAL: code 70\n");
}
