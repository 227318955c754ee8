//! Caller location tests
//!
//! These tests verify:
//! - Direct calls report the call site
//! - `#[track_caller]` helpers report their caller without any depth
//! - Depth-adjusted calls from plain helpers report the helper's caller
//! - The logger-wide depth adds to the per-call depth
//! - A depth beyond the stack is reported as `???:0`, never the wrapper

use leveled_logger::info;
use leveled_logger::prelude::*;

fn short_file_logger() -> (Logger, MemoryDestination) {
    let capture = MemoryDestination::new();
    let logger = Logger::new([
        with_log_flags(LogFlags::SHORT_FILE),
        with_info_log_file(capture.clone()),
    ]);
    (logger, capture)
}

fn expect_location(capture: &MemoryDestination, line: u32, body: &str) {
    assert_eq!(
        capture.contents(),
        format!("INFO : caller_tests.rs:{}: {}\n", line, body)
    );
    capture.clear();
}

#[track_caller]
fn tracked_helper(logger: &Logger, body: &str) {
    logger.info(body);
}

#[inline(never)]
fn plain_helper(logger: &Logger, body: &str) {
    logger.info_depth(1, format_args!("{}", body));
}

#[inline(never)]
fn outer_helper(logger: &Logger, body: &str) {
    inner_helper(logger, body);
}

#[inline(never)]
fn inner_helper(logger: &Logger, body: &str) {
    logger.info_depth(2, format_args!("{}", body));
}

#[inline(never)]
fn helper_without_depth(logger: &Logger, body: &str) {
    logger.info(body);
}

#[test]
fn test_direct_call_reports_call_site() {
    let (logger, capture) = short_file_logger();

    let expected_line = line!() + 1;
    logger.info("direct");
    expect_location(&capture, expected_line, "direct");

    let expected_line = line!() + 1;
    info!(logger, "macro {}", 1);
    expect_location(&capture, expected_line, "macro 1");
}

#[test]
fn test_track_caller_helper_reports_its_caller() {
    let (logger, capture) = short_file_logger();

    let expected_line = line!() + 1;
    tracked_helper(&logger, "tracked");
    expect_location(&capture, expected_line, "tracked");
}

#[test]
fn test_depth_one_reports_helper_caller() {
    let (logger, capture) = short_file_logger();

    let expected_line = line!() + 1;
    plain_helper(&logger, "one deep");
    expect_location(&capture, expected_line, "one deep");
}

#[test]
fn test_depth_two_reports_outer_caller() {
    let (logger, capture) = short_file_logger();

    let expected_line = line!() + 1;
    outer_helper(&logger, "two deep");
    expect_location(&capture, expected_line, "two deep");
}

#[test]
fn test_logger_depth_applies_to_plain_calls() {
    let (logger, capture) = short_file_logger();
    logger.set_depth(1);

    let expected_line = line!() + 1;
    helper_without_depth(&logger, "logger depth");
    expect_location(&capture, expected_line, "logger depth");
}

#[test]
fn test_logger_depth_adds_to_call_depth() {
    let (logger, capture) = short_file_logger();
    logger.set_depth(1);

    // set_depth(1) + info_depth(1) from plain_helper
    let expected_line = line!() + 1;
    via_extra_frame(&logger);
    expect_location(&capture, expected_line, "stacked");
}

#[inline(never)]
fn via_extra_frame(logger: &Logger) {
    plain_helper(logger, "stacked");
}

#[test]
fn test_depth_beyond_stack_is_unknown() {
    let (logger, capture) = short_file_logger();

    logger.info_depth(10_000, format_args!("deep"));
    assert_eq!(capture.contents(), "INFO : ???:0: deep\n");
    capture.clear();

    logger.set_depth(10_000);
    helper_without_depth(&logger, "too deep");
    assert_eq!(capture.contents(), "INFO : ???:0: too deep\n");
}
