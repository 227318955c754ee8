//! Property-based tests for leveled_logger using proptest

use leveled_logger::core::sink::render_line;
use leveled_logger::prelude::*;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn capture_logger(min_level: LogLevel) -> (Logger, MemoryDestination, MemoryDestination) {
    let low = MemoryDestination::new();
    let high = MemoryDestination::new();
    let logger = Logger::new([
        with_level(min_level),
        with_log_flags(LogFlags::NONE),
        with_info_log_file(low.clone()),
        with_error_log_file(high.clone()),
    ]);
    (logger, low, high)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
        prop_assert_eq!(level.to_string(), level.to_str());
    }

    /// Test that LogLevel ordering matches discriminant ordering
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }
}

// ============================================================================
// Filtering and Rendering Tests
// ============================================================================

proptest! {
    /// Writes below the minimum never reach any destination; writes at or
    /// above it appear exactly once, tagged, in the right group.
    #[test]
    fn test_threshold_and_routing(min_level in any_level(), level in any_level(), body in "[a-zA-Z0-9 ]{0,40}") {
        let (logger, low, high) = capture_logger(min_level);
        logger.log(level, &body);

        let expected = format!("{}{}\n", level.tag(), body);
        if level < min_level {
            prop_assert!(low.is_empty());
            prop_assert!(high.is_empty());
        } else if level.is_high() {
            prop_assert!(low.is_empty());
            prop_assert_eq!(high.contents(), expected);
        } else {
            prop_assert!(high.is_empty());
            prop_assert_eq!(low.contents(), expected);
        }
    }

    /// The body equals the template substitution of the supplied arguments
    #[test]
    fn test_formatted_body(level in any_level(), word in "[a-z]{1,12}", n in any::<i64>()) {
        let (logger, low, high) = capture_logger(LogLevel::Debug);
        logger.logf(level, format_args!("{}={}", word, n));

        let written = if level.is_high() { high.contents() } else { low.contents() };
        prop_assert_eq!(written, format!("{}{}={}\n", level.tag(), word, n));
    }

    /// Concatenation joins values with no separator
    #[test]
    fn test_concat_no_separator(a in "[a-z]{0,8}", b in any::<u32>(), c in "[A-Z]{0,8}") {
        prop_assert_eq!(concat(&[&a, &b, &c]), format!("{}{}{}", a, b, c));
    }

    /// Every rendered line ends with exactly one newline
    #[test]
    fn test_rendered_line_terminated(body in "[a-z\n]{0,20}") {
        let timestamp = chrono::NaiveDate::from_ymd_opt(2025, 1, 8)
            .and_then(|d| d.and_hms_opt(10, 30, 45))
            .unwrap();
        let line = render_line("INFO : ", LogFlags::default(), timestamp, None, &body);

        prop_assert!(line.ends_with('\n'));
        prop_assert!(!line.ends_with("\n\n") || body.ends_with("\n\n"));
    }
}
