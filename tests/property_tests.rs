//! Property-based tests for callsite_logger using proptest

use callsite_logger::prelude::*;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::Critical),
    ]
}

fn any_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Plain), Just(Mode::Verbose), Just(Mode::Debug)]
}

// ============================================================================
// LogLevel and Mode Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        assert_eq!(level, parsed);
        assert_eq!(format!("{}", level), level.to_str());
    }

    /// Test that LogLevel ordering matches the discriminants
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        assert_eq!(level1 <= level2, val1 <= val2);
        assert_eq!(level1 < level2, val1 < val2);
    }

    /// Test that parsing accepts case-insensitive input
    #[test]
    fn test_log_level_case_insensitive(level in any_level(), use_lower in any::<bool>()) {
        let input = if use_lower {
            level.to_str().to_lowercase()
        } else {
            level.to_str().to_string()
        };
        assert_eq!(input.parse::<LogLevel>().ok(), Some(level));
    }

    /// Test that invalid strings are rejected
    #[test]
    fn test_log_level_invalid_parse(invalid_str in "[0-9 #]{1,12}") {
        assert!(invalid_str.parse::<LogLevel>().is_err());
    }

    /// Debug wins over verbose, verbose wins over plain
    #[test]
    fn test_mode_precedence(verbose in any::<bool>(), debug in any::<bool>()) {
        let mode = Mode::from_flags(verbose, debug);
        match (verbose, debug) {
            (_, true) => assert_eq!(mode, Mode::Debug),
            (true, false) => assert_eq!(mode, Mode::Verbose),
            (false, false) => assert_eq!(mode, Mode::Plain),
        }
    }

    /// A record passes the mode threshold exactly when it is at or above it
    #[test]
    fn test_mode_threshold(mode in any_mode(), level in any_level()) {
        let logger = Logger::builder()
            .verbose(mode == Mode::Verbose)
            .debug(mode == Mode::Debug)
            .stream(Stream::writer(std::io::sink()))
            .build()
            .unwrap();
        assert_eq!(logger.enabled(level), level >= mode.min_level());
    }
}

// ============================================================================
// CallerInfo Tests
// ============================================================================

proptest! {
    /// Only the last path component is kept
    #[test]
    fn test_caller_keeps_basename(
        dirs in prop::collection::vec("[a-z_]{1,8}", 0..4),
        file in "[a-z_]{1,12}\\.rs",
        line in 1u32..100_000,
    ) {
        let mut path = dirs.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&file);

        let caller = CallerInfo::new(path, line, "run");
        assert_eq!(caller.file(), file.as_str());
        assert_eq!(caller.line(), line);
    }
}

// ============================================================================
// Formatter Tests
// ============================================================================

proptest! {
    /// Fields shorter than their width land at fixed columns
    #[test]
    fn test_debug_layout_columns(
        level in any_level(),
        file in "[a-z]{1,16}\\.rs",
        line in 1u32..999_999,
        function in "[a-z_]{1,32}",
        message in "[ -~]*",
    ) {
        let caller = CallerInfo::new(file.clone(), line, function.clone());
        let record = LogRecord::new(level, message.clone(), caller);
        let rendered = Formatter::new(Mode::Debug).render(&record);

        assert_eq!(rendered[..8].trim_end(), level.to_str());
        assert_eq!(&rendered[8..10], "  ");
        let rest = &rendered[35..];
        assert_eq!(rest[..20].trim_end(), file.as_str());
        assert_eq!(rest[21..27].trim_end(), line.to_string());
        assert_eq!(rest[28..60].trim_end(), function.as_str());
        assert_eq!(&rest[61..], message.as_str());
    }

    /// Verbose layout is the padded level name, a space and the message
    #[test]
    fn test_verbose_layout(level in any_level(), message in "[ -~]*") {
        let record = LogRecord::new(level, message.clone(), CallerInfo::new("a.rs", 1, "f"));
        let rendered = Formatter::new(Mode::Verbose).render(&record);
        assert_eq!(rendered, format!("{:<8} {}", level.to_str(), message));
    }

    /// Every trace line gets the "! " prefix and no line is lost
    #[test]
    fn test_trace_prefix(lines in prop::collection::vec("[ -~]*", 1..8)) {
        let trace = lines.join("\n");
        let formatted = Formatter::format_exception(&trace);
        let out: Vec<&str> = formatted.lines().collect();

        assert_eq!(out.len(), trace.lines().count());
        for (original, prefixed) in trace.lines().zip(out) {
            assert_eq!(prefixed, format!("! {}", original));
        }
    }
}

// ============================================================================
// LogRecord Message Tests
// ============================================================================

proptest! {
    /// Messages are stored exactly as given
    #[test]
    fn test_message_kept_verbatim(message in ".*") {
        let caller = CallerInfo::new("a.rs", 1, "f");
        let record = LogRecord::new(LogLevel::Info, message.clone(), caller);
        assert_eq!(record.message, message);
    }

    /// Embedded newlines and tabs pass through every layout unchanged
    #[test]
    fn test_multiline_message_rendered_verbatim(
        first in "[a-zA-Z0-9 ]+",
        second in "[a-zA-Z0-9 ]+",
        mode in any_mode(),
    ) {
        let message = format!("{}\t{}\n{}", first, second, first);
        let caller = CallerInfo::new("a.rs", 1, "f");
        let record = LogRecord::new(LogLevel::Critical, message.clone(), caller);

        let rendered = Formatter::new(mode).render(&record);
        assert!(rendered.ends_with(&message), "message altered: {:?}", rendered);
        assert_eq!(rendered.lines().count(), 2);
    }
}
