//! Property-based tests for fanlog using proptest

use fanlog::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::All),
        Just(Severity::MessageOnly),
        Just(Severity::Comment),
        Just(Severity::Verbose),
        Just(Severity::Info),
        Just(Severity::Debug),
        Just(Severity::Warning),
        Just(Severity::Error),
        Just(Severity::Severe),
    ]
}

// ============================================================================
// Severity Tests
// ============================================================================

proptest! {
    /// Severity name round-trips through FromStr
    #[test]
    fn test_severity_name_roundtrip(severity in any_severity()) {
        let parsed: Severity = severity.name().parse().unwrap();
        assert_eq!(severity, parsed);
    }

    /// Comparison operators agree with the numeric ordinals
    #[test]
    fn test_severity_ordering(first in any_severity(), second in any_severity()) {
        let val1 = first as u8;
        let val2 = second as u8;

        assert_eq!(first <= second, val1 <= val2);
        assert_eq!(first < second, val1 < val2);
        assert_eq!(first >= second, val1 >= val2);
        assert_eq!(first > second, val1 > val2);
    }

    /// Display matches name()
    #[test]
    fn test_severity_display(severity in any_severity()) {
        assert_eq!(format!("{}", severity), severity.name());
    }

    /// Parsing is case-insensitive
    #[test]
    fn test_severity_case_insensitive(severity in any_severity(), use_lower in any::<bool>()) {
        let input = if use_lower {
            severity.name().to_lowercase()
        } else {
            severity.name().to_uppercase()
        };
        assert_eq!(input.parse::<Severity>(), Ok(severity));
    }

    /// The filtering law: a record passes exactly when its severity is at
    /// least the threshold
    #[test]
    fn test_filtering_law(severity in any_severity(), threshold in any_severity()) {
        assert_eq!(
            severity.is_enabled_for(threshold),
            severity as u8 >= threshold as u8
        );
    }
}

// ============================================================================
// Destination Filtering Tests
// ============================================================================

proptest! {
    /// A buffer destination emits a record exactly when the filtering law
    /// says it should
    #[test]
    fn test_destination_emits_iff_at_or_above_threshold(
        severity in any_severity(),
        threshold in any_severity(),
    ) {
        let buffer = BufferDestination::new("probe").with_threshold(threshold);
        buffer.process_record(&Record::new(severity, "probe message"), false);

        let expected = if severity >= threshold { 1 } else { 0 };
        assert_eq!(buffer.line_count(), expected);
    }

    /// Fan-out delivers to every destination whose own threshold passes,
    /// regardless of the logger's threshold
    #[test]
    fn test_fan_out_respects_only_destination_thresholds(
        severity in any_severity(),
        logger_threshold in any_severity(),
        destination_threshold in any_severity(),
    ) {
        let logger = Logger::new("fan-out");
        let buffer = Arc::new(BufferDestination::new("buffer"));
        logger.add_destination(buffer.clone()).unwrap();

        logger.set_threshold(logger_threshold);
        buffer.set_threshold(destination_threshold);

        logger.log_record(Record::new(severity, "probe"), false);

        let expected = if severity >= destination_threshold { 1 } else { 0 };
        assert_eq!(buffer.line_count(), expected);
    }
}

// ============================================================================
// Formatter Tests
// ============================================================================

proptest! {
    /// Rendering the same record twice yields identical bytes
    #[test]
    fn test_render_is_deterministic(
        severity in any_severity(),
        message in "[^\\r\\n]*",
        show_timestamp in any::<bool>(),
        show_severity in any::<bool>(),
        include_call_site in any::<bool>(),
    ) {
        let record = Record::new(severity, message)
            .with_call_site(CallSite::new("app::handler", "src/handler.rs", 42));
        let options = DisplayOptions::default()
            .with_timestamp(show_timestamp)
            .with_severity(show_severity);

        let first = render(&record, &options, include_call_site);
        let second = render(&record, &options, include_call_site);
        assert_eq!(first, second);
    }

    /// Every rendered line ends in exactly one newline
    #[test]
    fn test_render_single_trailing_newline(
        severity in any_severity(),
        message in "[^\\r\\n]*",
        show_timestamp in any::<bool>(),
    ) {
        let record = Record::new(severity, message);
        let options = DisplayOptions::default().with_timestamp(show_timestamp);

        let line = render(&record, &options, false);
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
    }

    /// The message text always survives rendering verbatim
    #[test]
    fn test_render_preserves_message(
        severity in any_severity(),
        message in "[a-zA-Z0-9 ]+",
    ) {
        let record = Record::new(severity, message.clone());
        let line = render(&record, &DisplayOptions::default(), false);
        assert!(line.contains(&message), "message lost: {:?}", line);
    }

    /// render never panics regardless of input
    #[test]
    fn test_render_no_panic(
        severity in any_severity(),
        message in ".*",
        function in "[a-z_:]*",
        file in "[a-z/]*\\.rs",
        line in 0u32..100000u32,
    ) {
        let record = Record::new(severity, message)
            .with_call_site(CallSite::new(function.as_str(), file.as_str(), line));
        let _ = render(&record, &DisplayOptions::default(), true);
    }
}

// ============================================================================
// Record Tests
// ============================================================================

proptest! {
    /// Record construction never panics and always stamps a recent time
    #[test]
    fn test_record_has_timestamp(message in ".*") {
        let record = Record::new(Severity::Info, message);

        let now = chrono::Utc::now();
        let age = now.signed_duration_since(record.timestamp);
        assert!(age.num_seconds() <= 1, "timestamp too old: {:?}", record.timestamp);
    }

    /// The call site attaches exactly what was given
    #[test]
    fn test_record_call_site(
        message in ".*",
        function in "[a-z_:]+",
        file in "[a-z]+\\.rs",
        line in 1u32..10000u32,
    ) {
        let record = Record::new(Severity::Debug, message)
            .with_call_site(CallSite::new(function.as_str(), file.as_str(), line));

        assert_eq!(record.function, function);
        assert_eq!(record.file, file);
        assert_eq!(record.line, line);
    }
}
