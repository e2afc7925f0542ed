//! Property-based tests for rust_json_logger using proptest

use proptest::prelude::*;
use rust_json_logger::prelude::*;
use serde_json::{json, Map, Value};

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL.to_vec())
}

fn emittable_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL[1..].to_vec())
}

fn logger_with(options: LoggerOptions) -> (Logger, MemoryAppender) {
    let sink = MemoryAppender::new();
    let logger = Logger::builder()
        .process_context(ProcessContext::new("prop-host", 7, LogLevel::Info))
        .options(options)
        .appender(sink.clone())
        .clock(FixedClock::at_epoch_seconds(0))
        .build()
        .unwrap();
    (logger, sink)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Level names round-trip through their string form
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Parsing ignores ASCII case
    #[test]
    fn test_log_level_case_insensitive(level in any_level(), flips in prop::collection::vec(any::<bool>(), 8)) {
        let mixed: String = level
            .to_str()
            .chars()
            .zip(flips.iter().cycle())
            .map(|(c, &lower)| if lower { c.to_ascii_lowercase() } else { c })
            .collect();
        prop_assert_eq!(mixed.parse::<LogLevel>().unwrap(), level);
    }

    /// Ordering agrees with numeric severity
    #[test]
    fn test_log_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a.cmp(&b), a.severity().cmp(&b.severity()));
    }

    /// Names outside the level table are rejected
    #[test]
    fn test_unknown_level_rejected(name in "[A-Z]{1,8}") {
        let known = LogLevel::ALL.iter().any(|l| l.to_str() == name) || name == "WARN";
        prop_assert_eq!(name.parse::<LogLevel>().is_ok(), known);
    }
}

// ============================================================================
// Filtering Tests
// ============================================================================

proptest! {
    /// A call emits exactly one line iff it passes level and enabled filtering
    #[test]
    fn test_filtering_property(
        min_level in any_level(),
        level in emittable_level(),
        enabled in any::<bool>(),
    ) {
        let (logger, sink) = logger_with(
            LoggerOptions::new().level(min_level).enabled(enabled),
        );
        logger.log(level.to_str(), "probe", ()).unwrap();

        let expected = enabled && min_level != LogLevel::Silent && level >= min_level;
        prop_assert_eq!(sink.len(), usize::from(expected));
        prop_assert_eq!(logger.metrics().filtered(), u64::from(!expected));
    }
}

// ============================================================================
// Record Transform Tests
// ============================================================================

proptest! {
    /// Redacted values never reach the output
    #[test]
    fn test_redaction_never_leaks(
        key in "[a-z]{1,10}",
        secret in "[A-Za-z0-9]{12,24}",
        placeholder in "[*#]{1,5}",
    ) {
        let (logger, sink) = logger_with(
            LoggerOptions::new().redact(vec![key.clone()]).redact_value(placeholder.clone()),
        );
        logger.info(json!({ key.clone(): secret.clone() }), "redaction");

        let line = &sink.lines()[0];
        prop_assert!(!line.contains(&secret));
        prop_assert_eq!(&sink.records()[0][&key], &Value::String(placeholder));
    }

    /// Every accepted omit shape yields the same omission set
    #[test]
    fn test_omit_shapes_equivalent(keys in prop::collection::btree_set("[a-z]{1,6}", 1..5)) {
        let keys: Vec<String> = keys.into_iter().collect();

        let from_list = LoggerOptions::new().omit(keys.clone());
        let from_joined = LoggerOptions::new().omit(keys.join(","));
        let from_json = LoggerOptions::from_json_value(json!({ "omit": keys.clone() })).unwrap();

        prop_assert_eq!(&from_list.omit, &from_joined.omit);
        prop_assert_eq!(&from_list.omit, &from_json.omit);
    }

    /// Parsing the line recovers exactly the surviving fields
    #[test]
    fn test_round_trip_preserves_fields(
        fields in prop::collection::btree_map("[a-z]{3,8}", any::<i64>(), 0..8),
        omit_first in any::<bool>(),
    ) {
        let omitted: Vec<String> = fields.keys().take(usize::from(omit_first)).cloned().collect();
        let (logger, sink) = logger_with(LoggerOptions::new().omit(omitted.clone()));

        let payload: Map<String, Value> =
            fields.iter().map(|(k, v)| (k.clone(), json!(v))).collect();
        logger.info(Value::Object(payload), "round trip");

        let record = &sink.records()[0];
        for (key, value) in &fields {
            if omitted.contains(key) {
                prop_assert!(record.get(key).is_none());
            } else {
                // call fields override time, level and base fields on collision
                prop_assert_eq!(&record[key], &json!(value));
            }
        }
    }

    /// Sequence payloads are keyed by index
    #[test]
    fn test_sequence_indices(items in prop::collection::vec("[a-z]{0,5}", 0..10)) {
        let (logger, sink) = logger_with(LoggerOptions::new());
        logger.info(items.clone(), ());

        let record = &sink.records()[0];
        for (index, item) in items.iter().enumerate() {
            prop_assert_eq!(&record[index.to_string()], &json!(item));
        }
    }
}
