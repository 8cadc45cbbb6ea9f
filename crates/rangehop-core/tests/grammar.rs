use rangehop_core::{
    format_local_civil, format_utc, parse_duration, parse_instant_ms, scale_epoch, RangeFailure,
    SchemeTag, TimeEncoding, TimeRange,
};

#[test]
fn duration_grammar_accepts_console_spellings() {
    assert_eq!(parse_duration("-PT3H").unwrap().ms, -10_800_000);
    assert_eq!(parse_duration("PT15M").unwrap().ms, 900_000);
    assert_eq!(parse_duration("PT1H30M").unwrap().ms, 5_400_000);
    assert_eq!(parse_duration("P0D").unwrap().ms, 0);
    assert_eq!(parse_duration("P1D").unwrap().ms, 86_400_000);
    assert_eq!(parse_duration("P1DT2H").unwrap().ms, 93_600_000);
    assert_eq!(parse_duration("-PT30S").unwrap().ms, -30_000);
    assert_eq!(parse_duration("+PT1H").unwrap().ms, 3_600_000);
}

#[test]
fn duration_grammar_rejects_unitless_text() {
    for bad in ["", "P", "PT", "3600", "PT3", "hours", "P-1D", "PT3H4X"] {
        let err = parse_duration(bad).unwrap_err();
        assert!(
            matches!(err, RangeFailure::Malformed(_)),
            "expected malformed for {:?}",
            bad
        );
    }
}

#[test]
fn duration_keeps_original_text() {
    let spec = parse_duration("-PT3H").unwrap();
    assert_eq!(spec.text, "-PT3H");
}

#[test]
fn epoch_numbers_scale_by_magnitude() {
    assert_eq!(scale_epoch(1_700_000_000), 1_700_000_000_000);
    assert_eq!(scale_epoch(1_700_000_000_000), 1_700_000_000_000);
    assert_eq!(parse_instant_ms("1700000000").unwrap(), 1_700_000_000_000);
    assert_eq!(
        parse_instant_ms("1700000000000").unwrap(),
        1_700_000_000_000
    );
}

#[test]
fn rfc3339_parses_to_epoch_millis() {
    assert_eq!(
        parse_instant_ms("2023-11-14T22:13:20Z").unwrap(),
        1_700_000_000_000
    );
    assert_eq!(
        parse_instant_ms("2023-11-14T23:13:20+01:00").unwrap(),
        1_700_000_000_000
    );
    assert_eq!(
        parse_instant_ms("2023-11-14T22:13:20.500Z").unwrap(),
        1_700_000_000_500
    );
}

#[test]
fn local_civil_text_round_trips() {
    // rendering has no zone suffix and reads back as local time, so the
    // round-trip holds in any test environment's timezone
    let ms = 1_700_003_600_000;
    let text = format_local_civil(ms).unwrap();
    assert!(!text.ends_with('Z'), "local text must not be UTC-marked");
    assert_eq!(parse_instant_ms(&text).unwrap(), ms);
}

#[test]
fn utc_text_is_zulu_marked() {
    assert_eq!(format_utc(1_700_000_000_000).unwrap(), "2023-11-14T22:13:20.000Z");
}

#[test]
fn garbage_timestamps_are_malformed() {
    for bad in ["", "soon", "12:00", "2023-13-99T99:99:99Z"] {
        assert!(
            matches!(parse_instant_ms(bad), Err(RangeFailure::Malformed(_))),
            "expected malformed for {:?}",
            bad
        );
    }
}

#[test]
fn failure_reason_codes_are_stable() {
    assert_eq!(RangeFailure::NoMatch.reason_code(), "no-match");
    assert_eq!(
        RangeFailure::Malformed("x".into()).reason_code(),
        "malformed"
    );
    assert_eq!(
        RangeFailure::UnsupportedValue("x".into()).reason_code(),
        "unsupported-value"
    );
}

#[test]
fn scheme_tags_serialize_to_kebab_names() {
    assert_eq!(
        serde_json::to_string(&SchemeTag::LogsInsightsFormatA).unwrap(),
        r#""logs-insights-format-a""#
    );
    assert_eq!(SchemeTag::MetricsGraph.to_string(), "metrics-graph");
    assert!(SchemeTag::Unsupported.is_terminal());
    assert!(!SchemeTag::LogEvents.is_terminal());
}

#[test]
fn range_serialization_omits_absent_hints() {
    let range = TimeRange::absolute(1_700_000_000_000, 1_700_003_600_000, "metrics-graph");
    let json = serde_json::to_value(&range).unwrap();
    assert_eq!(json["start_ms"], 1_700_000_000_000_i64);
    assert_eq!(json["encoding"], "absolute");
    assert!(json.get("duration_text").is_none());
    assert!(json.get("captured_at_hint").is_none());

    let relative = TimeRange::relative(0, 1, "log-events")
        .with_duration_text("-PT3H")
        .with_unit("seconds")
        .with_captured_at(5);
    assert_eq!(relative.encoding, TimeEncoding::Relative);
    let json = serde_json::to_value(&relative).unwrap();
    assert_eq!(json["duration_text"], "-PT3H");
    assert_eq!(json["unit"], "seconds");

    let back: TimeRange = serde_json::from_value(json).unwrap();
    assert_eq!(back, relative);
}
