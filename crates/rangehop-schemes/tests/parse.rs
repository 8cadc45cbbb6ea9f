use rangehop_core::{RangeFailure, TimeEncoding};
use rangehop_schemes::parse_range;

const BASE: &str = "https://eu-west-1.console.aws.amazon.com/cloudwatch/home?region=eu-west-1";
const NOW: i64 = 1_700_000_000_000;

#[test]
fn metrics_relative_durations_resolve_against_now() {
    let addr = format!(
        "{}#metricsV2:graph=~(view~'timeSeries~start~'-PT3H~end~'P0D~region~'eu-west-1)",
        BASE
    );
    let range = parse_range(&addr, NOW).unwrap();
    assert_eq!(range.start_ms, NOW - 10_800_000);
    assert_eq!(range.end_ms, NOW);
    assert_eq!(range.encoding, TimeEncoding::Relative);
    assert_eq!(range.duration_text.as_deref(), Some("-PT3H"));
    assert_eq!(range.source_tag, "metrics-graph");
    assert_eq!(range.captured_at_hint, Some(NOW));
}

#[test]
fn metrics_absolute_accepts_iso_text_with_escaped_colons() {
    let addr = format!(
        "{}#metricsV2:graph=~(start~'2023-11-14T22*3a13*3a20.000Z~end~'2023-11-14T23*3a13*3a20.000Z)",
        BASE
    );
    let range = parse_range(&addr, NOW).unwrap();
    assert_eq!(range.start_ms, 1_700_000_000_000);
    assert_eq!(range.end_ms, 1_700_003_600_000);
    assert_eq!(range.encoding, TimeEncoding::Absolute);
}

#[test]
fn metrics_absolute_accepts_raw_epoch_millis() {
    let addr = format!(
        "{}#metricsV2:graph=~(start~1700000000000~end~1700003600000)",
        BASE
    );
    let range = parse_range(&addr, NOW).unwrap();
    assert_eq!(range.start_ms, 1_700_000_000_000);
    assert_eq!(range.end_ms, 1_700_003_600_000);
}

#[test]
fn metrics_falls_back_to_period() {
    let addr = format!("{}#metricsV2:graph=~(view~'timeSeries~period~'PT15M)", BASE);
    let range = parse_range(&addr, NOW).unwrap();
    assert_eq!(range.start_ms, NOW - 900_000);
    assert_eq!(range.end_ms, NOW);
    assert_eq!(range.encoding, TimeEncoding::Relative);
}

#[test]
fn metrics_without_any_time_fields_is_unsupported_value() {
    let addr = format!("{}#metricsV2:graph=~(view~'timeSeries)", BASE);
    assert!(matches!(
        parse_range(&addr, NOW),
        Err(RangeFailure::UnsupportedValue(_))
    ));
}

#[test]
fn insights_plain_relative_with_zero_end_means_now() {
    let addr = format!(
        "{}#logsV2:logs-insights?queryDetail=$7E$28end$7E0$7Estart$7E-3600$7EtimeType$7E$27RELATIVE$7Eunit$7E$27seconds$29",
        BASE
    );
    let range = parse_range(&addr, NOW).unwrap();
    // end~0 is a valid "now", not an absent field
    assert_eq!(range.end_ms, NOW);
    assert_eq!(range.start_ms, NOW - 3_600_000);
    assert_eq!(range.encoding, TimeEncoding::Relative);
    assert_eq!(range.unit.as_deref(), Some("seconds"));
    assert_eq!(range.source_tag, "logs-insights-format-a");
}

#[test]
fn insights_escaped_relative_with_zero_end_means_now() {
    let addr = format!(
        "{}#logsV2:logs-insights$3FqueryDetail$3D~(end~0~start~-1800~timeType~'RELATIVE)",
        BASE
    );
    let range = parse_range(&addr, NOW).unwrap();
    assert_eq!(range.end_ms, NOW);
    assert_eq!(range.start_ms, NOW - 1_800_000);
    assert_eq!(range.source_tag, "logs-insights-format-b");
}

#[test]
fn insights_absolute_seconds_scale_to_millis() {
    let addr = format!(
        "{}#logsV2:logs-insights$3FqueryDetail$3D~(end~1700003600~start~1700000000~timeType~'ABSOLUTE)",
        BASE
    );
    let range = parse_range(&addr, NOW).unwrap();
    assert_eq!(range.start_ms, 1_700_000_000_000);
    assert_eq!(range.end_ms, 1_700_003_600_000);
    assert_eq!(range.encoding, TimeEncoding::Absolute);
}

#[test]
fn insights_absolute_millis_pass_through() {
    let addr = format!(
        "{}#logsV2:logs-insights$3FqueryDetail$3D~(end~1700003600000~start~1700000000000~timeType~'ABSOLUTE)",
        BASE
    );
    let range = parse_range(&addr, NOW).unwrap();
    assert_eq!(range.start_ms, 1_700_000_000_000);
    assert_eq!(range.end_ms, 1_700_003_600_000);
}

#[test]
fn insights_explicit_discriminant_beats_sign_heuristic() {
    // negative start would look relative, but the page says ABSOLUTE
    let addr = format!(
        "{}#logsV2:logs-insights$3FqueryDetail$3D~(end~1700003600~start~-5~timeType~'ABSOLUTE)",
        BASE
    );
    let range = parse_range(&addr, NOW).unwrap();
    assert_eq!(range.encoding, TimeEncoding::Absolute);
    assert_eq!(range.start_ms, -5_000);
}

#[test]
fn insights_negative_start_without_discriminant_reads_relative() {
    let addr = format!(
        "{}#logsV2:logs-insights$3FqueryDetail$3D~(end~0~start~-3600)",
        BASE
    );
    let range = parse_range(&addr, NOW).unwrap();
    assert_eq!(range.encoding, TimeEncoding::Relative);
    assert_eq!(range.start_ms, NOW - 3_600_000);
}

#[test]
fn insights_detail_without_start_is_unsupported_value() {
    let addr = format!(
        "{}#logsV2:logs-insights$3FqueryDetail$3D~(editorString~'fields*20*40timestamp)",
        BASE
    );
    assert!(matches!(
        parse_range(&addr, NOW),
        Err(RangeFailure::UnsupportedValue(_))
    ));
}

#[test]
fn log_events_negative_offsets_resolve_against_now() {
    let addr = format!(
        "{}#logsV2:log-groups/log-group/my-service/log-events$3Fstart$3D-3600000$26end$3D-600000",
        BASE
    );
    let range = parse_range(&addr, NOW).unwrap();
    assert_eq!(range.start_ms, NOW - 3_600_000);
    assert_eq!(range.end_ms, NOW - 600_000);
    assert_eq!(range.encoding, TimeEncoding::Relative);
    assert_eq!(range.source_tag, "log-events");
}

#[test]
fn log_events_missing_end_defaults_to_now() {
    let addr = format!(
        "{}#logsV2:log-groups/log-group/my-service/log-events$3Fstart$3D-3600000",
        BASE
    );
    let range = parse_range(&addr, NOW).unwrap();
    assert_eq!(range.end_ms, NOW);
}

#[test]
fn log_events_absolute_millis_pass_through() {
    let addr = format!(
        "{}#logsV2:log-groups/log-group/my-service/log-events$3Fstart$3D1700000000000$26end$3D1700003600000",
        BASE
    );
    let range = parse_range(&addr, NOW).unwrap();
    assert_eq!(range.start_ms, 1_700_000_000_000);
    assert_eq!(range.end_ms, 1_700_003_600_000);
    assert_eq!(range.encoding, TimeEncoding::Absolute);
}

#[test]
fn hash_state_bare_number_is_relative_millis() {
    let addr = format!(
        "{}#dashboards:name=ops-dash?~(timeRange~3600000~autoRefresh~false)",
        BASE
    );
    let range = parse_range(&addr, NOW).unwrap();
    assert_eq!(range.start_ms, NOW - 3_600_000);
    assert_eq!(range.end_ms, NOW);
    assert_eq!(range.encoding, TimeEncoding::Relative);
}

#[test]
fn hash_state_pair_is_absolute_millis() {
    let addr = format!(
        "{}#dashboards:name=ops-dash?~(timeRange~(~1700000000000~1700003600000)~region~'eu-west-1)",
        BASE
    );
    let range = parse_range(&addr, NOW).unwrap();
    assert_eq!(range.start_ms, 1_700_000_000_000);
    assert_eq!(range.end_ms, 1_700_003_600_000);
    assert_eq!(range.encoding, TimeEncoding::Absolute);
}

#[test]
fn hash_state_object_accepts_iso_or_millis() {
    let addr = format!(
        "{}#dashboards:name=ops-dash?~(timeRange~(start~'2023-11-14T22*3a13*3a20Z~end~1700003600000))",
        BASE
    );
    let range = parse_range(&addr, NOW).unwrap();
    assert_eq!(range.start_ms, 1_700_000_000_000);
    assert_eq!(range.end_ms, 1_700_003_600_000);
}

#[test]
fn hash_state_tolerates_unterminated_container() {
    // the page cut the fragment before the closing paren
    let addr = format!("{}#dashboards:name=ops-dash?~(timeRange~3600000", BASE);
    let range = parse_range(&addr, NOW).unwrap();
    assert_eq!(range.start_ms, NOW - 3_600_000);
    assert_eq!(range.end_ms, NOW);
}

#[test]
fn hash_state_without_time_field_is_unsupported_value() {
    let addr = format!("{}#dashboards:name=ops-dash?~(autoRefresh~false)", BASE);
    assert!(matches!(
        parse_range(&addr, NOW),
        Err(RangeFailure::UnsupportedValue(_))
    ));
}

#[test]
fn plain_duration_reads_relative_window() {
    let addr = "https://console.aws.amazon.com/xray/home?region=us-east-1&timeRange=PT1H";
    let range = parse_range(addr, NOW).unwrap();
    assert_eq!(range.start_ms, NOW - 3_600_000);
    assert_eq!(range.end_ms, NOW);
    assert_eq!(range.duration_text.as_deref(), Some("PT1H"));
    assert_eq!(range.source_tag, "plain-query-duration");
}

#[test]
fn plain_duration_reads_joined_endpoints() {
    let addr = "https://console.aws.amazon.com/xray/home?timeRange=2023-11-14T22:13:20Z~2023-11-14T23:13:20Z";
    let range = parse_range(addr, NOW).unwrap();
    assert_eq!(range.start_ms, 1_700_000_000_000);
    assert_eq!(range.end_ms, 1_700_003_600_000);
    assert_eq!(range.encoding, TimeEncoding::Absolute);
}

#[test]
fn plain_duration_searches_fragment_too() {
    let addr = "https://console.aws.amazon.com/xray/home#timeRange=PT15M";
    let range = parse_range(addr, NOW).unwrap();
    assert_eq!(range.start_ms, NOW - 900_000);
}

#[test]
fn plain_duration_garbage_is_malformed() {
    let addr = "https://console.aws.amazon.com/xray/home?timeRange=lastweek";
    assert!(matches!(
        parse_range(addr, NOW),
        Err(RangeFailure::Malformed(_))
    ));
}

#[test]
fn unsupported_addresses_never_fabricate_a_range() {
    let cases = [
        "https://console.aws.amazon.com/iam/home#/users",
        "https://console.aws.amazon.com/lambda/home#/functions",
        "https://grafana.example.com/d/abc?from=now-1h",
    ];
    for addr in &cases {
        assert_eq!(parse_range(addr, NOW), Err(RangeFailure::NoMatch), "{}", addr);
    }
}

#[test]
fn corrupt_scheme_payload_is_malformed_not_a_panic() {
    // classifier promises metrics, but the graph value is garbage
    let addr = format!("{}#metricsV2:graph=~(start~bogus~)", BASE);
    assert!(matches!(
        parse_range(&addr, NOW),
        Err(RangeFailure::Malformed(_))
    ));
}
