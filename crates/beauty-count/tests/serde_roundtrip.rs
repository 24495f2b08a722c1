use beauty_count::{from_json, to_json, BeautifulNumbersCounter, CountOptions, SchemaVersion};

#[test]
fn report_round_trips_json() {
    let counter = BeautifulNumbersCounter::create(13).unwrap();
    let report = counter.report(13, &CountOptions::with_distribution()).unwrap();
    let json = to_json(&report).unwrap();
    let restored = from_json(&json).unwrap();
    assert_eq!(restored, report);
    assert_eq!(restored.count, "9203637295151");
}

#[test]
fn tampered_payload_is_rejected() {
    let counter = BeautifulNumbersCounter::create(10).unwrap();
    let report = counter.report(4, &CountOptions::default()).unwrap();
    let json = to_json(&report).unwrap().replace("\"670\"", "\"671\"");
    let err = from_json(&json).unwrap_err();
    assert_eq!(err.info().code, "hash-mismatch");
}

#[test]
fn invalid_base_in_payload_is_rejected() {
    let counter = BeautifulNumbersCounter::create(2).unwrap();
    let report = counter.report(2, &CountOptions::default()).unwrap();
    let json = to_json(&report)
        .unwrap()
        .replace("\"base\": 2", "\"base\": 1");
    let err = from_json(&json).unwrap_err();
    assert_eq!(err.info().code, "json-deserialize");
}

#[test]
fn options_fill_defaults() {
    let opts: CountOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, CountOptions::default());

    let opts: CountOptions = serde_json::from_str(
        r#"{"include_distribution": true, "schema_version": {"major": 2, "minor": 1, "patch": 0}}"#,
    )
    .unwrap();
    assert!(opts.include_distribution);
    assert_eq!(opts.schema_version, SchemaVersion::new(2, 1, 0));
}

#[test]
fn counter_round_trips_json() {
    let counter = BeautifulNumbersCounter::create(10).unwrap();
    let json = serde_json::to_string(&counter).unwrap();
    assert_eq!(json, r#"{"base":10}"#);
    let restored: BeautifulNumbersCounter = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, counter);
    assert!(serde_json::from_str::<BeautifulNumbersCounter>(r#"{"base":0}"#).is_err());
}
