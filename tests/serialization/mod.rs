use humanity::Unit;

#[test]
fn unit_uses_plural_identifiers() {
    let json = serde_json::to_string(&Unit::Millisecond).unwrap();
    assert_eq!(json, r#""milliseconds""#);

    let units: Vec<Unit> =
        serde_json::from_str(r#"["years", "seconds", "microseconds"]"#)
            .unwrap();
    assert_eq!(units, [Unit::Year, Unit::Second, Unit::Microsecond]);

    let err = serde_json::from_str::<Unit>(r#""weeks""#).unwrap_err();
    assert!(err.to_string().contains("unknown variant `weeks`"));
}

#[test]
fn every_unit_round_trips_through_its_name() {
    for unit in Unit::ALL {
        let json = serde_json::to_string(&unit).unwrap();
        assert_eq!(json, format!("\"{}\"", unit.plural()));
        assert_eq!(serde_json::from_str::<Unit>(&json).unwrap(), unit);
    }
}
