// These tests exercise precise duration rendering through the public API
// only. They focus on the interaction between the minimum unit and the
// suppressed units, which is where time is most easily lost.

use humanity::{
    fmt::NumberFormat, precise_delta, Delta, PreciseDelta, Unit, UnitSet,
};

use crate::Result;

#[test]
fn suppressing_every_unit_between_two_others() -> Result {
    let delta = Delta::new(0, 14_430, 200);
    let all_but = |keep: &[Unit]| -> UnitSet {
        Unit::ALL.into_iter().filter(|u| !keep.contains(u)).collect()
    };

    let pd = PreciseDelta::new()
        .minimum_unit(Unit::Microsecond)
        .suppress(all_but(&[Unit::Hour, Unit::Microsecond]));
    assert_eq!(pd.format(delta)?, "4 hours and 30000200 microseconds");

    let pd = PreciseDelta::new()
        .minimum_unit(Unit::Microsecond)
        .suppress(all_but(&[Unit::Minute, Unit::Second, Unit::Microsecond]));
    assert_eq!(
        pd.format(delta)?,
        "240 minutes, 30 seconds and 200 microseconds",
    );
    Ok(())
}

#[test]
fn suppressed_minimum_moves_up() -> Result {
    let delta = Delta::new(0, 14_430, 200);
    assert_eq!(
        precise_delta(delta, "seconds", &["hours", "seconds"], ".2f")?,
        "240.50 minutes",
    );
    assert_eq!(
        precise_delta(
            Delta::new(0, 0, 1_200),
            "microseconds",
            &["microseconds"],
            ".2f",
        )?,
        "1.20 milliseconds",
    );
    Ok(())
}

#[test]
fn large_durations() -> Result {
    let delta = Delta::new(400, 0, 0);
    assert_eq!(
        precise_delta(
            delta,
            "minutes",
            &["years", "months", "days", "hours"],
            "",
        )?,
        "576000 minutes",
    );
    assert_eq!(
        precise_delta(delta, "days", &[], ".2f")?,
        "1 year, 1 month and 4.50 days",
    );
    assert_eq!(
        precise_delta(delta, "days", &["years"], ".2f")?,
        "13 months and 3.50 days",
    );
    Ok(())
}

#[test]
fn builder_and_string_api_agree() -> Result {
    let delta = Delta::new(3, 7_261, 500_000);
    let from_builder = PreciseDelta::new()
        .minimum_unit(Unit::Minute)
        .suppress(UnitSet::from(Unit::Hour))
        .number_format(NumberFormat::fixed(3))
        .format(delta)?;
    let from_strings = precise_delta(delta, "minutes", &["hours"], ".3f")?;
    assert_eq!(from_builder, from_strings);
    assert_eq!(from_builder, "3 days and 121.017 minutes");
    Ok(())
}

#[test]
fn from_other_duration_types() -> Result {
    let pd = PreciseDelta::new();
    let std = std::time::Duration::from_millis(90_500);
    assert_eq!(pd.format(Delta::from(std))?, "1 minute and 30.50 seconds");

    let signed = jiff::SignedDuration::from_secs(-3_600);
    assert_eq!(pd.format(Delta::from(signed))?, "1 hour");
    Ok(())
}

#[test]
fn error_predicates() {
    let delta = Delta::from_secs(5);

    let err = precise_delta(delta, "weeks", &[], ".2f").unwrap_err();
    assert!(err.is_invalid_unit());
    assert!(err.is_invalid_parameter());

    let err = precise_delta(delta, "seconds", &["eons"], ".2f").unwrap_err();
    assert!(err.is_invalid_unit());

    let err = precise_delta(delta, "months", &["months", "years"], ".2f")
        .unwrap_err();
    assert!(err.is_no_suitable_unit());
    insta::assert_snapshot!(
        err,
        @"minimum unit 'months' is suppressed and no coarser unit is available to replace it",
    );

    let err = precise_delta(delta, "seconds", &[], "%").unwrap_err();
    assert!(!err.is_invalid_unit());
    assert!(err.is_invalid_parameter());
}

fn micros_total(m: &humanity::Magnitudes) -> f64 {
    m.iter().map(|(unit, amount)| amount * unit_micros(unit)).sum()
}

fn unit_micros(unit: Unit) -> f64 {
    match unit {
        Unit::Year => 365.0 * 86_400e6,
        Unit::Month => 30.5 * 86_400e6,
        Unit::Day => 86_400e6,
        Unit::Hour => 3_600e6,
        Unit::Minute => 60e6,
        Unit::Second => 1e6,
        Unit::Millisecond => 1e3,
        Unit::Microsecond => 1.0,
    }
}

quickcheck::quickcheck! {
    fn prop_microsecond_minimum_keeps_everything(
        days: u16,
        secs: u32,
        micros: u32
    ) -> bool {
        let delta = Delta::new(
            i64::from(days),
            i64::from(secs % 86_400),
            i64::from(micros % 1_000_000),
        );
        let m = PreciseDelta::new()
            .minimum_unit(Unit::Microsecond)
            .redistribute(delta)
            .unwrap();
        micros_total(&m) == delta.as_micros() as f64
    }

    fn prop_output_is_never_empty(days: u16, secs: u32, rank: u8) -> bool {
        let delta = Delta::new(i64::from(days), i64::from(secs), 0);
        let unit = Unit::ALL[usize::from(rank) % Unit::ALL.len()];
        let text =
            PreciseDelta::new().minimum_unit(unit).format(delta).unwrap();
        !text.is_empty()
    }
}
