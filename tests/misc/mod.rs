use humanity::{
    file_size, fractional, listing, scientific_notation, Calendar, FileSize,
    Numbers, SizeStyle, Timing,
};
use jiff::civil::{date, time};

use crate::Result;

#[test]
fn file_sizes_in_a_list() -> Result {
    let sizes: Vec<String> = [300, 3_000, 2_900_000]
        .into_iter()
        .map(|bytes| FileSize::new().style(SizeStyle::Binary).format(bytes))
        .collect();
    assert_eq!(
        listing(&sizes, ",", Some("and")),
        "300 Bytes, 2.9 KiB and 2.8 MiB",
    );
    assert_eq!(file_size(3_000_000, false, true, ".2f", "")?, "2.86M");
    Ok(())
}

#[test]
fn numbers() {
    let n = Numbers::new();
    let ranks: Vec<String> = (1..=4).map(|i| n.ordinal(i)).collect();
    assert_eq!(listing(&ranks, ",", None), "1st, 2nd, 3rd, 4th");
    assert_eq!(n.int_comma(1_234_567_890_u64), "1,234,567,890");
    assert_eq!(n.int_word(3_500_000_000.0), "3.5 billion");
    assert_eq!(fractional(1.5), "1 1/2");
    assert_eq!(scientific_notation(6.02e23, 2), "6.02 x 10²³");
}

#[test]
fn clock_and_calendar() -> Result {
    let informal = Timing::new().formal(false);
    assert_eq!(
        informal.format(time(17, 15, 0, 0)),
        "a quarter past five in the afternoon",
    );
    assert_eq!(
        Timing::new().format(time(17, 15, 0, 0)),
        "fifteen minutes past five",
    );

    let cal = Calendar::new(date(2024, 12, 31));
    assert_eq!(cal.day(date(2025, 1, 1))?, "tomorrow");
    assert_eq!(cal.year(date(2025, 1, 1)), "next year");
    assert_eq!(
        cal.day_with_format(date(2025, 1, 2), "%Y-%m-%d")?,
        "2025-01-02",
    );
    Ok(())
}
