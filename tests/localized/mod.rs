use humanity::{
    i18n::{Catalog, Translator},
    Delta, NaturalTime, Numbers, PreciseDelta, TimeDelta, Unit,
};

use crate::Result;

/// The plural rule for Russian: one form for 1, 21, 31, ..., another for
/// 2-4, 22-24, ... and a third for everything else.
fn russian_rule(n: u64) -> usize {
    if n % 10 == 1 && n % 100 != 11 {
        0
    } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
        1
    } else {
        2
    }
}

fn russian() -> Catalog {
    Catalog::new(russian_rule)
        .with_plural(
            "{amount} day",
            &["{amount} день", "{amount} дня", "{amount} дней"],
        )
        .with_plural(
            "{amount} hour",
            &["{amount} час", "{amount} часа", "{amount} часов"],
        )
        .with_plural(
            "{amount} second",
            &["{amount} секунда", "{amount} секунды", "{amount} секунд"],
        )
        .with_phrase("{head} and {tail}", "{head} и {tail}")
        .with_phrase("{time_difference} ago", "{time_difference} назад")
        .with_phrase("{time_difference} from now", "через {time_difference}")
        .with_phrase("now", "сейчас")
        .with_phrase("an hour", "час")
        .with_thousands_separator("\u{a0}")
}

#[test]
fn precise_plural_forms() -> Result {
    let ru = russian();
    let pd = PreciseDelta::new().translator(&ru);
    assert_eq!(pd.format(Delta::new(1, 0, 0))?, "1 день");
    assert_eq!(pd.format(Delta::new(3, 0, 0))?, "3 дня");
    assert_eq!(pd.format(Delta::new(11, 0, 0))?, "11 дней");
    assert_eq!(pd.format(Delta::new(21, 7_200, 0))?, "21 день и 2 часа");
    assert_eq!(
        pd.format(Delta::new(2, 18_005, 0))?,
        "2 дня, 5 часов и 5 секунд",
    );
    // Untranslated units fall back to English.
    assert_eq!(pd.format(Delta::from_secs(120))?, "2 minutes");
    Ok(())
}

#[test]
fn fractional_amounts_use_the_rounded_up_form() -> Result {
    let ru = russian();
    let pd = PreciseDelta::new().translator(&ru).minimum_unit(Unit::Hour);
    // 1.5 hours selects the form for 2.
    assert_eq!(pd.format(Delta::from_secs(5_400))?, "1.50 часа");
    Ok(())
}

#[test]
fn natural_time() -> Result {
    let ru = russian();
    let nt = NaturalTime::new().translator(&ru);
    assert_eq!(nt.format_delta(Delta::new(2, 0, 0), false)?, "2 дня назад");
    assert_eq!(nt.format_delta(Delta::new(5, 0, 0), false)?, "5 дней назад");
    assert_eq!(nt.format_delta(Delta::new(21, 0, 0), true)?, "через 21 день");
    assert_eq!(nt.format_delta(Delta::from_secs(3_700), true)?, "через час");
    assert_eq!(nt.format_delta(Delta::ZERO, false)?, "сейчас");

    let td = TimeDelta::new().translator(&ru);
    assert_eq!(td.format(Delta::from_secs(3_700))?, "час");
    // Untranslated phrases fall back to English.
    assert_eq!(td.format(Delta::ZERO)?, "a moment");
    Ok(())
}

#[test]
fn thousands_separator() {
    let ru = russian();
    assert_eq!(ru.thousands_separator(), "\u{a0}");
    let n = Numbers::new().translator(&ru);
    assert_eq!(n.int_comma(1_234_567), "1\u{a0}234\u{a0}567");
}
