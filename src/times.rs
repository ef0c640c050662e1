/*!
Coarse, conversational phrasing of durations, clock times and dates.

Unlike [`PreciseDelta`](crate::PreciseDelta), the routines in this module
pick a single phrase that is "close enough," the way a person would say it:
"3 days ago," "a quarter to eleven in the morning" or "tomorrow."

* [`TimeDelta`] renders an elapsed time without tense.
* [`NaturalTime`] adds tense: "3 days ago" or "3 days from now."
* [`Timing`] renders a clock time, formally or informally.
* [`Calendar`] renders a date relative to a given day.
* [`time_of_day`] names the part of the day an hour falls in.
*/

use alloc::string::{String, ToString};

use jiff::civil::{Date, DateTime, Time};

use crate::{
    delta::Delta,
    error::{unit::Error as E, Error, ErrorContext, OptionError},
    i18n::{self, Translator, ENGLISH},
    unit::Unit,
};

/// A configuration for coarse, tenseless rendering of elapsed time.
///
/// Only the most significant part of the elapsed time is rendered, e.g.,
/// `"3 days"` rather than `"3 days, 4 hours and 12 seconds"`. Elapsed times
/// between one and two years name both the year and the remainder.
///
/// # Example
///
/// ```
/// use humanity::{Delta, TimeDelta};
///
/// let td = TimeDelta::new();
/// assert_eq!(td.format(Delta::from_secs(0))?, "a moment");
/// assert_eq!(td.format(Delta::from_secs(30))?, "30 seconds");
/// assert_eq!(td.format(Delta::from_secs(3_600))?, "an hour");
/// assert_eq!(td.format(Delta::new(500, 0, 0))?, "1 year, 4 months");
///
/// let td = TimeDelta::new().use_months(false);
/// assert_eq!(td.format(Delta::new(500, 0, 0))?, "1 year, 135 days");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TimeDelta<'t> {
    use_months: bool,
    minimum: Unit,
    translator: &'t dyn Translator,
}

impl TimeDelta<'static> {
    /// Creates a new configuration with the default settings.
    ///
    /// By default, months are used, the minimum unit is seconds and output
    /// is in English.
    pub fn new() -> TimeDelta<'static> {
        TimeDelta {
            use_months: true,
            minimum: Unit::Second,
            translator: &ENGLISH,
        }
    }
}

impl<'t> TimeDelta<'t> {
    /// When enabled, elapsed times of at least one month (30.5 days) and
    /// less than a year are rendered in months rather than days.
    ///
    /// This is enabled by default.
    pub fn use_months(self, yes: bool) -> TimeDelta<'t> {
        TimeDelta { use_months: yes, ..self }
    }

    /// Sets the finest unit used for elapsed times under a second.
    ///
    /// Only [`Unit::Second`] (the default), [`Unit::Millisecond`] and
    /// [`Unit::Microsecond`] are supported. Any other unit causes rendering
    /// to fail.
    pub fn minimum_unit(self, unit: Unit) -> TimeDelta<'t> {
        TimeDelta { minimum: unit, ..self }
    }

    /// Sets the translator used to produce phrases.
    pub fn translator<'a>(
        self,
        translator: &'a dyn Translator,
    ) -> TimeDelta<'a> {
        TimeDelta {
            use_months: self.use_months,
            minimum: self.minimum,
            translator,
        }
    }

    /// Renders the given elapsed time.
    ///
    /// # Errors
    ///
    /// This returns an error when the minimum unit is coarser than seconds.
    ///
    /// ```
    /// use humanity::{Delta, TimeDelta, Unit};
    ///
    /// let td = TimeDelta::new().minimum_unit(Unit::Millisecond);
    /// assert_eq!(td.format(Delta::new(0, 0, 101_943))?, "101 milliseconds");
    ///
    /// let td = TimeDelta::new().minimum_unit(Unit::Hour);
    /// assert!(td.format(Delta::from_secs(5)).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn format(&self, delta: Delta) -> Result<String, Error> {
        Ok(match self.coarse(delta)? {
            Coarse::Moment => i18n::word(self.translator, "a moment"),
            Coarse::Phrase(text) => text,
        })
    }

    fn coarse(&self, delta: Delta) -> Result<Coarse, Error> {
        if self.minimum > Unit::Second {
            debug!(
                "rejected minimum unit {} for coarse time delta",
                self.minimum,
            );
            return Err(E::UnsupportedMinimum { given: self.minimum }.into());
        }
        let tr = self.translator;
        let years = delta.days() / 365;
        let days = delta.days() % 365;
        // Days within a year are at most 364, which is exact as an `f64`.
        let months = (days as f64 / 30.5) as i64;

        let text = if years == 0 && days == 0 {
            return Ok(self.less_than_a_day(delta));
        } else if years == 0 {
            self.less_than_a_year(days, months)
        } else if years == 1 {
            self.one_year(days, months)
        } else {
            amount(tr, "{amount} year", "{amount} years", years)
        };
        Ok(Coarse::Phrase(text))
    }

    fn less_than_a_day(&self, delta: Delta) -> Coarse {
        let tr = self.translator;
        let seconds = i64::from(delta.seconds());
        let usecs = i64::from(delta.microseconds());
        let text = match seconds {
            0 => {
                if self.minimum == Unit::Microsecond && usecs < 1_000 {
                    amount(
                        tr,
                        "{amount} microsecond",
                        "{amount} microseconds",
                        usecs,
                    )
                } else if self.minimum == Unit::Millisecond
                    || self.minimum == Unit::Microsecond
                {
                    amount(
                        tr,
                        "{amount} millisecond",
                        "{amount} milliseconds",
                        usecs / 1_000,
                    )
                } else {
                    return Coarse::Moment;
                }
            }
            1 => i18n::word(tr, "a second"),
            2..=59 => {
                amount(tr, "{amount} second", "{amount} seconds", seconds)
            }
            60..=119 => i18n::word(tr, "a minute"),
            120..=3_599 => amount(
                tr,
                "{amount} minute",
                "{amount} minutes",
                seconds / 60,
            ),
            3_600..=7_199 => i18n::word(tr, "an hour"),
            _ => {
                amount(tr, "{amount} hour", "{amount} hours", seconds / 3_600)
            }
        };
        Coarse::Phrase(text)
    }

    fn less_than_a_year(&self, days: i64, months: i64) -> String {
        let tr = self.translator;
        if days == 1 {
            i18n::word(tr, "a day")
        } else if !self.use_months || months == 0 {
            amount(tr, "{amount} day", "{amount} days", days)
        } else if months == 1 {
            i18n::word(tr, "a month")
        } else {
            amount(tr, "{amount} month", "{amount} months", months)
        }
    }

    fn one_year(&self, days: i64, months: i64) -> String {
        let tr = self.translator;
        if months == 0 && days == 0 {
            i18n::word(tr, "a year")
        } else if months == 0 || !self.use_months {
            amount(tr, "1 year, {amount} day", "1 year, {amount} days", days)
        } else if months == 1 {
            i18n::word(tr, "1 year, 1 month")
        } else {
            amount(
                tr,
                "1 year, {amount} month",
                "1 year, {amount} months",
                months,
            )
        }
    }
}

impl Default for TimeDelta<'static> {
    fn default() -> TimeDelta<'static> {
        TimeDelta::new()
    }
}

enum Coarse {
    /// An elapsed time too short to name at the configured minimum unit.
    Moment,
    Phrase(String),
}

fn amount(
    tr: &dyn Translator,
    singular: &str,
    plural: &str,
    count: i64,
) -> String {
    let count = count.unsigned_abs();
    i18n::plural(tr, singular, plural, count, &[("amount", &count)])
}

/// A configuration for rendering elapsed time with tense.
///
/// This wraps a [`TimeDelta`] and renders its phrase either in the past
/// (`"3 days ago"`) or in the future (`"3 days from now"`). An elapsed time
/// that is too short to name renders as `"now"`.
///
/// # Example
///
/// ```
/// use humanity::{Delta, NaturalTime};
/// use jiff::{civil::date, SignedDuration};
///
/// let nt = NaturalTime::new();
/// let delta = Delta::from_secs(30);
/// assert_eq!(nt.format_delta(delta, false)?, "30 seconds ago");
/// assert_eq!(nt.format_delta(delta, true)?, "30 seconds from now");
/// assert_eq!(nt.format_delta(Delta::ZERO, false)?, "now");
///
/// // Negative durations are in the future.
/// let dur = SignedDuration::from_hours(-2);
/// assert_eq!(nt.format_signed(dur)?, "2 hours from now");
///
/// let now = date(2024, 3, 10).at(12, 0, 0, 0);
/// let then = date(2024, 3, 7).at(9, 0, 0, 0);
/// assert_eq!(nt.format_datetime(then, now)?, "3 days ago");
/// assert_eq!(nt.format_datetime(now, then)?, "3 days from now");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct NaturalTime<'t> {
    delta: TimeDelta<'t>,
}

impl NaturalTime<'static> {
    /// Creates a new configuration with the default settings.
    pub fn new() -> NaturalTime<'static> {
        NaturalTime { delta: TimeDelta::new() }
    }
}

impl<'t> NaturalTime<'t> {
    /// See [`TimeDelta::use_months`].
    pub fn use_months(self, yes: bool) -> NaturalTime<'t> {
        NaturalTime { delta: self.delta.use_months(yes) }
    }

    /// See [`TimeDelta::minimum_unit`].
    pub fn minimum_unit(self, unit: Unit) -> NaturalTime<'t> {
        NaturalTime { delta: self.delta.minimum_unit(unit) }
    }

    /// Sets the translator used to produce phrases.
    pub fn translator<'a>(
        self,
        translator: &'a dyn Translator,
    ) -> NaturalTime<'a> {
        NaturalTime { delta: self.delta.translator(translator) }
    }

    /// Renders an elapsed time in the past, or in the future when `future`
    /// is true.
    ///
    /// # Errors
    ///
    /// This returns an error when the minimum unit is coarser than seconds.
    pub fn format_delta(
        &self,
        delta: Delta,
        future: bool,
    ) -> Result<String, Error> {
        let tr = self.delta.translator;
        let text = match self.delta.coarse(delta)? {
            Coarse::Moment => return Ok(i18n::word(tr, "now")),
            Coarse::Phrase(text) => text,
        };
        let key = if future {
            "{time_difference} from now"
        } else {
            "{time_difference} ago"
        };
        Ok(i18n::phrase(tr, key, &[("time_difference", &text)]))
    }

    /// Renders a signed duration measured backwards from now.
    ///
    /// A positive duration is in the past and a negative duration is in the
    /// future.
    ///
    /// # Errors
    ///
    /// This returns an error when the minimum unit is coarser than seconds.
    pub fn format_signed(
        &self,
        duration: jiff::SignedDuration,
    ) -> Result<String, Error> {
        self.format_delta(Delta::from(duration), duration.is_negative())
    }

    /// Renders `value` relative to `now`.
    ///
    /// # Errors
    ///
    /// This returns an error when the minimum unit is coarser than seconds.
    pub fn format_datetime(
        &self,
        value: DateTime,
        now: DateTime,
    ) -> Result<String, Error> {
        self.format_signed(now.duration_since(value))
    }

    /// Renders `value` relative to the current civil time in the system
    /// time zone.
    ///
    /// # Errors
    ///
    /// This returns an error when the minimum unit is coarser than seconds.
    #[cfg(feature = "std")]
    pub fn format_since_now(&self, value: DateTime) -> Result<String, Error> {
        self.format_datetime(value, jiff::Zoned::now().datetime())
    }
}

impl Default for NaturalTime<'static> {
    fn default() -> NaturalTime<'static> {
        NaturalTime::new()
    }
}

/// Returns the part of the day that the given hour falls in.
///
/// Hours `1` through `11` are in the morning, `13` through `18` are in the
/// afternoon and `19` through `23` are in the evening. Every other hour
/// (including midnight and noon) returns an empty string.
///
/// The phrase returned is untranslated. Pass it through
/// [`Translator::phrase`] to translate it.
///
/// ```
/// use humanity::time_of_day;
///
/// assert_eq!(time_of_day(9), "morning");
/// assert_eq!(time_of_day(12), "");
/// assert_eq!(time_of_day(15), "afternoon");
/// assert_eq!(time_of_day(21), "evening");
/// assert_eq!(time_of_day(0), "");
/// ```
pub fn time_of_day(hour: i8) -> &'static str {
    match hour {
        1..=11 => "morning",
        13..=18 => "afternoon",
        19..=23 => "evening",
        _ => "",
    }
}

/// The spelled out hours of a 24-hour clock, with their translation
/// contexts.
static HOURS: [(&str, &str); 24] = [
    ("hour 0", "zero"),
    ("hour 1", "one"),
    ("hour 2", "two"),
    ("hour 3", "three"),
    ("hour 4", "four"),
    ("hour 5", "five"),
    ("hour 6", "six"),
    ("hour 7", "seven"),
    ("hour 8", "eight"),
    ("hour 9", "nine"),
    ("hour 10", "ten"),
    ("hour 11", "eleven"),
    ("hour 12", "twelve"),
    ("hour 13", "one"),
    ("hour 14", "two"),
    ("hour 15", "three"),
    ("hour 16", "four"),
    ("hour 17", "five"),
    ("hour 18", "six"),
    ("hour 19", "seven"),
    ("hour 20", "eight"),
    ("hour 21", "nine"),
    ("hour 22", "ten"),
    ("hour 23", "eleven"),
];

static MINUTES: [(&str, &str); 60] = [
    ("minute 0", "zero"),
    ("minute 1", "one"),
    ("minute 2", "two"),
    ("minute 3", "three"),
    ("minute 4", "four"),
    ("minute 5", "five"),
    ("minute 6", "six"),
    ("minute 7", "seven"),
    ("minute 8", "eight"),
    ("minute 9", "nine"),
    ("minute 10", "ten"),
    ("minute 11", "eleven"),
    ("minute 12", "twelve"),
    ("minute 13", "thirteen"),
    ("minute 14", "fourteen"),
    ("minute 15", "fifteen"),
    ("minute 16", "sixteen"),
    ("minute 17", "seventeen"),
    ("minute 18", "eighteen"),
    ("minute 19", "nineteen"),
    ("minute 20", "twenty"),
    ("minute 21", "twenty one"),
    ("minute 22", "twenty two"),
    ("minute 23", "twenty three"),
    ("minute 24", "twenty four"),
    ("minute 25", "twenty five"),
    ("minute 26", "twenty six"),
    ("minute 27", "twenty seven"),
    ("minute 28", "twenty eight"),
    ("minute 29", "twenty nine"),
    ("minute 30", "thirty"),
    ("minute 31", "thirty one"),
    ("minute 32", "thirty two"),
    ("minute 33", "thirty three"),
    ("minute 34", "thirty four"),
    ("minute 35", "thirty five"),
    ("minute 36", "thirty six"),
    ("minute 37", "thirty seven"),
    ("minute 38", "thirty eight"),
    ("minute 39", "thirty nine"),
    ("minute 40", "forty"),
    ("minute 41", "forty one"),
    ("minute 42", "forty two"),
    ("minute 43", "forty three"),
    ("minute 44", "forty four"),
    ("minute 45", "forty five"),
    ("minute 46", "forty six"),
    ("minute 47", "forty seven"),
    ("minute 48", "forty eight"),
    ("minute 49", "forty nine"),
    ("minute 50", "fifty"),
    ("minute 51", "fifty one"),
    ("minute 52", "fifty two"),
    ("minute 53", "fifty three"),
    ("minute 54", "fifty four"),
    ("minute 55", "fifty five"),
    ("minute 56", "fifty six"),
    ("minute 57", "fifty seven"),
    ("minute 58", "fifty eight"),
    ("minute 59", "fifty nine"),
];

/// A configuration for rendering clock times in words.
///
/// The formal style counts minutes past or to the hour on a 24-hour clock
/// ("ten minutes to five hours"). The informal style uses a 12-hour clock
/// with quarters, halves, noon and midnight, and names the part of the day
/// ("a quarter to eleven in the morning").
///
/// Times more than thirty minutes past the hour are expressed relative to
/// the next hour.
///
/// # Example
///
/// ```
/// use humanity::Timing;
/// use jiff::civil::time;
///
/// let formal = Timing::new();
/// assert_eq!(formal.format(time(6, 59, 0, 0)), "one minute to seven hours");
/// assert_eq!(formal.format(time(9, 0, 0, 0)), "nine o'clock");
///
/// let informal = Timing::new().formal(false);
/// assert_eq!(
///     informal.format(time(10, 45, 0, 0)),
///     "a quarter to eleven in the morning",
/// );
/// assert_eq!(informal.format(time(23, 40, 0, 0)), "twenty to midnight");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Timing<'t> {
    formal: bool,
    translator: &'t dyn Translator,
}

impl Timing<'static> {
    /// Creates a new configuration that renders formal English.
    pub fn new() -> Timing<'static> {
        Timing { formal: true, translator: &ENGLISH }
    }
}

impl<'t> Timing<'t> {
    /// Selects the formal (the default) or informal style.
    pub fn formal(self, yes: bool) -> Timing<'t> {
        Timing { formal: yes, ..self }
    }

    /// Sets the translator used to produce phrases.
    pub fn translator<'a>(self, translator: &'a dyn Translator) -> Timing<'a> {
        Timing { formal: self.formal, translator }
    }

    /// Renders the given clock time. Seconds and finer are ignored.
    pub fn format(&self, time: Time) -> String {
        let minute = time.minute();
        let hour =
            if minute > 30 { (time.hour() + 1) % 24 } else { time.hour() };
        if self.formal {
            self.formal_time(hour, minute)
        } else {
            self.informal_time(hour, minute)
        }
    }

    fn hour_word(&self, hour: i8) -> String {
        let (context, word) = HOURS[hour as usize];
        self.translator.phrase_in(context, word).to_string()
    }

    fn minute_word(&self, minute: i8) -> String {
        let (context, word) = MINUTES[minute as usize];
        self.translator.phrase_in(context, word).to_string()
    }

    fn formal_time(&self, hour: i8, minute: i8) -> String {
        let tr = self.translator;
        let hour_count = self.hour_word(hour);
        let count = hour.unsigned_abs().into();
        if minute == 0 {
            return i18n::plural(
                tr,
                "{hour_count} o'clock",
                "{hour_count} o'clock",
                count,
                &[("hour_count", &hour_count)],
            );
        }
        let (minutes, singular, plural) = if minute > 30 {
            (
                60 - minute,
                "{minute_translation} to {hour_count} hour",
                "{minute_translation} to {hour_count} hours",
            )
        } else {
            (
                minute,
                "{minute_translation} past {hour_count}",
                "{minute_translation} past {hour_count}",
            )
        };
        let minute_translation = i18n::plural(
            tr,
            "{amount} minute",
            "{amount} minutes",
            minutes.unsigned_abs().into(),
            &[("amount", &self.minute_word(minutes))],
        );
        i18n::plural(tr, singular, plural, count, &[
            ("minute_translation", &minute_translation),
            ("hour_count", &hour_count),
        ])
    }

    fn informal_time(&self, hour: i8, minute: i8) -> String {
        let tr = self.translator;
        let hour_count = match hour {
            0 => i18n::word(tr, "midnight"),
            12 => i18n::word(tr, "noon"),
            13..=23 => self.hour_word(hour - 12),
            _ => self.hour_word(hour),
        };
        let clock = match minute {
            0 => hour_count,
            31..=59 => {
                let reversed_minute_count = if minute == 45 {
                    i18n::word(tr, "a quarter")
                } else {
                    self.minute_word(60 - minute)
                };
                let args: &[(&str, &dyn core::fmt::Display)] = &[
                    ("reversed_minute_count", &reversed_minute_count),
                    ("hour_count", &hour_count),
                ];
                match hour {
                    0 => i18n::phrase(
                        tr,
                        "{reversed_minute_count} to midnight",
                        args,
                    ),
                    12 => i18n::phrase(
                        tr,
                        "{reversed_minute_count} to noon",
                        args,
                    ),
                    _ => i18n::plural(
                        tr,
                        "{reversed_minute_count} to {hour_count}",
                        "{reversed_minute_count} to {hour_count}",
                        hour.unsigned_abs().into(),
                        args,
                    ),
                }
            }
            30 => i18n::phrase(tr, "half past {hour_count}", &[(
                "hour_count",
                &hour_count,
            )]),
            15 => i18n::phrase(tr, "a quarter past {hour_count}", &[(
                "hour_count",
                &hour_count,
            )]),
            _ => i18n::phrase(tr, "{hour_count} and {minute_count}", &[
                ("hour_count", &hour_count),
                ("minute_count", &self.minute_word(minute)),
            ]),
        };
        let period = time_of_day(hour);
        if period.is_empty() {
            return clock;
        }
        i18n::phrase(tr, "{clock} in the {period}", &[
            ("clock", &clock),
            ("period", &tr.phrase(period)),
        ])
    }
}

impl Default for Timing<'static> {
    fn default() -> Timing<'static> {
        Timing::new()
    }
}

/// A configuration for rendering dates relative to a particular day.
///
/// # Example
///
/// ```
/// use humanity::Calendar;
/// use jiff::civil::date;
///
/// let cal = Calendar::new(date(2024, 3, 10));
/// assert_eq!(cal.day(date(2024, 3, 11))?, "tomorrow");
/// assert_eq!(cal.day(date(2024, 3, 5))?, "Mar 05");
/// assert_eq!(cal.date(date(2023, 3, 5))?, "Mar 05 2023");
/// assert_eq!(cal.year(date(2023, 12, 31)), "last year");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Calendar<'t> {
    today: Date,
    translator: &'t dyn Translator,
}

impl Calendar<'static> {
    /// Creates a calendar relative to the given day.
    pub fn new(today: Date) -> Calendar<'static> {
        Calendar { today, translator: &ENGLISH }
    }

    /// Creates a calendar relative to the current day in the system time
    /// zone.
    #[cfg(feature = "std")]
    pub fn today() -> Calendar<'static> {
        Calendar::new(jiff::Zoned::now().date())
    }
}

impl<'t> Calendar<'t> {
    /// Sets the translator used to produce phrases.
    pub fn translator<'a>(
        self,
        translator: &'a dyn Translator,
    ) -> Calendar<'a> {
        Calendar { today: self.today, translator }
    }

    /// Returns `"today"`, `"tomorrow"` or `"yesterday"` for dates within a
    /// day of today. Other dates are formatted as `"%b %d"` (e.g.,
    /// `"Mar 05"`).
    ///
    /// # Errors
    ///
    /// This never fails with the default format, but returns an error for
    /// the same reasons as [`Calendar::day_with_format`].
    pub fn day(&self, date: Date) -> Result<String, Error> {
        self.day_with_format(date, "%b %d")
    }

    /// Like [`Calendar::day`], but formats dates more than a day away from
    /// today using the given `strftime` style format string.
    ///
    /// # Errors
    ///
    /// This returns an error when `format` is invalid or refers to fields
    /// that a date does not have (like the hour).
    ///
    /// ```
    /// use humanity::Calendar;
    /// use jiff::civil::date;
    ///
    /// let cal = Calendar::new(date(2024, 3, 10));
    /// let ymd = "%Y-%m-%d";
    /// assert_eq!(cal.day_with_format(date(2024, 3, 9), ymd)?, "yesterday");
    /// assert_eq!(cal.day_with_format(date(2024, 3, 1), ymd)?, "2024-03-01");
    /// assert!(cal.day_with_format(date(2024, 3, 1), "%H").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn day_with_format(
        &self,
        date: Date,
        format: &str,
    ) -> Result<String, Error> {
        let tr = self.translator;
        Ok(match self.days_from_today(date) {
            0 => i18n::word(tr, "today"),
            1 => i18n::word(tr, "tomorrow"),
            -1 => i18n::word(tr, "yesterday"),
            _ => jiff::fmt::strtime::format(format, date)
                .context(OptionError::DateFormat)?,
        })
    }

    /// Like [`Calendar::day`], but includes the year for dates that are at
    /// least five months (`5 * 365 / 12` days) away from today.
    ///
    /// # Errors
    ///
    /// This never fails in practice. An error is only possible if the
    /// underlying date formatter fails.
    pub fn date(&self, date: Date) -> Result<String, Error> {
        let days = self.days_from_today(date).unsigned_abs();
        if days as f64 >= 5.0 * 365.0 / 12.0 {
            self.day_with_format(date, "%b %d %Y")
        } else {
            self.day(date)
        }
    }

    /// Returns `"this year"`, `"next year"` or `"last year"` for dates
    /// within a year of today's year. Other dates render as their year.
    pub fn year(&self, date: Date) -> String {
        let tr = self.translator;
        match i32::from(date.year()) - i32::from(self.today.year()) {
            0 => i18n::word(tr, "this year"),
            1 => i18n::word(tr, "next year"),
            -1 => i18n::word(tr, "last year"),
            _ => date.year().to_string(),
        }
    }

    fn days_from_today(&self, date: Date) -> i64 {
        date.duration_since(self.today).as_secs() / 86_400
    }
}

#[cfg(test)]
mod tests {
    use jiff::{
        civil::{date, time},
        SignedDuration,
    };

    use super::*;

    #[test]
    fn time_delta_seconds() {
        let td = TimeDelta::new();
        let cases = [
            (0, "a moment"),
            (1, "a second"),
            (30, "30 seconds"),
            (59, "59 seconds"),
            (60, "a minute"),
            (119, "a minute"),
            (120, "2 minutes"),
            (3_599, "59 minutes"),
            (3_600, "an hour"),
            (7_199, "an hour"),
            (7_200, "2 hours"),
            (86_399, "23 hours"),
            (-30, "30 seconds"),
        ];
        for (secs, expected) in cases {
            assert_eq!(td.format(Delta::from_secs(secs)).unwrap(), expected);
        }
    }

    #[test]
    fn time_delta_days() {
        let td = TimeDelta::new();
        let cases = [
            (1, "a day"),
            (2, "2 days"),
            (30, "30 days"),
            (31, "a month"),
            (61, "2 months"),
            (364, "11 months"),
            (365, "a year"),
            (366, "1 year, 1 day"),
            (380, "1 year, 15 days"),
            (400, "1 year, 1 month"),
            (500, "1 year, 4 months"),
            (730, "2 years"),
            (10_000, "27 years"),
        ];
        for (days, expected) in cases {
            assert_eq!(td.format(Delta::new(days, 0, 0)).unwrap(), expected);
        }

        let td = TimeDelta::new().use_months(false);
        assert_eq!(td.format(Delta::new(61, 0, 0)).unwrap(), "61 days");
        assert_eq!(
            td.format(Delta::new(500, 0, 0)).unwrap(),
            "1 year, 135 days",
        );
        assert_eq!(td.format(Delta::new(365, 0, 0)).unwrap(), "a year");
    }

    #[test]
    fn time_delta_sub_second() {
        let ms = TimeDelta::new().minimum_unit(Unit::Millisecond);
        assert_eq!(ms.format(Delta::new(0, 0, 4)).unwrap(), "0 milliseconds");
        assert_eq!(
            ms.format(Delta::new(0, 0, 1_000)).unwrap(),
            "1 millisecond",
        );
        assert_eq!(
            ms.format(Delta::new(0, 0, 101_943)).unwrap(),
            "101 milliseconds",
        );
        assert_eq!(ms.format(Delta::new(0, 1, 101_943)).unwrap(), "a second");

        let us = TimeDelta::new().minimum_unit(Unit::Microsecond);
        assert_eq!(us.format(Delta::new(0, 0, 4)).unwrap(), "4 microseconds");
        assert_eq!(us.format(Delta::new(0, 0, 1)).unwrap(), "1 microsecond");
        assert_eq!(
            us.format(Delta::new(0, 0, 1_101)).unwrap(),
            "1 millisecond",
        );

        let s = TimeDelta::new();
        assert_eq!(s.format(Delta::new(0, 0, 999_999)).unwrap(), "a moment");
    }

    #[test]
    fn time_delta_unsupported_minimum() {
        for unit in [Unit::Minute, Unit::Hour, Unit::Day, Unit::Year] {
            let td = TimeDelta::new().minimum_unit(unit);
            assert!(td.format(Delta::from_secs(5)).is_err());
        }
        let err = TimeDelta::new()
            .minimum_unit(Unit::Hour)
            .format(Delta::from_secs(5))
            .unwrap_err();
        assert!(err.is_invalid_parameter());
        insta::assert_snapshot!(
            err,
            @"minimum unit 'hours' is not supported (must use seconds, milliseconds or microseconds)",
        );
    }

    #[test]
    fn natural_time() {
        let nt = NaturalTime::new();
        assert_eq!(
            nt.format_delta(Delta::from_secs(1), false).unwrap(),
            "a second ago",
        );
        assert_eq!(
            nt.format_delta(Delta::new(500, 0, 0), true).unwrap(),
            "1 year, 4 months from now",
        );
        assert_eq!(
            nt.format_delta(Delta::new(0, 0, 500), true).unwrap(),
            "now",
        );

        let nt = NaturalTime::new().minimum_unit(Unit::Millisecond);
        assert_eq!(
            nt.format_delta(Delta::new(0, 0, 4), false).unwrap(),
            "0 milliseconds ago",
        );

        let nt = NaturalTime::new();
        assert_eq!(
            nt.format_signed(SignedDuration::from_secs(3_600 * 30)).unwrap(),
            "a day ago",
        );
        assert_eq!(
            nt.format_signed(SignedDuration::from_secs(-90)).unwrap(),
            "a minute from now",
        );

        let now = date(2024, 3, 10).at(12, 0, 0, 0);
        assert_eq!(
            nt.format_datetime(date(2024, 3, 10).at(11, 59, 30, 0), now)
                .unwrap(),
            "30 seconds ago",
        );
        assert_eq!(
            nt.format_datetime(date(2026, 3, 10).at(12, 0, 0, 0), now)
                .unwrap(),
            "2 years from now",
        );
        assert_eq!(nt.format_datetime(now, now).unwrap(), "now");
    }

    #[test]
    fn time_of_day_boundaries() {
        assert_eq!(time_of_day(0), "");
        assert_eq!(time_of_day(1), "morning");
        assert_eq!(time_of_day(11), "morning");
        assert_eq!(time_of_day(12), "");
        assert_eq!(time_of_day(13), "afternoon");
        assert_eq!(time_of_day(18), "afternoon");
        assert_eq!(time_of_day(19), "evening");
        assert_eq!(time_of_day(23), "evening");
        assert_eq!(time_of_day(24), "");
        assert_eq!(time_of_day(-1), "");
    }

    #[test]
    fn timing_formal() {
        let t = Timing::new();
        assert_eq!(t.format(time(0, 30, 0, 0)), "thirty minutes past zero");
        assert_eq!(t.format(time(6, 59, 0, 0)), "one minute to seven hours");
        assert_eq!(t.format(time(9, 0, 0, 0)), "nine o'clock");
        assert_eq!(t.format(time(13, 1, 0, 0)), "one minute past one");
        assert_eq!(
            t.format(time(23, 45, 0, 0)),
            "fifteen minutes to zero hours",
        );
        assert_eq!(
            t.format(time(0, 31, 0, 0)),
            "twenty nine minutes to one hour",
        );
    }

    #[test]
    fn timing_informal() {
        let t = Timing::new().formal(false);
        let cases = [
            (time(0, 30, 0, 0), "half past midnight"),
            (time(0, 0, 0, 0), "midnight"),
            (time(12, 0, 0, 0), "noon"),
            (time(6, 35, 0, 0), "twenty five to seven in the morning"),
            (time(13, 1, 0, 0), "one and one in the afternoon"),
            (time(10, 45, 0, 0), "a quarter to eleven in the morning"),
            (time(11, 55, 0, 0), "five to noon"),
            (time(12, 15, 0, 0), "a quarter past noon"),
            (time(23, 40, 0, 0), "twenty to midnight"),
            (time(19, 15, 0, 0), "a quarter past seven in the evening"),
            (time(18, 30, 59, 0), "half past six in the afternoon"),
        ];
        for (time, expected) in cases {
            assert_eq!(t.format(time), expected, "{time}");
        }
    }

    #[test]
    fn calendar() {
        let cal = Calendar::new(date(2024, 3, 10));
        assert_eq!(cal.day(date(2024, 3, 10)).unwrap(), "today");
        assert_eq!(cal.day(date(2024, 3, 11)).unwrap(), "tomorrow");
        assert_eq!(cal.day(date(2024, 3, 9)).unwrap(), "yesterday");
        assert_eq!(cal.day(date(2024, 3, 12)).unwrap(), "Mar 12");
        assert_eq!(cal.day(date(2024, 3, 1)).unwrap(), "Mar 01");

        assert_eq!(cal.date(date(2024, 3, 9)).unwrap(), "yesterday");
        assert_eq!(cal.date(date(2024, 7, 1)).unwrap(), "Jul 01");
        assert_eq!(cal.date(date(2024, 9, 1)).unwrap(), "Sep 01 2024");
        assert_eq!(cal.date(date(2023, 3, 10)).unwrap(), "Mar 10 2023");

        assert_eq!(cal.year(date(2024, 1, 1)), "this year");
        assert_eq!(cal.year(date(2025, 6, 1)), "next year");
        assert_eq!(cal.year(date(2023, 12, 31)), "last year");
        assert_eq!(cal.year(date(2020, 1, 1)), "2020");
    }

    #[test]
    fn calendar_bad_format() {
        let cal = Calendar::new(date(2024, 3, 10));
        let err = cal.day_with_format(date(2024, 1, 1), "%H:%M").unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(err.to_string().starts_with("failed to format date: "));
    }
}
