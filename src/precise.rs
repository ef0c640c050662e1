/*!
Precise rendering of durations across every unit on the ladder.

This is the engine behind [`precise_delta`] and [`PreciseDelta`]. Rendering
happens in two phases:

1. **Redistribution.** A [`Delta`] is split into a magnitude for each of the
eight units, honoring a minimum unit and a set of suppressed units. The
result is a [`Magnitudes`] value.
2. **Rendering.** The magnitudes are turned into phrases like `"2 days"`,
and the phrases are joined into a single sentence.

# Redistribution rules

The minimum unit is the finest unit that appears in the output. Everything
finer than it is folded into it as a fraction, which is then rendered with
the configured [`NumberFormat`]. A suppressed unit never appears in the
output: its magnitude is carried into the next finer unit instead. When the
minimum unit is itself suppressed, the next coarser unit that isn't
suppressed becomes the minimum unit.

Years are always 365 days and months are always 30.5 days.

Precision finer than the minimum unit is only partially folded into it.
When the minimum unit is coarser than seconds, sub-second precision is
discarded. When the minimum unit is months or years, the time within the
last day is discarded as well.
*/

use alloc::{string::String, vec::Vec};

use crate::{
    delta::Delta,
    error::{Error, ErrorContext, OptionError},
    fmt::NumberFormat,
    i18n::{self, Translator, ENGLISH},
    unit::{Unit, UnitSet},
};

#[cfg(not(feature = "std"))]
use crate::util::libm::Float;

/// Renders a duration precisely using string based configuration.
///
/// This is a convenience routine for [`PreciseDelta`] that accepts the
/// minimum unit, the suppressed units and the number format as strings.
/// Unit names are the case insensitive plural identifiers of [`Unit`]
/// (e.g., `"seconds"`). The number format grammar is documented in the
/// [`fmt`](crate::fmt) module. Output is in English.
///
/// # Errors
///
/// This returns an error when a unit name isn't recognized, when the number
/// format is invalid or when the minimum unit is suppressed and no coarser
/// unit is available to replace it.
///
/// # Example
///
/// ```
/// use humanity::{precise_delta, Delta};
///
/// let delta = Delta::new(2, 3_633, 123_000);
/// assert_eq!(
///     precise_delta(delta, "seconds", &[], ".2f")?,
///     "2 days, 1 hour and 33.12 seconds",
/// );
/// assert_eq!(
///     precise_delta(delta, "microseconds", &[], ".2f")?,
///     "2 days, 1 hour, 33 seconds and 123 milliseconds",
/// );
/// assert_eq!(
///     precise_delta(delta, "seconds", &["days"], ".2f")?,
///     "49 hours and 33.12 seconds",
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn precise_delta(
    delta: Delta,
    minimum_unit: &str,
    suppress: &[&str],
    format: &str,
) -> Result<String, Error> {
    let minimum = minimum_unit
        .parse::<Unit>()
        .context(OptionError::MinimumUnit)?;
    let suppress =
        UnitSet::parse(suppress.iter()).context(OptionError::Suppress)?;
    let format =
        format.parse::<NumberFormat>().context(OptionError::Format)?;
    PreciseDelta::new()
        .minimum_unit(minimum)
        .suppress(suppress)
        .number_format(format)
        .format(delta)
}

/// A configuration for rendering durations precisely.
///
/// This is a simple builder. The defaults are a minimum unit of seconds, no
/// suppressed units, two decimal places for a fractional minimum unit and
/// English output.
///
/// # Example
///
/// ```
/// use humanity::{fmt::NumberFormat, Delta, PreciseDelta, Unit, UnitSet};
///
/// let delta = Delta::new(5, 16_200, 0);
///
/// let pd = PreciseDelta::new().minimum_unit(Unit::Hour);
/// assert_eq!(pd.format(delta)?, "5 days and 4.50 hours");
///
/// let pd = PreciseDelta::new()
///     .minimum_unit(Unit::Day)
///     .number_format(NumberFormat::fixed(1));
/// assert_eq!(pd.format(delta)?, "5.2 days");
///
/// let pd = PreciseDelta::new().suppress(UnitSet::from(Unit::Day));
/// assert_eq!(pd.format(delta)?, "124 hours and 30 minutes");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PreciseDelta<'t> {
    minimum: Unit,
    suppress: UnitSet,
    format: NumberFormat,
    translator: &'t dyn Translator,
}

impl PreciseDelta<'static> {
    /// Creates a new configuration with the default settings.
    pub fn new() -> PreciseDelta<'static> {
        PreciseDelta {
            minimum: Unit::Second,
            suppress: UnitSet::empty(),
            format: NumberFormat::fixed(2),
            translator: &ENGLISH,
        }
    }
}

impl<'t> PreciseDelta<'t> {
    /// Sets the finest unit that may appear in the output.
    ///
    /// The default is [`Unit::Second`].
    pub fn minimum_unit(self, unit: Unit) -> PreciseDelta<'t> {
        PreciseDelta { minimum: unit, ..self }
    }

    /// Sets the units that should never appear in the output.
    ///
    /// The magnitude of a suppressed unit is carried into the next finer
    /// unit. The default is the empty set.
    pub fn suppress(self, units: UnitSet) -> PreciseDelta<'t> {
        PreciseDelta { suppress: units, ..self }
    }

    /// Sets the format used when the minimum unit has a fractional
    /// magnitude.
    ///
    /// The default is two decimal places.
    pub fn number_format(self, format: NumberFormat) -> PreciseDelta<'t> {
        PreciseDelta { format, ..self }
    }

    /// Sets the translator used to produce phrases.
    ///
    /// The default is [`English`](crate::i18n::English).
    pub fn translator<'a>(
        self,
        translator: &'a dyn Translator,
    ) -> PreciseDelta<'a> {
        PreciseDelta {
            minimum: self.minimum,
            suppress: self.suppress,
            format: self.format,
            translator,
        }
    }

    /// Renders the given duration.
    ///
    /// # Errors
    ///
    /// This returns an error when the minimum unit is suppressed and no
    /// coarser unit is available to replace it.
    pub fn format(&self, delta: Delta) -> Result<String, Error> {
        let magnitudes = self.redistribute(delta)?;
        Ok(self.render(&magnitudes))
    }

    /// Splits the given duration into a magnitude for every unit.
    ///
    /// Every unit coarser than the minimum unit gets a whole number
    /// magnitude (with the exception of days, which may be a multiple of
    /// `0.5` after whole months are removed). The minimum unit may be
    /// fractional. Every unit finer than the minimum unit, along with every
    /// suppressed unit, is zero.
    ///
    /// # Errors
    ///
    /// This returns an error when the minimum unit is suppressed and no
    /// coarser unit is available to replace it.
    ///
    /// # Example
    ///
    /// ```
    /// use humanity::{Delta, PreciseDelta, Unit, UnitSet};
    ///
    /// let m = PreciseDelta::new()
    ///     .suppress(UnitSet::from(Unit::Day))
    ///     .redistribute(Delta::new(2, 14_400, 0))?;
    /// assert_eq!(m.get(Unit::Day), 0.0);
    /// assert_eq!(m.get(Unit::Hour), 52.0);
    /// assert_eq!(m.total_seconds(), 187_200.0);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn redistribute(&self, delta: Delta) -> Result<Magnitudes, Error> {
        let minimum = match self.suppress.resolve_minimum(self.minimum) {
            Ok(minimum) => minimum,
            Err(err) => {
                debug!(
                    "rejected minimum unit {} with suppressed units {:?}",
                    self.minimum,
                    self.suppress,
                );
                return Err(err);
            }
        };
        let ladder = Ladder {
            minimum,
            suppressed: self.suppress.with_finer_than(minimum),
        };
        trace!(
            "redistributing {:?} with minimum unit {} (requested {}) \
             and suppressed units {:?}",
            delta,
            ladder.minimum,
            self.minimum,
            ladder.suppressed,
        );
        let magnitudes = ladder.redistribute(delta);
        trace!("redistributed {:?} into {:?}", delta, magnitudes);
        Ok(magnitudes)
    }

    fn render(&self, magnitudes: &Magnitudes) -> String {
        let tr = self.translator;
        let minimum = magnitudes.minimum();

        let mut texts: Vec<String> = Vec::with_capacity(Unit::ALL.len());
        for unit in Unit::ALL.into_iter().rev() {
            let amount = magnitudes.get(unit);
            if amount > 0.0 || (texts.is_empty() && unit == minimum) {
                let (singular, plural) = templates(unit);
                let count = plural_count(amount);
                let text = if unit == minimum && amount.fract() > 0.0 {
                    let amount = self.format.display(amount);
                    i18n::plural(tr, singular, plural, count, &[(
                        "amount", &amount,
                    )])
                } else {
                    let amount = amount as u64;
                    i18n::plural(tr, singular, plural, count, &[(
                        "amount", &amount,
                    )])
                };
                texts.push(text);
            }
            if unit == minimum {
                break;
            }
        }

        let Some(tail) = texts.pop() else { return String::new() };
        if texts.is_empty() {
            return tail;
        }
        let head = texts.join(", ");
        i18n::phrase(tr, "{head} and {tail}", &[
            ("head", &head),
            ("tail", &tail),
        ])
    }
}

impl Default for PreciseDelta<'static> {
    fn default() -> PreciseDelta<'static> {
        PreciseDelta::new()
    }
}

/// The magnitude of every unit after redistributing a duration.
///
/// This is returned by [`PreciseDelta::redistribute`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Magnitudes {
    minimum: Unit,
    /// Indexed by unit rank.
    values: [f64; 8],
}

impl Magnitudes {
    /// Returns the magnitude of the given unit.
    pub fn get(&self, unit: Unit) -> f64 {
        self.values[unit.rank()]
    }

    /// Returns the minimum unit that was actually used.
    ///
    /// This differs from the requested minimum unit when the requested one
    /// was suppressed.
    pub fn minimum(&self) -> Unit {
        self.minimum
    }

    /// Returns each unit and its magnitude, from coarsest to finest.
    pub fn iter(&self) -> impl Iterator<Item = (Unit, f64)> + '_ {
        Unit::ALL.into_iter().rev().map(|unit| (unit, self.get(unit)))
    }

    /// Returns the total duration represented by these magnitudes, in
    /// seconds.
    pub fn total_seconds(&self) -> f64 {
        self.total_micros() / 1e6
    }

    /// Returns the total duration in microseconds.
    ///
    /// Every unit's length is a whole number of microseconds, so this is
    /// exact whenever the magnitudes are whole (or half days) and the total
    /// is below `2^53`.
    pub(crate) fn total_micros(&self) -> f64 {
        Unit::ALL
            .into_iter()
            .map(|unit| self.get(unit) * unit.microseconds())
            .sum()
    }
}

/// The count used to select between singular and plural templates for a
/// magnitude.
///
/// Magnitudes greater than one round up and magnitudes less than one round
/// down, so `1.2` selects the same form as `2` and `0.5` the same form as
/// `0`. Only a magnitude of exactly one selects the singular form in
/// English.
///
/// ```
/// use humanity::precise::plural_count;
///
/// assert_eq!(plural_count(1.0), 1);
/// assert_eq!(plural_count(1.2), 2);
/// assert_eq!(plural_count(0.5), 0);
/// assert_eq!(plural_count(0.0), 0);
/// assert_eq!(plural_count(33.0), 33);
/// ```
pub fn plural_count(magnitude: f64) -> u64 {
    if magnitude > 1.0 {
        magnitude.ceil() as u64
    } else if magnitude < 1.0 {
        magnitude.floor() as u64
    } else {
        1
    }
}

fn templates(unit: Unit) -> (&'static str, &'static str) {
    match unit {
        Unit::Year => ("{amount} year", "{amount} years"),
        Unit::Month => ("{amount} month", "{amount} months"),
        Unit::Day => ("{amount} day", "{amount} days"),
        Unit::Hour => ("{amount} hour", "{amount} hours"),
        Unit::Minute => ("{amount} minute", "{amount} minutes"),
        Unit::Second => ("{amount} second", "{amount} seconds"),
        Unit::Millisecond => ("{amount} millisecond", "{amount} milliseconds"),
        Unit::Microsecond => ("{amount} microsecond", "{amount} microseconds"),
    }
}

/// A resolved minimum unit paired with the full set of suppressed units.
///
/// The suppressed set always contains every unit finer than the minimum
/// unit, and never contains the minimum unit itself.
#[derive(Clone, Copy, Debug)]
struct Ladder {
    minimum: Unit,
    suppressed: UnitSet,
}

impl Ladder {
    fn redistribute(&self, delta: Delta) -> Magnitudes {
        let days = delta.days() as f64;
        let secs = f64::from(delta.seconds());
        let usecs = f64::from(delta.microseconds());

        let (years, days) = self.divide(days, 365.0, Unit::Year);
        let (months, days) = self.divide(days, 30.5, Unit::Month);
        let (days, secs) = self.carry(days, secs, 86_400.0, Unit::Day);
        let (hours, secs) = self.divide(secs, 3_600.0, Unit::Hour);
        let (minutes, secs) = self.divide(secs, 60.0, Unit::Minute);
        let (secs, usecs) = self.carry(secs, usecs, 1e6, Unit::Second);
        let (msecs, usecs) = self.divide(usecs, 1_000.0, Unit::Millisecond);
        let (usecs, _) = self.carry(usecs, 0.0, 1.0, Unit::Microsecond);

        Magnitudes {
            minimum: self.minimum,
            values: [usecs, msecs, secs, minutes, hours, days, months, years],
        }
    }

    /// Splits `value` into a quotient of `unit` and a remainder in the next
    /// finer unit.
    fn divide(&self, value: f64, divisor: f64, unit: Unit) -> (f64, f64) {
        if unit == self.minimum {
            (value / divisor, 0.0)
        } else if self.suppressed.contains(unit) {
            (0.0, value)
        } else {
            floor_divmod(value, divisor)
        }
    }

    /// Merges `coarse` (in `unit`) and `fine` (in the next finer unit, with
    /// `ratio` of them per `unit`) when `unit` is the minimum unit or is
    /// suppressed.
    fn carry(
        &self,
        coarse: f64,
        fine: f64,
        ratio: f64,
        unit: Unit,
    ) -> (f64, f64) {
        if unit == self.minimum {
            (coarse + fine / ratio, 0.0)
        } else if self.suppressed.contains(unit) {
            (0.0, fine + coarse * ratio)
        } else {
            (coarse, fine)
        }
    }
}

/// Floored division of non-negative floats, returning the whole quotient
/// and the remainder.
///
/// The remainder is computed exactly. The quotient is nudged up when the
/// division of the remainder-free dividend lands just below a whole number.
fn floor_divmod(value: f64, divisor: f64) -> (f64, f64) {
    let rem = value % divisor;
    let div = (value - rem) / divisor;
    let mut quotient = div.floor();
    if div - quotient > 0.5 {
        quotient += 1.0;
    }
    (quotient, rem)
}
