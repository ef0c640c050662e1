use crate::error::{delta::Error as E, Error};

#[cfg(not(feature = "std"))]
use crate::util::libm::Float;

const SECONDS_PER_DAY: i64 = 86_400;
const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_DAY: i128 =
    SECONDS_PER_DAY as i128 * MICROS_PER_SECOND as i128;

/// A non-negative amount of elapsed time.
///
/// A `Delta` is stored as whole days, whole seconds within a day
/// (`0..=86_399`) and whole microseconds within a second (`0..=999_999`).
/// Every constructor normalizes its input into that representation, and
/// every constructor takes the absolute value of signed inputs. The sign of
/// an elapsed time (past versus future) is tracked separately by the
/// routines that care about it, e.g., [`NaturalTime`](crate::NaturalTime).
///
/// A `Delta` is cheap to copy and never mutated in place.
///
/// # Example
///
/// ```
/// use humanity::Delta;
///
/// let delta = Delta::new(2, 3_633, 123_000);
/// assert_eq!(delta.days(), 2);
/// assert_eq!(delta.seconds(), 3_633);
/// assert_eq!(delta.microseconds(), 123_000);
///
/// // Overflowing components are carried.
/// let delta = Delta::new(0, 90_000, 1_500_000);
/// assert_eq!(delta, Delta::new(1, 3_601, 500_000));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Delta {
    days: i64,
    seconds: i32,
    microseconds: i32,
}

impl Delta {
    /// A delta of no time at all.
    pub const ZERO: Delta = Delta { days: 0, seconds: 0, microseconds: 0 };

    /// Creates a new delta from days, seconds and microseconds.
    ///
    /// The components are summed, so they need not be individually in
    /// range. The absolute value of the total is used.
    ///
    /// # Panics
    ///
    /// When the total number of days overflows an `i64`. This requires a
    /// total on the order of `10^19` days.
    pub fn new(days: i64, seconds: i64, microseconds: i64) -> Delta {
        let total = i128::from(days) * MICROS_PER_DAY
            + i128::from(seconds) * i128::from(MICROS_PER_SECOND)
            + i128::from(microseconds);
        Delta::from_micros(total)
    }

    /// Creates a new delta from a total number of microseconds.
    ///
    /// The absolute value of `micros` is used.
    ///
    /// # Panics
    ///
    /// When the total number of days overflows an `i64`.
    pub fn from_micros(micros: i128) -> Delta {
        Delta::try_from_micros(micros)
            .expect("number of days in delta overflows i64")
    }

    fn try_from_micros(micros: i128) -> Option<Delta> {
        let micros = micros.unsigned_abs();
        let days = i64::try_from(micros / MICROS_PER_DAY as u128).ok()?;
        let rem = (micros % MICROS_PER_DAY as u128) as i64;
        Some(Delta {
            days,
            seconds: (rem / MICROS_PER_SECOND) as i32,
            microseconds: (rem % MICROS_PER_SECOND) as i32,
        })
    }

    /// Creates a new delta from a number of seconds.
    ///
    /// The absolute value of `seconds` is used.
    ///
    /// ```
    /// use humanity::Delta;
    ///
    /// assert_eq!(Delta::from_secs(-90_061), Delta::new(1, 3_661, 0));
    /// ```
    pub fn from_secs(seconds: i64) -> Delta {
        Delta::new(0, seconds, 0)
    }

    /// Creates a new delta from a fractional number of seconds.
    ///
    /// The absolute value of `seconds` is used, and the result is rounded to
    /// the nearest microsecond (with ties going to the even microsecond).
    /// Non-finite values are treated as zero.
    ///
    /// # Panics
    ///
    /// When the number of days in the result overflows an `i64`. This
    /// happens for magnitudes of roughly `8 * 10^23` seconds or more. Use
    /// [`Delta::try_from_secs_f64`] to handle such values without panicking.
    ///
    /// ```
    /// use humanity::Delta;
    ///
    /// assert_eq!(Delta::from_secs_f64(1.337), Delta::new(0, 1, 337_000));
    /// assert_eq!(Delta::from_secs_f64(-0.000_001), Delta::new(0, 0, 1));
    /// ```
    pub fn from_secs_f64(seconds: f64) -> Delta {
        Delta::try_from_secs_f64(seconds)
            .expect("number of days in delta overflows i64")
    }

    /// Creates a new delta from a fractional number of seconds, returning
    /// an error when the result is too big for a delta.
    ///
    /// This otherwise behaves exactly like [`Delta::from_secs_f64`].
    ///
    /// # Errors
    ///
    /// When the number of days in the result overflows an `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use humanity::Delta;
    ///
    /// let delta = Delta::try_from_secs_f64(-90.5)?;
    /// assert_eq!(delta, Delta::new(0, 90, 500_000));
    /// assert!(Delta::try_from_secs_f64(f64::MAX).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_from_secs_f64(seconds: f64) -> Result<Delta, Error> {
        if !seconds.is_finite() {
            return Ok(Delta::ZERO);
        }
        let abs = seconds.abs();
        let whole = abs.trunc();
        // Anything at or past this bound has more than `i64::MAX` days.
        if whole >= (i64::MAX as f64) * (SECONDS_PER_DAY as f64) {
            return Err(Error::from(E::SecondsOutOfRange { seconds }));
        }
        let micros = (abs.fract() * 1e6).round_ties_even();
        Delta::try_from_micros(
            (whole as i128) * i128::from(MICROS_PER_SECOND) + micros as i128,
        )
        .ok_or_else(|| Error::from(E::SecondsOutOfRange { seconds }))
    }

    /// Returns the number of whole days in this delta.
    pub fn days(&self) -> i64 {
        self.days
    }

    /// Returns the number of whole seconds in this delta after removing
    /// whole days. This is always in the range `0..=86_399`.
    pub fn seconds(&self) -> i32 {
        self.seconds
    }

    /// Returns the number of microseconds in this delta after removing
    /// whole seconds. This is always in the range `0..=999_999`.
    pub fn microseconds(&self) -> i32 {
        self.microseconds
    }

    /// Returns the total number of microseconds in this delta.
    pub fn as_micros(&self) -> i128 {
        i128::from(self.days) * MICROS_PER_DAY
            + i128::from(self.seconds) * i128::from(MICROS_PER_SECOND)
            + i128::from(self.microseconds)
    }

    /// Returns the total number of seconds in this delta as a float.
    pub fn as_secs_f64(&self) -> f64 {
        (self.days as f64) * (SECONDS_PER_DAY as f64)
            + f64::from(self.seconds)
            + f64::from(self.microseconds) / 1e6
    }

    /// Returns true when this delta is zero.
    pub fn is_zero(&self) -> bool {
        *self == Delta::ZERO
    }
}

impl From<core::time::Duration> for Delta {
    /// Converts a standard library duration, truncating nanoseconds to
    /// microsecond precision.
    fn from(duration: core::time::Duration) -> Delta {
        Delta::from_micros(duration.as_micros() as i128)
    }
}

impl From<jiff::SignedDuration> for Delta {
    /// Converts the absolute value of a signed duration, truncating
    /// nanoseconds to microsecond precision.
    fn from(duration: jiff::SignedDuration) -> Delta {
        Delta::from_micros(duration.as_micros())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Delta {
    fn arbitrary(g: &mut quickcheck::Gen) -> Delta {
        use quickcheck::Arbitrary;

        // Kept under ~270 years so that totals in microseconds stay exactly
        // representable as an `f64`.
        let days = i64::from(u32::arbitrary(g) % 100_000);
        let seconds = i64::from(u32::arbitrary(g) % 86_400);
        let micros = i64::from(u32::arbitrary(g) % 1_000_000);
        Delta::new(days, seconds, micros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes() {
        let delta = Delta::new(0, 86_400 * 3 + 5, 2_000_001);
        assert_eq!(
            (delta.days(), delta.seconds(), delta.microseconds()),
            (3, 7, 1),
        );

        let delta = Delta::new(-2, 0, 0);
        assert_eq!(delta, Delta::new(2, 0, 0));

        // The total is negated, not each component.
        let delta = Delta::new(-1, 3_600, 0);
        assert_eq!(delta, Delta::new(0, 82_800, 0));
    }

    #[test]
    fn from_secs_f64() {
        assert_eq!(Delta::from_secs_f64(0.1), Delta::new(0, 0, 100_000));
        assert_eq!(
            Delta::from_secs_f64(101_943e-6),
            Delta::new(0, 0, 101_943),
        );
        assert_eq!(
            Delta::from_secs_f64(365.25 * 86_400.0 + 4e-6),
            Delta::new(365, 21_600, 4),
        );
        assert_eq!(Delta::from_secs_f64(f64::NAN), Delta::ZERO);
        assert_eq!(Delta::from_secs_f64(0.000_000_5), Delta::ZERO);
        assert_eq!(Delta::from_secs_f64(0.000_001_5), Delta::new(0, 0, 2));
    }

    #[test]
    fn try_from_secs_f64_out_of_range() {
        let err = Delta::try_from_secs_f64(1e30).unwrap_err();
        assert!(err.is_invalid_parameter());
        insta::assert_snapshot!(
            err,
            @"1e30 seconds is too big for a delta (number of days must fit in a signed 64-bit integer)",
        );

        let err = Delta::try_from_secs_f64(-1e35).unwrap_err();
        assert!(err.is_invalid_parameter());
        let err = Delta::try_from_secs_f64(f64::MAX).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(Delta::try_from_secs_f64(f64::MIN).is_err());

        // Values just under the bound still fit.
        let big = Delta::try_from_secs_f64(7e23).unwrap();
        assert_eq!(big.days(), 8_101_851_851_851_852_337);
        assert_eq!(
            Delta::try_from_secs_f64(f64::INFINITY).unwrap(),
            Delta::ZERO,
        );
        assert_eq!(
            Delta::try_from_secs_f64(1.5).unwrap(),
            Delta::new(0, 1, 500_000),
        );
    }

    #[test]
    #[should_panic(expected = "number of days in delta overflows i64")]
    fn from_secs_f64_panics_when_too_big() {
        Delta::from_secs_f64(1e30);
    }

    #[test]
    fn conversions() {
        let std = core::time::Duration::new(90_061, 123_456_789);
        assert_eq!(Delta::from(std), Delta::new(1, 3_661, 123_456));

        let signed = jiff::SignedDuration::new(-3_633, -123_000_000);
        assert_eq!(Delta::from(signed), Delta::new(0, 3_633, 123_000));
    }

    #[test]
    fn totals() {
        let delta = Delta::new(2, 3_633, 123_000);
        assert_eq!(delta.as_micros(), 176_433_123_000);
        assert_eq!(delta.as_secs_f64(), 176_433.123);
        assert!(Delta::ZERO.is_zero());
    }

    quickcheck::quickcheck! {
        fn prop_components_in_range(delta: Delta) -> bool {
            (0..86_400).contains(&delta.seconds())
                && (0..1_000_000).contains(&delta.microseconds())
                && delta.days() >= 0
        }

        fn prop_micros_roundtrip(delta: Delta) -> bool {
            Delta::from_micros(delta.as_micros()) == delta
        }
    }
}
