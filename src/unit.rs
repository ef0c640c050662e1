/*!
The ladder of duration units used throughout this crate.

A [`Unit`] is one of eight granularities, from microseconds up to years.
Units are totally ordered by coarseness, so `Unit::Year > Unit::Day`. A
[`UnitSet`] is a small copyable set of units, used to describe which units
should be suppressed from rendered output.
*/

use crate::error::{unit::Error as E, Error};

/// A granularity of time used when rendering durations.
///
/// Units are ordered such that coarser units compare greater than finer
/// units. The discriminant of each variant is its rank on the ladder.
///
/// Years are always 365 days and months are always 30.5 days. No calendar
/// arithmetic is ever performed with these units: they exist purely for
/// presentation.
///
/// # Parsing
///
/// A unit can be parsed from its plural identifier, case insensitively:
///
/// ```
/// use humanity::Unit;
///
/// assert_eq!("seconds".parse::<Unit>()?, Unit::Second);
/// assert_eq!("MINUTES".parse::<Unit>()?, Unit::Minute);
/// assert!("fortnights".parse::<Unit>().is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Example: ordering
///
/// ```
/// use humanity::Unit;
///
/// assert!(Unit::Year > Unit::Microsecond);
/// assert!(Unit::Day > Unit::Hour);
/// assert_eq!(Unit::Hour, Unit::Hour);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    /// A unit of 1,000 nanoseconds. This is the finest unit.
    #[cfg_attr(feature = "serde", serde(rename = "microseconds"))]
    Microsecond = 0,
    /// A unit of 1,000 microseconds.
    #[cfg_attr(feature = "serde", serde(rename = "milliseconds"))]
    Millisecond = 1,
    /// A unit of 1,000 milliseconds.
    #[cfg_attr(feature = "serde", serde(rename = "seconds"))]
    Second = 2,
    /// A unit of 60 seconds.
    #[cfg_attr(feature = "serde", serde(rename = "minutes"))]
    Minute = 3,
    /// A unit of 60 minutes.
    #[cfg_attr(feature = "serde", serde(rename = "hours"))]
    Hour = 4,
    /// A unit of 24 hours.
    #[cfg_attr(feature = "serde", serde(rename = "days"))]
    Day = 5,
    /// A unit of 30.5 days.
    #[cfg_attr(feature = "serde", serde(rename = "months"))]
    Month = 6,
    /// A unit of 365 days. This is the coarsest unit.
    #[cfg_attr(feature = "serde", serde(rename = "years"))]
    Year = 7,
}

impl Unit {
    /// Every unit on the ladder, from finest to coarsest.
    pub const ALL: [Unit; 8] = [
        Unit::Microsecond,
        Unit::Millisecond,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Month,
        Unit::Year,
    ];

    /// Returns the next coarser unit, if one exists.
    ///
    /// ```
    /// use humanity::Unit;
    ///
    /// assert_eq!(Unit::Day.coarser(), Some(Unit::Month));
    /// assert_eq!(Unit::Year.coarser(), None);
    /// ```
    pub fn coarser(self) -> Option<Unit> {
        Unit::from_rank(self.rank() + 1)
    }

    /// Returns the next finer unit, if one exists.
    ///
    /// ```
    /// use humanity::Unit;
    ///
    /// assert_eq!(Unit::Day.finer(), Some(Unit::Hour));
    /// assert_eq!(Unit::Microsecond.finer(), None);
    /// ```
    pub fn finer(self) -> Option<Unit> {
        self.rank().checked_sub(1).and_then(Unit::from_rank)
    }

    /// A human readable singular description of this unit of time.
    pub fn singular(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Millisecond => "millisecond",
            Unit::Microsecond => "microsecond",
        }
    }

    /// A human readable plural description of this unit of time.
    ///
    /// This is also the identifier used when parsing a unit from a string.
    pub fn plural(self) -> &'static str {
        match self {
            Unit::Year => "years",
            Unit::Month => "months",
            Unit::Day => "days",
            Unit::Hour => "hours",
            Unit::Minute => "minutes",
            Unit::Second => "seconds",
            Unit::Millisecond => "milliseconds",
            Unit::Microsecond => "microseconds",
        }
    }

    /// The number of seconds in one of this unit.
    ///
    /// Years and months use their fixed presentation lengths of 365 and 30.5
    /// days, respectively.
    pub fn seconds(self) -> f64 {
        match self {
            Unit::Year => 365.0 * 86_400.0,
            Unit::Month => 30.5 * 86_400.0,
            Unit::Day => 86_400.0,
            Unit::Hour => 3_600.0,
            Unit::Minute => 60.0,
            Unit::Second => 1.0,
            Unit::Millisecond => 1e-3,
            Unit::Microsecond => 1e-6,
        }
    }

    /// The same as `Unit::seconds`, but expressed in microseconds.
    ///
    /// Every value returned is a whole number of microseconds, which is what
    /// makes exact reconstruction of a duration possible.
    pub(crate) fn microseconds(self) -> f64 {
        match self {
            Unit::Millisecond => 1e3,
            Unit::Microsecond => 1.0,
            unit => unit.seconds() * 1e6,
        }
    }

    pub(crate) fn rank(self) -> usize {
        self as usize
    }

    pub(crate) fn from_rank(rank: usize) -> Option<Unit> {
        Unit::ALL.get(rank).copied()
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.plural())
    }
}

impl core::str::FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Unit, Error> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.plural().eq_ignore_ascii_case(s))
            .ok_or_else(|| E::InvalidName { given: s.into() }.into())
    }
}

/// A set of [`Unit`] values.
///
/// This is a bitset, so it is `Copy` and every operation on it is constant
/// time.
///
/// # Example
///
/// ```
/// use humanity::{Unit, UnitSet};
///
/// let set = UnitSet::from_iter([Unit::Day, Unit::Hour]);
/// assert!(set.contains(Unit::Day));
/// assert!(!set.contains(Unit::Minute));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct UnitSet {
    bits: u8,
}

impl UnitSet {
    /// Returns an empty set.
    pub const fn empty() -> UnitSet {
        UnitSet { bits: 0 }
    }

    /// Parses a set of units from their plural identifiers.
    ///
    /// Names are matched case insensitively. An error is returned for the
    /// first name that isn't a recognized unit.
    ///
    /// ```
    /// use humanity::{Unit, UnitSet};
    ///
    /// let set = UnitSet::parse(["days", "Hours"])?;
    /// assert_eq!(set, UnitSet::from_iter([Unit::Day, Unit::Hour]));
    /// assert!(UnitSet::parse(["weeks"]).unwrap_err().is_invalid_unit());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse<I, S>(names: I) -> Result<UnitSet, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = UnitSet::empty();
        for name in names {
            set = set.insert(name.as_ref().parse()?);
        }
        Ok(set)
    }

    /// Returns a new set with the given unit added.
    pub const fn insert(self, unit: Unit) -> UnitSet {
        UnitSet { bits: self.bits | (1 << unit as u8) }
    }

    /// Returns true if and only if the given unit is in this set.
    pub const fn contains(self, unit: Unit) -> bool {
        self.bits & (1 << unit as u8) != 0
    }

    /// Returns the number of units in this set.
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true when this set contains no units.
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the units in this set, from finest to
    /// coarsest.
    pub fn iter(self) -> impl Iterator<Item = Unit> {
        Unit::ALL.into_iter().filter(move |&unit| self.contains(unit))
    }

    /// Returns the finest unit at or above `unit` that is not in this set.
    ///
    /// When `unit` itself is not in this set, it is returned unchanged.
    /// Otherwise, the ladder is scanned toward years. If every unit from
    /// `unit` up to and including years is in this set, then an error is
    /// returned.
    ///
    /// ```
    /// use humanity::{Unit, UnitSet};
    ///
    /// let set = UnitSet::from_iter([Unit::Hour, Unit::Day]);
    /// assert_eq!(set.resolve_minimum(Unit::Minute)?, Unit::Minute);
    /// assert_eq!(set.resolve_minimum(Unit::Hour)?, Unit::Month);
    ///
    /// let set = UnitSet::from_iter([Unit::Year]);
    /// let err = set.resolve_minimum(Unit::Year).unwrap_err();
    /// assert!(err.is_no_suitable_unit());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn resolve_minimum(self, unit: Unit) -> Result<Unit, Error> {
        Unit::ALL[unit.rank()..]
            .iter()
            .copied()
            .find(|&candidate| !self.contains(candidate))
            .ok_or_else(|| E::NoSuitableMinimum { minimum: unit }.into())
    }

    /// Returns a new set that additionally contains every unit strictly
    /// finer than `unit`.
    pub(crate) fn with_finer_than(self, unit: Unit) -> UnitSet {
        // `unit` has rank `r`, so the low `r` bits are the finer units.
        let below = (1u8 << unit.rank()) - 1;
        UnitSet { bits: self.bits | below }
    }
}

impl FromIterator<Unit> for UnitSet {
    fn from_iter<I: IntoIterator<Item = Unit>>(units: I) -> UnitSet {
        units.into_iter().fold(UnitSet::empty(), UnitSet::insert)
    }
}

impl From<Unit> for UnitSet {
    fn from(unit: Unit) -> UnitSet {
        UnitSet::empty().insert(unit)
    }
}

impl core::fmt::Debug for UnitSet {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Unit {
    fn arbitrary(g: &mut quickcheck::Gen) -> Unit {
        use quickcheck::Arbitrary;

        Unit::from_rank(usize::arbitrary(g) % 8).unwrap()
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        use quickcheck::Arbitrary;

        alloc::boxed::Box::new(
            self.rank().shrink().map(|n| Unit::from_rank(n % 8).unwrap()),
        )
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for UnitSet {
    fn arbitrary(g: &mut quickcheck::Gen) -> UnitSet {
        use quickcheck::Arbitrary;

        UnitSet { bits: u8::arbitrary(g) }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        use quickcheck::Arbitrary;

        alloc::boxed::Box::new(self.bits.shrink().map(|bits| UnitSet { bits }))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn ladder_order() {
        for pair in Unit::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{:?} < {:?}", pair[0], pair[1]);
            assert_eq!(pair[0].coarser(), Some(pair[1]));
            assert_eq!(pair[1].finer(), Some(pair[0]));
        }
        assert_eq!(Unit::Minute.max(Unit::Year), Unit::Year);
    }

    #[test]
    fn parse() {
        for unit in Unit::ALL {
            assert_eq!(unit.plural().parse::<Unit>().unwrap(), unit);
            assert_eq!(
                unit.plural().to_uppercase().parse::<Unit>().unwrap(),
                unit
            );
        }
        let err = "second".parse::<Unit>().unwrap_err();
        insta::assert_snapshot!(
            err,
            @"unrecognized unit name 'second' (expected one of years, months, days, hours, minutes, seconds, milliseconds or microseconds)",
        );
        assert!("".parse::<Unit>().unwrap_err().is_invalid_unit());
    }

    #[test]
    fn display() {
        assert_eq!(Unit::Millisecond.to_string(), "milliseconds");
    }

    #[test]
    fn resolve_minimum() {
        let none = UnitSet::empty();
        assert_eq!(none.resolve_minimum(Unit::Hour).unwrap(), Unit::Hour);

        let set = UnitSet::from_iter([Unit::Hour]);
        assert_eq!(set.resolve_minimum(Unit::Hour).unwrap(), Unit::Day);

        let set = UnitSet::from_iter([Unit::Hour, Unit::Day]);
        assert_eq!(set.resolve_minimum(Unit::Hour).unwrap(), Unit::Month);

        let set = UnitSet::from_iter([Unit::Month, Unit::Year]);
        let err = set.resolve_minimum(Unit::Month).unwrap_err();
        insta::assert_snapshot!(
            err,
            @"minimum unit 'months' is suppressed and no coarser unit is available to replace it",
        );
    }

    #[test]
    fn with_finer_than() {
        let set =
            UnitSet::from_iter([Unit::Day]).with_finer_than(Unit::Second);
        assert_eq!(
            set,
            UnitSet::from_iter([
                Unit::Microsecond,
                Unit::Millisecond,
                Unit::Day,
            ]),
        );
        let set = UnitSet::empty().with_finer_than(Unit::Microsecond);
        assert!(set.is_empty());
    }

    #[test]
    fn unit_set_debug() {
        let set = UnitSet::from_iter([Unit::Year, Unit::Second]);
        assert_eq!(alloc::format!("{set:?}"), "{Second, Year}");
    }

    quickcheck::quickcheck! {
        fn prop_resolved_minimum_is_not_suppressed(
            set: UnitSet,
            unit: Unit
        ) -> bool {
            match set.resolve_minimum(unit) {
                Ok(min) => min >= unit && !set.contains(min),
                Err(_) => {
                    Unit::ALL[unit.rank()..].iter().all(|&u| set.contains(u))
                }
            }
        }
    }
}
