/*!
Humanity renders durations, dates, clock times, numbers, file sizes and
lists as natural language.

The centerpiece of this crate is precise duration rendering. A [`Delta`]
is redistributed over a ladder of eight units, from years down to
microseconds, and every non-zero unit is named:

```
use humanity::{precise_delta, Delta};

let delta = Delta::new(2, 3_633, 123_000);
assert_eq!(
    precise_delta(delta, "seconds", &[], ".2f")?,
    "2 days, 1 hour and 33.12 seconds",
);

# Ok::<(), Box<dyn std::error::Error>>(())
```

The finest unit to show and the units to leave out are configurable. Time
is never lost to a suppressed unit: it is carried into the next finer one.

```
use humanity::{Delta, PreciseDelta, Unit, UnitSet};

let pd = PreciseDelta::new()
    .minimum_unit(Unit::Second)
    .suppress(UnitSet::from_iter([Unit::Day]));
assert_eq!(
    pd.format(Delta::new(2, 3_633, 123_000))?,
    "49 hours and 33.12 seconds",
);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Overview

* [`PreciseDelta`] and [`precise_delta`] render a duration across every
unit. The [`precise`] module documents the redistribution rules.
* [`TimeDelta`] and [`NaturalTime`] render a single coarse phrase, like
`"3 days"` or `"3 days ago"`.
* [`Timing`] renders a clock time, like `"a quarter past noon"`.
* [`Calendar`] renders a date relative to today, like `"tomorrow"`.
* [`Numbers`], [`fractional`] and [`scientific_notation`] render numbers.
* [`FileSize`] and [`file_size`] render byte counts.
* [`listing`] joins items into a list.

# Translation

Every routine that produces words asks a [`Translator`](i18n::Translator)
for them. By default, output is in English. The [`i18n`] module provides an
in-memory [`Catalog`](i18n::Catalog) for other languages. There is no global
locale: each configuration carries its own translator.

```
use humanity::{i18n::Catalog, Delta, PreciseDelta};

let pt = Catalog::new(|n| if n == 1 { 0 } else { 1 })
    .with_plural("{amount} day", &["{amount} dia", "{amount} dias"])
    .with_plural("{amount} hour", &["{amount} hora", "{amount} horas"])
    .with_phrase("{head} and {tail}", "{head} e {tail}");
let pd = PreciseDelta::new().translator(&pt);
assert_eq!(pd.format(Delta::new(2, 3_600, 0))?, "2 dias e 1 hora");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** (enabled by default) -
  Implements `std::error::Error` for [`Error`] and enables the routines
  that consult the system clock, like [`Calendar::today`].
* **alloc** (enabled by default via `std`) -
  Required. This crate does not yet work without a dynamic memory
  allocator.
* **logging** -
  Emits [`log`](https://docs.rs/log) records from the duration
  redistribution engine and the configuration validators.
* **serde** -
  Implements `Serialize` and `Deserialize` for [`Unit`].
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
// This adds Cargo feature annotations to items in the rustdoc output.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub use crate::{
    delta::Delta,
    error::Error,
    files::{file_size, FileSize, SizeStyle},
    lists::listing,
    numbers::{fractional, scientific_notation, Numbers},
    precise::{precise_delta, Magnitudes, PreciseDelta},
    times::{time_of_day, Calendar, NaturalTime, TimeDelta, Timing},
    unit::{Unit, UnitSet},
};

#[macro_use]
mod logging;

mod delta;
mod error;
mod files;
pub mod fmt;
pub mod i18n;
mod lists;
mod numbers;
pub mod precise;
mod times;
mod unit;
mod util;
