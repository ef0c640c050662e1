use alloc::boxed::Box;

use crate::{error, Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    InvalidName { given: Box<str> },
    NoSuitableMinimum { minimum: Unit },
    UnsupportedMinimum { given: Unit },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Unit(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            InvalidName { ref given } => write!(
                f,
                "unrecognized unit name '{given}' \
                 (expected one of years, months, days, hours, minutes, \
                 seconds, milliseconds or microseconds)",
            ),
            NoSuitableMinimum { minimum } => write!(
                f,
                "minimum unit '{unit}' is suppressed and no coarser \
                 unit is available to replace it",
                unit = minimum.plural(),
            ),
            UnsupportedMinimum { given } => write!(
                f,
                "minimum unit '{unit}' is not supported \
                 (must use seconds, milliseconds or microseconds)",
                unit = given.plural(),
            ),
        }
    }
}
