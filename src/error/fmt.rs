use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    ExpectedDigitsAfterDot,
    PrecisionTooBig,
    UnexpectedChar { ch: char },
    UnsupportedType { ch: char },
    WidthTooBig,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
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
            ExpectedDigitsAfterDot => f.write_str(
                "found `.` in number format, \
                 but did not find a precision after it",
            ),
            PrecisionTooBig => f.write_str(
                "precision in number format must be at most 255",
            ),
            UnexpectedChar { ch } => write!(
                f,
                "found unexpected {ch:?} in number format \
                 (expected `[width][.precision][f]`)",
            ),
            UnsupportedType { ch } => write!(
                f,
                "number format presentation type {ch:?} is not supported \
                 (only `f` is supported)",
            ),
            WidthTooBig => {
                f.write_str("width in number format must be at most 255")
            }
        }
    }
}
