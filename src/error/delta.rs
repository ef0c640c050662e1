use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    SecondsOutOfRange { seconds: f64 },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Delta(err).into()
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
            SecondsOutOfRange { seconds } => write!(
                f,
                "{seconds:e} seconds is too big for a delta \
                 (number of days must fit in a signed 64-bit integer)",
            ),
        }
    }
}
