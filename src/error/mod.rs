use alloc::sync::Arc;

pub(crate) mod delta;
pub(crate) mod fmt;
pub(crate) mod unit;

/// An error that can occur in this crate.
///
/// Every error this crate produces is the result of an invalid parameter.
/// Rendering a value never fails once the configuration has been
/// validated. The errors are:
///
/// * An unrecognized unit name was given, either as a minimum unit or as a
/// unit to suppress.
/// * The minimum unit was suppressed and there is no coarser unit left to
/// take its place.
/// * A minimum unit was given to a routine that doesn't support it. (For
/// example, coarse time deltas only support seconds or finer.)
/// * A numeric format specifier could not be parsed.
/// * A date could not be formatted with a `strftime` style format string.
/// * A floating point number of seconds is too big for a
/// [`Delta`](crate::Delta).
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait when the
/// `std` feature is enabled, the [`core::fmt::Debug`] trait and the
/// [`core::fmt::Display`] trait, this error type currently provides
/// very limited introspection capabilities via the `Error::is_*`
/// predicates.
///
/// # Design
///
/// This crate follows the "One True God Error Type Pattern," where only one
/// error type exists for a variety of different operations. Internally,
/// errors are structured and may carry a causal chain, which is rendered by
/// the `Display` impl from the outermost context to the root cause.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cheaply cloneable and to keep
    /// the size of an error equal to one word.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Returns true when this error originated from a unit name that isn't
    /// one of the eight recognized unit identifiers.
    ///
    /// # Example
    ///
    /// ```
    /// let err = humanity::precise_delta(
    ///     humanity::Delta::from_secs(5),
    ///     "fortnights",
    ///     &[],
    ///     ".2f",
    /// ).unwrap_err();
    /// assert!(err.is_invalid_unit());
    /// ```
    pub fn is_invalid_unit(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Unit(self::unit::Error::InvalidName { .. })
        )
    }

    /// Returns true when this error originated from a minimum unit that is
    /// suppressed without any coarser unit left to replace it.
    ///
    /// # Example
    ///
    /// ```
    /// let err = humanity::precise_delta(
    ///     humanity::Delta::from_secs(5),
    ///     "years",
    ///     &["years"],
    ///     ".2f",
    /// ).unwrap_err();
    /// assert!(err.is_no_suitable_unit());
    /// ```
    pub fn is_no_suitable_unit(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Unit(self::unit::Error::NoSuitableMinimum { .. })
        )
    }

    /// Returns true when this error originated as a result of an invalid
    /// configuration of parameters to a function call.
    ///
    /// Currently, this is true for every error produced by this crate.
    ///
    /// # Example
    ///
    /// ```
    /// let err = humanity::Delta::try_from_secs_f64(1e30).unwrap_err();
    /// assert!(err.is_invalid_parameter());
    /// ```
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Delta(_)
                | ErrorKind::Unit(_)
                | ErrorKind::Fmt(_)
                | ErrorKind::Jiff(_)
        )
    }
}

impl Error {
    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        // OK because we just created this error so the Arc
        // has one reference.
        let inner = Arc::get_mut(&mut err.inner).unwrap();
        assert!(inner.cause.is_none(), "cause of consequence must be `None`");
        inner.cause = Some(self);
        err
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        // OK because `Error::chain` is guaranteed to return a non-empty
        // iterator.
        self.chain().last().unwrap()
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause. That is, the error closest to the point where something
    /// has gone wrong.
    ///
    /// The iterator returned is guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Delta(self::delta::Error),
    Fmt(self::fmt::Error),
    Jiff(jiff::Error),
    Option(OptionError),
    Unit(self::unit::Error),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Delta(ref err) => core::fmt::Display::fmt(err, f),
            Fmt(ref err) => core::fmt::Display::fmt(err, f),
            Jiff(ref err) => core::fmt::Display::fmt(err, f),
            Option(ref err) => core::fmt::Display::fmt(err, f),
            Unit(ref err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

impl From<jiff::Error> for Error {
    #[cold]
    #[inline(never)]
    fn from(err: jiff::Error) -> Error {
        ErrorKind::Jiff(err).into()
    }
}

impl IntoError for jiff::Error {
    fn into_error(self) -> Error {
        self.into()
    }
}

/// Context describing which configuration option an error came from.
#[derive(Clone, Copy, Debug)]
pub(crate) enum OptionError {
    MinimumUnit,
    Suppress,
    Format,
    SmallFormat,
    DateFormat,
}

impl From<OptionError> for Error {
    #[cold]
    #[inline(never)]
    fn from(err: OptionError) -> Error {
        ErrorKind::Option(err).into()
    }
}

impl IntoError for OptionError {
    fn into_error(self) -> Error {
        self.into()
    }
}

impl core::fmt::Display for OptionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::OptionError::*;

        match *self {
            MinimumUnit => f.write_str("error with `minimum_unit` option"),
            Suppress => f.write_str("error with `suppress` option"),
            Format => f.write_str("error with `format` option"),
            SmallFormat => f.write_str("error with `small_format` option"),
            DateFormat => f.write_str("failed to format date"),
        }
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait basically exists to make `Error::context` work without needing
/// to rely on public `From` impls.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize `Result<T, Error>`, absolving one of
/// the need to call `map_err` everywhere one wants to add context to an
/// error.
///
/// This trick was borrowed from `anyhow`.
pub(crate) trait ErrorContext<T> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: IntoError,
{
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    // We test that our 'Error' type is the size we expect. This isn't an API
    // guarantee, but if the size increases, we really want to make sure we
    // decide to do that intentionally.
    #[test]
    fn error_size() {
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn context_chain() {
        let root: Result<(), Error> =
            Err(unit::Error::InvalidName { given: "weeks".into() }
                .into());
        let err = root.context(OptionError::Suppress).unwrap_err();
        assert_eq!(
            err.to_string(),
            "error with `suppress` option: \
             unrecognized unit name 'weeks' (expected one of years, months, \
             days, hours, minutes, seconds, milliseconds or microseconds)",
        );
        assert!(err.is_invalid_unit());
        assert!(err.is_invalid_parameter());
        assert!(!err.is_no_suitable_unit());
    }
}
