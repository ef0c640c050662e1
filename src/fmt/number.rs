use crate::error::{fmt::Error as E, Error};

/// A parsed numeric format specifier.
///
/// This controls how a floating point magnitude is rendered, e.g., the
/// fractional amount of a precise delta's minimum unit or the scaled value
/// of a file size. See the [module documentation](crate::fmt) for the
/// accepted grammar.
///
/// # Example
///
/// ```
/// use humanity::fmt::NumberFormat;
///
/// let format: NumberFormat = ".2f".parse()?;
/// assert_eq!(format.display(33.123).to_string(), "33.12");
///
/// let format: NumberFormat = "".parse()?;
/// assert_eq!(format.display(33.123).to_string(), "33.123");
///
/// let format: NumberFormat = "07.1f".parse()?;
/// assert_eq!(format.display(2.3).to_string(), "00002.3");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct NumberFormat {
    width: u8,
    zero_pad: bool,
    precision: Option<u8>,
}

impl NumberFormat {
    /// The general format. This prints the shortest decimal representation
    /// that round trips.
    pub const GENERAL: NumberFormat =
        NumberFormat { width: 0, zero_pad: false, precision: None };

    /// Returns a fixed-point format with exactly `precision` digits after
    /// the decimal point.
    pub const fn fixed(precision: u8) -> NumberFormat {
        NumberFormat { precision: Some(precision), ..NumberFormat::GENERAL }
    }

    /// Sets the minimum width of the rendered number. Shorter numbers are
    /// padded on the left with spaces.
    pub const fn width(self, width: u8) -> NumberFormat {
        NumberFormat { width, ..self }
    }

    /// When enabled, numbers shorter than the width are padded with zeros
    /// (after any sign) instead of spaces.
    pub const fn zero_pad(self, yes: bool) -> NumberFormat {
        NumberFormat { zero_pad: yes, ..self }
    }

    /// Returns a value that renders `value` using this format.
    pub fn display(self, value: f64) -> FormattedNumber {
        FormattedNumber { format: self, value }
    }
}

impl core::str::FromStr for NumberFormat {
    type Err = Error;

    fn from_str(spec: &str) -> Result<NumberFormat, Error> {
        let mut format = NumberFormat::GENERAL;
        let mut rest = spec;

        if rest.len() > 1 && rest.starts_with('0') {
            format.zero_pad = true;
            rest = &rest[1..];
        }
        let (width, tail) = parse_u8(rest).map_err(|_| E::WidthTooBig)?;
        format.width = width.unwrap_or(0);
        rest = tail;

        if let Some(tail) = rest.strip_prefix('.') {
            let (precision, tail) =
                parse_u8(tail).map_err(|_| E::PrecisionTooBig)?;
            let Some(precision) = precision else {
                return Err(Error::from(E::ExpectedDigitsAfterDot));
            };
            format.precision = Some(precision);
            rest = tail;
        }

        let mut chars = rest.chars();
        match chars.next() {
            None => {}
            Some('f' | 'F') => {
                format.precision.get_or_insert(6);
            }
            Some(ch) if ch.is_ascii_alphabetic() || ch == '%' => {
                return Err(Error::from(E::UnsupportedType { ch }));
            }
            Some(ch) => return Err(Error::from(E::UnexpectedChar { ch })),
        }
        if let Some(ch) = chars.next() {
            return Err(Error::from(E::UnexpectedChar { ch }));
        }
        Ok(format)
    }
}

/// Parses a leading run of ASCII digits as a `u8`.
///
/// Returns `None` for the number when there are no leading digits. An error
/// is returned when the digits overflow a `u8`.
fn parse_u8(s: &str) -> Result<(Option<u8>, &str), ()> {
    let end = s.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return Ok((None, s));
    }
    let mut n: u8 = 0;
    for b in s[..end].bytes() {
        n = n.checked_mul(10).ok_or(())?;
        n = n.checked_add(b - b'0').ok_or(())?;
    }
    Ok((Some(n), &s[end..]))
}

/// A floating point value paired with the [`NumberFormat`] used to render
/// it.
///
/// This is created by [`NumberFormat::display`].
#[derive(Clone, Copy, Debug)]
pub struct FormattedNumber {
    format: NumberFormat,
    value: f64,
}

impl core::fmt::Display for FormattedNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let NumberFormat { width, zero_pad, precision } = self.format;
        let width = usize::from(width);
        let value = self.value;
        match (precision, zero_pad) {
            (None, false) => write!(f, "{value:>width$}"),
            (None, true) => write!(f, "{value:0width$}"),
            (Some(p), false) => {
                let p = usize::from(p);
                write!(f, "{value:>width$.p$}")
            }
            (Some(p), true) => {
                let p = usize::from(p);
                write!(f, "{value:0width$.p$}")
            }
        }
    }
}
