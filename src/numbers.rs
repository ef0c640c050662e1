/*!
Rendering of numbers in words and conventional notations.

Routines that produce words live on [`Numbers`], which carries the
[`Translator`] to use. Routines that produce only digits and symbols,
[`fractional`] and [`scientific_notation`], are free functions.
*/

use alloc::{
    format,
    string::{String, ToString},
};

use crate::{
    fmt::NumberFormat,
    i18n::{self, Translator, ENGLISH},
};

#[cfg(not(feature = "std"))]
use crate::util::libm::Float;

/// Scale words and the power of ten each one starts at.
static SCALES: [(f64, &str); 11] = [
    (1e6, "million"),
    (1e9, "billion"),
    (1e12, "trillion"),
    (1e15, "quadrillion"),
    (1e18, "quintillion"),
    (1e21, "sextillion"),
    (1e24, "septillion"),
    (1e27, "octillion"),
    (1e30, "nonillion"),
    (1e33, "decillion"),
    (1e100, "googol"),
];

static DIGITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight",
    "nine",
];

static ORDINAL_SUFFIXES: [(&str, &str); 10] = [
    ("0", "th"),
    ("1", "st"),
    ("2", "nd"),
    ("3", "rd"),
    ("4", "th"),
    ("5", "th"),
    ("6", "th"),
    ("7", "th"),
    ("8", "th"),
    ("9", "th"),
];

/// A configuration for rendering numbers with words.
///
/// # Example
///
/// ```
/// use humanity::Numbers;
///
/// let n = Numbers::new();
/// assert_eq!(n.ordinal(3), "3rd");
/// assert_eq!(n.int_comma(1_234_567), "1,234,567");
/// assert_eq!(n.int_word(1_200_000.0), "1.2 million");
/// assert_eq!(n.ap_number(7), "seven");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Numbers<'t> {
    translator: &'t dyn Translator,
}

impl Numbers<'static> {
    /// Creates a new configuration that renders English.
    pub fn new() -> Numbers<'static> {
        Numbers { translator: &ENGLISH }
    }
}

impl<'t> Numbers<'t> {
    /// Sets the translator used to produce words, ordinal suffixes and the
    /// thousands separator.
    pub fn translator<'a>(
        self,
        translator: &'a dyn Translator,
    ) -> Numbers<'a> {
        Numbers { translator }
    }

    /// Renders an integer as an ordinal, e.g., `1st`, `2nd` or `11th`.
    ///
    /// Suffixes are looked up with [`Translator::phrase_in`], using the last
    /// digit as the context.
    ///
    /// ```
    /// use humanity::Numbers;
    ///
    /// let n = Numbers::new();
    /// assert_eq!(n.ordinal(1), "1st");
    /// assert_eq!(n.ordinal(13), "13th");
    /// assert_eq!(n.ordinal(111), "111th");
    /// assert_eq!(n.ordinal(122), "122nd");
    /// ```
    pub fn ordinal(&self, value: i64) -> String {
        let index = if matches!(value.rem_euclid(100), 11..=13) {
            0
        } else {
            value.rem_euclid(10) as usize
        };
        let (context, suffix) = ORDINAL_SUFFIXES[index];
        format!("{value}{}", self.translator.phrase_in(context, suffix))
    }

    /// Inserts the thousands separator every three digits of the leading
    /// integer part of a number.
    ///
    /// Anything after the leading digits (such as a fractional part) is left
    /// untouched.
    ///
    /// ```
    /// use humanity::Numbers;
    ///
    /// let n = Numbers::new();
    /// assert_eq!(n.int_comma(1_000), "1,000");
    /// assert_eq!(n.int_comma(-45_000), "-45,000");
    /// assert_eq!(n.int_comma(1_234_567.1234567), "1,234,567.1234567");
    /// assert_eq!(n.int_comma(999), "999");
    /// ```
    pub fn int_comma<T: core::fmt::Display>(&self, value: T) -> String {
        let text = value.to_string();
        let separator = self.translator.thousands_separator();

        let (sign, rest) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.as_str()),
        };
        let end = rest
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(rest.len());
        let (digits, tail) = rest.split_at(end);

        let mut out = String::with_capacity(text.len() + digits.len() / 3);
        out.push_str(sign);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push_str(separator);
            }
            out.push(ch);
        }
        out.push_str(tail);
        out
    }

    /// Renders a large number with a scale word, e.g., `1.2 million`.
    ///
    /// Numbers under one million are rendered as is. The scaled value is
    /// rendered with one decimal place. See [`Numbers::int_word_with_format`]
    /// to change that.
    ///
    /// ```
    /// use humanity::Numbers;
    ///
    /// let n = Numbers::new();
    /// assert_eq!(n.int_word(100.0), "100");
    /// assert_eq!(n.int_word(1_000_000.0), "1.0 million");
    /// assert_eq!(n.int_word(1_200_000_000.0), "1.2 billion");
    /// // Values that would round up to 1000 use the next scale word.
    /// assert_eq!(n.int_word(999_999_999.0), "1.0 billion");
    /// ```
    pub fn int_word(&self, value: f64) -> String {
        self.int_word_with_format(value, NumberFormat::fixed(1))
    }

    /// Like [`Numbers::int_word`], but renders the scaled value with the
    /// given format.
    ///
    /// ```
    /// use humanity::{fmt::NumberFormat, Numbers};
    ///
    /// let n = Numbers::new();
    /// let format = NumberFormat::fixed(2);
    /// let words = n.int_word_with_format(1_234_567.0, format);
    /// assert_eq!(words, "1.23 million");
    /// ```
    pub fn int_word_with_format(
        &self,
        value: f64,
        format: NumberFormat,
    ) -> String {
        let tr = self.translator;
        if value < SCALES[0].0 {
            return value.to_string();
        }
        for pair in SCALES.windows(2) {
            let ((power, word), (next_power, next_word)) = (pair[0], pair[1]);
            if value >= next_power {
                continue;
            }
            let scaled = format.display(value / power).to_string();
            if scaled.trim().parse::<f64>() == Ok(1_000.0) {
                let scaled = format.display(value / next_power);
                return format!("{scaled} {}", tr.phrase(next_word));
            }
            return format!("{scaled} {}", tr.phrase(word));
        }
        value.to_string()
    }

    /// Spells out the numbers zero through nine, following the Associated
    /// Press style. Other numbers are rendered as digits.
    ///
    /// ```
    /// use humanity::Numbers;
    ///
    /// let n = Numbers::new();
    /// assert_eq!(n.ap_number(0), "zero");
    /// assert_eq!(n.ap_number(9), "nine");
    /// assert_eq!(n.ap_number(10), "10");
    /// assert_eq!(n.ap_number(-1), "-1");
    /// ```
    pub fn ap_number(&self, value: i64) -> String {
        match usize::try_from(value).ok().and_then(|i| DIGITS.get(i)) {
            Some(word) => i18n::word(self.translator, word),
            None => value.to_string(),
        }
    }
}

impl Default for Numbers<'static> {
    fn default() -> Numbers<'static> {
        Numbers::new()
    }
}

/// Renders a number as a whole number, a fraction or a mixed fraction.
///
/// The fractional part is approximated by the closest fraction with a
/// denominator of at most 1000. A number without a whole part always
/// renders as a fraction, so zero renders as `0/1`.
///
/// ```
/// use humanity::fractional;
///
/// assert_eq!(fractional(0.3), "3/10");
/// assert_eq!(fractional(1.3), "1 3/10");
/// assert_eq!(fractional(1.0 / 3.0), "1/3");
/// assert_eq!(fractional(1.0), "1");
/// assert_eq!(fractional(-1.5), "-1 1/2");
/// ```
pub fn fractional(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let whole = value.trunc();
    let (numerator, denominator) =
        limit_denominator((value - whole).abs(), 1_000);
    // A fraction may round up to a whole, e.g., 0.9999999 is 1/1.
    let (whole, numerator) = if numerator == denominator {
        (whole + if value < 0.0 { -1.0 } else { 1.0 }, 0)
    } else {
        (whole, numerator)
    };
    let sign =
        if value < 0.0 && whole == 0.0 && numerator != 0 { "-" } else { "" };
    if whole != 0.0 && numerator == 0 {
        format!("{whole:.0}")
    } else if whole == 0.0 {
        format!("{sign}{numerator}/{denominator}")
    } else {
        format!("{whole:.0} {numerator}/{denominator}")
    }
}

/// Returns the fraction closest to `value` with a denominator of at most
/// `max_denominator`.
///
/// `value` must be in the range `0.0..1.0`. The best approximation is found
/// with continued fractions on the exact binary value of `value`. When two
/// candidates are equally close, the one with the smaller denominator wins.
fn limit_denominator(value: f64, max_denominator: u128) -> (u128, u128) {
    debug_assert!((0.0..1.0).contains(&value));
    let Some((num, den)) = exact_ratio(value) else { return (0, 1) };
    if den <= max_denominator {
        return (num, den);
    }

    let (mut p0, mut q0, mut p1, mut q1) = (0u128, 1u128, 1u128, 0u128);
    let (mut n, mut d) = (num, den);
    loop {
        let a = n / d;
        let q2 = q0 + a * q1;
        if q2 > max_denominator {
            break;
        }
        (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q2);
        (n, d) = (d, n - a * d);
    }
    let k = (max_denominator - q0) / q1;
    // The distance between the two candidates is 1/(q1*(q0+k*q1)) and the
    // distance from p1/q1 to the value is d/(q1*den).
    if 2 * d * (q0 + k * q1) <= den {
        (p1, q1)
    } else {
        (p0 + k * p1, q0 + k * q1)
    }
}

/// Returns `value` as an exact ratio with a power of two denominator.
///
/// `None` is returned for zero and for values so small (below `2^-47`)
/// that zero is their best approximation for any reasonable denominator.
fn exact_ratio(value: f64) -> Option<(u128, u128)> {
    if value == 0.0 {
        return None;
    }
    let bits = value.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1 << 52) - 1);
    let (mantissa, exponent) = if exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), exponent - 1075)
    };
    let zeros = mantissa.trailing_zeros() as i32;
    let shift = -(exponent + zeros);
    if shift > 100 {
        return None;
    }
    Some((u128::from(mantissa >> zeros), 1u128 << shift))
}

/// Renders a number in scientific notation with a superscript exponent,
/// e.g., `1.00 x 10³`.
///
/// `precision` is the number of digits after the decimal point in the
/// significand.
///
/// ```
/// use humanity::scientific_notation;
///
/// assert_eq!(scientific_notation(1_000.0, 2), "1.00 x 10³");
/// assert_eq!(scientific_notation(0.3, 2), "3.00 x 10⁻¹");
/// assert_eq!(scientific_notation(99.0, 2), "9.90 x 10¹");
/// assert_eq!(scientific_notation(6_000_000_000.0, 0), "6 x 10⁹");
/// assert_eq!(scientific_notation(-1_000.0, 1), "-1.0 x 10³");
/// ```
pub fn scientific_notation(value: f64, precision: u8) -> String {
    let precision = usize::from(precision);
    let text = format!("{value:.precision$e}");
    let Some((significand, exponent)) = text.split_once('e') else {
        // Infinity and NaN have no exponent.
        return text;
    };
    let mut out = String::with_capacity(text.len() + 16);
    out.push_str(significand);
    out.push_str(" x 10");
    for ch in exponent.chars() {
        out.push(superscript(ch));
    }
    out
}

fn superscript(ch: char) -> char {
    match ch {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '-' => '⁻',
        other => other,
    }
}
