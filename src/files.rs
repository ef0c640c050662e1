/*!
Rendering of byte counts as file sizes.
*/

use alloc::{format, string::String};

use crate::{
    error::{Error, ErrorContext, OptionError},
    fmt::NumberFormat,
};

/// The family of unit suffixes used for a file size.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum SizeStyle {
    /// SI suffixes (`KB`, `MB`, ...) with a base of 1000.
    #[default]
    Decimal,
    /// IEC suffixes (`KiB`, `MiB`, ...) with a base of 1024.
    Binary,
    /// Single letter suffixes (`K`, `M`, ...) with a base of 1024 and no
    /// space before the suffix, in the style of `ls -sh`.
    Gnu,
}

impl SizeStyle {
    fn base(self) -> u128 {
        match self {
            SizeStyle::Decimal => 1_000,
            SizeStyle::Binary | SizeStyle::Gnu => 1_024,
        }
    }

    fn suffixes(self) -> &'static [&'static str; 8] {
        match self {
            SizeStyle::Decimal => {
                &[" KB", " MB", " GB", " TB", " PB", " EB", " ZB", " YB"]
            }
            SizeStyle::Binary => &[
                " KiB", " MiB", " GiB", " TiB", " PiB", " EiB", " ZiB",
                " YiB",
            ],
            SizeStyle::Gnu => &["K", "M", "G", "T", "P", "E", "Z", "Y"],
        }
    }
}

/// A configuration for rendering byte counts as file sizes.
///
/// Sizes under one kilo unit are rendered as a number of bytes with the
/// "small" format. Larger sizes are scaled to the largest unit that keeps
/// the value under the base, up to yotta, and rendered with the regular
/// format.
///
/// # Example
///
/// ```
/// use humanity::{FileSize, SizeStyle};
///
/// let fs = FileSize::new();
/// assert_eq!(fs.format(1), "1 Byte");
/// assert_eq!(fs.format(300), "300 Bytes");
/// assert_eq!(fs.format(2_900_000), "2.9 MB");
///
/// let fs = FileSize::new().style(SizeStyle::Binary);
/// assert_eq!(fs.format(2_900_000), "2.8 MiB");
///
/// let fs = FileSize::new().style(SizeStyle::Gnu);
/// assert_eq!(fs.format(2_900_000), "2.8M");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FileSize {
    style: SizeStyle,
    format: NumberFormat,
    small_format: NumberFormat,
}

impl FileSize {
    /// Creates a new configuration using decimal suffixes, one decimal
    /// place for scaled sizes and the general format for byte counts.
    pub fn new() -> FileSize {
        FileSize {
            style: SizeStyle::Decimal,
            format: NumberFormat::fixed(1),
            small_format: NumberFormat::GENERAL,
        }
    }

    /// Sets the family of suffixes (and the base) to use.
    pub fn style(self, style: SizeStyle) -> FileSize {
        FileSize { style, ..self }
    }

    /// Sets the format used for sizes of at least one kilo unit.
    pub fn number_format(self, format: NumberFormat) -> FileSize {
        FileSize { format, ..self }
    }

    /// Sets the format used for sizes under one kilo unit.
    pub fn small_format(self, format: NumberFormat) -> FileSize {
        FileSize { small_format: format, ..self }
    }

    /// Renders the given number of bytes.
    pub fn format(&self, bytes: u128) -> String {
        let base = self.style.base();
        let small = self.small_format.display(bytes as f64);
        match self.style {
            SizeStyle::Gnu if bytes < base => return format!("{small}B"),
            SizeStyle::Gnu => {}
            _ if bytes == 1 => return format!("{small} Byte"),
            _ if bytes < base => return format!("{small} Bytes"),
            _ => {}
        }

        let suffixes = self.style.suffixes();
        // Start at the mega unit so that a size is always rendered under
        // the base of its unit. Sizes beyond the yotta range stay in yotta.
        let mut unit = base * base;
        for (i, suffix) in suffixes.iter().enumerate() {
            if bytes < unit || i == suffixes.len() - 1 {
                let scaled = base as f64 * bytes as f64 / unit as f64;
                return format!("{}{suffix}", self.format.display(scaled));
            }
            unit *= base;
        }
        unreachable!("the last suffix always matches")
    }
}

impl Default for FileSize {
    fn default() -> FileSize {
        FileSize::new()
    }
}

/// Renders the given number of bytes using string based configuration.
///
/// When `gnu` is true, `binary` is ignored. See [`FileSize`] for details.
///
/// # Errors
///
/// This returns an error when either format specifier is invalid.
///
/// ```
/// use humanity::file_size;
///
/// assert_eq!(file_size(2_000_000_000, true, false, ".3f", "")?, "1.863 GiB");
/// assert_eq!(file_size(999, false, false, ".3f", ".1f")?, "999.0 Bytes");
/// assert!(file_size(999, false, false, ".3f", "x").is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn file_size(
    bytes: u128,
    binary: bool,
    gnu: bool,
    format: &str,
    small_format: &str,
) -> Result<String, Error> {
    let style = if gnu {
        SizeStyle::Gnu
    } else if binary {
        SizeStyle::Binary
    } else {
        SizeStyle::Decimal
    };
    let format =
        format.parse::<NumberFormat>().context(OptionError::Format)?;
    let small_format = small_format
        .parse::<NumberFormat>()
        .context(OptionError::SmallFormat)?;
    Ok(FileSize::new()
        .style(style)
        .number_format(format)
        .small_format(small_format)
        .format(bytes))
}
