/*!
Numeric format specifiers and phrase templates.

Several routines in this crate accept a numeric format specifier as a
string, e.g., `".2f"` for two decimal places. These specifiers use the
familiar `printf`-like shape of `[width][.precision][f]`, restricted to what
is useful for rendering magnitudes. The parsed form is [`NumberFormat`].

# Grammar

```text
format    = [zero] [width] ["." precision] [type]
zero      = "0"
width     = digit+
precision = digit+
type      = "f" | "F"
```

* An empty specifier selects the general format, which prints the shortest
decimal representation that round trips.
* A precision (with or without the `f` type) selects fixed-point notation with
exactly that many digits after the decimal point.
* The `f` type without a precision uses 6 digits after the decimal point.
* A width pads the result on the left, with spaces by default or with zeros
when the width is preceded by `0`.

Both the width and precision must be at most `255`.
*/

pub use self::number::{FormattedNumber, NumberFormat};

mod number;
pub(crate) mod template;
