/*!
Joining of items into a human readable list.
*/

use alloc::string::String;

/// Joins `items` into a single string.
///
/// Every item after the first is preceded by `separator` and a space. When a
/// non-empty `conjunction` is given, the last item is instead preceded by
/// a space, the conjunction and another space. An empty separator joins
/// items with a single space.
///
/// An empty slice produces an empty string and a single item is returned
/// as is.
///
/// # Example
///
/// ```
/// use humanity::listing;
///
/// assert_eq!(listing(&["jorbas", "maria"], ",", None), "jorbas, maria");
/// assert_eq!(listing(&["jorbas", "maria"], "", None), "jorbas maria");
/// assert_eq!(
///     listing(&["jorbas", "maria", "gustavo"], ";", Some("or")),
///     "jorbas; maria or gustavo",
/// );
/// ```
pub fn listing<S: AsRef<str>>(
    items: &[S],
    separator: &str,
    conjunction: Option<&str>,
) -> String {
    let conjunction = conjunction.filter(|c| !c.is_empty());
    let mut out = String::new();
    let Some((first, rest)) = items.split_first() else { return out };
    out.push_str(first.as_ref());
    for (i, item) in rest.iter().enumerate() {
        match conjunction {
            Some(conjunction) if i == rest.len() - 1 => {
                out.push(' ');
                out.push_str(conjunction);
            }
            _ => out.push_str(separator),
        }
        out.push(' ');
        out.push_str(item.as_ref());
    }
    out
}
