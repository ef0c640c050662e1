use alloc::string::String;

/// A single named argument to a phrase template.
pub(crate) type Arg<'a> = (&'a str, &'a dyn core::fmt::Display);

/// Fills `{name}` placeholders in a template.
///
/// Placeholders with no corresponding argument are left verbatim, as are
/// unbalanced braces.
pub(crate) fn fill(template: &str, args: &[Arg<'_>]) -> String {
    use core::fmt::Write;

    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        match args.iter().find(|&&(key, _)| key == name) {
            // Writing to a `String` never fails.
            Some(&(_, value)) => write!(out, "{value}").unwrap(),
            None => out.push_str(&rest[start..start + end + 2]),
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    out
}
