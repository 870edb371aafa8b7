//! Identifier case conversion.

/// Converts a camelCase identifier to hyphen-case.
///
/// A hyphen goes between an ASCII lowercase letter and the ASCII uppercase
/// letter right after it, then the whole string is lowercased. Digits are
/// not split off, so `gradientStop1` becomes `gradient-stop1`.
///
/// # Example
///
/// ```rust
/// use tintsmith::export::to_kebab;
///
/// assert_eq!(to_kebab("sliderThumb"), "slider-thumb");
/// assert_eq!(to_kebab("tableHeaderBg"), "table-header-bg");
/// ```
pub fn to_kebab(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let mut prev_lower = false;

    for c in ident.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            out.push('-');
        }
        prev_lower = c.is_ascii_lowercase();
        out.extend(c.to_lowercase());
    }

    out
}
