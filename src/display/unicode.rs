//! Unicode superscript exponents

const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Writes an exponent with Unicode superscript digits
///
/// ```
/// # use polyroot::display::unicode::superscript;
/// assert_eq!(superscript(2), "²");
/// assert_eq!(superscript(105), "¹⁰⁵");
/// ```
#[must_use]
pub fn superscript(exponent: u32) -> String {
    exponent
        .to_string()
        .bytes()
        .map(|digit| DIGITS[usize::from(digit - b'0')])
        .collect()
}
