//! Utilities for displaying and formatting polynomials
//!
//! This module turns a list of [`Term`]s into a human-readable expression such
//! as `3x^2 + 2x - 1`.
//!
//! # Rules
//! - Terms with a zero coefficient are skipped.
//! - Exponent `0` renders the bare coefficient, exponent `1` renders `cx`,
//!   anything higher renders `cx^e`.
//! - A coefficient of exactly `1` is omitted before the variable (`x^2`, not `1x^2`).
//! - Terms are joined with `" + "` in storage order, then every `" + -"` is
//!   rewritten to `" - "`.
//!
//! Because the sign handling is a plain substring rewrite, a leading negative
//! term keeps its sign (`-2x + 5`), and `-1` is not shortened (`-1x`).
//! A polynomial with no surviving terms renders as an empty string.
//!
//! # Helpers
//! - [`format_term`]: Renders a single term, or `None` if it is skipped.
//! - [`format_variable`]: Renders the variable and exponent part of a term.
use crate::{polynomial::Term, value::Value};

pub mod unicode;

/// Controls how a polynomial is written out.
///
/// The default writes `x` with caret exponents (`x^2`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Symbol used for the variable
    pub variable: String,

    /// Write exponents as Unicode superscripts (`x²`) instead of `x^2`
    pub superscript: bool,
}
impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            variable: "x".to_string(),
            superscript: false,
        }
    }
}

/// Formats a polynomial with the default options.
///
/// # Example
/// ```
/// # use polyroot::{display::format_polynomial, Term};
/// let terms = [Term::new(0.0, 2), Term::new(3.0, 1)];
/// assert_eq!(format_polynomial(&terms), "3x");
///
/// let terms = [Term::new(1.0, 2), Term::new(-4.0, 0)];
/// assert_eq!(format_polynomial(&terms), "x^2 - 4");
/// ```
#[must_use]
pub fn format_polynomial<T: Value>(terms: &[Term<T>]) -> String {
    format_polynomial_with(terms, &DisplayOptions::default())
}

/// Formats a polynomial with the given options.
///
/// See the [module documentation](self) for the rules.
#[must_use]
pub fn format_polynomial_with<T: Value>(terms: &[Term<T>], options: &DisplayOptions) -> String {
    let terms: Vec<String> = terms
        .iter()
        .filter_map(|term| format_term(term, options))
        .collect();

    terms.join(" + ").replace(" + -", " - ")
}

/// Formats a single polynomial term for display.
///
/// Returns `None` if the coefficient is zero and the term should be skipped.
///
/// # Example
/// ```
/// # use polyroot::{display::{format_term, DisplayOptions}, Term};
/// let options = DisplayOptions::default();
/// assert_eq!(format_term(&Term::new(2.5, 0), &options), Some("2.5".to_string()));
/// assert_eq!(format_term(&Term::new(1.0, 3), &options), Some("x^3".to_string()));
/// assert_eq!(format_term(&Term::new(0.0, 3), &options), None);
/// ```
#[must_use]
pub fn format_term<T: Value>(term: &Term<T>, options: &DisplayOptions) -> Option<String> {
    let coef = term.coefficient;
    if coef.is_zero() {
        return None;
    }

    if term.exponent == 0 {
        return Some(format!("{coef}"));
    }

    let variable = format_variable(&options.variable, term.exponent, options.superscript);
    if coef == T::one() {
        Some(variable)
    } else {
        Some(format!("{coef}{variable}"))
    }
}

/// Formats the variable part of a polynomial term for display purposes.
///
/// # Behavior
/// - If `exp == 0`, returns an empty string (`""`).
/// - If `exp == 1`, returns the base string unchanged.
/// - Otherwise, appends `^exp`, or the Unicode superscript of `exp` if `superscript` is set.
///
/// # Examples
/// ```
/// # use polyroot::display::format_variable;
/// assert_eq!(format_variable("x", 0, false), "");
/// assert_eq!(format_variable("x", 1, false), "x");
/// assert_eq!(format_variable("x", 2, false), "x^2");
/// assert_eq!(format_variable("t", 12, true), "t¹²");
/// ```
#[must_use]
pub fn format_variable(base: &str, exp: u32, superscript: bool) -> String {
    match exp {
        0 => String::new(),
        1 => base.to_string(),
        _ if superscript => {
            let sup = unicode::superscript(exp);
            format!("{base}{sup}")
        }
        _ => format!("{base}^{exp}"),
    }
}
