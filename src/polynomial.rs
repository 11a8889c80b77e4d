use std::ops::RangeInclusive;

use crate::{
    display::{self, DisplayOptions},
    value::{Grid, Value},
};

/// A single monomial `c·xᵉ` of a [`Polynomial`].
///
/// The exponent is unsigned, so a term can never carry a negative power.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Term<T: Value = f64> {
    /// Multiplier of the power of `x`
    pub coefficient: T,

    /// Power of `x`
    pub exponent: u32,
}
impl<T: Value> Term<T> {
    /// Creates the term `coefficient·x^exponent`
    pub const fn new(coefficient: T, exponent: u32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Evaluates this term alone at `x`.
    ///
    /// `x⁰` is `1` for every `x`, including `0`.
    pub fn y(&self, x: T) -> T {
        let power = match self.exponent {
            0 => T::one(),
            1 => x,
            e => x.pow_exponent(e),
        };
        self.coefficient * power
    }

    /// Derivative of this term, or `None` if it is a constant and vanishes
    pub fn derivative(&self) -> Option<Self> {
        match self.exponent {
            0 => None,
            e => Some(Self::new(self.coefficient * T::from_exponent(e), e - 1)),
        }
    }
}
impl<T: Value> From<(T, u32)> for Term<T> {
    fn from((coefficient, exponent): (T, u32)) -> Self {
        Self::new(coefficient, exponent)
    }
}

/// A single-variable polynomial stored as an ordered list of [`Term`]s.
///
/// Terms keep the order they were given in and are never combined:
/// `x + x` is stored (and displayed) as two terms, not as `2x`.
/// Zero coefficients are kept in storage but skipped by the formatter.
///
/// A polynomial has no in-place mutators; operations like [`Polynomial::derivative`]
/// return a new value and leave the source untouched.
///
/// # Example
/// ```
/// # use polyroot::Polynomial;
/// let p = Polynomial::from(vec![(3.0, 2), (2.0, 1), (1.0, 0)]); // 3x^2 + 2x + 1
/// assert_eq!(p.y(2.0), 17.0);
/// assert_eq!(p.derivative().equation(), "6x + 2");
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Polynomial<T: Value = f64> {
    terms: Vec<Term<T>>,
}
impl<T: Value> Polynomial<T> {
    /// Creates the empty polynomial (no terms).
    ///
    /// It evaluates to `0` everywhere and formats as an empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates a polynomial from terms, keeping their order
    pub fn from_terms(terms: impl IntoIterator<Item = Term<T>>) -> Self {
        Self {
            terms: terms.into_iter().collect(),
        }
    }

    /// The terms of the polynomial in storage order
    pub fn terms(&self) -> &[Term<T>] {
        &self.terms
    }

    /// Number of stored terms, zero-coefficient terms included
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if the polynomial has no terms at all
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Highest exponent carried by a non-zero coefficient.
    ///
    /// Returns `None` if every coefficient is zero (or there are no terms).
    /// Duplicate exponents are not summed first, so `x - x` still has degree 1.
    pub fn degree(&self) -> Option<u32> {
        self.terms
            .iter()
            .filter(|t| !t.coefficient.is_zero())
            .map(|t| t.exponent)
            .max()
    }

    /// Evaluates the polynomial at a given `x` value.
    ///
    /// This is the sum of `c·xᵉ` over every stored term, computed term by term,
    /// so duplicate exponents contribute independently.
    ///
    /// # Example
    /// ```
    /// # use polyroot::Polynomial;
    /// let p = Polynomial::from(vec![(1.0, 2), (-4.0, 0)]); // x^2 - 4
    /// assert_eq!(p.y(3.0), 5.0);
    /// assert_eq!(p.y(0.0), -4.0);
    /// ```
    pub fn y(&self, x: T) -> T {
        let mut y = T::zero();
        for term in &self.terms {
            y += term.y(x);
        }

        y
    }

    /// Evaluates the polynomial at multiple x-values.
    ///
    /// # Returns
    /// A `Vec` of `(x, y)` pairs corresponding to each input value.
    pub fn solve(&self, x: impl IntoIterator<Item = T>) -> Vec<(T, T)> {
        x.into_iter().map(|x| (x, self.y(x))).collect()
    }

    /// Evaluates the polynomial over a range of x-values with a fixed step.
    ///
    /// Values are `start + i·step` for as long as they do not pass `end`.
    ///
    /// # Example
    /// ```
    /// # use polyroot::Polynomial;
    /// let p = Polynomial::from(vec![(3.0, 2), (2.0, 1), (1.0, 0)]);
    /// let points = p.solve_range(0.0..=2.0, 1.0);
    /// assert_eq!(points, vec![(0.0, 1.0), (1.0, 6.0), (2.0, 17.0)]);
    /// ```
    pub fn solve_range(&self, range: RangeInclusive<T>, step: T) -> Vec<(T, T)> {
        self.solve(Grid::new(range, step))
    }

    /// Computes the derivative of this polynomial.
    ///
    /// Each term `(c, e)` with `e > 0` becomes `(c·e, e - 1)`, in the same order.
    /// Constant terms vanish entirely rather than becoming zero terms, so the
    /// derivative of a constant is the empty polynomial.
    ///
    /// # Example
    /// ```rust
    /// # use polyroot::function;
    /// function!(test(x) = 3 x^2 + 2 x + 1);
    /// let dx = test.derivative();
    /// assert_eq!(dx.equation(), "6x + 2");
    /// assert_eq!(dx.y(2.0), 14.0);
    /// ```
    #[must_use]
    pub fn derivative(&self) -> Polynomial<T> {
        self.terms.iter().filter_map(Term::derivative).collect()
    }

    /// Applies [`Polynomial::derivative`] `n` times.
    ///
    /// `n = 0` returns a copy of the polynomial.
    #[must_use]
    pub fn nth_derivative(&self, n: usize) -> Polynomial<T> {
        let mut result = self.clone();
        for _ in 0..n {
            if result.is_empty() {
                break;
            }
            result = result.derivative();
        }
        result
    }

    /// Returns a human-readable string of the polynomial equation.
    ///
    /// Terms are written in storage order with `x` as the variable and `^` for powers.
    /// See [`display::format_polynomial`] for the exact rules.
    ///
    /// # Example
    /// ```
    /// # use polyroot::Polynomial;
    /// let p = Polynomial::from(vec![(-2.0, 1), (5.0, 0)]);
    /// assert_eq!(p.equation(), "-2x + 5");
    /// ```
    #[must_use]
    pub fn equation(&self) -> String {
        display::format_polynomial(&self.terms)
    }

    /// Like [`Polynomial::equation`], with a custom variable symbol or exponent style
    #[must_use]
    pub fn equation_with(&self, options: &DisplayOptions) -> String {
        display::format_polynomial_with(&self.terms, options)
    }
}

/// Computes the derivative of `polynomial`. See [`Polynomial::derivative`].
#[must_use]
pub fn differentiate<T: Value>(polynomial: &Polynomial<T>) -> Polynomial<T> {
    polynomial.derivative()
}

/// Evaluates `polynomial` at `x`. See [`Polynomial::y`].
pub fn evaluate<T: Value>(polynomial: &Polynomial<T>, x: T) -> T {
    polynomial.y(x)
}

impl<T: Value> Default for Polynomial<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Value> AsRef<Polynomial<T>> for Polynomial<T> {
    fn as_ref(&self) -> &Polynomial<T> {
        self
    }
}

impl<T: Value> std::fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.equation())
    }
}

impl<T: Value> From<Vec<Term<T>>> for Polynomial<T> {
    fn from(terms: Vec<Term<T>>) -> Self {
        Self { terms }
    }
}

impl<T: Value> From<Vec<(T, u32)>> for Polynomial<T> {
    fn from(terms: Vec<(T, u32)>) -> Self {
        terms.into_iter().collect()
    }
}

impl<T: Value> FromIterator<Term<T>> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = Term<T>>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl<T: Value> FromIterator<(T, u32)> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = (T, u32)>>(iter: I) -> Self {
        Self::from_terms(iter.into_iter().map(Term::from))
    }
}
