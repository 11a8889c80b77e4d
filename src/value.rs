//! Scalar types and sample grids.
//!
//! [`Value`] is the float type a [`crate::Polynomial`] is built over. Any type
//! that nalgebra treats as a real field and that behaves like a primitive float
//! qualifies, which in practice means `f32` and `f64`.
//!
//! The two iterators here produce the x-values the rest of the crate works on:
//! - [`Grid`] walks `start, start + step, start + 2·step, …` up to an inclusive end.
//!   The root finder uses it for start points and [`crate::Polynomial::solve_range`]
//!   for sampling.
//! - [`Linspace`] gives a fixed number of evenly spaced points, ends included,
//!   for plotting windows.
//!
//! ```rust
//! use polyroot::value::{Grid, Linspace};
//!
//! let starts: Vec<f64> = Grid::new(-1.0..=1.0, 0.5).collect();
//! assert_eq!(starts, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
//!
//! let window: Vec<f64> = Linspace::new(0.0..=1.0, 3).collect();
//! assert_eq!(window, vec![0.0, 0.5, 1.0]);
//! ```
use std::ops::RangeInclusive;

use crate::error::Error;

/// Float type a polynomial can be built over
pub trait Value:
    nalgebra::Scalar
    + nalgebra::ComplexField<RealField = Self>
    + nalgebra::RealField
    + num_traits::float::FloatCore
    + std::fmt::LowerExp
    + std::fmt::Display
{
    /// Converts a primitive number into this type
    ///
    /// # Errors
    /// Returns [`Error::CastFailed`] if `n` cannot be represented
    fn try_cast<U: num_traits::NumCast>(n: U) -> Result<Self, Error> {
        num_traits::cast(n).ok_or(Error::CastFailed)
    }

    /// Converts the value to `f64` for error reports.
    ///
    /// Values that cannot be represented become `NaN`.
    fn as_f64_lossy(self) -> f64 {
        num_traits::cast(self).unwrap_or(f64::NAN)
    }

    /// The exponent as a value of this type, or `infinity` if it does not fit
    #[must_use]
    fn from_exponent(e: u32) -> Self {
        Self::try_cast(e).unwrap_or_else(|_| Self::infinity())
    }

    /// `self` raised to a term exponent
    #[must_use]
    fn pow_exponent(self, e: u32) -> Self {
        match i32::try_from(e) {
            Ok(e) => nalgebra::ComplexField::powi(self, e),
            Err(_) => nalgebra::ComplexField::powf(self, Self::from_exponent(e)),
        }
    }

    /// Absolute value
    #[must_use]
    fn magnitude(self) -> Self {
        nalgebra::ComplexField::abs(self)
    }

    /// `|self - other|`
    #[must_use]
    fn distance(self, other: Self) -> Self {
        (self - other).magnitude()
    }

    /// Neither infinite nor `NaN`
    fn is_finite_value(self) -> bool {
        num_traits::float::FloatCore::is_finite(self)
    }
}

impl<T> Value for T where
    T: nalgebra::Scalar
        + nalgebra::ComplexField<RealField = Self>
        + nalgebra::RealField
        + num_traits::float::FloatCore
        + std::fmt::LowerExp
        + std::fmt::Display
{
}

/// The points `start + i·step` for `i = 0, 1, …` that do not pass `end`.
///
/// Every point is computed from its index, so long grids do not drift.
/// A step that is not finite and positive, or an empty or non-finite range, gives no points.
#[derive(Debug, Clone)]
pub struct Grid<T: Value> {
    start: T,
    step: T,
    next: usize,
    count: usize,
}
impl<T: Value> Grid<T> {
    /// Grid over `range` with spacing `step`
    pub fn new(range: RangeInclusive<T>, step: T) -> Self {
        let (start, end) = range.into_inner();
        Self {
            start,
            step,
            next: 0,
            count: Self::count(start, end, step),
        }
    }

    fn at(start: T, step: T, i: usize) -> Option<T> {
        Some(start + T::try_cast(i).ok()? * step)
    }

    // The float estimate of the count can be off by one either way, so settle it
    // against the same `<= end` test the points themselves must pass
    fn count(start: T, end: T, step: T) -> usize {
        let finite = start.is_finite_value() && end.is_finite_value() && step.is_finite_value();
        if !finite || step <= T::zero() || start > end {
            return 0;
        }

        // Too many points for usize saturates rather than counting up from zero
        let estimate = num_traits::float::FloatCore::floor((end - start) / step);
        let mut count = num_traits::cast::<T, usize>(estimate).map_or(usize::MAX, |n| n.saturating_add(1));
        while count < usize::MAX && Self::at(start, step, count).is_some_and(|x| x <= end) {
            count += 1;
        }
        while count > 0 && Self::at(start, step, count - 1).map_or(true, |x| x > end) {
            count -= 1;
        }

        count
    }
}
impl<T: Value> Iterator for Grid<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next >= self.count {
            return None;
        }

        let x = Self::at(self.start, self.step, self.next)?;
        self.next += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}
impl<T: Value> ExactSizeIterator for Grid<T> {}

/// `n` evenly spaced points from the start of a range to its end.
///
/// `n == 1` yields only the start. Otherwise the first point is exactly the
/// start and the last is exactly the end.
#[derive(Debug, Clone)]
pub struct Linspace<T: Value> {
    start: T,
    end: T,
    next: usize,
    n: usize,
}
impl<T: Value> Linspace<T> {
    /// `n` points over `range`
    pub fn new(range: RangeInclusive<T>, n: usize) -> Self {
        let (start, end) = range.into_inner();
        Self {
            start,
            end,
            next: 0,
            n,
        }
    }
}
impl<T: Value> Iterator for Linspace<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let i = self.next;
        if i >= self.n {
            return None;
        }
        self.next += 1;

        if i == 0 {
            return Some(self.start);
        }
        if i == self.n - 1 {
            return Some(self.end);
        }

        let t = T::try_cast(i).ok()? / T::try_cast(self.n - 1).ok()?;
        Some(self.start + (self.end - self.start) * t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n - self.next;
        (remaining, Some(remaining))
    }
}
impl<T: Value> ExactSizeIterator for Linspace<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid() {
        let grid = Grid::new(0.0..=1.0, 0.1);
        assert_eq!(grid.len(), 11);

        let points: Vec<_> = grid.collect();
        assert_eq!(points[0], 0.0);
        assert_eq!(points[3], 0.1 * 3.0);
        assert!(points[10] <= 1.0);
    }

    #[test]
    fn test_grid_scan_range() {
        // -10.0 to 10.0 in steps of 0.1
        let points: Vec<f64> = Grid::new(-10.0..=10.0, 0.1).collect();
        assert_eq!(points.len(), 201);
        assert_eq!(points[0], -10.0);
        assert!((points[200] - 10.0).abs() < 1e-12);
        assert!(points.iter().all(|&x| x <= 10.0));
    }

    #[test]
    fn test_grid_matches_end_test() {
        for (lo, hi, step) in [(-0.3, 5.0, 0.1), (0.0, 0.3, 0.1), (1.0, 2.0, 0.7), (-5.0, -4.9, 0.01)] {
            let expected = (0..)
                .map(|i| lo + f64::from(i) * step)
                .take_while(|&x| x <= hi)
                .count();
            assert_eq!(Grid::new(lo..=hi, step).count(), expected, "{lo}..={hi} by {step}");
        }
    }

    #[test]
    fn test_grid_empty() {
        assert_eq!(Grid::new(1.0..=0.0, 0.1).len(), 0);
        assert_eq!(Grid::new(0.0..=1.0, 0.0).count(), 0);
        assert_eq!(Grid::new(0.0..=1.0, -0.1).count(), 0);
        assert_eq!(Grid::new(0.0..=1.0, f64::NAN).count(), 0);
        assert_eq!(Grid::new(f64::NAN..=1.0, 0.1).count(), 0);
        assert_eq!(Grid::new(0.0..=f64::INFINITY, 0.1).count(), 0);
    }

    #[test]
    fn test_grid_too_many_points() {
        // More points than usize can count: the grid saturates instead of walking up to it
        let grid = Grid::new(0.0..=1e300, 1e-300);
        assert_eq!(grid.len(), usize::MAX);

        let first: Vec<f64> = grid.take(3).collect();
        assert_eq!(first, vec![0.0, 1e-300, 2e-300]);
    }

    #[test]
    fn test_grid_single_point() {
        let points: Vec<_> = Grid::new(2.5..=2.5, 0.1).collect();
        assert_eq!(points, vec![2.5]);
    }

    #[test]
    fn test_linspace() {
        let points: Vec<_> = Linspace::new(-1.0..=1.0, 5).collect();
        assert_eq!(points, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);

        let points: Vec<_> = Linspace::new(0.0..=3.0, 1000).collect();
        assert_eq!(points.len(), 1000);
        assert_eq!(points[999], 3.0);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert_eq!(Linspace::new(0.0..=1.0, 0).count(), 0);
        assert_eq!(Linspace::new(4.0..=9.0, 1).collect::<Vec<_>>(), vec![4.0]);
    }

    #[test]
    fn test_pow_exponent() {
        assert_eq!(3.0f64.pow_exponent(2), 9.0);
        assert_eq!(0.0f64.pow_exponent(0), 1.0);
        assert_eq!((-2.0f32).pow_exponent(3), -8.0);
        assert_eq!(1.0f64.pow_exponent(u32::MAX), 1.0);
    }

    #[test]
    fn test_from_exponent() {
        assert_eq!(f64::from_exponent(7), 7.0);
        assert_eq!(f32::from_exponent(u32::MAX), 4_294_967_296.0);
    }

    #[test]
    fn test_distance() {
        assert_eq!(1.5f64.distance(4.0), 2.5);
        assert_eq!((-1.0f64).distance(-3.0), 2.0);
        assert_eq!((-7.0f32).magnitude(), 7.0);
    }
}
