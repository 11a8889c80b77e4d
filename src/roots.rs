//! Real root finding with Newton-Raphson iteration.
//!
//! Two entry points:
//! - [`newton_raphson`] runs the iteration from a single start point.
//! - [`find_roots_in_interval`] starts a run every `0.1` across an interval and
//!   keeps each distinct root it lands on.
//!
//! The iteration is plain, undamped Newton-Raphson:
//!
//! ```text
//! x ← x − f(x) / f'(x)
//! ```
//!
//! It stops successfully once a step is shorter than the tolerance, and gives up
//! when `f'(x)` is exactly zero or when the iteration budget runs out. There is no
//! step clamping, line search or divergence detection beyond that budget.
//!
//! The multi-start scan is a coverage heuristic, not a root isolation method:
//! closely spaced roots can be missed, and a root is only reported if some start
//! point converges to it.
use std::ops::RangeInclusive;

use crate::{
    error::{Error, Result},
    polynomial::Polynomial,
    value::{Grid, Value},
};

/// Default convergence tolerance for [`NewtonOptions`]
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Default iteration budget for [`NewtonOptions`]
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default distance between start points for [`ScanOptions`]
pub const DEFAULT_SCAN_STEP: f64 = 0.1;

/// Parameters for a single Newton-Raphson run.
///
/// Defaults to a tolerance of `1e-7` and at most `100` iterations.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NewtonOptions<T: Value = f64> {
    tolerance: T,
    max_iterations: usize,
}
impl<T: Value> NewtonOptions<T> {
    /// Creates solver options.
    ///
    /// A budget of `0` iterations is allowed, and so is a tolerance of `0`.
    /// No step is ever shorter than `0`, so either way every run reports no root.
    ///
    /// # Errors
    /// Returns [`Error::InvalidTolerance`] if `tolerance` is negative, infinite or `NaN`.
    pub fn new(tolerance: T, max_iterations: usize) -> Result<Self> {
        if !tolerance.is_finite_value() || tolerance < T::zero() {
            return Err(Error::InvalidTolerance(tolerance.to_string()));
        }

        Ok(Self {
            tolerance,
            max_iterations,
        })
    }

    /// Largest step `|x_next - x|` that still counts as converged (exclusive)
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Iteration budget for one run
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}
impl<T: Value> Default for NewtonOptions<T> {
    fn default() -> Self {
        Self {
            tolerance: T::try_cast(DEFAULT_TOLERANCE).unwrap_or(T::epsilon()),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Parameters for an interval scan: the solver options plus the start point spacing.
///
/// Defaults to [`NewtonOptions::default`] and a step of `0.1`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScanOptions<T: Value = f64> {
    newton: NewtonOptions<T>,
    step: T,
}
impl<T: Value> ScanOptions<T> {
    /// Creates scan options.
    ///
    /// # Errors
    /// Returns [`Error::InvalidStep`] if `step` is not finite and strictly positive.
    pub fn new(newton: NewtonOptions<T>, step: T) -> Result<Self> {
        if !step.is_finite_value() || step <= T::zero() {
            return Err(Error::InvalidStep(step.to_string()));
        }

        Ok(Self { newton, step })
    }

    /// Scan options with the default step and the given solver options
    pub fn with_newton(newton: NewtonOptions<T>) -> Self {
        Self {
            newton,
            ..Self::default()
        }
    }

    /// Options used for each Newton-Raphson run
    pub fn newton(&self) -> &NewtonOptions<T> {
        &self.newton
    }

    /// Distance between successive start points
    pub fn step(&self) -> T {
        self.step
    }
}
impl<T: Value> Default for ScanOptions<T> {
    fn default() -> Self {
        Self {
            newton: NewtonOptions::default(),
            step: T::try_cast(DEFAULT_SCAN_STEP).unwrap_or(T::one()),
        }
    }
}

/// A successful Newton-Raphson run.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Convergence<T: Value = f64> {
    /// The estimate that satisfied the tolerance test
    pub root: T,

    /// Number of iterations performed, including the converging one
    pub iterations: usize,
}

/// Runs Newton-Raphson from `x0` and returns the root, or `None` if there is none.
///
/// `None` covers both failure modes (zero derivative, exhausted budget).
/// Use [`try_newton_raphson`] to tell them apart.
///
/// # Example
/// ```
/// # use polyroot::{Polynomial, roots::{newton_raphson, NewtonOptions}};
/// let p: Polynomial = Polynomial::from(vec![(1.0, 2), (-4.0, 0)]); // x^2 - 4
/// let root = newton_raphson(&p, 3.0, &NewtonOptions::default()).unwrap();
/// assert!((root - 2.0).abs() < 1e-7);
///
/// let constant: Polynomial = Polynomial::from(vec![(5.0, 0)]);
/// assert_eq!(newton_raphson(&constant, 1.0, &NewtonOptions::default()), None);
/// ```
pub fn newton_raphson<T: Value>(
    polynomial: &Polynomial<T>,
    x0: T,
    options: &NewtonOptions<T>,
) -> Option<T> {
    try_newton_raphson(polynomial, x0, options)
        .ok()
        .map(|c| c.root)
}

/// Runs Newton-Raphson from `x0`, reporting why no root was found.
///
/// # Errors
/// - [`Error::ZeroDerivative`] if `f'(x)` is exactly zero at some iterate.
/// - [`Error::DidNotConverge`] if no step is shorter than the tolerance within the budget.
pub fn try_newton_raphson<T: Value>(
    polynomial: &Polynomial<T>,
    x0: T,
    options: &NewtonOptions<T>,
) -> Result<Convergence<T>> {
    let dx = polynomial.derivative();
    newton_from(polynomial, &dx, x0, options)
}

/// The iteration itself, with the derivative computed by the caller
fn newton_from<T: Value>(
    polynomial: &Polynomial<T>,
    dx: &Polynomial<T>,
    x0: T,
    options: &NewtonOptions<T>,
) -> Result<Convergence<T>> {
    let mut x = x0;
    for iteration in 0..options.max_iterations {
        let fx = polynomial.y(x);
        let fprime = dx.y(x);
        tracing::trace!(iteration, %x, %fx, %fprime, "newton step");

        if fprime.is_zero() {
            tracing::debug!(%x0, %x, iteration, "derivative vanished");
            return Err(Error::ZeroDerivative {
                x: x.as_f64_lossy(),
                iteration,
            });
        }

        let next = x - fx / fprime;
        if next.distance(x) < options.tolerance {
            tracing::debug!(%x0, root = %next, iterations = iteration + 1, "converged");
            return Ok(Convergence {
                root: next,
                iterations: iteration + 1,
            });
        }

        x = next;
    }

    tracing::debug!(%x0, last = %x, iterations = options.max_iterations, "did not converge");
    Err(Error::DidNotConverge {
        iterations: options.max_iterations,
        last: x.as_f64_lossy(),
    })
}

/// Finds the distinct real roots of `polynomial` in `range` with the default `0.1` scan step.
///
/// See [`find_roots_with`].
///
/// # Example
/// ```
/// # use polyroot::{Polynomial, roots::{find_roots_in_interval, NewtonOptions}};
/// let p: Polynomial = Polynomial::from(vec![(1.0, 2), (-4.0, 0)]); // x^2 - 4
/// let roots = find_roots_in_interval(&p, -10.0..=10.0, &NewtonOptions::default());
/// assert_eq!(roots.len(), 2);
/// assert!((roots[0] + 2.0).abs() < 1e-7);
/// assert!((roots[1] - 2.0).abs() < 1e-7);
/// ```
pub fn find_roots_in_interval<T: Value>(
    polynomial: &Polynomial<T>,
    range: RangeInclusive<T>,
    options: &NewtonOptions<T>,
) -> Vec<T> {
    find_roots_with(polynomial, range, &ScanOptions::with_newton(*options))
}

/// Finds the distinct real roots of `polynomial` in `range`.
///
/// - Start points are `lo + i·step` for `i = 0, 1, …` while they do not pass `hi`.
/// - Each start point gets its own Newton-Raphson run.
/// - A root is kept only if it lies in `[lo, hi]` and is not within the tolerance of
///   a root that was already kept.
///
/// Roots are returned in the order their start points were scanned, not sorted by value.
/// An empty or non-finite range yields no roots.
///
/// With the `parallel` feature the runs are spread over a rayon pool; the result is identical.
pub fn find_roots_with<T: Value>(
    polynomial: &Polynomial<T>,
    range: RangeInclusive<T>,
    options: &ScanOptions<T>,
) -> Vec<T> {
    let (lo, hi) = (*range.start(), *range.end());
    if !lo.is_finite_value() || !hi.is_finite_value() {
        tracing::debug!(%lo, %hi, "refusing to scan a non-finite interval");
        return Vec::new();
    }

    let starts = Grid::new(range, options.step);
    let start_count = starts.len();
    let dx = polynomial.derivative();
    let candidates = run_starts(polynomial, &dx, starts, &options.newton);

    let (roots, duplicates) = merge_roots(candidates, &(lo..=hi), options.newton.tolerance);
    tracing::debug!(
        %lo,
        %hi,
        starts = start_count,
        roots = roots.len(),
        duplicates,
        "interval scan finished"
    );
    roots
}

#[cfg(not(feature = "parallel"))]
fn run_starts<'a, T: Value>(
    polynomial: &'a Polynomial<T>,
    dx: &'a Polynomial<T>,
    starts: Grid<T>,
    options: &'a NewtonOptions<T>,
) -> impl Iterator<Item = Option<T>> + 'a {
    starts.map(move |x0| newton_from(polynomial, dx, x0, options).ok().map(|c| c.root))
}

#[cfg(feature = "parallel")]
fn run_starts<T: Value>(
    polynomial: &Polynomial<T>,
    dx: &Polynomial<T>,
    starts: Grid<T>,
    options: &NewtonOptions<T>,
) -> Vec<Option<T>> {
    use rayon::prelude::*;

    // Indexed collect keeps start-point order, so the merge below sees the same sequence
    let starts: Vec<T> = starts.collect();
    starts
        .par_iter()
        .map(|&x0| newton_from(polynomial, dx, x0, options).ok().map(|c| c.root))
        .collect()
}

/// Sequential merge of per-start results: range filter, then first-seen deduplication.
///
/// Returns the kept roots and the number of in-range duplicates discarded.
fn merge_roots<T: Value>(
    candidates: impl IntoIterator<Item = Option<T>>,
    range: &RangeInclusive<T>,
    tolerance: T,
) -> (Vec<T>, usize) {
    let mut roots: Vec<T> = Vec::new();
    let mut duplicates = 0usize;
    for root in candidates.into_iter().flatten() {
        if !range.contains(&root) {
            continue;
        }

        if roots.iter().any(|&r| r.distance(root) < tolerance) {
            duplicates += 1;
            continue;
        }

        roots.push(root);
    }

    (roots, duplicates)
}
