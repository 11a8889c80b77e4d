//! Error types for polynomial root finding
//!
//! This module defines the failure modes of the Newton-Raphson solver and of
//! the validating option constructors, along with a convenient `Result` alias.
//!
//! Differentiation, evaluation and formatting are total and never fail.

/// Errors that can occur while configuring or running the root finder.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The derivative evaluated to exactly zero, so the Newton update is undefined.
    ///
    /// The solver gives up immediately; it does not perturb `x` and retry.
    #[error("Derivative is zero at x = {x} (iteration {iteration}); cannot continue")]
    ZeroDerivative {
        /// The point at which the derivative vanished
        x: f64,
        /// Zero-based index of the iteration that failed
        iteration: usize,
    },

    /// The iteration budget ran out before two successive estimates were within tolerance.
    #[error("Did not converge within {iterations} iterations (last estimate x = {last})")]
    DidNotConverge {
        /// The iteration budget that was exhausted
        iterations: usize,
        /// The last estimate computed before giving up
        last: f64,
    },

    /// Convergence tolerance must be finite and not negative.
    #[error("Tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(String),

    /// The distance between scan start points must be finite and strictly positive.
    #[error("Scan step must be finite and positive, got {0}")]
    InvalidStep(String),

    /// A numeric value could not be cast to the target type. This is usually a custom type much smaller than f64/f32
    #[error("Failed to cast value to target type")]
    CastFailed,

    /// A polynomial failed a derivative check against another polynomial.
    #[error("f'({x}) = {actual}, but the slope of f there is {expected}")]
    NotDerivative {
        /// The point where the check failed
        x: f64,
        /// Numerical slope of the original function
        expected: f64,
        /// Value of the candidate derivative
        actual: f64,
    },
}

/// Result type for the root finder
pub type Result<T> = std::result::Result<T, Error>;
