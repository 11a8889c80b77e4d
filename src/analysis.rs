//! Request-scoped analysis of one polynomial.
//!
//! An [`Analysis`] bundles everything a front end usually asks for about a
//! function: its derivative, both expressions as text, values at a point, the
//! tangent line there, curve samples for plotting, and roots on an interval.
//!
//! It is an immutable value built once per request and passed around explicitly;
//! nothing is cached between requests.
//!
//! # Example
//! ```
//! # use polyroot::{analysis::Analysis, Polynomial};
//! let analysis = Analysis::new(Polynomial::from(vec![(1.0, 2)])); // x^2
//! assert_eq!(analysis.expression(), "x^2");
//! assert_eq!(analysis.derivative_expression(), "2x");
//!
//! let at_one = analysis.at(1.0);
//! assert_eq!(at_one.point(), (1.0, 1.0));
//! assert_eq!(at_one.tangent().equation(), "y = 2 * (x - 1) + 1");
//! ```
use std::ops::RangeInclusive;

use crate::{
    error::Result,
    polynomial::Polynomial,
    roots::{self, ScanOptions},
    value::{Linspace, Value},
};

/// Default half-width of the sampling window around a point
pub const DEFAULT_HALF_WIDTH: f64 = 10.0;

/// Default number of samples in a window
pub const DEFAULT_SAMPLES: usize = 1000;

/// Sampling window used by [`Analysis::curve`] and [`TangentLine::sample`].
///
/// The window around a point `a` is `[a - half_width, a + half_width]`, covered by
/// `samples` evenly spaced points with both ends included.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisOptions<T: Value = f64> {
    /// Distance from the point of interest to either end of the window
    pub half_width: T,

    /// Number of sample points
    pub samples: usize,
}
impl<T: Value> AnalysisOptions<T> {
    /// The sampling window around `a`
    pub fn window(&self, a: T) -> RangeInclusive<T> {
        (a - self.half_width)..=(a + self.half_width)
    }

    fn xs(&self, a: T) -> Linspace<T> {
        Linspace::new(self.window(a), self.samples)
    }
}
impl<T: Value> Default for AnalysisOptions<T> {
    fn default() -> Self {
        Self {
            half_width: T::try_cast(DEFAULT_HALF_WIDTH).unwrap_or(T::one()),
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// A polynomial together with its derivative and their rendered expressions.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Analysis<T: Value = f64> {
    function: Polynomial<T>,
    derivative: Polynomial<T>,
    expression: String,
    derivative_expression: String,
}
impl<T: Value> Analysis<T> {
    /// Differentiates and formats `function` once, up front
    pub fn new(function: Polynomial<T>) -> Self {
        let derivative = function.derivative();
        let expression = function.equation();
        let derivative_expression = derivative.equation();
        tracing::debug!(f = %expression, f_prime = %derivative_expression, "new analysis");

        Self {
            function,
            derivative,
            expression,
            derivative_expression,
        }
    }

    /// The function `f`
    pub fn function(&self) -> &Polynomial<T> {
        &self.function
    }

    /// The derivative `f'`
    pub fn derivative(&self) -> &Polynomial<T> {
        &self.derivative
    }

    /// `f` as text
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// `f'` as text
    pub fn derivative_expression(&self) -> &str {
        &self.derivative_expression
    }

    /// Evaluates `f` and `f'` at `a`
    pub fn at(&self, a: T) -> PointAnalysis<T> {
        PointAnalysis {
            x: a,
            y: self.function.y(a),
            slope: self.derivative.y(a),
        }
    }

    /// Samples `f` over the window around `a`
    pub fn curve(&self, a: T, options: &AnalysisOptions<T>) -> Vec<(T, T)> {
        self.function.solve(options.xs(a))
    }

    /// Distinct real roots of `f` on `range`. See [`roots::find_roots_with`].
    pub fn roots(&self, range: RangeInclusive<T>, options: &ScanOptions<T>) -> Vec<T> {
        roots::find_roots_with(&self.function, range, options)
    }

    /// Newton-Raphson from a single start. See [`roots::try_newton_raphson`].
    ///
    /// # Errors
    /// Fails if the derivative vanishes or the run does not converge.
    pub fn root_from(&self, x0: T, options: &roots::NewtonOptions<T>) -> Result<T> {
        roots::try_newton_raphson(&self.function, x0, options).map(|c| c.root)
    }
}

/// Values of a function and its derivative at one point.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointAnalysis<T: Value = f64> {
    /// The point `a`
    pub x: T,

    /// `f(a)`
    pub y: T,

    /// `f'(a)`
    pub slope: T,
}
impl<T: Value> PointAnalysis<T> {
    /// The point `P(a, f(a))`
    pub fn point(&self) -> (T, T) {
        (self.x, self.y)
    }

    /// The tangent line to `f` at `P(a, f(a))`
    pub fn tangent(&self) -> TangentLine<T> {
        TangentLine {
            x0: self.x,
            y0: self.y,
            slope: self.slope,
        }
    }
}

/// The line `y = slope·(x - x0) + y0`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TangentLine<T: Value = f64> {
    /// x-coordinate of the point of tangency
    pub x0: T,

    /// y-coordinate of the point of tangency
    pub y0: T,

    /// Slope of the line
    pub slope: T,
}
impl<T: Value> TangentLine<T> {
    /// Evaluates the line at `x`
    pub fn y(&self, x: T) -> T {
        self.slope * (x - self.x0) + self.y0
    }

    /// The line as text, in point-slope form.
    ///
    /// Values are written as-is, so negative values produce `- -` style output:
    /// `y = -2 * (x - -1) + 7`.
    #[must_use]
    pub fn equation(&self) -> String {
        format!("y = {} * (x - {}) + {}", self.slope, self.x0, self.y0)
    }

    /// Samples the line over the window around its point of tangency
    pub fn sample(&self, options: &AnalysisOptions<T>) -> Vec<(T, T)> {
        options.xs(self.x0).map(|x| (x, self.y(x))).collect()
    }
}

impl<T: Value> std::fmt::Display for TangentLine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.equation())
    }
}
