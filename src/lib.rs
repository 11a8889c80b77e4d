//! # Polyroot
//! ## Derivatives and roots of polynomials, without the ceremony
//!
//! This crate takes a single-variable polynomial written as a list of
//! `(coefficient, exponent)` terms and lets you:
//! - Differentiate it symbolically
//! - Evaluate it, or its derivative, at any point
//! - Print it as a readable expression like `3x^2 + 2x + 1`
//! - Find its real roots with Newton-Raphson, from one start point or across an interval
//!
//! ```rust
//! use polyroot::{function, roots::{find_roots_in_interval, NewtonOptions}};
//!
//! function!(f(x) = 1 x^2 - 4);
//! assert_eq!(f.equation(), "x^2 - 4");
//! assert_eq!(f.derivative().equation(), "2x");
//!
//! let roots = find_roots_in_interval(&f, -10.0..=10.0, &NewtonOptions::default());
//! assert_eq!(roots.len(), 2); // -2 and 2
//! ```
//!
//! # Core Concepts
//! - A [`Polynomial`] is an ordered list of [`Term`]s.
//!     - Terms keep the order they were given in, and terms with the same exponent are never merged.
//!     - It is immutable: [`Polynomial::derivative`] returns a new polynomial.
//! - [`roots::newton_raphson`] runs plain Newton-Raphson from a single start point.
//!     - It returns `None` when the derivative hits zero or the iteration budget runs out.
//!     - [`roots::try_newton_raphson`] tells those two cases apart.
//! - [`roots::find_roots_in_interval`] starts a run every `0.1` across an interval,
//!   and keeps each distinct root in the order it was found.
//! - [`analysis::Analysis`] bundles a polynomial with its derivative for front ends:
//!   values at a point, the tangent line there, and curve samples for plotting.
//!
//! # Logging
//! The solver emits `tracing` events: `trace` for each Newton step, `debug` for
//! each run outcome and scan summary. Install any `tracing` subscriber to see them.
//!
//! # Features
//! - `parallel`: spread the runs of an interval scan over a rayon thread pool.
//!   Results are identical to the sequential scan.
//!
//! # Testing utilities
//!
//! This crate includes a set of macros for writing tests against polynomials. See [`test`].
//!
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)] // I don't care about this one
#![allow(clippy::similar_names)] //       Clippy does not get to decide what names are similar
#![cfg_attr(docsrs, feature(doc_cfg))]


pub mod analysis;
pub mod display;
pub mod error;
pub mod roots;
pub mod value;

mod polynomial;

pub use display::format_polynomial;
pub use polynomial::{differentiate, evaluate, Polynomial, Term};
pub use roots::{find_roots_in_interval, newton_raphson};

pub use nalgebra;
