//! Property-based tests for polynomials and the interval root scan
//!
//! Tests that:
//! - Derivatives follow the power rule term by term
//! - Evaluation is the plain sum of the stored terms
//! - Formatted output never carries a `+ -` pair
//! - Scanned roots are in range and distinct

use polyroot::{
    roots::{find_roots_in_interval, NewtonOptions},
    Polynomial, Term,
};
use proptest::prelude::*;

fn arb_term() -> impl Strategy<Value = Term> {
    (-20i32..=20, 0u32..6).prop_map(|(c, e)| Term::new(f64::from(c) / 2.0, e))
}

fn arb_polynomial() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec(arb_term(), 0..8).prop_map(Polynomial::from_terms)
}

#[cfg(test)]
mod derivative_properties {
    use super::*;

    proptest! {
        #[test]
        fn derivative_follows_power_rule(p in arb_polynomial()) {
            let expected: Vec<Term> = p
                .terms()
                .iter()
                .filter(|t| t.exponent > 0)
                .map(|t| Term::new(t.coefficient * f64::from(t.exponent), t.exponent - 1))
                .collect();

            let derivative = p.derivative();
            prop_assert_eq!(derivative.terms(), expected.as_slice());
        }

        #[test]
        fn derivative_drops_constants(c in -100.0f64..100.0) {
            let p = Polynomial::from(vec![(c, 0)]);
            prop_assert!(p.derivative().is_empty());
            prop_assert!(p.nth_derivative(2).is_empty());
        }

        #[test]
        fn enough_derivatives_vanish(p in arb_polynomial()) {
            let max_exponent = p.terms().iter().map(|t| t.exponent).max().unwrap_or(0);
            prop_assert!(p.nth_derivative(max_exponent as usize + 1).is_empty());
        }
    }
}

#[cfg(test)]
mod evaluation_properties {
    use super::*;

    proptest! {
        #[test]
        fn evaluation_is_term_sum(p in arb_polynomial(), x in -3.0f64..3.0) {
            let expected: f64 = p
                .terms()
                .iter()
                .map(|t| t.coefficient * x.powi(t.exponent as i32))
                .sum();

            let actual = p.y(x);
            prop_assert!((actual - expected).abs() <= 1e-9 * (1.0 + expected.abs()));
        }

        #[test]
        fn duplicates_contribute_independently(c in -10.0f64..10.0, e in 0u32..5, x in -2.0f64..2.0) {
            let single = Polynomial::from(vec![(c, e)]);
            let doubled = Polynomial::from(vec![(c, e), (c, e)]);
            prop_assert!((doubled.y(x) - 2.0 * single.y(x)).abs() <= 1e-9 * (1.0 + single.y(x).abs()));
        }
    }
}

#[cfg(test)]
mod format_properties {
    use super::*;

    proptest! {
        #[test]
        fn no_plus_minus_pairs(p in arb_polynomial()) {
            let text = p.equation();
            prop_assert!(!text.contains("+ -"));
            let again = p.equation();
            let displayed = p.to_string();
            prop_assert_eq!(&text, &again);
            prop_assert_eq!(&text, &displayed);
        }

        #[test]
        fn zero_terms_are_skipped(p in arb_polynomial()) {
            let non_zero: Vec<Term> = p
                .terms()
                .iter()
                .copied()
                .filter(|t| t.coefficient != 0.0)
                .collect();

            prop_assert_eq!(p.equation(), Polynomial::from_terms(non_zero).equation());
        }
    }
}

#[cfg(test)]
mod scan_properties {
    use super::*;

    proptest! {
        #[test]
        fn roots_in_range_and_distinct(p in arb_polynomial(), lo in -5.0f64..0.0, width in 0.0f64..5.0) {
            let hi = lo + width;
            let options = NewtonOptions::default();
            let roots = find_roots_in_interval(&p, lo..=hi, &options);

            for (i, &r) in roots.iter().enumerate() {
                prop_assert!((lo..=hi).contains(&r), "root {} outside [{}, {}]", r, lo, hi);
                for &other in &roots[..i] {
                    prop_assert!((r - other).abs() >= options.tolerance());
                }
            }
        }

        #[test]
        fn finds_both_roots_of_split_quadratic(a in -5i32..=5, b in -5i32..=5) {
            prop_assume!(a != b);
            let (a, b) = (f64::from(a), f64::from(b));

            // (x - a)(x - b)
            let p = Polynomial::from(vec![(1.0, 2), (-(a + b), 1), (a * b, 0)]);
            let mut roots = find_roots_in_interval(&p, -6.0..=6.0, &NewtonOptions::default());
            roots.sort_by(f64::total_cmp);

            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            prop_assert_eq!(roots.len(), 2);
            prop_assert!((roots[0] - lo).abs() < 1e-6);
            prop_assert!((roots[1] - hi).abs() < 1e-6);
        }
    }
}
