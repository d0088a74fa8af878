//! Property-based tests for the expression algebra.

use proptest::prelude::*;

use crate::expr::{Expr, Monomial};
use crate::variable::Variable;

const TOLERANCE: f64 = 1e-9;

fn variable() -> impl Strategy<Value = Variable> {
    prop::sample::select(vec!["a", "b", "c", "d"]).prop_map(Variable::new)
}

// Integer-valued coefficients keep products and sums exact.
fn small_coeff() -> impl Strategy<Value = f64> {
    (-20i32..=20).prop_map(f64::from)
}

fn monomial_factors() -> impl Strategy<Value = Vec<Variable>> {
    prop::collection::vec(variable(), 0..=3)
}

// Small polynomial: up to 4 terms of degree 0-3.
fn small_expr() -> impl Strategy<Value = Expr> {
    prop::collection::vec((monomial_factors(), small_coeff()), 0..=4)
        .prop_map(|terms| Expr::from_terms(terms))
}

proptest! {
    #[test]
    fn monomial_identity_ignores_factor_order(factors in monomial_factors(), seed in any::<u64>()) {
        let mut shuffled = factors.clone();
        // Deterministic rotation + reversal permutation.
        if !shuffled.is_empty() {
            let shift = (seed as usize) % shuffled.len();
            shuffled.rotate_left(shift);
        }
        if seed % 2 == 0 {
            shuffled.reverse();
        }
        prop_assert_eq!(Monomial::new(factors), Monomial::new(shuffled));
    }

    #[test]
    fn stored_keys_are_sorted(e in small_expr(), f in small_expr()) {
        let product = e.times(&f);
        for key in product.terms().keys() {
            prop_assert!(key.variables().windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    #[test]
    fn add_commutative(a in small_expr(), b in small_expr()) {
        let (ab, ba) = (a.plus(&b), b.plus(&a));
        prop_assert_eq!(ab.terms(), ba.terms());
    }

    #[test]
    fn add_associative(a in small_expr(), b in small_expr(), c in small_expr()) {
        let left = a.plus(&b).plus(&c);
        let right = a.plus(&b.plus(&c));
        prop_assert!(left.approx_eq(&right, TOLERANCE));
    }

    #[test]
    fn mul_commutative(a in small_expr(), b in small_expr()) {
        prop_assert!(a.times(&b).approx_eq(&b.times(&a), TOLERANCE));
    }

    #[test]
    fn mul_distributes_over_add(a in small_expr(), b in small_expr(), c in small_expr()) {
        let left = a.plus(&b).times(&c);
        let right = a.times(&c).plus(&b.times(&c));
        prop_assert!(left.approx_eq(&right, TOLERANCE));
    }

    #[test]
    fn scalar_identities(e in small_expr()) {
        prop_assert_eq!(e.times(1), e.clone());
        prop_assert!(e.plus(0).approx_eq(&e, 0.0));
        prop_assert_eq!(e.plus(0).pruned(), e.pruned());
    }

    #[test]
    fn subtraction_cancels(e in small_expr()) {
        prop_assert!(e.minus(&e).pruned().is_empty());
    }

    #[test]
    fn division_inverts_scaling(e in small_expr(), k in 1i32..=8) {
        let scaled = e.times(k);
        let back = scaled.try_div(k);
        prop_assert!(back.is_ok());
        prop_assert!(back.unwrap_or_default().approx_eq(&e, TOLERANCE));
    }

    #[test]
    fn comparison_matches_difference(a in small_expr(), b in small_expr()) {
        let bounded = a.at_most(&b);
        let diff = a.minus(&b);
        prop_assert!(bounded.get(&Monomial::constant()).is_none());
        prop_assert_eq!(bounded.upper(), Some(0.0 - diff.constant()));
        prop_assert_eq!(bounded.lower(), None);
        prop_assert!(bounded.approx_eq(&diff.without_constant().with_bounds(None, bounded.upper()), 0.0));
    }
}
