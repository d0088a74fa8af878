//! Builder functions for constructing expressions from flat term lists.

use crate::expr::core::Expr;
use crate::expr::monomial::Monomial;
use crate::variable::Variable;

/// Build a linear expression from `(variable, coefficient)` pairs.
///
/// Zero coefficients are dropped and repeated variables are merged.
pub fn linear_terms(terms: impl IntoIterator<Item = (Variable, f64)>) -> Expr {
    Expr::from_terms(
        terms
            .into_iter()
            .filter(|(_, coeff)| *coeff != 0.0)
            .map(|(var, coeff)| (Monomial::single(var), coeff)),
    )
}

/// Build a quadratic expression from `((left, right), coefficient)` pairs.
pub fn quadratic_form(terms: impl IntoIterator<Item = ((Variable, Variable), f64)>) -> Expr {
    Expr::from_terms(
        terms
            .into_iter()
            .filter(|(_, coeff)| *coeff != 0.0)
            .map(|((left, right), coeff)| (Monomial::new([left, right]), coeff)),
    )
}

/// Sum many expressions, merging matching monomials.
pub fn linear_sum(exprs: impl IntoIterator<Item = Expr>) -> Expr {
    exprs.into_iter().sum()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::{linear_sum, linear_terms, quadratic_form};
    use crate::Variable;
    use crate::expr::{Expr, Monomial};

    #[test]
    fn linear_terms_filters_zero_coefficients() {
        let x = Variable::new("x");
        let y = Variable::new("y");
        let expr = linear_terms([(x.clone(), 0.0), (y.clone(), 3.5)]);
        assert_eq!(expr.len(), 1);
        assert!(expr.get(&Monomial::single(x)).is_none());
        assert_eq!(expr[&Monomial::single(y)], 3.5);
    }

    #[test]
    fn linear_terms_merges_duplicates() {
        let x = Variable::new("x");
        let expr = linear_terms([(x.clone(), 2.0), (x.clone(), 0.5)]);
        assert_eq!(expr[&Monomial::single(x)], 2.5);
    }

    #[test]
    fn quadratic_form_is_order_independent() {
        let x = Variable::new("x");
        let y = Variable::new("y");
        let expr = quadratic_form([((y.clone(), x.clone()), 1.0), ((x.clone(), y.clone()), 1.0)]);
        assert_eq!(expr.len(), 1);
        assert_eq!(expr[&Monomial::new([x, y])], 2.0);
        assert_eq!(expr.degree(), 2);
    }

    #[test]
    fn linear_sum_merges_terms() {
        let x = Variable::new("x");
        let y = Variable::new("y");
        let summed = linear_sum([
            Expr::term(x.clone(), 1.0),
            Expr::term(y.clone(), 2.0),
            Expr::term(x.clone(), 4.0),
        ]);
        assert_eq!(summed[&Monomial::single(x)], 5.0);
        assert_eq!(summed[&Monomial::single(y)], 2.0);
        assert!(!summed.is_bounded());
    }
}
