//! Canonical monomials: sorted products of variables.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::variable::Variable;

/// A product of zero or more variables.
///
/// Factors are always kept sorted, so `x*y` and `y*x` compare, hash and
/// order identically. Repeated factors are kept (`x*x` has degree 2). The
/// empty monomial is the constant factor 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Vec<Variable>", into = "Vec<Variable>")]
pub struct Monomial(Vec<Variable>);

impl Monomial {
    /// Build a monomial from factors in any order.
    pub fn new(factors: impl IntoIterator<Item = Variable>) -> Self {
        let mut factors: Vec<Variable> = factors.into_iter().collect();
        factors.sort();
        Self(factors)
    }

    /// The empty monomial (constant term slot).
    pub fn constant() -> Self {
        Self(Vec::new())
    }

    pub fn single(var: Variable) -> Self {
        Self(vec![var])
    }

    /// Sorted concatenation of both factor lists.
    pub fn product(&self, other: &Monomial) -> Self {
        Self::new(self.0.iter().chain(&other.0).cloned())
    }

    /// Number of factors, counting repeats.
    pub fn degree(&self) -> usize {
        self.0.len()
    }

    pub fn is_constant(&self) -> bool {
        self.0.is_empty()
    }

    pub fn variables(&self) -> &[Variable] {
        &self.0
    }
}

impl From<Vec<Variable>> for Monomial {
    fn from(factors: Vec<Variable>) -> Self {
        Self::new(factors)
    }
}

impl From<Monomial> for Vec<Variable> {
    fn from(monomial: Monomial) -> Self {
        monomial.0
    }
}

impl From<Variable> for Monomial {
    fn from(var: Variable) -> Self {
        Self::single(var)
    }
}

impl<const N: usize> From<[Variable; N]> for Monomial {
    fn from(factors: [Variable; N]) -> Self {
        Self::new(factors)
    }
}

impl<const N: usize> From<[&Variable; N]> for Monomial {
    fn from(factors: [&Variable; N]) -> Self {
        Self::new(factors.into_iter().cloned())
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("1");
        }
        for (idx, var) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("*")?;
            }
            write!(f, "{var}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Monomial;
    use crate::variable::Variable;

    fn vars() -> (Variable, Variable, Variable) {
        (Variable::new("x"), Variable::new("y"), Variable::new("z"))
    }

    #[test]
    fn factor_order_does_not_matter() {
        let (x, y, z) = vars();
        let a = Monomial::new([z.clone(), x.clone(), y.clone()]);
        let b = Monomial::new([y, z, x]);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "x*y*z");
    }

    #[test]
    fn repeated_factors_are_kept() {
        let (x, _, _) = vars();
        let square = Monomial::new([x.clone(), x.clone()]);
        assert_eq!(square.degree(), 2);
        assert_ne!(square, Monomial::single(x));
    }

    #[test]
    fn product_merges_sorted() {
        let (x, y, z) = vars();
        let left = Monomial::new([z.clone(), x.clone()]);
        let right = Monomial::new([y.clone(), x.clone()]);
        let product = left.product(&right);
        assert_eq!(product, Monomial::new([x.clone(), x, y, z]));
        assert_eq!(product.degree(), 4);
    }

    #[test]
    fn constant_is_identity_for_product() {
        let (x, y, _) = vars();
        let m = Monomial::new([y, x]);
        assert_eq!(m.product(&Monomial::constant()), m);
        assert_eq!(Monomial::constant().product(&m), m);
        assert!(Monomial::constant().is_constant());
        assert_eq!(Monomial::constant().to_string(), "1");
    }

    #[test]
    fn deserialization_canonicalizes() {
        let m: Monomial = serde_json::from_str(r#"["y", "x", "y"]"#).unwrap();
        let names: Vec<_> = m.variables().iter().map(Variable::name).collect();
        assert_eq!(names, vec!["x", "y", "y"]);
    }
}
