//! Decision variable identities.
//!
//! A [`Variable`] is only a name. Equality, hashing and ordering all go
//! through that name, so two handles created separately for `"x"` are the
//! same monomial factor.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::expr::{ComparisonSense, Expr, Operand};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variable(Arc<str>);

impl Variable {
    /// Create a variable identified by `name`.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Get the name this variable is keyed by.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Promote to a single-monomial expression with coefficient 1.0.
    pub fn to_expr(&self) -> Expr {
        Expr::var(self.clone())
    }

    /// `self <= rhs`; see [`Expr::at_most`].
    pub fn at_most(&self, rhs: impl Into<Operand>) -> Expr {
        self.to_expr().at_most(rhs)
    }

    /// `self >= rhs`; see [`Expr::at_least`].
    pub fn at_least(&self, rhs: impl Into<Operand>) -> Expr {
        self.to_expr().at_least(rhs)
    }

    /// `self == rhs`; see [`Expr::equal_to`].
    pub fn equal_to(&self, rhs: impl Into<Operand>) -> Expr {
        self.to_expr().equal_to(rhs)
    }

    pub fn compare(&self, rhs: impl Into<Operand>, sense: ComparisonSense) -> Expr {
        self.to_expr().compare(rhs, sense)
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
