//! Polynomial expression algebra for mixed-integer and quadratic modeling.
//!
//! Write sums, products and scalar multiples over [`Variable`]s with plain
//! operators, then turn them into bounded constraints with
//! [`Expr::at_most`], [`Expr::at_least`] or [`Expr::equal_to`]:
//!
//! ```
//! use polymodel_expr::{Monomial, Variable};
//!
//! let x = Variable::new("x");
//! let y = Variable::new("y");
//!
//! let constraint = (&x + &y).at_most(5.0);
//! assert_eq!(constraint.upper(), Some(5.0));
//! assert_eq!(constraint[&Monomial::single(x)], 1.0);
//! ```

pub mod expr;
pub mod variable;

#[cfg(test)]
mod proptests;

pub use expr::{
    ComparisonSense, Expr, ExprError, Monomial, Operand, linear_sum, linear_terms, quadratic_form,
};
pub use variable::Variable;
