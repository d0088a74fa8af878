//! Expression types for optimization modeling.
//!
//! - `monomial`  : Monomial: sorted product of variables
//! - `core`      : Expr: monomial → coefficient map plus optional bounds
//! - `operand`   : Operand: promotion of expressions, variables, numbers
//! - `ops`       : Operator overloads
//! - `constraint`: ComparisonSense used by the bound-building methods
//! - `builders`  : Flat term-list constructors
//! - `error`     : Expression errors

pub mod builders;
pub mod constraint;
pub mod core;
pub mod error;
pub mod monomial;
pub mod operand;
mod ops;

pub use builders::{linear_sum, linear_terms, quadratic_form};
pub use constraint::ComparisonSense;
pub use self::core::Expr;
pub use error::ExprError;
pub use monomial::Monomial;
pub use operand::Operand;
