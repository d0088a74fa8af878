//! Solver boundary for polymodel expressions.
//!
//! Turns finished [`Expr`](polymodel_expr::Expr) values into the row shapes
//! a MIQP backend consumes. The backend itself (problem construction,
//! branch-and-bound, solving) lives elsewhere.
//!
//! - [`lower`]: split an expression into constant, linear and bilinear parts
//! - [`ConstraintRow`]: lowered terms plus `[lower, upper]` row bounds
//! - [`ObjectiveRow`]: lowered terms plus a [`Sense`]; bounds ignored
//! - [`LowerConfig`]: simplification and degree options

mod config;
mod error;
mod lower;
mod types;

pub use config::{DEFAULT_MAX_DEGREE, LowerConfig};
pub use error::LowerError;
pub use lower::{ConstraintRow, LoweredExpr, ObjectiveRow, lower};
pub use types::{Bounds, Sense, SimplifyLevel};
