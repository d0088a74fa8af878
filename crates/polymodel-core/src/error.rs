//! Lowering error types.

use polymodel_expr::Monomial;

/// Errors raised while reshaping an expression into solver rows.
#[derive(Debug, Clone, PartialEq)]
pub enum LowerError {
    /// A monomial exceeds the configured maximum degree.
    DegreeTooHigh {
        monomial: Monomial,
        max_degree: usize,
    },
    /// A coefficient or constant is NaN or infinite.
    InvalidCoefficient { coefficient: f64 },
    /// Row bounds are NaN or crossed.
    InvalidBounds { lower: f64, upper: f64 },
}

impl LowerError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            LowerError::DegreeTooHigh { .. } => "LOWER_DEGREE_TOO_HIGH",
            LowerError::InvalidCoefficient { .. } => "LOWER_INVALID_COEFFICIENT",
            LowerError::InvalidBounds { .. } => "LOWER_INVALID_BOUNDS",
        }
    }
}

impl std::fmt::Display for LowerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LowerError::DegreeTooHigh {
                monomial,
                max_degree,
            } => write!(
                f,
                "[{}] Term {} has degree {} (max {})",
                self.code(),
                monomial,
                monomial.degree(),
                max_degree
            ),
            LowerError::InvalidCoefficient { coefficient } => write!(
                f,
                "[{}] Coefficient must be finite (got {})",
                self.code(),
                coefficient
            ),
            LowerError::InvalidBounds { lower, upper } => write!(
                f,
                "[{}] Row bounds invalid: lower ({}) > upper ({})",
                self.code(),
                lower,
                upper
            ),
        }
    }
}

impl std::error::Error for LowerError {}
