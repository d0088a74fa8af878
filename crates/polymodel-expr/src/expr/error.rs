//! Expression construction errors.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// Operand is not an expression, variable, or number.
    UnsupportedOperand { kind: &'static str },
    /// Scalar divisor was zero.
    DivisionByZero,
    /// Divisor was an expression or variable.
    UnsupportedDivisor { kind: &'static str },
    /// Evaluation hit a variable with no assigned value.
    UnknownVariable { name: String },
}

impl ExprError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ExprError::UnsupportedOperand { .. } => "EXPR_UNSUPPORTED_OPERAND",
            ExprError::DivisionByZero => "EXPR_DIVISION_BY_ZERO",
            ExprError::UnsupportedDivisor { .. } => "EXPR_UNSUPPORTED_DIVISOR",
            ExprError::UnknownVariable { .. } => "EXPR_UNKNOWN_VARIABLE",
        }
    }
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExprError::UnsupportedOperand { kind } => write!(
                f,
                "[{}] expected an Expr, Variable, or numeric constant (got {})",
                self.code(),
                kind
            ),
            ExprError::DivisionByZero => write!(f, "[{}] division by zero", self.code()),
            ExprError::UnsupportedDivisor { kind } => write!(
                f,
                "[{}] only division by a numeric constant is supported (got {})",
                self.code(),
                kind
            ),
            ExprError::UnknownVariable { name } => write!(
                f,
                "[{}] no value assigned to variable '{}'",
                self.code(),
                name
            ),
        }
    }
}

impl std::error::Error for ExprError {}

#[cfg(test)]
mod tests {
    use super::ExprError;

    #[test]
    fn error_code_is_stable() {
        assert_eq!(
            ExprError::UnsupportedOperand { kind: "null" }.code(),
            "EXPR_UNSUPPORTED_OPERAND"
        );
        assert_eq!(ExprError::DivisionByZero.code(), "EXPR_DIVISION_BY_ZERO");
        assert_eq!(
            ExprError::UnsupportedDivisor { kind: "variable" }.code(),
            "EXPR_UNSUPPORTED_DIVISOR"
        );
        assert_eq!(
            ExprError::UnknownVariable {
                name: "x".to_string()
            }
            .code(),
            "EXPR_UNKNOWN_VARIABLE"
        );
    }

    #[test]
    fn display_prefixes_error_code() {
        let rendered = ExprError::DivisionByZero.to_string();
        assert!(rendered.starts_with("[EXPR_DIVISION_BY_ZERO]"));

        let rendered = ExprError::UnsupportedOperand { kind: "bool" }.to_string();
        assert!(rendered.contains("got bool"));
    }
}
