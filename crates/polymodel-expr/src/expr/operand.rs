//! Operand promotion for arithmetic and comparisons.

use serde_json::Value;

use crate::expr::core::Expr;
use crate::expr::error::ExprError;
use crate::variable::Variable;

/// Anything an expression operator accepts on either side.
///
/// Every operator promotes through [`Operand::into_expr`]: a variable
/// becomes a unit-coefficient single-factor expression, a scalar becomes a
/// constant expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Expr(Expr),
    Variable(Variable),
    Scalar(f64),
}

impl Operand {
    pub fn into_expr(self) -> Expr {
        match self {
            Operand::Expr(expr) => expr,
            Operand::Variable(var) => Expr::var(var),
            Operand::Scalar(value) => Expr::from_constant(value),
        }
    }

    /// Short name of the operand kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Expr(_) => "expression",
            Operand::Variable(_) => "variable",
            Operand::Scalar(_) => "number",
        }
    }
}

impl From<Expr> for Operand {
    fn from(expr: Expr) -> Self {
        Operand::Expr(expr)
    }
}

impl From<&Expr> for Operand {
    fn from(expr: &Expr) -> Self {
        Operand::Expr(expr.clone())
    }
}

impl From<Variable> for Operand {
    fn from(var: Variable) -> Self {
        Operand::Variable(var)
    }
}

impl From<&Variable> for Operand {
    fn from(var: &Variable) -> Self {
        Operand::Variable(var.clone())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

// Wider integers (`i64`, `usize`) do not convert to `f64` exactly.
impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

/// Dynamic ingestion: numbers, variable names, or serialized expressions.
impl TryFrom<Value> for Operand {
    type Error = ExprError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(number) => number
                .as_f64()
                .map(Operand::Scalar)
                .ok_or(ExprError::UnsupportedOperand { kind: "number" }),
            Value::String(name) => Ok(Operand::Variable(Variable::from(name))),
            Value::Object(_) => serde_json::from_value::<Expr>(value)
                .map(Operand::Expr)
                .map_err(|_| ExprError::UnsupportedOperand { kind: "object" }),
            Value::Null => Err(ExprError::UnsupportedOperand { kind: "null" }),
            Value::Bool(_) => Err(ExprError::UnsupportedOperand { kind: "bool" }),
            Value::Array(_) => Err(ExprError::UnsupportedOperand { kind: "array" }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::Operand;
    use crate::expr::{ExprError, Monomial};
    use crate::variable::Variable;
    use serde_json::json;

    #[test]
    fn variable_promotes_to_unit_term() {
        let x = Variable::new("x");
        let expr = Operand::from(&x).into_expr();
        assert_eq!(expr.len(), 1);
        assert_eq!(expr[&Monomial::single(x)], 1.0);
    }

    #[test]
    fn scalar_promotes_to_constant() {
        let expr = Operand::from(4).into_expr();
        assert_eq!(expr.constant(), 4.0);
        assert_eq!(expr.degree(), 0);
    }

    #[test]
    fn unsigned_counts_promote_exactly() {
        assert_eq!(Operand::from(7u32), Operand::Scalar(7.0));
        let x = Variable::new("x");
        let scaled = x.to_expr().times(u32::MAX);
        assert_eq!(scaled[&Monomial::single(x)], 4_294_967_295.0);
    }

    #[test]
    fn json_number_and_string() {
        let scalar = Operand::try_from(json!(2.5)).unwrap();
        assert_eq!(scalar, Operand::Scalar(2.5));

        let var = Operand::try_from(json!("x")).unwrap();
        assert_eq!(var, Operand::Variable(Variable::new("x")));
    }

    #[test]
    fn json_object_parses_expression() {
        let operand = Operand::try_from(json!({
            "terms": [[["y", "x"], 2.0]],
            "lower": null,
            "upper": null
        }))
        .unwrap();
        let Operand::Expr(expr) = operand else {
            panic!("expected expression operand");
        };
        let xy = Monomial::new([Variable::new("x"), Variable::new("y")]);
        assert_eq!(expr[&xy], 2.0);
    }

    #[test]
    fn json_rejects_other_kinds() {
        assert_eq!(
            Operand::try_from(json!(null)).unwrap_err(),
            ExprError::UnsupportedOperand { kind: "null" }
        );
        assert_eq!(
            Operand::try_from(json!(true)).unwrap_err(),
            ExprError::UnsupportedOperand { kind: "bool" }
        );
        assert_eq!(
            Operand::try_from(json!([1, 2])).unwrap_err(),
            ExprError::UnsupportedOperand { kind: "array" }
        );
        assert_eq!(
            Operand::try_from(json!({"nonsense": 1})).unwrap_err(),
            ExprError::UnsupportedOperand { kind: "object" }
        );
    }
}
