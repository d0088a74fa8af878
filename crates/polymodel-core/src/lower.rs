//! Lowering finished expressions into the arrays a MIQP backend ingests.
//!
//! A backend wants a constant, linear `(var, coef)` pairs and bilinear
//! `(var1, var2, coef)` triples per row. Degree partitioning happens only
//! here; the expression algebra itself is degree-agnostic.

use polymodel_expr::{Expr, Monomial, Variable};
use serde::Serialize;

use crate::config::LowerConfig;
use crate::error::LowerError;
use crate::types::{Bounds, Sense};

/// An expression split by degree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoweredExpr {
    pub constant: f64,
    pub linear: Vec<(Variable, f64)>,
    pub bilinear: Vec<(Variable, Variable, f64)>,
    /// Degree 3+ terms; only populated when the configured max degree allows.
    pub higher: Vec<(Monomial, f64)>,
}

impl LoweredExpr {
    /// Max degree of any lowered term (0 = constant only).
    pub fn degree(&self) -> usize {
        if let Some(max) = self.higher.iter().map(|(m, _)| m.degree()).max() {
            max
        } else if !self.bilinear.is_empty() {
            2
        } else {
            usize::from(!self.linear.is_empty())
        }
    }

    pub fn is_linear(&self) -> bool {
        self.degree() <= 1
    }

    /// Number of variable terms (constant excluded).
    pub fn term_count(&self) -> usize {
        self.linear.len() + self.bilinear.len() + self.higher.len()
    }
}

/// Split `expr` into constant, linear, bilinear and higher-degree parts.
///
/// Bounds on `expr` are not consulted.
pub fn lower(expr: &Expr, config: &LowerConfig) -> Result<LoweredExpr, LowerError> {
    let max_degree = config.max_degree();
    let mut lowered = LoweredExpr::default();

    for (monomial, &coefficient) in expr.terms() {
        if !coefficient.is_finite() {
            return Err(LowerError::InvalidCoefficient { coefficient });
        }
        if config.drops(coefficient) {
            continue;
        }
        if monomial.degree() > max_degree {
            return Err(LowerError::DegreeTooHigh {
                monomial: monomial.clone(),
                max_degree,
            });
        }
        match monomial.variables() {
            [] => lowered.constant += coefficient,
            [var] => lowered.linear.push((var.clone(), coefficient)),
            [left, right] => lowered
                .bilinear
                .push((left.clone(), right.clone(), coefficient)),
            _ => lowered.higher.push((monomial.clone(), coefficient)),
        }
    }

    tracing::trace!(
        component = "lower",
        operation = "lower",
        status = "success",
        simplify_level = config.simplify_level().as_str(),
        linear = lowered.linear.len(),
        bilinear = lowered.bilinear.len(),
        higher = lowered.higher.len(),
        "Lowered expression"
    );
    Ok(lowered)
}

/// A constraint row: variable terms and the bounds they must respect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstraintRow {
    terms: LoweredExpr,
    bounds: Bounds,
}

impl ConstraintRow {
    /// Lower a bounded expression into a row.
    ///
    /// Unset bounds become infinite. A constant still present in the terms
    /// (possible when bounds were supplied explicitly) is moved across into
    /// the bounds.
    pub fn from_expr(expr: &Expr, config: &LowerConfig) -> Result<Self, LowerError> {
        let mut terms = lower(expr, config)?;
        let bounds = Bounds::from_options(expr.lower(), expr.upper()).shifted(terms.constant);
        terms.constant = 0.0;

        if !bounds.is_valid() {
            tracing::debug!(
                component = "lower",
                operation = "constraint_row",
                status = "error",
                lower = bounds.lower,
                upper = bounds.upper,
                "Rejected constraint with invalid bounds"
            );
            return Err(LowerError::InvalidBounds {
                lower: bounds.lower,
                upper: bounds.upper,
            });
        }

        tracing::debug!(
            component = "lower",
            operation = "constraint_row",
            status = "success",
            terms = terms.term_count(),
            lower = bounds.lower,
            upper = bounds.upper,
            "Lowered constraint row"
        );
        Ok(Self { terms, bounds })
    }

    pub fn terms(&self) -> &LoweredExpr {
        &self.terms
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn into_parts(self) -> (LoweredExpr, Bounds) {
        (self.terms, self.bounds)
    }
}

/// An objective: lowered terms plus a direction. Bounds are ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveRow {
    sense: Sense,
    terms: LoweredExpr,
}

impl ObjectiveRow {
    pub fn from_expr(expr: &Expr, sense: Sense, config: &LowerConfig) -> Result<Self, LowerError> {
        if expr.is_bounded() {
            tracing::debug!(
                component = "lower",
                operation = "objective_row",
                lower = ?expr.lower(),
                upper = ?expr.upper(),
                "Ignoring bounds on objective expression"
            );
        }
        let terms = lower(expr, config)?;
        tracing::debug!(
            component = "lower",
            operation = "objective_row",
            status = "success",
            sense = sense.as_str(),
            terms = terms.term_count(),
            "Lowered objective"
        );
        Ok(Self { sense, terms })
    }

    pub fn minimize(expr: &Expr, config: &LowerConfig) -> Result<Self, LowerError> {
        Self::from_expr(expr, Sense::Minimize, config)
    }

    pub fn maximize(expr: &Expr, config: &LowerConfig) -> Result<Self, LowerError> {
        Self::from_expr(expr, Sense::Maximize, config)
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn terms(&self) -> &LoweredExpr {
        &self.terms
    }

    /// Constant objective offset.
    pub fn offset(&self) -> f64 {
        self.terms.constant
    }
}
