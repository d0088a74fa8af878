//! Core expression type: a polynomial over variables plus optional bounds.
//!
//! Terms live in a `BTreeMap` keyed by canonical [`Monomial`]s, so iteration
//! order is deterministic and `x*y`/`y*x` always land on the same entry.
//! Bounds stay unset for plain algebraic values; the comparison methods
//! (`at_most`, `at_least`, `equal_to`) move the constant term out of the
//! polynomial and into `lower`/`upper`.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::expr::constraint::ComparisonSense;
use crate::expr::error::ExprError;
use crate::expr::monomial::Monomial;
use crate::expr::operand::Operand;
use crate::variable::Variable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ExprRepr", into = "ExprRepr")]
pub struct Expr {
    terms: BTreeMap<Monomial, f64>,
    lower: Option<f64>,
    upper: Option<f64>,
}

/// Wire shape: monomial keys are sequences, which JSON maps cannot hold.
#[derive(Serialize, Deserialize)]
struct ExprRepr {
    terms: Vec<(Monomial, f64)>,
    #[serde(default)]
    lower: Option<f64>,
    #[serde(default)]
    upper: Option<f64>,
}

impl From<ExprRepr> for Expr {
    fn from(repr: ExprRepr) -> Self {
        Expr::from_terms(repr.terms).with_bounds(repr.lower, repr.upper)
    }
}

impl From<Expr> for ExprRepr {
    fn from(expr: Expr) -> Self {
        Self {
            terms: expr.terms.into_iter().collect(),
            lower: expr.lower,
            upper: expr.upper,
        }
    }
}

impl Expr {
    // ── Constructors ────────────────────────────────────────

    /// The zero expression: no terms, no bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw `(factors, coefficient)` pairs.
    ///
    /// Factor lists may come in any order; each is sorted, and coefficients
    /// of lists that coincide after sorting are summed.
    pub fn from_terms<I, M>(terms: I) -> Self
    where
        I: IntoIterator<Item = (M, f64)>,
        M: Into<Monomial>,
    {
        let mut merged: BTreeMap<Monomial, f64> = BTreeMap::new();
        for (monomial, coeff) in terms {
            *merged.entry(monomial.into()).or_insert(0.0) += coeff;
        }
        Self {
            terms: merged,
            ..Default::default()
        }
    }

    /// Just a constant, stored in the empty-monomial slot.
    pub fn from_constant(constant: f64) -> Self {
        Self::from_terms([(Monomial::constant(), constant)])
    }

    /// Single linear term: coeff * var.
    pub fn term(var: Variable, coeff: f64) -> Self {
        Self::from_terms([(Monomial::single(var), coeff)])
    }

    /// Single variable with coefficient 1.0.
    pub fn var(var: Variable) -> Self {
        Self::term(var, 1.0)
    }

    /// Copy with explicitly supplied bounds.
    pub fn with_bounds(mut self, lower: Option<f64>, upper: Option<f64>) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    // ── Accessors ───────────────────────────────────────────

    pub fn terms(&self) -> &BTreeMap<Monomial, f64> {
        &self.terms
    }

    pub fn into_terms(self) -> BTreeMap<Monomial, f64> {
        self.terms
    }

    pub fn get(&self, monomial: &Monomial) -> Option<f64> {
        self.terms.get(monomial).copied()
    }

    /// Coefficient of `monomial`, 0.0 when absent.
    pub fn coefficient(&self, monomial: &Monomial) -> f64 {
        self.get(monomial).unwrap_or(0.0)
    }

    pub fn constant(&self) -> f64 {
        self.coefficient(&Monomial::constant())
    }

    pub fn lower(&self) -> Option<f64> {
        self.lower
    }

    pub fn upper(&self) -> Option<f64> {
        self.upper
    }

    pub fn is_bounded(&self) -> bool {
        self.lower.is_some() || self.upper.is_some()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Max degree of any stored monomial (0 = constant only).
    pub fn degree(&self) -> usize {
        self.terms.keys().map(Monomial::degree).max().unwrap_or(0)
    }

    /// Distinct variables appearing in any term.
    pub fn variables(&self) -> BTreeSet<&Variable> {
        self.terms
            .keys()
            .flat_map(|monomial| monomial.variables())
            .collect()
    }

    // ── Arithmetic ──────────────────────────────────────────

    /// `self + rhs`. The result never carries bounds.
    pub fn plus(&self, rhs: impl Into<Operand>) -> Self {
        match rhs.into() {
            Operand::Scalar(value) => {
                let mut terms = self.terms.clone();
                *terms.entry(Monomial::constant()).or_insert(0.0) += value;
                Self {
                    terms,
                    ..Default::default()
                }
            }
            other => self.add_expr(&other.into_expr()),
        }
    }

    /// `self + (-1) * rhs`.
    pub fn minus(&self, rhs: impl Into<Operand>) -> Self {
        self.add_expr(&rhs.into().into_expr().scale(-1.0))
    }

    /// `self * rhs`, expanding products of sums.
    pub fn times(&self, rhs: impl Into<Operand>) -> Self {
        match rhs.into() {
            Operand::Scalar(value) => self.scale(value),
            other => self.mul_expr(&other.into_expr()),
        }
    }

    /// `self / rhs` for a numeric `rhs` only.
    pub fn try_div(&self, rhs: impl Into<Operand>) -> Result<Self, ExprError> {
        match rhs.into() {
            Operand::Scalar(value) if value == 0.0 => Err(ExprError::DivisionByZero),
            Operand::Scalar(value) => Ok(self.scale(1.0 / value)),
            other => Err(ExprError::UnsupportedDivisor { kind: other.kind() }),
        }
    }

    /// Scale every coefficient; monomials are unchanged.
    pub fn scale(&self, by: f64) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(monomial, coeff)| (monomial.clone(), coeff * by))
                .collect(),
            ..Default::default()
        }
    }

    fn add_expr(&self, other: &Expr) -> Self {
        let mut terms = self.terms.clone();
        for (monomial, coeff) in &other.terms {
            *terms.entry(monomial.clone()).or_insert(0.0) += coeff;
        }
        Self {
            terms,
            ..Default::default()
        }
    }

    fn mul_expr(&self, other: &Expr) -> Self {
        let mut terms: BTreeMap<Monomial, f64> = BTreeMap::new();
        for (left, left_coeff) in &self.terms {
            for (right, right_coeff) in &other.terms {
                *terms.entry(left.product(right)).or_insert(0.0) += left_coeff * right_coeff;
            }
        }
        Self {
            terms,
            ..Default::default()
        }
    }

    // ── Comparison methods (produce bounded expressions) ────

    /// Build `self <sense> rhs` as a bounded expression.
    ///
    /// Computes `self - rhs`, removes its constant term `k`, and sets the
    /// bound(s) selected by `sense` to `-k`.
    pub fn compare(&self, rhs: impl Into<Operand>, sense: ComparisonSense) -> Self {
        let mut expr = self.minus(rhs);
        let constant = expr.terms.remove(&Monomial::constant()).unwrap_or(0.0);
        let (lower, upper) = sense.bounds_for(0.0 - constant);
        expr.lower = lower;
        expr.upper = upper;
        tracing::trace!(
            component = "expr",
            operation = "compare",
            sense = sense.as_str(),
            terms = expr.terms.len(),
            lower = ?expr.lower,
            upper = ?expr.upper,
            "Built bounded expression"
        );
        expr
    }

    /// `self <= rhs`.
    pub fn at_most(&self, rhs: impl Into<Operand>) -> Self {
        self.compare(rhs, ComparisonSense::LessEqual)
    }

    /// `self >= rhs`.
    pub fn at_least(&self, rhs: impl Into<Operand>) -> Self {
        self.compare(rhs, ComparisonSense::GreaterEqual)
    }

    /// `self == rhs`.
    pub fn equal_to(&self, rhs: impl Into<Operand>) -> Self {
        self.compare(rhs, ComparisonSense::Equal)
    }

    // ── Normalization helpers ───────────────────────────────

    /// Copy without the constant slot; bounds are kept.
    pub fn without_constant(&self) -> Self {
        let mut copy = self.clone();
        copy.terms.remove(&Monomial::constant());
        copy
    }

    /// Copy with exact-zero coefficients removed; bounds are kept.
    pub fn pruned(&self) -> Self {
        let mut copy = self.clone();
        copy.terms.retain(|_, coeff| *coeff != 0.0);
        copy
    }

    /// Coefficient-wise comparison within `tolerance`, treating absent
    /// monomials as zero. Bounds are compared the same way.
    pub fn approx_eq(&self, other: &Expr, tolerance: f64) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() <= tolerance;
        let bounds_match = |a: Option<f64>, b: Option<f64>| match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => close(a, b),
            _ => false,
        };

        let keys: BTreeSet<&Monomial> = self.terms.keys().chain(other.terms.keys()).collect();
        keys.into_iter()
            .all(|key| close(self.coefficient(key), other.coefficient(key)))
            && bounds_match(self.lower, other.lower)
            && bounds_match(self.upper, other.upper)
    }

    /// Value of the polynomial (constant included) under an assignment.
    pub fn evaluate<F>(&self, value_of: F) -> Result<f64, ExprError>
    where
        F: Fn(&Variable) -> Option<f64>,
    {
        let mut total = 0.0;
        for (monomial, coeff) in &self.terms {
            let mut product = *coeff;
            for var in monomial.variables() {
                let value = value_of(var).ok_or_else(|| ExprError::UnknownVariable {
                    name: var.name().to_string(),
                })?;
                product *= value;
            }
            total += product;
        }
        Ok(total)
    }
}

impl std::ops::Index<&Monomial> for Expr {
    type Output = f64;

    /// Panics if `monomial` has no entry, like `BTreeMap` indexing.
    fn index(&self, monomial: &Monomial) -> &Self::Output {
        &self.terms[monomial]
    }
}

impl<T: Into<Operand>> std::iter::Sum<T> for Expr {
    fn sum<I: Iterator<Item = T>>(iter: I) -> Self {
        iter.fold(Expr::new(), |acc, item| acc.plus(item))
    }
}

// ── Display ─────────────────────────────────────────────────

pub(crate) fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let rendered = if value.is_sign_negative() { "-inf" } else { "inf" };
        return rendered.to_string();
    }
    let mut rendered = format!("{value:.12}");
    while rendered.ends_with('0') {
        rendered.pop();
    }
    if rendered.ends_with('.') {
        rendered.pop();
    }
    if rendered == "-0" {
        rendered.remove(0);
    }
    rendered
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranged = match (self.lower, self.upper) {
            (Some(lower), Some(upper)) if lower != upper => {
                write!(f, "{} <= ", format_number(lower))?;
                Some(upper)
            }
            _ => None,
        };

        // Variable terms first, constant last.
        let ordered = self
            .terms
            .iter()
            .filter(|(monomial, coeff)| !monomial.is_constant() && **coeff != 0.0)
            .chain(
                self.terms
                    .get_key_value(&Monomial::constant())
                    .filter(|(_, coeff)| **coeff != 0.0),
            );

        let mut written = false;
        for (monomial, coeff) in ordered {
            let magnitude = coeff.abs();
            match (written, *coeff < 0.0) {
                (false, true) => f.write_str("-")?,
                (false, false) => {}
                (true, true) => f.write_str(" - ")?,
                (true, false) => f.write_str(" + ")?,
            }
            if monomial.is_constant() {
                f.write_str(&format_number(magnitude))?;
            } else if magnitude == 1.0 {
                write!(f, "{monomial}")?;
            } else {
                write!(f, "{} {monomial}", format_number(magnitude))?;
            }
            written = true;
        }
        if !written {
            f.write_str("0")?;
        }

        match (self.lower, self.upper, ranged) {
            (_, _, Some(upper)) => write!(f, " <= {}", format_number(upper)),
            (None, None, _) => Ok(()),
            (None, Some(upper), _) => write!(f, " <= {}", format_number(upper)),
            (Some(lower), None, _) => write!(f, " >= {}", format_number(lower)),
            (Some(_), Some(upper), None) => write!(f, " == {}", format_number(upper)),
        }
    }
}
