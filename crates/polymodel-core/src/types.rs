use serde::{Deserialize, Serialize};

/// Optimization sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sense {
    Minimize,
    Maximize,
}

impl Sense {
    pub fn as_str(self) -> &'static str {
        match self {
            Sense::Minimize => "minimize",
            Sense::Maximize => "maximize",
        }
    }
}

/// Simplification level for expression lowering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SimplifyLevel {
    /// Keep every stored term, including zero coefficients.
    #[default]
    None,
    /// Drop terms whose coefficient is within the zero tolerance.
    Light,
}

impl SimplifyLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SimplifyLevel::None => "none",
            SimplifyLevel::Light => "light",
        }
    }
}

/// Row bounds as a solver sees them; an unset side is infinite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Map optional bounds onto `[-inf, inf]`.
    pub fn from_options(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self {
            lower: lower.unwrap_or(f64::NEG_INFINITY),
            upper: upper.unwrap_or(f64::INFINITY),
        }
    }

    /// Both sides unbounded.
    pub fn free() -> Self {
        Self::from_options(None, None)
    }

    pub fn is_free(&self) -> bool {
        self.lower == f64::NEG_INFINITY && self.upper == f64::INFINITY
    }

    pub fn is_valid(&self) -> bool {
        !self.lower.is_nan() && !self.upper.is_nan() && self.lower <= self.upper
    }

    /// Shift both sides by `-offset`, moving a constant across the relation.
    pub fn shifted(&self, offset: f64) -> Self {
        Self {
            lower: self.lower - offset,
            upper: self.upper - offset,
        }
    }
}
