//! Lowering configuration.

use crate::types::SimplifyLevel;

/// Default maximum monomial degree a MIQP backend accepts.
pub const DEFAULT_MAX_DEGREE: usize = 2;

/// Options controlling how expressions are lowered into solver rows.
///
/// Every field is optional; `None` means the documented default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LowerConfig {
    /// Simplification applied to terms. `None` keeps every term.
    pub simplify: Option<SimplifyLevel>,
    /// Magnitude at or below which `Light` treats a coefficient as zero.
    /// `None` means exact zero only.
    pub zero_tolerance: Option<f64>,
    /// Highest monomial degree accepted. `None` uses [`DEFAULT_MAX_DEGREE`].
    pub max_degree: Option<usize>,
}

impl LowerConfig {
    /// Create a new configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the simplification level.
    pub fn with_simplify(mut self, level: SimplifyLevel) -> Self {
        self.simplify = Some(level);
        self
    }

    /// Set the zero tolerance used by `SimplifyLevel::Light`.
    pub fn with_zero_tolerance(mut self, tol: f64) -> Self {
        self.zero_tolerance = Some(tol);
        self
    }

    /// Set the highest accepted monomial degree.
    pub fn with_max_degree(mut self, degree: usize) -> Self {
        self.max_degree = Some(degree);
        self
    }

    pub fn simplify_level(&self) -> SimplifyLevel {
        self.simplify.unwrap_or_default()
    }

    pub fn max_degree(&self) -> usize {
        self.max_degree.unwrap_or(DEFAULT_MAX_DEGREE)
    }

    /// Whether a coefficient should be dropped under this configuration.
    pub fn drops(&self, coefficient: f64) -> bool {
        match self.simplify_level() {
            SimplifyLevel::None => false,
            SimplifyLevel::Light => coefficient.abs() <= self.zero_tolerance.unwrap_or(0.0),
        }
    }

    /// Check if this configuration is completely empty (all defaults).
    pub fn is_default(&self) -> bool {
        self.simplify.is_none() && self.zero_tolerance.is_none() && self.max_degree.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_is_default() {
        let config = LowerConfig::new();
        assert!(config.is_default());
        assert_eq!(config.simplify_level(), SimplifyLevel::None);
        assert_eq!(config.max_degree(), DEFAULT_MAX_DEGREE);
    }

    #[test]
    fn test_config_builder_pattern() {
        let config = LowerConfig::new()
            .with_simplify(SimplifyLevel::Light)
            .with_zero_tolerance(1e-9)
            .with_max_degree(3);

        assert!(!config.is_default());
        assert_eq!(config.simplify, Some(SimplifyLevel::Light));
        assert_eq!(config.zero_tolerance, Some(1e-9));
        assert_eq!(config.max_degree(), 3);
    }

    #[test]
    fn test_drops_respects_level() {
        let keep_all = LowerConfig::new();
        assert!(!keep_all.drops(0.0));

        let light = LowerConfig::new().with_simplify(SimplifyLevel::Light);
        assert!(light.drops(0.0));
        assert!(!light.drops(1e-12));

        let tolerant = light.with_zero_tolerance(1e-9);
        assert!(tolerant.drops(-1e-12));
        assert!(!tolerant.drops(1e-6));
    }
}
