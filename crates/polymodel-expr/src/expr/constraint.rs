//! Comparison senses used to turn an expression into a bounded constraint.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonSense {
    LessEqual,
    GreaterEqual,
    Equal,
}

impl ComparisonSense {
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonSense::LessEqual => "le",
            ComparisonSense::GreaterEqual => "ge",
            ComparisonSense::Equal => "eq",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonSense::LessEqual => "<=",
            ComparisonSense::GreaterEqual => ">=",
            ComparisonSense::Equal => "==",
        }
    }

    /// The `(lower, upper)` pair this sense attaches for `threshold`.
    pub fn bounds_for(self, threshold: f64) -> (Option<f64>, Option<f64>) {
        match self {
            ComparisonSense::LessEqual => (None, Some(threshold)),
            ComparisonSense::GreaterEqual => (Some(threshold), None),
            ComparisonSense::Equal => (Some(threshold), Some(threshold)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ComparisonSense;

    #[test]
    fn bounds_follow_sense() {
        assert_eq!(
            ComparisonSense::LessEqual.bounds_for(5.0),
            (None, Some(5.0))
        );
        assert_eq!(
            ComparisonSense::GreaterEqual.bounds_for(2.0),
            (Some(2.0), None)
        );
        assert_eq!(
            ComparisonSense::Equal.bounds_for(3.0),
            (Some(3.0), Some(3.0))
        );
    }

    #[test]
    fn labels() {
        assert_eq!(ComparisonSense::LessEqual.as_str(), "le");
        assert_eq!(ComparisonSense::GreaterEqual.symbol(), ">=");
        assert_eq!(ComparisonSense::Equal.symbol(), "==");
    }
}
