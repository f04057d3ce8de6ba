//! Planner error types
//!
//! Unrecognized or unsupported node shapes are policy decisions ("not
//! optimizable"), never errors. The only failure that propagates out of
//! classification is a value resolution that itself fails; it aborts
//! planning for the statement.

use thiserror::Error;

/// Result type for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Errors raised while resolving comparison values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// A `Parameter` node referenced an index with no bound value
    #[error("parameter ${} is not bound ({bound} parameter(s) supplied)", .index + 1)]
    UnboundParameter { index: usize, bound: usize },
}

impl PlannerError {
    /// Creates an unbound-parameter error
    pub fn unbound_parameter(index: usize, bound: usize) -> Self {
        PlannerError::UnboundParameter { index, bound }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_parameter_display() {
        let err = PlannerError::unbound_parameter(2, 1);
        let display = format!("{}", err);
        assert!(display.contains("$3"));
        assert!(display.contains("1 parameter(s)"));
    }
}
