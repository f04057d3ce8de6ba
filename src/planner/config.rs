//! Planner configuration
//!
//! The one externally configurable behavior of the planner: a toggle
//! disabling primary-key query optimization entirely. Modeled as an
//! explicit value threaded into planning, not ambient global state, so
//! classification stays a pure function of its inputs.

use serde::{Deserialize, Serialize};

/// Configuration for the routing planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// When false, classification and finalization are no-ops and every
    /// query takes the scatter-gather path.
    pub optimize_pk_queries: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            optimize_pk_queries: true,
        }
    }
}

impl PlannerConfig {
    /// Config with primary-key optimization enabled
    pub fn enabled() -> Self {
        Self::default()
    }

    /// Config with primary-key optimization disabled
    pub fn disabled() -> Self {
        Self {
            optimize_pk_queries: false,
        }
    }

    /// Returns true if primary-key optimization is enabled
    pub fn is_enabled(&self) -> bool {
        self.optimize_pk_queries
    }
}
