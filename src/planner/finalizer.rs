//! Late-binding plan finalization
//!
//! The matcher runs on the WHERE clause alone; whether a multi-get is
//! actually executable depends on the rest of the statement. Once the
//! full statement is assembled this pass either keeps the multi-get
//! decision or demotes its values to plain routing values.

use crate::statement::StatementShape;

use super::config::PlannerConfig;
use super::result::{Decision, PlanningResult};

/// Final actions on a statement's planning results.
pub struct PlanFinalizer;

impl PlanFinalizer {
    /// Runs all finalization steps. A no-op when the optimization
    /// toggle is off.
    pub fn finalize(config: &PlannerConfig, shape: &StatementShape, result: &mut PlanningResult) {
        if config.is_enabled() {
            Self::finalize_multi_get(shape, result);
        }
    }

    /// Demotes the multi-get entry to routing values when the statement
    /// shape rules out a batched key-value fetch. Idempotent; a no-op
    /// when no multi-get entry exists.
    pub fn finalize_multi_get(shape: &StatementShape, result: &mut PlanningResult) {
        if result.get(Decision::MultiGetPrimaryKeyValues).is_some() && !shape.multi_get_executable()
        {
            if let Some(values) = result.remove(Decision::MultiGetPrimaryKeyValues) {
                result.set(Decision::RoutingValues, values);
            }
        }
    }
}
