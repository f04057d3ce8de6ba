//! Routing planner subsystem for shardroute
//!
//! Classifies a WHERE-clause expression tree against a table's routing
//! schema into one of four query paths, most specific first:
//!
//! 1. Single-row primary-key lookup (short-circuits planning)
//! 2. Bounded multi-key fetch against known shards
//! 3. Search constrained to a subset of shards
//! 4. Unconstrained scatter-gather (no entry recorded)
//!
//! The matcher writes its decisions into a [`PlanningResult`] side-table;
//! the finalizer may demote a multi-get decision once the full statement
//! shape is known. Executing the decision is the executor's job, not ours.

mod config;
mod errors;
mod explain;
mod finalizer;
mod matcher;
mod result;
mod values;

pub use config::PlannerConfig;
pub use errors::{PlannerError, PlannerResult};
pub use explain::{QueryPath, RoutingExplain};
pub use finalizer::PlanFinalizer;
pub use matcher::RoutingMatcher;
pub use result::{Decision, PlanValue, PlanningResult};
pub use values::encode_routing_value;
