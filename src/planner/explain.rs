//! Routing plan explain output
//!
//! Derives the query path the executor will take from a finalized
//! [`PlanningResult`] and renders it deterministically.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::result::PlanningResult;

/// The query path implied by a finalized planning result, most specific
/// decision first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "path", rename_all = "snake_case")]
pub enum QueryPath {
    /// Single-row fetch by primary key
    PrimaryKeyLookup { key: String },
    /// Batched multi-key fetch
    MultiGet { keys: BTreeSet<String> },
    /// Search constrained to the shards holding these routing values
    RoutedSearch { routing_values: BTreeSet<String> },
    /// Unconstrained scatter-gather search
    ScatterGather,
}

impl QueryPath {
    /// Reads the path out of a planning result. Precedence follows the
    /// decision specificity: primary key, multi-get, routing values,
    /// then scatter-gather.
    pub fn from_result(result: &PlanningResult) -> Self {
        if let Some(key) = result.primary_key_value() {
            return QueryPath::PrimaryKeyLookup {
                key: key.to_string(),
            };
        }
        if let Some(keys) = result.multi_get_values() {
            return QueryPath::MultiGet { keys: keys.clone() };
        }
        if let Some(values) = result.routing_values() {
            return QueryPath::RoutedSearch {
                routing_values: values.clone(),
            };
        }
        QueryPath::ScatterGather
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryPath::PrimaryKeyLookup { .. } => "PK_LOOKUP",
            QueryPath::MultiGet { .. } => "MULTI_GET",
            QueryPath::RoutedSearch { .. } => "ROUTED_SEARCH",
            QueryPath::ScatterGather => "SCATTER_GATHER",
        }
    }
}

/// Human-readable routing explain output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingExplain {
    /// Table the plan targets
    pub table: String,
    /// Whether clause analysis short-circuited
    pub short_circuit: bool,
    /// Derived query path
    pub path: QueryPath,
}

impl RoutingExplain {
    /// Builds explain output from a finalized planning result
    pub fn from_result(table: impl Into<String>, short_circuit: bool, result: &PlanningResult) -> Self {
        Self {
            table: table.into(),
            short_circuit,
            path: QueryPath::from_result(result),
        }
    }
}

impl fmt::Display for RoutingExplain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== ROUTING PLAN ===")?;
        writeln!(f, "Table: {}", self.table)?;
        writeln!(f, "Path: {}", self.path.as_str())?;
        match &self.path {
            QueryPath::PrimaryKeyLookup { key } => {
                writeln!(f, "Key: {}", key)?;
            }
            QueryPath::MultiGet { keys } => {
                for key in keys {
                    writeln!(f, "Key: {}", key)?;
                }
            }
            QueryPath::RoutedSearch { routing_values } => {
                for value in routing_values {
                    writeln!(f, "Routing: {}", value)?;
                }
            }
            QueryPath::ScatterGather => {}
        }
        writeln!(
            f,
            "Short-circuit: {}",
            if self.short_circuit { "yes" } else { "no" }
        )?;
        Ok(())
    }
}
