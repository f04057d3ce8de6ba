//! Routing schema definitions
//!
//! A column may be part of the primary key, the routing key, both, or
//! neither. Tables without a declared primary key still carry the
//! implicit default document key.

use serde::{Deserialize, Serialize};

/// Implicit default document key, always part of the primary key set.
pub const DEFAULT_PRIMARY_KEY: &str = "_id";

/// Per-table routing metadata.
///
/// Built once from table metadata and borrowed read-only by the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRoutingSchema {
    /// Target table name
    table: String,
    /// Declared primary key columns, in declaration order
    #[serde(default)]
    primary_keys: Vec<String>,
    /// Explicit routing column, if the table declares one
    #[serde(default)]
    routing_column: Option<String>,
}

impl TableRoutingSchema {
    /// Creates a schema with no declared primary key (implicit key only)
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            primary_keys: Vec::new(),
            routing_column: None,
        }
    }

    /// Declares a primary key column
    pub fn with_primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_keys.push(column.into());
        self
    }

    /// Declares an explicit routing column
    pub fn with_routing_column(mut self, column: impl Into<String>) -> Self {
        self.routing_column = Some(column.into());
        self
    }

    /// Returns the table name
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Declared primary key columns plus the implicit default key, in order.
    pub fn primary_keys_including_default(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.primary_keys.iter().map(String::as_str).collect();
        if !keys.contains(&DEFAULT_PRIMARY_KEY) {
            keys.push(DEFAULT_PRIMARY_KEY);
        }
        keys
    }

    /// Returns true if `column` is a primary key column (including the
    /// implicit default key).
    pub fn is_primary_key(&self, column: &str) -> bool {
        column == DEFAULT_PRIMARY_KEY || self.primary_keys.iter().any(|pk| pk == column)
    }

    /// The column whose value decides shard placement.
    ///
    /// Falls back to the sole declared primary key when no routing column
    /// is declared, and to the implicit default key otherwise.
    pub fn routing_column(&self) -> &str {
        if let Some(routing) = &self.routing_column {
            return routing;
        }
        if self.primary_keys.len() == 1 {
            return &self.primary_keys[0];
        }
        DEFAULT_PRIMARY_KEY
    }

    /// Returns true if `column` is the routing column.
    pub fn is_routing(&self, column: &str) -> bool {
        self.routing_column() == column
    }
}
