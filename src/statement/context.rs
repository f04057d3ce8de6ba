//! Statement shape and bound-parameter context

use serde::{Deserialize, Serialize};

/// Structural kind of the statement being planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementKind {
    /// Row-returning selection (cursor-shaped)
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Select => "select",
            StatementKind::Insert => "insert",
            StatementKind::Update => "update",
            StatementKind::Delete => "delete",
        }
    }
}

/// The parts of the assembled statement the finalizer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementShape {
    /// Statement kind
    pub kind: StatementKind,
    /// ORDER BY clause present
    pub has_order_by: bool,
    /// GROUP BY clause present
    pub has_group_by: bool,
}

impl StatementShape {
    /// Creates a plain selection with no ordering or grouping
    pub fn select() -> Self {
        Self {
            kind: StatementKind::Select,
            has_order_by: false,
            has_group_by: false,
        }
    }

    /// Creates a shape of the given kind with no ordering or grouping
    pub fn of(kind: StatementKind) -> Self {
        Self {
            kind,
            has_order_by: false,
            has_group_by: false,
        }
    }

    /// Marks the ORDER BY clause present
    pub fn with_order_by(mut self) -> Self {
        self.has_order_by = true;
        self
    }

    /// Marks the GROUP BY clause present
    pub fn with_group_by(mut self) -> Self {
        self.has_group_by = true;
        self
    }

    /// A batched multi-key fetch returns rows in fetch order, so it is
    /// only valid for a plain selection with no query-level ordering or
    /// aggregation.
    pub fn multi_get_executable(&self) -> bool {
        self.kind == StatementKind::Select && !self.has_order_by && !self.has_group_by
    }
}

/// Positional bound parameter values for one statement.
///
/// Owned by the statement's planning context; the matcher borrows it to
/// resolve `Parameter` nodes into concrete values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterBindings {
    values: Vec<serde_json::Value>,
}

impl ParameterBindings {
    /// Creates an empty binding set
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates bindings from positional values
    pub fn from_values(values: impl IntoIterator<Item = serde_json::Value>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Appends a positional value
    pub fn bind(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Looks up the value bound at `index`, if any
    pub fn get(&self, index: usize) -> Option<&serde_json::Value> {
        self.values.get(index)
    }

    /// Number of bound values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no values are bound
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
