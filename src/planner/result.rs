//! Planning result side-table
//!
//! A small typed key-value store attached to the statement being
//! planned: at most one value per decision kind, overwrite on set.
//! Exclusively owned by one statement's planning context, so it is
//! deliberately not thread-safe.

use std::collections::BTreeSet;

/// The routing decision kinds the matcher can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Statement matches exactly one row by primary key
    PrimaryKeyValue,
    /// Search can be constrained to the shards holding these values
    RoutingValues,
    /// Complete enumeration of primary keys, candidate for a multi-get
    MultiGetPrimaryKeyValues,
}

impl Decision {
    const COUNT: usize = 3;

    fn slot(self) -> usize {
        match self {
            Decision::PrimaryKeyValue => 0,
            Decision::RoutingValues => 1,
            Decision::MultiGetPrimaryKeyValues => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::PrimaryKeyValue => "primary_key_value",
            Decision::RoutingValues => "routing_values",
            Decision::MultiGetPrimaryKeyValues => "multi_get_primary_key_values",
        }
    }
}

/// A value recorded for a decision kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanValue {
    /// A single string-encoded key
    Key(String),
    /// A set of string-encoded keys
    KeySet(BTreeSet<String>),
}

impl PlanValue {
    /// Wraps a single string-encoded value into a one-element key set
    pub fn single_key_set(value: impl Into<String>) -> Self {
        let mut values = BTreeSet::new();
        values.insert(value.into());
        PlanValue::KeySet(values)
    }
}

/// Per-statement planning results, one slot per decision kind.
///
/// Created empty when planning begins, populated during the matcher
/// pass, mutated once more by the finalizer, then read by the executor
/// and discarded with the statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanningResult {
    slots: [Option<PlanValue>; Decision::COUNT],
}

impl PlanningResult {
    /// Creates an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` for `kind`, overwriting any prior entry
    pub fn set(&mut self, kind: Decision, value: PlanValue) {
        self.slots[kind.slot()] = Some(value);
    }

    /// Looks up the entry for `kind`
    pub fn get(&self, kind: Decision) -> Option<&PlanValue> {
        self.slots[kind.slot()].as_ref()
    }

    /// Removes and returns the entry for `kind`
    pub fn remove(&mut self, kind: Decision) -> Option<PlanValue> {
        self.slots[kind.slot()].take()
    }

    /// Returns true if no decision was recorded
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// The single primary-key value, if recorded
    pub fn primary_key_value(&self) -> Option<&str> {
        match self.get(Decision::PrimaryKeyValue)? {
            PlanValue::Key(value) => Some(value),
            PlanValue::KeySet(_) => None,
        }
    }

    /// The routing value set, if recorded
    pub fn routing_values(&self) -> Option<&BTreeSet<String>> {
        match self.get(Decision::RoutingValues)? {
            PlanValue::KeySet(values) => Some(values),
            PlanValue::Key(_) => None,
        }
    }

    /// The multi-get primary-key set, if recorded
    pub fn multi_get_values(&self) -> Option<&BTreeSet<String>> {
        match self.get(Decision::MultiGetPrimaryKeyValues)? {
            PlanValue::KeySet(values) => Some(values),
            PlanValue::Key(_) => None,
        }
    }
}
