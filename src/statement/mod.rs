//! Statement-level context for shardroute
//!
//! The matcher runs against a WHERE clause before the full statement is
//! assembled; the finalizer runs after, once the statement's structural
//! shape (kind, ORDER BY, GROUP BY) is known.

mod context;

pub use context::{ParameterBindings, StatementKind, StatementShape};
