//! WHERE-clause expression tree for shardroute
//!
//! The tree is produced by the SQL frontend and is read-only to the
//! planner. Node shapes the planner does not pattern-match are carried
//! as the explicit `Opaque` variant rather than an implicit fallthrough.

mod ast;

pub use ast::ExprNode;
