//! shardroute - a deterministic shard-routing optimizer for distributed SQL
//!
//! Given the boolean expression tree of a query's WHERE clause and the
//! routing metadata of the target table, the planner decides whether the
//! query can bypass scatter-gather search entirely (single primary-key
//! lookup), be served by a bounded multi-key fetch, or at least be
//! constrained to a subset of shards.

pub mod cli;
pub mod expr;
pub mod observability;
pub mod planner;
pub mod schema;
pub mod statement;
