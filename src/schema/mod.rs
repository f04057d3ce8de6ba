//! Table routing metadata for shardroute
//!
//! Describes, per table, which columns form the primary key and which
//! column carries the shard-routing value. Immutable for the lifetime of
//! a statement; safely shareable across concurrently planned statements.

mod routing;

pub use routing::{TableRoutingSchema, DEFAULT_PRIMARY_KEY};
