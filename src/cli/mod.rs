//! Command-line interface for shardroute
//!
//! Thin wrapper over the planner: reads an expression tree as tagged
//! JSON, builds the routing schema and statement shape from flags, and
//! prints the resulting routing plan.

mod args;
mod commands;
mod errors;

pub use args::{Cli, ClassifyArgs, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
