//! CLI argument definitions using clap
//!
//! Commands:
//! - shardroute explain --table <name> [--expr <path>] ...
//! - shardroute classify --table <name> [--expr <path>] ...

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// shardroute - a deterministic shard-routing optimizer for distributed SQL
#[derive(Parser, Debug)]
#[command(name = "shardroute")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a human-readable routing plan for a WHERE clause
    Explain(ClassifyArgs),

    /// Print the routing decision as JSON
    Classify(ClassifyArgs),
}

/// Inputs shared by both commands
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Path to the expression tree as tagged JSON, '-' for stdin
    #[arg(long, default_value = "-")]
    pub expr: PathBuf,

    /// Target table name
    #[arg(long)]
    pub table: String,

    /// Declared primary key column (repeatable)
    #[arg(long = "primary-key")]
    pub primary_keys: Vec<String>,

    /// Explicit routing column
    #[arg(long)]
    pub routing_column: Option<String>,

    /// Positional bound parameter value, as a JSON scalar (repeatable;
    /// values that are not valid JSON are taken as strings)
    #[arg(long = "param")]
    pub params: Vec<String>,

    /// Statement kind: select, insert, update or delete
    #[arg(long, default_value = "select")]
    pub kind: String,

    /// Statement has an ORDER BY clause
    #[arg(long)]
    pub order_by: bool,

    /// Statement has a GROUP BY clause
    #[arg(long)]
    pub group_by: bool,

    /// Disable primary-key query optimization
    #[arg(long)]
    pub no_optimize: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
