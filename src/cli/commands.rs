//! CLI command implementations

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::{json, Value};

use crate::expr::ExprNode;
use crate::observability::{Logger, Severity};
use crate::planner::{
    PlanFinalizer, PlannerConfig, PlanningResult, QueryPath, RoutingExplain, RoutingMatcher,
};
use crate::schema::TableRoutingSchema;
use crate::statement::{ParameterBindings, StatementKind, StatementShape};

use super::args::{Cli, ClassifyArgs, Command};
use super::errors::{CliError, CliResult};

/// Parses arguments and dispatches to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Explain(args) => explain(&args),
        Command::Classify(args) => classify(&args),
    }
}

fn explain(args: &ClassifyArgs) -> CliResult<()> {
    let (short_circuit, result) = plan(args)?;
    let explain = RoutingExplain::from_result(&args.table, short_circuit, &result);
    print!("{}", explain);
    Ok(())
}

fn classify(args: &ClassifyArgs) -> CliResult<()> {
    let (short_circuit, result) = plan(args)?;
    let output = json!({
        "table": args.table,
        "short_circuit": short_circuit,
        "path": QueryPath::from_result(&result),
    });
    println!("{}", output);
    Ok(())
}

/// Runs the full planning pass: classify, then finalize against the
/// statement shape.
fn plan(args: &ClassifyArgs) -> CliResult<(bool, PlanningResult)> {
    let clause = read_expression(&args.expr)?;
    let schema = build_schema(args);
    let params = ParameterBindings::from_values(args.params.iter().map(|p| parse_param(p)));
    let shape = build_shape(args)?;
    let config = if args.no_optimize {
        PlannerConfig::disabled()
    } else {
        PlannerConfig::enabled()
    };

    let matcher = RoutingMatcher::new(&config, &schema, &params);
    let mut result = PlanningResult::new();
    let short_circuit = matcher.classify(&clause, &mut result)?;
    PlanFinalizer::finalize(&config, &shape, &mut result);

    Logger::log(
        Severity::Trace,
        "planner.classify",
        &[
            ("path", QueryPath::from_result(&result).as_str().to_string()),
            ("short_circuit", short_circuit.to_string()),
            ("table", args.table.clone()),
        ],
    );

    Ok((short_circuit, result))
}

/// Reads the expression tree from a file, or stdin for '-'.
fn read_expression(path: &Path) -> CliResult<ExprNode> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&raw)?)
}

fn build_schema(args: &ClassifyArgs) -> TableRoutingSchema {
    let mut schema = TableRoutingSchema::new(&args.table);
    for column in &args.primary_keys {
        schema = schema.with_primary_key(column);
    }
    if let Some(routing) = &args.routing_column {
        schema = schema.with_routing_column(routing);
    }
    schema
}

fn build_shape(args: &ClassifyArgs) -> CliResult<StatementShape> {
    let kind = match args.kind.as_str() {
        "select" => StatementKind::Select,
        "insert" => StatementKind::Insert,
        "update" => StatementKind::Update,
        "delete" => StatementKind::Delete,
        other => {
            return Err(CliError::InvalidArgument(format!(
                "unknown statement kind '{}'",
                other
            )))
        }
    };

    let mut shape = StatementShape::of(kind);
    if args.order_by {
        shape = shape.with_order_by();
    }
    if args.group_by {
        shape = shape.with_group_by();
    }
    Ok(shape)
}

/// Bound parameter values are JSON scalars; anything that fails to
/// parse is taken as a bare string.
fn parse_param(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
