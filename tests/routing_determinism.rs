//! Routing Determinism Tests
//!
//! Planning is a pure function of (tree, schema, config, bindings):
//! - Re-running classification yields identical results
//! - The optimization toggle yields an entirely empty result
//! - Finalization is idempotent

use serde_json::json;
use shardroute::expr::ExprNode;
use shardroute::planner::{PlanFinalizer, PlannerConfig, PlanningResult, RoutingMatcher};
use shardroute::schema::TableRoutingSchema;
use shardroute::statement::{ParameterBindings, StatementShape};

// =============================================================================
// Helper Functions
// =============================================================================

fn fixture_clauses() -> Vec<ExprNode> {
    vec![
        ExprNode::column_eq("id", json!("v")),
        ExprNode::and(
            ExprNode::column_eq("id", json!(1)),
            ExprNode::column_eq("name", json!("Alice")),
        ),
        ExprNode::or(
            ExprNode::column_eq("id", json!(1)),
            ExprNode::column_eq("id", json!(2)),
        ),
        ExprNode::in_list(
            ExprNode::column("id"),
            vec![ExprNode::literal(json!(1)), ExprNode::literal(json!(2))],
        ),
        ExprNode::opaque("name LIKE 'A%'"),
    ]
}

fn run_once(config: &PlannerConfig, clause: &ExprNode) -> (bool, PlanningResult) {
    let schema = TableRoutingSchema::new("users").with_primary_key("id");
    let params = ParameterBindings::none();
    let matcher = RoutingMatcher::new(config, &schema, &params);
    let mut result = PlanningResult::new();
    let short_circuit = matcher.classify(clause, &mut result).unwrap();
    (short_circuit, result)
}

// =============================================================================
// Determinism
// =============================================================================

/// Identical inputs produce identical decisions, every time.
#[test]
fn test_classification_is_deterministic() {
    let config = PlannerConfig::enabled();
    for clause in fixture_clauses() {
        let first = run_once(&config, &clause);
        for _ in 0..50 {
            assert_eq!(run_once(&config, &clause), first);
        }
    }
}

/// The primary-key value survives re-classification unchanged.
#[test]
fn test_pk_value_round_trip() {
    let config = PlannerConfig::enabled();
    let clause = ExprNode::column_eq("id", json!("stable-key"));

    let (_, first) = run_once(&config, &clause);
    let (_, second) = run_once(&config, &clause);
    assert_eq!(first.primary_key_value(), Some("stable-key"));
    assert_eq!(second.primary_key_value(), first.primary_key_value());
}

// =============================================================================
// Optimization Toggle
// =============================================================================

/// With the toggle off, every input yields an empty result and no
/// short-circuit.
#[test]
fn test_toggle_off_yields_empty_result() {
    let config = PlannerConfig::disabled();
    for clause in fixture_clauses() {
        let (short_circuit, result) = run_once(&config, &clause);
        assert!(!short_circuit);
        assert!(result.is_empty(), "expected empty result for {:?}", clause);
    }
}

/// With the toggle off, the finalizer leaves results untouched too.
#[test]
fn test_toggle_off_skips_finalizer() {
    let enabled = PlannerConfig::enabled();
    let clause = ExprNode::or(
        ExprNode::column_eq("id", json!(1)),
        ExprNode::column_eq("id", json!(2)),
    );
    let (_, mut result) = run_once(&enabled, &clause);
    let before = result.clone();

    let shape = StatementShape::select().with_order_by();
    PlanFinalizer::finalize(&PlannerConfig::disabled(), &shape, &mut result);
    assert_eq!(result, before);
}

// =============================================================================
// Finalizer Idempotence
// =============================================================================

/// Finalizing twice equals finalizing once, for every statement shape.
#[test]
fn test_finalize_is_idempotent() {
    let config = PlannerConfig::enabled();
    let shapes = [
        StatementShape::select(),
        StatementShape::select().with_order_by(),
        StatementShape::select().with_group_by(),
    ];

    for shape in shapes {
        for clause in fixture_clauses() {
            let (_, mut once) = run_once(&config, &clause);
            PlanFinalizer::finalize(&config, &shape, &mut once);

            let (_, mut twice) = run_once(&config, &clause);
            PlanFinalizer::finalize(&config, &shape, &mut twice);
            PlanFinalizer::finalize(&config, &shape, &mut twice);

            assert_eq!(once, twice);
        }
    }
}
