//! Comparison value extraction
//!
//! Resolves the non-column side of an equality into a concrete scalar,
//! using the statement's bound parameters. Deliberately conservative:
//! only literal constants and bound parameters are accepted; any other
//! shape (sub-expression, function call) is not optimizable and is never
//! evaluated speculatively.

use serde_json::Value;

use crate::expr::ExprNode;
use crate::statement::ParameterBindings;

use super::errors::{PlannerError, PlannerResult};

/// Encodes a scalar as the string form used for routing and key lookup.
///
/// String scalars encode bare (no JSON quoting) so that `id = 'abc'`
/// routes on `abc`, not `"abc"`. Everything else uses its JSON rendering.
pub fn encode_routing_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Resolves a node into a concrete scalar, if it is one.
///
/// Literals resolve to their value, parameters to the bound value at
/// their index. A parameter with no bound value is the one failure that
/// propagates out of planning. Any other node shape yields `None`.
pub(crate) fn resolve_scalar(
    node: &ExprNode,
    params: &ParameterBindings,
) -> PlannerResult<Option<Value>> {
    match node {
        ExprNode::Literal { value } => Ok(Some(value.clone())),
        ExprNode::Parameter { index } => match params.get(*index) {
            Some(value) => Ok(Some(value.clone())),
            None => Err(PlannerError::unbound_parameter(*index, params.len())),
        },
        _ => Ok(None),
    }
}

/// Extracts `(column name, scalar value)` from the two sides of an
/// equality, canonicalizing so the column reference is treated as the
/// left side regardless of source order.
///
/// Yields `None` unless one side is a column reference and the other a
/// literal or bound parameter; `col = col` and `lit = lit` both fail the
/// post-swap check.
pub(crate) fn column_equality(
    left: &ExprNode,
    right: &ExprNode,
    params: &ParameterBindings,
) -> PlannerResult<Option<(String, Value)>> {
    let (mut column_side, mut value_side) = (left, right);
    if matches!(right, ExprNode::Column { .. }) {
        (column_side, value_side) = (right, left);
    }

    let ExprNode::Column { name } = column_side else {
        return Ok(None);
    };

    match resolve_scalar(value_side, params)? {
        Some(value) => Ok(Some((name.clone(), value))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_string_is_bare() {
        assert_eq!(encode_routing_value(&json!("abc")), "abc");
    }

    #[test]
    fn test_encode_non_strings_use_json() {
        assert_eq!(encode_routing_value(&json!(42)), "42");
        assert_eq!(encode_routing_value(&json!(true)), "true");
        assert_eq!(encode_routing_value(&json!(null)), "null");
    }

    #[test]
    fn test_literal_resolves() {
        let params = ParameterBindings::none();
        let value = resolve_scalar(&ExprNode::literal(json!(7)), &params).unwrap();
        assert_eq!(value, Some(json!(7)));
    }

    #[test]
    fn test_parameter_resolves_to_bound_value() {
        let params = ParameterBindings::none().bind(json!("x"));
        let value = resolve_scalar(&ExprNode::parameter(0), &params).unwrap();
        assert_eq!(value, Some(json!("x")));
    }

    #[test]
    fn test_unbound_parameter_is_an_error() {
        let params = ParameterBindings::none();
        let err = resolve_scalar(&ExprNode::parameter(0), &params).unwrap_err();
        assert_eq!(err, PlannerError::unbound_parameter(0, 0));
    }

    #[test]
    fn test_other_shapes_do_not_resolve() {
        let params = ParameterBindings::none();
        assert_eq!(resolve_scalar(&ExprNode::column("a"), &params).unwrap(), None);
        assert_eq!(
            resolve_scalar(&ExprNode::opaque("fn_call"), &params).unwrap(),
            None
        );
    }

    #[test]
    fn test_column_on_either_side() {
        let params = ParameterBindings::none();
        let col = ExprNode::column("id");
        let lit = ExprNode::literal(json!(1));

        let forward = column_equality(&col, &lit, &params).unwrap();
        let reversed = column_equality(&lit, &col, &params).unwrap();
        assert_eq!(forward, Some(("id".to_string(), json!(1))));
        assert_eq!(reversed, forward);
    }

    #[test]
    fn test_column_to_column_rejected() {
        let params = ParameterBindings::none();
        let result =
            column_equality(&ExprNode::column("a"), &ExprNode::column("b"), &params).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_sub_expression_rejected() {
        let params = ParameterBindings::none();
        let result = column_equality(
            &ExprNode::column("a"),
            &ExprNode::opaque("lower(b)"),
            &params,
        )
        .unwrap();
        assert_eq!(result, None);
    }
}
