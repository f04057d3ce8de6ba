//! Expression node definitions
//!
//! A closed tagged union over the node shapes the routing matcher
//! understands. The tree is immutable once built; the matcher only
//! borrows it.

use serde::{Deserialize, Serialize};

/// A node in a WHERE-clause expression tree.
///
/// Anything the frontend produces that is not one of the modeled shapes
/// (function calls, sub-selects, LIKE, ...) arrives as `Opaque` and is
/// never optimizable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum ExprNode {
    /// Binary equality: `left = right`
    Equals {
        left: Box<ExprNode>,
        right: Box<ExprNode>,
    },
    /// Boolean conjunction: `left AND right`
    And {
        left: Box<ExprNode>,
        right: Box<ExprNode>,
    },
    /// Boolean disjunction: `left OR right`
    Or {
        left: Box<ExprNode>,
        right: Box<ExprNode>,
    },
    /// Membership test: `target IN (candidates...)`
    InList {
        target: Box<ExprNode>,
        candidates: Vec<ExprNode>,
    },
    /// Reference to a column of the target table
    Column { name: String },
    /// Literal constant value
    Literal { value: serde_json::Value },
    /// Positional bound statement parameter (`$1` is index 0)
    Parameter { index: usize },
    /// Any node shape the planner does not model
    Opaque { description: String },
}

impl ExprNode {
    /// Builds an equality node
    pub fn eq(left: ExprNode, right: ExprNode) -> Self {
        ExprNode::Equals {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Builds a conjunction node
    pub fn and(left: ExprNode, right: ExprNode) -> Self {
        ExprNode::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Builds a disjunction node
    pub fn or(left: ExprNode, right: ExprNode) -> Self {
        ExprNode::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Builds a membership-list node
    pub fn in_list(target: ExprNode, candidates: Vec<ExprNode>) -> Self {
        ExprNode::InList {
            target: Box::new(target),
            candidates,
        }
    }

    /// Builds a column reference
    pub fn column(name: impl Into<String>) -> Self {
        ExprNode::Column { name: name.into() }
    }

    /// Builds a literal constant
    pub fn literal(value: impl Into<serde_json::Value>) -> Self {
        ExprNode::Literal {
            value: value.into(),
        }
    }

    /// Builds a bound-parameter reference
    pub fn parameter(index: usize) -> Self {
        ExprNode::Parameter { index }
    }

    /// Builds an opaque (unmodeled) node
    pub fn opaque(description: impl Into<String>) -> Self {
        ExprNode::Opaque {
            description: description.into(),
        }
    }

    /// Shorthand for `column = literal`
    pub fn column_eq(name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self::eq(Self::column(name), Self::literal(value))
    }

    /// Returns the node shape name, for diagnostics
    pub fn shape(&self) -> &'static str {
        match self {
            ExprNode::Equals { .. } => "equals",
            ExprNode::And { .. } => "and",
            ExprNode::Or { .. } => "or",
            ExprNode::InList { .. } => "in_list",
            ExprNode::Column { .. } => "column",
            ExprNode::Literal { .. } => "literal",
            ExprNode::Parameter { .. } => "parameter",
            ExprNode::Opaque { .. } => "opaque",
        }
    }
}
