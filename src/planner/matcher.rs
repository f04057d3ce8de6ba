//! Routing matcher
//!
//! A single recursive pass over the WHERE clause that records routing
//! decisions into the statement's [`PlanningResult`]. Three checks run
//! in fixed order:
//!
//! 1. A lone primary-key equality at the root records the key value and
//!    short-circuits; no further analysis runs.
//! 2. A routing-key equality found inside a conjunction (left branch
//!    before right, first match wins) records a one-element routing set.
//! 3. A tree built purely from OR / IN-list nodes over routing-key
//!    equalities records the complete key enumeration for a multi-get.
//!
//! Checks 2 and 3 are independent annotations; both may fire for the
//! same clause. Unsupported node shapes are not errors, they simply
//! leave no entry.

use std::collections::BTreeSet;

use crate::expr::ExprNode;
use crate::schema::TableRoutingSchema;
use crate::statement::ParameterBindings;

use super::config::PlannerConfig;
use super::errors::PlannerResult;
use super::result::{Decision, PlanValue, PlanningResult};
use super::values::{column_equality, encode_routing_value};

/// Outcome of inspecting one direct operand of an OR node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrOperand {
    /// Operand contributed values (or recursed and settled internally)
    Collected,
    /// Operand cannot be reduced to routing-key equalities; the shared
    /// accumulator has been cleared
    Disqualified,
}

/// Classifies WHERE clauses against one table's routing schema.
pub struct RoutingMatcher<'a> {
    config: &'a PlannerConfig,
    schema: &'a TableRoutingSchema,
    params: &'a ParameterBindings,
}

impl<'a> RoutingMatcher<'a> {
    /// Creates a matcher for one statement's planning pass
    pub fn new(
        config: &'a PlannerConfig,
        schema: &'a TableRoutingSchema,
        params: &'a ParameterBindings,
    ) -> Self {
        Self {
            config,
            schema,
            params,
        }
    }

    /// Runs the three routing checks over `where_clause`, recording
    /// decisions into `result`.
    ///
    /// Returns true if the clause is a single primary-key equality, in
    /// which case downstream clause analysis can stop: the statement
    /// resolves to a single-row lookup and no more specific decision
    /// exists. With the optimization toggle off, nothing is recorded.
    pub fn classify(
        &self,
        where_clause: &ExprNode,
        result: &mut PlanningResult,
    ) -> PlannerResult<bool> {
        if !self.config.is_enabled() {
            return Ok(false);
        }

        if let Some(value) = self.primary_key_value(where_clause)? {
            result.set(
                Decision::PrimaryKeyValue,
                PlanValue::Key(encode_routing_value(&value)),
            );
            return Ok(true);
        }

        if let Some(value) = self.routing_value(where_clause)? {
            result.set(
                Decision::RoutingValues,
                PlanValue::single_key_set(encode_routing_value(&value)),
            );
        }

        let or_values = self.multi_get_values(where_clause)?;
        if !or_values.is_empty() {
            result.set(
                Decision::MultiGetPrimaryKeyValues,
                PlanValue::KeySet(or_values),
            );
        }

        Ok(false)
    }

    /// Check 1: the whole clause is `pk = value`.
    fn primary_key_value(&self, node: &ExprNode) -> PlannerResult<Option<serde_json::Value>> {
        if let ExprNode::Equals { left, right } = node {
            if let Some((column, value)) = column_equality(left, right, self.params)? {
                if self.schema.is_primary_key(&column) {
                    return Ok(Some(value));
                }
            }
        }
        Ok(None)
    }

    /// Check 2: depth-first search through nested conjunctions for the
    /// first routing-key equality, left branch before right.
    fn routing_value(&self, node: &ExprNode) -> PlannerResult<Option<serde_json::Value>> {
        let ExprNode::And { left, right } = node else {
            return Ok(None);
        };

        let mut value = self.conjunct_routing_value(left)?;
        if value.is_none() {
            value = self.conjunct_routing_value(right)?;
        }
        Ok(value)
    }

    /// Inspects one operand of an AND node. Only equalities and nested
    /// conjunctions are searched; anything else contributes nothing.
    fn conjunct_routing_value(&self, node: &ExprNode) -> PlannerResult<Option<serde_json::Value>> {
        match node {
            ExprNode::Equals { left, right } => self.routing_equality(left, right),
            ExprNode::And { .. } => self.routing_value(node),
            _ => Ok(None),
        }
    }

    /// Resolves an equality into its value when its column is the
    /// routing key.
    fn routing_equality(
        &self,
        left: &ExprNode,
        right: &ExprNode,
    ) -> PlannerResult<Option<serde_json::Value>> {
        if let Some((column, value)) = column_equality(left, right, self.params)? {
            if self.schema.is_routing(&column) {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Check 3: collect the complete set of routing-key values reachable
    /// through OR / IN-list structure. All-or-nothing per disjunction:
    /// one bad disjunct clears everything collected so far.
    fn multi_get_values(&self, node: &ExprNode) -> PlannerResult<BTreeSet<String>> {
        let mut values = BTreeSet::new();
        self.collect_or_values(node, &mut values)?;
        Ok(values)
    }

    /// Walks an OR or IN-list node, sharing one accumulator across the
    /// whole extraction. A disqualified direct operand stops this level;
    /// a disqualification inside a nested OR/IN-list is absorbed at that
    /// level, so later siblings here may still contribute.
    fn collect_or_values(
        &self,
        node: &ExprNode,
        values: &mut BTreeSet<String>,
    ) -> PlannerResult<()> {
        match node {
            ExprNode::Or { left, right } => {
                if self.collect_or_operand(left, values)? == OrOperand::Disqualified {
                    return Ok(());
                }
                if self.collect_or_operand(right, values)? == OrOperand::Disqualified {
                    return Ok(());
                }
                Ok(())
            }
            ExprNode::InList { target, candidates } => {
                let ExprNode::Column { name } = target.as_ref() else {
                    return Ok(());
                };
                if !self.schema.is_routing(name) {
                    // membership on a non-routing column never contributes
                    values.clear();
                    return Ok(());
                }
                for candidate in candidates {
                    match super::values::resolve_scalar(candidate, self.params)? {
                        Some(value) => {
                            values.insert(encode_routing_value(&value));
                        }
                        None => {
                            values.clear();
                            return Ok(());
                        }
                    }
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Inspects one direct operand of an OR node.
    fn collect_or_operand(
        &self,
        operand: &ExprNode,
        values: &mut BTreeSet<String>,
    ) -> PlannerResult<OrOperand> {
        match operand {
            ExprNode::Or { .. } | ExprNode::InList { .. } => {
                self.collect_or_values(operand, values)?;
                Ok(OrOperand::Collected)
            }
            ExprNode::Equals { left, right } => match self.routing_equality(left, right)? {
                Some(value) => {
                    values.insert(encode_routing_value(&value));
                    Ok(OrOperand::Collected)
                }
                None => {
                    values.clear();
                    Ok(OrOperand::Disqualified)
                }
            },
            _ => {
                values.clear();
                Ok(OrOperand::Disqualified)
            }
        }
    }
}
