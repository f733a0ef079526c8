// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use lattice_core::{ColumnValue, Columns};
use tracing::instrument;

use crate::{SessionSettings, expression::Expression};

mod column;
mod compiled;
mod conditional;
mod context;
mod function;

pub use compiled::CompiledExpr;
pub(crate) use compiled::CompiledNode;
pub use context::EvaluationContext;

pub(crate) struct Evaluator;

impl Evaluator {
	pub(crate) fn evaluate(&self, expr: &CompiledExpr, ctx: &EvaluationContext) -> crate::Result<ColumnValue> {
		match expr.node() {
			CompiledNode::Constant(value) => Ok(value.clone()),
			CompiledNode::Null => Ok(ColumnValue::Null),
			CompiledNode::Column(name) => self.column(name, expr.get_type(), ctx),
			CompiledNode::Conditional {
				kind,
				branches,
				default,
			} => self.conditional(*kind, branches, default, expr.get_type(), ctx),
			CompiledNode::Materialize(inner) => self.materialize(inner, ctx),
		}
	}
}

/// Compiles `expr` against the columns of the block and evaluates it.
///
/// Type errors are reported before any row is read. To run one expression
/// over many blocks, compile it once with [`Expression::compile`] and call
/// [`CompiledExpr::evaluate`] per block.
#[instrument(name = "engine::evaluate", level = "debug", skip_all, fields(expr = %expr, rows = columns.row_count()))]
pub fn evaluate(expr: &Expression, columns: &Columns, settings: &SessionSettings) -> crate::Result<ColumnValue> {
	expr.compile(columns, &settings.resolution_context())?.evaluate(columns)
}
