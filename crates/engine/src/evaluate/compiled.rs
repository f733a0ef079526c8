// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use lattice_core::{ColumnValue, Columns};
use lattice_type::{Type, return_internal_error};
use tracing::instrument;

use crate::{
	evaluate::{EvaluationContext, Evaluator},
	expression::Conditional,
};

/// An expression whose result types are all resolved, ready to be
/// evaluated over any number of blocks.
///
/// Built by [`Expression::compile`](crate::Expression::compile).
#[derive(Debug, Clone)]
pub struct CompiledExpr {
	node: CompiledNode,
	ty: Type,
}

#[derive(Debug, Clone)]
pub(crate) enum CompiledNode {
	/// Literals and `toTypeName` results, built once.
	Constant(ColumnValue),
	Null,
	Column(String),
	Conditional {
		kind: Conditional,
		branches: Vec<(CompiledExpr, CompiledExpr)>,
		default: Box<CompiledExpr>,
	},
	Materialize(Box<CompiledExpr>),
}

impl CompiledExpr {
	pub(crate) fn new(node: CompiledNode, ty: Type) -> Self {
		Self {
			node,
			ty,
		}
	}

	pub(crate) fn node(&self) -> &CompiledNode {
		&self.node
	}

	pub fn get_type(&self) -> &Type {
		&self.ty
	}

	/// Evaluates the expression over one block of rows.
	///
	/// The result always has the compiled type; a constant result stays a
	/// single-row constant.
	#[instrument(name = "engine::execute", level = "debug", skip_all, fields(ty = %self.ty, rows = columns.row_count()))]
	pub fn evaluate(&self, columns: &Columns) -> crate::Result<ColumnValue> {
		let ctx = EvaluationContext::new(columns);
		let result = Evaluator.evaluate(self, &ctx)?;

		let actual = result.get_type();
		if actual != self.ty {
			return_internal_error!("expression evaluated to {} but was compiled as {}", actual, self.ty);
		}
		Ok(result)
	}
}
