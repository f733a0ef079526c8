// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use lattice_core::ColumnValue;

use crate::evaluate::{CompiledExpr, EvaluationContext, Evaluator};

impl Evaluator {
	pub(crate) fn materialize(&self, expr: &CompiledExpr, ctx: &EvaluationContext) -> crate::Result<ColumnValue> {
		let value = self.evaluate(expr, ctx)?;
		Ok(ColumnValue::Column(value.materialize(ctx.row_count)?))
	}
}
