// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use lattice_core::{ColumnData, ColumnValue};
use lattice_type::{Type, Value, internal_err, return_internal_error};
use tracing::{debug, instrument};

use crate::{
	evaluate::{CompiledExpr, EvaluationContext, Evaluator},
	expression::Conditional,
};

impl Evaluator {
	/// Evaluates `if`/`multiIf` into the result type `ty` resolved at
	/// compile time.
	///
	/// Every value is cast into `ty` up front. For each row the first true
	/// condition selects its value, and the default is selected when none is
	/// true. A NULL condition of `if` makes the row NULL, `multiIf` passes
	/// over it. Constant conditions are folded without touching rows.
	#[instrument(name = "evaluate::conditional", level = "trace", skip_all, fields(function = %kind, branches = branches.len()))]
	pub(crate) fn conditional(
		&self,
		kind: Conditional,
		branches: &[(CompiledExpr, CompiledExpr)],
		default: &CompiledExpr,
		ty: &Type,
		ctx: &EvaluationContext,
	) -> crate::Result<ColumnValue> {
		let mut conditions = Vec::with_capacity(branches.len());
		let mut values = Vec::with_capacity(branches.len() + 1);
		for (condition, value) in branches {
			conditions.push(self.evaluate(condition, ctx)?);
			values.push(self.evaluate(value, ctx)?);
		}
		values.push(self.evaluate(default, ctx)?);

		for operand in conditions.iter().chain(&values) {
			if let ColumnValue::Column(data) = operand {
				if data.len() != ctx.row_count {
					return_internal_error!(
						"shape mismatch: {} operand has {} rows, block has {}",
						kind,
						data.len(),
						ctx.row_count
					);
				}
			}
		}

		let values = values.iter().map(|value| value.cast(ty)).collect::<crate::Result<Vec<_>>>()?;

		if let Some(result) = fold(kind, &conditions, &values, ty)? {
			debug!(function = %kind, result = %ty, "constant condition folded");
			return Ok(result);
		}

		let winners = select(kind, &conditions, ctx.row_count)?;

		if let Some(Some(first)) = winners.first() {
			if winners.iter().all(|winner| *winner == Some(*first)) {
				debug!(function = %kind, branch = first, "every row selects the same branch");
				return Ok(ColumnValue::Column(values[*first].materialize(ctx.row_count)?));
			}
		}

		let mut result = ColumnData::with_capacity(ty, ctx.row_count);
		for (row, winner) in winners.into_iter().enumerate() {
			match winner.map(|idx| &values[idx]) {
				Some(ColumnValue::Column(data)) => result.push_from(data, row)?,
				Some(ColumnValue::Constant(data)) => result.push_from(data, 0)?,
				Some(ColumnValue::Null) | None => result.push_value(Value::Null)?,
			}
		}
		Ok(ColumnValue::Column(result))
	}
}

/// Short-circuits a chain whose deciding conditions are all constant.
fn fold(
	kind: Conditional,
	conditions: &[ColumnValue],
	values: &[ColumnValue],
	ty: &Type,
) -> crate::Result<Option<ColumnValue>> {
	for (idx, condition) in conditions.iter().enumerate() {
		let Some(value) = condition.constant_value() else {
			return Ok(None);
		};
		match predicate(&value)? {
			Some(true) => return Ok(Some(values[idx].clone())),
			None if kind.null_condition_yields_null() => return Ok(Some(ColumnValue::Null.cast(ty)?)),
			Some(false) | None => {}
		}
	}
	Ok(values.last().cloned())
}

/// The selected branch for every row, `None` for a NULL row. The default
/// is the branch after the last condition.
fn select(kind: Conditional, conditions: &[ColumnValue], row_count: usize) -> crate::Result<Vec<Option<usize>>> {
	let mut result = Vec::with_capacity(row_count);
	'rows: for row in 0..row_count {
		for (idx, condition) in conditions.iter().enumerate() {
			match predicate(&condition.get_value(row))? {
				Some(true) => {
					result.push(Some(idx));
					continue 'rows;
				}
				None if kind.null_condition_yields_null() => {
					result.push(None);
					continue 'rows;
				}
				Some(false) | None => {}
			}
		}
		result.push(Some(conditions.len()));
	}
	Ok(result)
}

fn predicate(value: &Value) -> crate::Result<Option<bool>> {
	match value.as_predicate() {
		Some(outcome) => Ok(outcome),
		None => internal_err!("condition value {} is not boolean", value),
	}
}
