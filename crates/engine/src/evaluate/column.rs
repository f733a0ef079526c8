// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use lattice_core::ColumnValue;
use lattice_type::{Type, error::diagnostic::query::column_not_found, return_error, return_internal_error};

use crate::evaluate::{EvaluationContext, Evaluator};

impl Evaluator {
	pub(crate) fn column(&self, name: &str, ty: &Type, ctx: &EvaluationContext) -> crate::Result<ColumnValue> {
		let Some(column) = ctx.columns.column(name) else {
			return_error!(column_not_found(name));
		};
		let data = column.data();
		if data.len() != ctx.row_count {
			return_internal_error!(
				"shape mismatch: column {} has {} rows, block has {}",
				name,
				data.len(),
				ctx.row_count
			);
		}
		if &data.get_type() != ty {
			return_internal_error!("column {} has type {} but was compiled as {}", name, data.get_type(), ty);
		}
		Ok(ColumnValue::Column(data.clone()))
	}
}

#[cfg(test)]
mod tests {
	use lattice_core::{Column, ColumnData, Columns};
	use lattice_type::ResolutionContext;

	use crate::Expression;

	#[test]
	fn test_block_with_other_schema() {
		let compiled_against = Columns::new(vec![Column::new("n", ColumnData::int4([1]))]);
		let compiled = Expression::column("n").compile(&compiled_against, &ResolutionContext::strict()).unwrap();

		let block = Columns::new(vec![Column::new("n", ColumnData::utf8(["x"]))]);
		let err = compiled.evaluate(&block).unwrap_err();
		assert_eq!(err.code, "INTERNAL_ERROR");

		let err = compiled.evaluate(&Columns::with_row_count(1, vec![])).unwrap_err();
		assert_eq!(err.code, "QUERY_001");
	}
}
