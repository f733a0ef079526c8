// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use lattice_type::{Type, Value};

use crate::value::column::ColumnData;

impl ColumnData {
	pub fn from_values(ty: &Type, values: impl IntoIterator<Item = Value>) -> crate::Result<Self> {
		let values = values.into_iter();
		let mut result = ColumnData::with_capacity(ty, values.size_hint().0);
		for value in values {
			result.push_value(value)?;
		}
		Ok(result)
	}

	/// A column of `len` copies of `value`.
	pub fn repeat(ty: &Type, value: &Value, len: usize) -> crate::Result<Self> {
		let mut result = ColumnData::with_capacity(ty, len);
		for _ in 0..len {
			result.push_value(value.clone())?;
		}
		Ok(result)
	}
}
