// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use lattice_type::{IntoValue, Value};

use crate::value::column::{ColumnData, data::array_range};

impl ColumnData {
	/// The value at `row`, `Value::Null` when the row is NULL or out of
	/// range.
	pub fn get_value(&self, row: usize) -> Value {
		match self {
			ColumnData::Null(_) => Value::Null,
			ColumnData::Bool(container) => container.get(row).into_value(),
			ColumnData::Int1(container) => container.get(row).into_value(),
			ColumnData::Int2(container) => container.get(row).into_value(),
			ColumnData::Int4(container) => container.get(row).into_value(),
			ColumnData::Int8(container) => container.get(row).into_value(),
			ColumnData::Int16(container) => container.get(row).into_value(),
			ColumnData::Uint1(container) => container.get(row).into_value(),
			ColumnData::Uint2(container) => container.get(row).into_value(),
			ColumnData::Uint4(container) => container.get(row).into_value(),
			ColumnData::Uint8(container) => container.get(row).into_value(),
			ColumnData::Uint16(container) => container.get(row).into_value(),
			ColumnData::Float4(container) => container.get(row).into_value(),
			ColumnData::Float8(container) => container.get(row).into_value(),
			ColumnData::Utf8(container) => container.get(row).cloned().into_value(),
			ColumnData::Array {
				offsets,
				values,
			} => match array_range(offsets, row) {
				Some(range) => Value::Array(range.map(|idx| values.get_value(idx)).collect()),
				None => Value::Null,
			},
			ColumnData::Tuple {
				fields,
				len,
			} => {
				if row >= *len {
					return Value::Null;
				}
				Value::Tuple(fields.iter().map(|field| field.get_value(row)).collect())
			}
			ColumnData::Nullable {
				bitvec,
				inner,
			} => {
				if bitvec.get(row) {
					inner.get_value(row)
				} else {
					Value::Null
				}
			}
			ColumnData::Dictionary {
				keys,
				entries,
				..
			} => keys
				.get(row)
				.and_then(|key| entries.get_index(*key as usize))
				.cloned()
				.unwrap_or(Value::Null),
			ColumnData::Variant {
				discriminants,
				offsets,
				columns,
				..
			} => match discriminants.get(row) {
				Some(Some(d)) => columns[*d as usize].get_value(offsets[row]),
				_ => Value::Null,
			},
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
		(0..self.len()).map(|row| self.get_value(row))
	}

	/// Whether the row holds NULL.
	pub fn is_null_at(&self, row: usize) -> bool {
		match self {
			ColumnData::Null(_) => true,
			ColumnData::Nullable {
				bitvec,
				..
			} => !bitvec.get(row),
			ColumnData::Variant {
				discriminants,
				..
			} => matches!(discriminants.get(row), Some(None)),
			ColumnData::Dictionary {
				..
			} => self.get_value(row).is_null(),
			_ => false,
		}
	}
}
