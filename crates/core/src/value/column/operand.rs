// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use lattice_type::{Type, Value};

use crate::value::column::{ColumnData, cast_column};

/// One operand of an expression while a block is evaluated.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnValue {
	/// One value per row of the block.
	Column(ColumnData),
	/// A single-row column whose value applies to every row.
	Constant(ColumnData),
	/// The NULL literal. Unlike a nullable column holding NULL it has no
	/// type of its own.
	Null,
}

impl ColumnValue {
	/// A constant of type `ty` holding `value`.
	pub fn constant(ty: &Type, value: Value) -> crate::Result<Self> {
		Ok(ColumnValue::Constant(ColumnData::from_values(ty, [value])?))
	}

	pub fn get_type(&self) -> Type {
		match self {
			ColumnValue::Column(data) | ColumnValue::Constant(data) => data.get_type(),
			ColumnValue::Null => Type::Null,
		}
	}

	pub fn is_constant(&self) -> bool {
		matches!(self, ColumnValue::Constant(_) | ColumnValue::Null)
	}

	/// The value the operand takes at `row`.
	pub fn get_value(&self, row: usize) -> Value {
		match self {
			ColumnValue::Column(data) => data.get_value(row),
			ColumnValue::Constant(data) => data.get_value(0),
			ColumnValue::Null => Value::Null,
		}
	}

	/// The constant value, `None` for a per-row column.
	pub fn constant_value(&self) -> Option<Value> {
		match self {
			ColumnValue::Column(_) => None,
			ColumnValue::Constant(data) => Some(data.get_value(0)),
			ColumnValue::Null => Some(Value::Null),
		}
	}

	/// Converts the operand into `target` without expanding constants.
	pub fn cast(&self, target: &Type) -> crate::Result<ColumnValue> {
		match self {
			ColumnValue::Column(data) => Ok(ColumnValue::Column(cast_column(data, target)?)),
			ColumnValue::Constant(data) => Ok(ColumnValue::Constant(cast_column(data, target)?)),
			ColumnValue::Null if target.is_null() => Ok(ColumnValue::Null),
			ColumnValue::Null => Ok(ColumnValue::Constant(cast_column(&ColumnData::Null(1), target)?)),
		}
	}

	/// Expands the operand into a column of `len` rows.
	pub fn materialize(&self, len: usize) -> crate::Result<ColumnData> {
		match self {
			ColumnValue::Column(data) => Ok(data.clone()),
			ColumnValue::Constant(data) => {
				let mut result = ColumnData::with_capacity(&data.get_type(), len);
				for _ in 0..len {
					result.push_from(data, 0)?;
				}
				Ok(result)
			}
			ColumnValue::Null => Ok(ColumnData::Null(len)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_constant_materialize() {
		let value = Value::Array(vec![Value::Int8(1), Value::Int8(2), Value::Int8(3)]);
		let constant = ColumnValue::constant(&Type::array(Type::Int8), value.clone()).unwrap();
		assert!(constant.is_constant());
		assert_eq!(constant.get_value(17), value);

		let data = constant.materialize(4).unwrap();
		assert_eq!(data.len(), 4);
		assert_eq!(data.get_value(3), value);
	}

	#[test]
	fn test_null_is_untyped() {
		assert_eq!(ColumnValue::Null.get_type(), Type::Null);
		assert_eq!(ColumnValue::Null.materialize(2).unwrap(), ColumnData::Null(2));
		assert_eq!(ColumnValue::Null.constant_value(), Some(Value::Null));
	}

	#[test]
	fn test_cast_keeps_shape() {
		let constant = ColumnValue::constant(&Type::Int1, Value::Int1(4)).unwrap();
		let cast = constant.cast(&Type::nullable(Type::Int8)).unwrap();
		assert!(cast.is_constant());
		assert_eq!(cast.get_type(), Type::nullable(Type::Int8));

		let cast = ColumnValue::Null.cast(&Type::nullable(Type::Utf8)).unwrap();
		assert_eq!(cast.get_type(), Type::nullable(Type::Utf8));
		assert_eq!(cast.get_value(5), Value::Null);

		let column = ColumnValue::Column(ColumnData::utf8(["a"]));
		assert!(!column.cast(&Type::nullable(Type::Utf8)).unwrap().is_constant());
	}
}
