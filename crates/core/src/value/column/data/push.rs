// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use lattice_type::{Type, Value, internal_err, return_internal_error};

use crate::value::column::ColumnData;

macro_rules! push_number {
	($container:expr, $value:expr, $ty:ident) => {
		match $value.convert_number(&Type::$ty) {
			Some(Value::$ty(v)) => {
				$container.push(v);
				Ok(())
			}
			_ => internal_err!("cannot store {} in a {} column", $value, Type::$ty),
		}
	};
}

macro_rules! push_float {
	($container:expr, $value:expr, $ty:ident) => {
		match $value.convert_number(&Type::$ty) {
			Some(Value::$ty(v)) => {
				$container.push(v.value());
				Ok(())
			}
			_ => internal_err!("cannot store {} in a {} column", $value, Type::$ty),
		}
	};
}

macro_rules! copy_row {
	($dst:expr, $src:expr, $row:expr) => {
		match $src.get($row) {
			Some(v) => {
				$dst.push(v);
				Ok(())
			}
			None => out_of_range($row, $src.len()),
		}
	};
}

impl ColumnData {
	/// Appends `value`. Numbers are widened into the column's numeric type;
	/// anything else must match the column type exactly.
	pub fn push_value(&mut self, value: Value) -> crate::Result<()> {
		match self {
			ColumnData::Null(len) => {
				if !value.is_null() {
					return_internal_error!("cannot store {} in a Null column", value);
				}
				*len += 1;
				Ok(())
			}
			ColumnData::Bool(container) => match value {
				Value::Boolean(v) => {
					container.push(v);
					Ok(())
				}
				value => internal_err!("cannot store {} in a Boolean column", value),
			},
			ColumnData::Int1(container) => push_number!(container, value, Int1),
			ColumnData::Int2(container) => push_number!(container, value, Int2),
			ColumnData::Int4(container) => push_number!(container, value, Int4),
			ColumnData::Int8(container) => push_number!(container, value, Int8),
			ColumnData::Int16(container) => push_number!(container, value, Int16),
			ColumnData::Uint1(container) => push_number!(container, value, Uint1),
			ColumnData::Uint2(container) => push_number!(container, value, Uint2),
			ColumnData::Uint4(container) => push_number!(container, value, Uint4),
			ColumnData::Uint8(container) => push_number!(container, value, Uint8),
			ColumnData::Uint16(container) => push_number!(container, value, Uint16),
			ColumnData::Float4(container) => push_float!(container, value, Float4),
			ColumnData::Float8(container) => push_float!(container, value, Float8),
			ColumnData::Utf8(container) => match value {
				Value::Utf8(v) => {
					container.push(v);
					Ok(())
				}
				value => internal_err!("cannot store {} in a Utf8 column", value),
			},
			ColumnData::Array {
				offsets,
				values,
			} => match value {
				Value::Array(items) => {
					for item in items {
						values.push_value(item)?;
					}
					offsets.push(values.len());
					Ok(())
				}
				value => internal_err!("cannot store {} in an Array column", value),
			},
			ColumnData::Tuple {
				fields,
				len,
			} => match value {
				Value::Tuple(items) if items.len() == fields.len() => {
					for (field, item) in fields.iter_mut().zip(items) {
						field.push_value(item)?;
					}
					*len += 1;
					Ok(())
				}
				value => internal_err!("cannot store {} in a Tuple column of {} fields", value, fields.len()),
			},
			ColumnData::Nullable {
				bitvec,
				inner,
			} => {
				if value.is_null() {
					inner.push_default()?;
					bitvec.push(false);
				} else {
					inner.push_value(value)?;
					bitvec.push(true);
				}
				Ok(())
			}
			ColumnData::Dictionary {
				ty,
				keys,
				entries,
			} => {
				let value = if value.is_null() || !ty.remove_nullable().is_number() {
					value
				} else {
					match value.convert_number(&ty.remove_nullable()) {
						Some(value) => value,
						None => return_internal_error!("cannot store {} in a Dictionary({}) column", value, ty),
					}
				};
				if !ty.accepts(&value) {
					return_internal_error!("cannot store {} in a Dictionary({}) column", value, ty);
				}
				let (idx, _) = entries.insert_full(value);
				keys.push(dictionary_key(idx)?);
				Ok(())
			}
			ColumnData::Variant {
				alternatives,
				discriminants,
				offsets,
				columns,
			} => {
				if value.is_null() {
					discriminants.push(None);
					offsets.push(0);
					return Ok(());
				}
				let Some(idx) = alternatives.iter().position(|alt| alt.accepts(&value)) else {
					return_internal_error!(
						"cannot store {} in a {} column",
						value,
						Type::Variant(alternatives.clone())
					);
				};
				let column = &mut columns[idx];
				offsets.push(column.len());
				column.push_value(value)?;
				discriminants.push(Some(idx as u8));
				Ok(())
			}
		}
	}

	/// Appends the default row: NULL where the type can hold it, otherwise
	/// zero, false, the empty string, the empty array, or a tuple of defaults.
	pub fn push_default(&mut self) -> crate::Result<()> {
		match self {
			ColumnData::Null(len) => *len += 1,
			ColumnData::Bool(container) => container.push(false),
			ColumnData::Int1(container) => container.push_default(),
			ColumnData::Int2(container) => container.push_default(),
			ColumnData::Int4(container) => container.push_default(),
			ColumnData::Int8(container) => container.push_default(),
			ColumnData::Int16(container) => container.push_default(),
			ColumnData::Uint1(container) => container.push_default(),
			ColumnData::Uint2(container) => container.push_default(),
			ColumnData::Uint4(container) => container.push_default(),
			ColumnData::Uint8(container) => container.push_default(),
			ColumnData::Uint16(container) => container.push_default(),
			ColumnData::Float4(container) => container.push_default(),
			ColumnData::Float8(container) => container.push_default(),
			ColumnData::Utf8(container) => container.push(String::new()),
			ColumnData::Array {
				offsets,
				values,
			} => offsets.push(values.len()),
			ColumnData::Tuple {
				fields,
				len,
			} => {
				for field in fields.iter_mut() {
					field.push_default()?;
				}
				*len += 1;
			}
			ColumnData::Nullable {
				bitvec,
				inner,
			} => {
				inner.push_default()?;
				bitvec.push(false);
			}
			ColumnData::Dictionary {
				ty,
				..
			} => {
				let value = default_value(ty);
				return self.push_value(value);
			}
			ColumnData::Variant {
				discriminants,
				offsets,
				..
			} => {
				discriminants.push(None);
				offsets.push(0);
			}
		}
		Ok(())
	}

	/// Appends row `row` of `src`, which must have the same type as `self`.
	pub fn push_from(&mut self, src: &ColumnData, row: usize) -> crate::Result<()> {
		match (self, src) {
			(ColumnData::Null(len), ColumnData::Null(src_len)) => {
				if row >= *src_len {
					return out_of_range(row, *src_len);
				}
				*len += 1;
				Ok(())
			}
			(ColumnData::Bool(dst), ColumnData::Bool(src)) => copy_row!(dst, src, row),
			(ColumnData::Int1(dst), ColumnData::Int1(src)) => copy_row!(dst, src, row),
			(ColumnData::Int2(dst), ColumnData::Int2(src)) => copy_row!(dst, src, row),
			(ColumnData::Int4(dst), ColumnData::Int4(src)) => copy_row!(dst, src, row),
			(ColumnData::Int8(dst), ColumnData::Int8(src)) => copy_row!(dst, src, row),
			(ColumnData::Int16(dst), ColumnData::Int16(src)) => copy_row!(dst, src, row),
			(ColumnData::Uint1(dst), ColumnData::Uint1(src)) => copy_row!(dst, src, row),
			(ColumnData::Uint2(dst), ColumnData::Uint2(src)) => copy_row!(dst, src, row),
			(ColumnData::Uint4(dst), ColumnData::Uint4(src)) => copy_row!(dst, src, row),
			(ColumnData::Uint8(dst), ColumnData::Uint8(src)) => copy_row!(dst, src, row),
			(ColumnData::Uint16(dst), ColumnData::Uint16(src)) => copy_row!(dst, src, row),
			(ColumnData::Float4(dst), ColumnData::Float4(src)) => copy_row!(dst, src, row),
			(ColumnData::Float8(dst), ColumnData::Float8(src)) => copy_row!(dst, src, row),
			(ColumnData::Utf8(dst), ColumnData::Utf8(src)) => match src.get(row) {
				Some(v) => {
					dst.push(v.clone());
					Ok(())
				}
				None => out_of_range(row, src.len()),
			},
			(
				ColumnData::Array {
					offsets,
					values,
				},
				ColumnData::Array {
					offsets: src_offsets,
					values: src_values,
				},
			) => {
				let Some(range) = array_range(src_offsets, row) else {
					return out_of_range(row, src_offsets.len());
				};
				for idx in range {
					values.push_from(src_values, idx)?;
				}
				offsets.push(values.len());
				Ok(())
			}
			(
				ColumnData::Tuple {
					fields,
					len,
				},
				ColumnData::Tuple {
					fields: src_fields,
					len: src_len,
				},
			) if fields.len() == src_fields.len() => {
				if row >= *src_len {
					return out_of_range(row, *src_len);
				}
				for (field, src_field) in fields.iter_mut().zip(src_fields) {
					field.push_from(src_field, row)?;
				}
				*len += 1;
				Ok(())
			}
			(
				ColumnData::Nullable {
					bitvec,
					inner,
				},
				ColumnData::Nullable {
					bitvec: src_bitvec,
					inner: src_inner,
				},
			) => {
				inner.push_from(src_inner, row)?;
				bitvec.push(src_bitvec.get(row));
				Ok(())
			}
			(
				ColumnData::Dictionary {
					keys,
					entries,
					..
				},
				ColumnData::Dictionary {
					keys: src_keys,
					entries: src_entries,
					..
				},
			) => {
				let Some(value) = src_keys.get(row).and_then(|key| src_entries.get_index(*key as usize)) else {
					return out_of_range(row, src_keys.len());
				};
				let (idx, _) = entries.insert_full(value.clone());
				keys.push(dictionary_key(idx)?);
				Ok(())
			}
			(
				ColumnData::Variant {
					alternatives,
					discriminants,
					offsets,
					columns,
				},
				ColumnData::Variant {
					alternatives: src_alternatives,
					discriminants: src_discriminants,
					offsets: src_offsets,
					columns: src_columns,
				},
			) if alternatives == src_alternatives => {
				let Some(discriminant) = src_discriminants.get(row) else {
					return out_of_range(row, src_discriminants.len());
				};
				match discriminant {
					None => {
						discriminants.push(None);
						offsets.push(0);
					}
					Some(d) => {
						let idx = *d as usize;
						offsets.push(columns[idx].len());
						columns[idx].push_from(&src_columns[idx], src_offsets[row])?;
						discriminants.push(Some(*d));
					}
				}
				Ok(())
			}
			(dst, src) => internal_err!("cannot copy a {} row into a {} column", src.get_type(), dst.get_type()),
		}
	}
}

/// Row `row` of an array column as a range into its values.
pub(crate) fn array_range(offsets: &[usize], row: usize) -> Option<std::ops::Range<usize>> {
	let end = *offsets.get(row)?;
	let start = if row == 0 {
		0
	} else {
		offsets[row - 1]
	};
	Some(start..end)
}

pub(crate) fn default_value(ty: &Type) -> Value {
	match ty {
		ty if ty.is_nullable() => Value::Null,
		Type::Boolean => Value::Boolean(false),
		Type::Int1 => Value::Int1(0),
		Type::Int2 => Value::Int2(0),
		Type::Int4 => Value::Int4(0),
		Type::Int8 => Value::Int8(0),
		Type::Int16 => Value::Int16(0),
		Type::Uint1 => Value::Uint1(0),
		Type::Uint2 => Value::Uint2(0),
		Type::Uint4 => Value::Uint4(0),
		Type::Uint8 => Value::Uint8(0),
		Type::Uint16 => Value::Uint16(0),
		Type::Float4 => Value::float4(0.0),
		Type::Float8 => Value::float8(0.0),
		Type::Utf8 => Value::utf8(""),
		Type::Array(_) => Value::Array(vec![]),
		Type::Tuple(fields) => Value::Tuple(fields.iter().map(default_value).collect()),
		Type::Dictionary(inner) => default_value(inner),
		_ => Value::Null,
	}
}

fn dictionary_key(idx: usize) -> crate::Result<u32> {
	match u32::try_from(idx) {
		Ok(key) => Ok(key),
		Err(_) => internal_err!("dictionary holds more than {} entries", u32::MAX),
	}
}

fn out_of_range(row: usize, len: usize) -> crate::Result<()> {
	internal_err!("row {} out of range for a column of {} rows", row, len)
}
