// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexSet;
use lattice_type::{Type, TypeError, Value, error, return_error};
use tracing::{instrument, trace};

use crate::{util::BitVec, value::column::ColumnData};

/// Converts `data` into a column of type `target`.
///
/// Only the conversions needed to move a value into a resolved common type
/// are supported: numeric widening, adding or removing nullability, turning
/// a compile-time NULL into an all-NULL column, dictionary encoding and
/// decoding, element-wise casting of arrays and tuples, and placing values
/// into a variant. Removing nullability from a column that holds NULL fails.
#[instrument(name = "column::cast", level = "trace", skip_all, fields(from = %data.get_type(), to = %target))]
pub fn cast_column(data: &ColumnData, target: &Type) -> crate::Result<ColumnData> {
	let from = data.get_type();
	if &from == target {
		return Ok(data.clone());
	}

	match (data, target) {
		(_, Type::Variant(alternatives)) => to_variant(data, alternatives),

		(_, Type::Dictionary(inner)) => {
			let plain = cast_column(data, inner)?;
			encode(&plain, inner)
		}

		(
			ColumnData::Dictionary {
				..
			},
			_,
		) => cast_column(&decode(data)?, target),

		(ColumnData::Null(len), _) => {
			if *len > 0 && !target.is_nullable() {
				return_error!(TypeError::CastNullToNonNullable {
					from,
					to: target.clone(),
				});
			}
			let mut result = ColumnData::with_capacity(target, *len);
			for _ in 0..*len {
				result.push_default()?;
			}
			Ok(result)
		}

		(
			ColumnData::Nullable {
				bitvec,
				inner,
			},
			Type::Nullable(target_inner),
		) => Ok(ColumnData::Nullable {
			bitvec: bitvec.clone(),
			inner: Box::new(cast_column(inner, target_inner)?),
		}),

		(_, Type::Nullable(target_inner)) => Ok(ColumnData::Nullable {
			bitvec: BitVec::repeat(data.len(), true),
			inner: Box::new(cast_column(data, target_inner)?),
		}),

		(
			ColumnData::Nullable {
				bitvec,
				inner,
			},
			_,
		) => {
			if !bitvec.all_ones() {
				return_error!(TypeError::CastNullToNonNullable {
					from,
					to: target.clone(),
				});
			}
			cast_column(inner, target)
		}

		(
			ColumnData::Array {
				offsets,
				values,
			},
			Type::Array(element),
		) => Ok(ColumnData::Array {
			offsets: offsets.clone(),
			values: Box::new(cast_column(values, element)?),
		}),

		(
			ColumnData::Tuple {
				fields,
				len,
			},
			Type::Tuple(target_fields),
		) if fields.len() == target_fields.len() => Ok(ColumnData::Tuple {
			fields: fields
				.iter()
				.zip(target_fields)
				.map(|(field, ty)| cast_column(field, ty))
				.collect::<crate::Result<Vec<_>>>()?,
			len: *len,
		}),

		_ if from.is_number() && target.is_number() => {
			let mut result = ColumnData::with_capacity(target, data.len());
			for value in data.iter() {
				match value.convert_number(target) {
					Some(value) => result.push_value(value)?,
					None => return_error!(TypeError::CastNotSupported {
						from,
						to: target.clone(),
					}),
				}
			}
			Ok(result)
		}

		_ => Err(error!(TypeError::CastNotSupported {
			from,
			to: target.clone(),
		})),
	}
}

fn to_variant(data: &ColumnData, alternatives: &[Type]) -> crate::Result<ColumnData> {
	let target = Type::Variant(alternatives.to_vec());

	if let ColumnData::Variant {
		alternatives: src_alternatives,
		discriminants,
		offsets,
		columns,
	} = data
	{
		return remap_variant(src_alternatives, discriminants, offsets, columns, &target);
	}

	let mut result = ColumnData::with_capacity(&target, data.len());
	if let ColumnData::Null(len) = data {
		for _ in 0..*len {
			result.push_default()?;
		}
		return Ok(result);
	}

	let from = data.get_type();
	let plain = from.remove_nullable().remove_dictionary();
	let Some(discriminant) = target.variant_discriminant(&plain) else {
		return_error!(TypeError::CastNotSupported {
			from,
			to: target,
		});
	};
	trace!(alternative = %plain, discriminant, "placing column into variant");

	if let ColumnData::Variant {
		discriminants,
		offsets,
		columns,
		..
	} = &mut result
	{
		let column = &mut columns[discriminant as usize];
		for value in data.iter() {
			if value.is_null() {
				discriminants.push(None);
				offsets.push(0);
			} else {
				offsets.push(column.len());
				column.push_value(value)?;
				discriminants.push(Some(discriminant));
			}
		}
	}
	Ok(result)
}

fn remap_variant(
	alternatives: &[Type],
	discriminants: &[Option<u8>],
	offsets: &[usize],
	columns: &[ColumnData],
	target: &Type,
) -> crate::Result<ColumnData> {
	let Type::Variant(target_alternatives) = target else {
		return_error!(TypeError::CastNotSupported {
			from: Type::Variant(alternatives.to_vec()),
			to: target.clone(),
		});
	};

	let mut mapping = Vec::with_capacity(alternatives.len());
	for alternative in alternatives {
		match target.variant_discriminant(alternative) {
			Some(d) => mapping.push(d),
			None => return_error!(TypeError::CastNotSupported {
				from: Type::Variant(alternatives.to_vec()),
				to: target.clone(),
			}),
		}
	}

	let mut target_columns: Vec<ColumnData> =
		target_alternatives.iter().map(|ty| ColumnData::with_capacity(ty, 0)).collect();
	for (src, d) in columns.iter().zip(&mapping) {
		target_columns[*d as usize] = src.clone();
	}

	Ok(ColumnData::Variant {
		alternatives: target_alternatives.clone(),
		discriminants: discriminants.iter().map(|d| d.map(|d| mapping[d as usize])).collect(),
		offsets: offsets.to_vec(),
		columns: target_columns,
	})
}

fn encode(plain: &ColumnData, inner: &Type) -> crate::Result<ColumnData> {
	let mut keys = Vec::with_capacity(plain.len());
	let mut entries: IndexSet<Value> = IndexSet::new();
	for value in plain.iter() {
		let (idx, _) = entries.insert_full(value);
		match u32::try_from(idx) {
			Ok(key) => keys.push(key),
			Err(_) => return_error!(TypeError::CastNotSupported {
				from: plain.get_type(),
				to: Type::dictionary(inner.clone()),
			}),
		}
	}
	Ok(ColumnData::Dictionary {
		ty: inner.clone(),
		keys,
		entries,
	})
}

fn decode(data: &ColumnData) -> crate::Result<ColumnData> {
	let ColumnData::Dictionary {
		ty,
		..
	} = data
	else {
		return Ok(data.clone());
	};
	ColumnData::from_values(ty, data.iter())
}
