// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexSet;
use lattice_type::{Type, Value};
use serde::{Deserialize, Serialize};

use crate::{
	util::BitVec,
	value::container::{BoolContainer, NumberContainer, Utf8Container},
};

mod cast;
mod columns;
mod data;
mod operand;

pub use cast::cast_column;
pub use columns::Columns;
pub use operand::ColumnValue;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub data: ColumnData,
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn data(&self) -> &ColumnData {
		&self.data
	}

	pub fn get_type(&self) -> Type {
		self.data.get_type()
	}
}

/// The values of one column within a block of rows.
///
/// Wrapper types are structural: a `Nullable` column is a validity mask over
/// an inner column holding default values under NULL rows, a `Dictionary`
/// column stores each distinct value once and refers to it by key, and a
/// `Variant` column stores each alternative in its own column, addressed per
/// row by discriminant and offset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Null(usize),
	Bool(BoolContainer),
	Int1(NumberContainer<i8>),
	Int2(NumberContainer<i16>),
	Int4(NumberContainer<i32>),
	Int8(NumberContainer<i64>),
	Int16(NumberContainer<i128>),
	Uint1(NumberContainer<u8>),
	Uint2(NumberContainer<u16>),
	Uint4(NumberContainer<u32>),
	Uint8(NumberContainer<u64>),
	Uint16(NumberContainer<u128>),
	Float4(NumberContainer<f32>),
	Float8(NumberContainer<f64>),
	Utf8(Utf8Container),
	Array {
		/// End offset into `values` for every row.
		offsets: Vec<usize>,
		values: Box<ColumnData>,
	},
	Tuple {
		fields: Vec<ColumnData>,
		len: usize,
	},
	Nullable {
		bitvec: BitVec,
		inner: Box<ColumnData>,
	},
	Dictionary {
		ty: Type,
		keys: Vec<u32>,
		entries: IndexSet<Value>,
	},
	Variant {
		alternatives: Vec<Type>,
		/// `None` marks a NULL row.
		discriminants: Vec<Option<u8>>,
		/// Row position inside the column of its alternative.
		offsets: Vec<usize>,
		columns: Vec<ColumnData>,
	},
}

macro_rules! impl_number_constructor {
	($($name:ident => $variant:ident: $ty:ty),* $(,)?) => {
		$(
			pub fn $name(data: impl IntoIterator<Item = $ty>) -> Self {
				ColumnData::$variant(NumberContainer::new(data.into_iter().collect()))
			}
		)*
	};
}

impl ColumnData {
	impl_number_constructor!(
		int1 => Int1: i8,
		int2 => Int2: i16,
		int4 => Int4: i32,
		int8 => Int8: i64,
		int16 => Int16: i128,
		uint1 => Uint1: u8,
		uint2 => Uint2: u16,
		uint4 => Uint4: u32,
		uint8 => Uint8: u64,
		uint16 => Uint16: u128,
		float4 => Float4: f32,
		float8 => Float8: f64,
	);

	pub fn null(len: usize) -> Self {
		ColumnData::Null(len)
	}

	pub fn bool(data: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Bool(BoolContainer::new(data.into_iter().collect()))
	}

	pub fn utf8(data: impl IntoIterator<Item = impl Into<String>>) -> Self {
		ColumnData::Utf8(Utf8Container::new(data.into_iter().map(Into::into).collect()))
	}

	/// Wraps `inner` with a validity mask, a cleared bit marks a NULL row.
	pub fn nullable(inner: ColumnData, bitvec: BitVec) -> Self {
		debug_assert_eq!(inner.len(), bitvec.len());
		ColumnData::Nullable {
			bitvec,
			inner: Box::new(inner),
		}
	}

	/// An empty column able to hold values of `ty`.
	pub fn with_capacity(ty: &Type, capacity: usize) -> Self {
		match ty {
			Type::Null => ColumnData::Null(0),
			Type::Boolean => ColumnData::Bool(BoolContainer::with_capacity(capacity)),
			Type::Int1 => ColumnData::Int1(NumberContainer::with_capacity(capacity)),
			Type::Int2 => ColumnData::Int2(NumberContainer::with_capacity(capacity)),
			Type::Int4 => ColumnData::Int4(NumberContainer::with_capacity(capacity)),
			Type::Int8 => ColumnData::Int8(NumberContainer::with_capacity(capacity)),
			Type::Int16 => ColumnData::Int16(NumberContainer::with_capacity(capacity)),
			Type::Uint1 => ColumnData::Uint1(NumberContainer::with_capacity(capacity)),
			Type::Uint2 => ColumnData::Uint2(NumberContainer::with_capacity(capacity)),
			Type::Uint4 => ColumnData::Uint4(NumberContainer::with_capacity(capacity)),
			Type::Uint8 => ColumnData::Uint8(NumberContainer::with_capacity(capacity)),
			Type::Uint16 => ColumnData::Uint16(NumberContainer::with_capacity(capacity)),
			Type::Float4 => ColumnData::Float4(NumberContainer::with_capacity(capacity)),
			Type::Float8 => ColumnData::Float8(NumberContainer::with_capacity(capacity)),
			Type::Utf8 => ColumnData::Utf8(Utf8Container::with_capacity(capacity)),
			Type::Array(element) => ColumnData::Array {
				offsets: Vec::with_capacity(capacity),
				values: Box::new(ColumnData::with_capacity(element, capacity)),
			},
			Type::Tuple(fields) => ColumnData::Tuple {
				fields: fields.iter().map(|ty| ColumnData::with_capacity(ty, capacity)).collect(),
				len: 0,
			},
			Type::Nullable(inner) => ColumnData::Nullable {
				bitvec: BitVec::with_capacity(capacity),
				inner: Box::new(ColumnData::with_capacity(inner, capacity)),
			},
			Type::Dictionary(inner) => ColumnData::Dictionary {
				ty: inner.as_ref().clone(),
				keys: Vec::with_capacity(capacity),
				entries: IndexSet::new(),
			},
			Type::Variant(alternatives) => ColumnData::Variant {
				alternatives: alternatives.clone(),
				discriminants: Vec::with_capacity(capacity),
				offsets: Vec::with_capacity(capacity),
				columns: alternatives.iter().map(|ty| ColumnData::with_capacity(ty, 0)).collect(),
			},
		}
	}

	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Null(_) => Type::Null,
			ColumnData::Bool(_) => Type::Boolean,
			ColumnData::Int1(_) => Type::Int1,
			ColumnData::Int2(_) => Type::Int2,
			ColumnData::Int4(_) => Type::Int4,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Int16(_) => Type::Int16,
			ColumnData::Uint1(_) => Type::Uint1,
			ColumnData::Uint2(_) => Type::Uint2,
			ColumnData::Uint4(_) => Type::Uint4,
			ColumnData::Uint8(_) => Type::Uint8,
			ColumnData::Uint16(_) => Type::Uint16,
			ColumnData::Float4(_) => Type::Float4,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Array {
				values,
				..
			} => Type::array(values.get_type()),
			ColumnData::Tuple {
				fields,
				..
			} => Type::Tuple(fields.iter().map(ColumnData::get_type).collect()),
			ColumnData::Nullable {
				inner,
				..
			} => Type::Nullable(Box::new(inner.get_type())),
			ColumnData::Dictionary {
				ty,
				..
			} => Type::Dictionary(Box::new(ty.clone())),
			ColumnData::Variant {
				alternatives,
				..
			} => Type::Variant(alternatives.clone()),
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Null(len) => *len,
			ColumnData::Bool(container) => container.len(),
			ColumnData::Int1(container) => container.len(),
			ColumnData::Int2(container) => container.len(),
			ColumnData::Int4(container) => container.len(),
			ColumnData::Int8(container) => container.len(),
			ColumnData::Int16(container) => container.len(),
			ColumnData::Uint1(container) => container.len(),
			ColumnData::Uint2(container) => container.len(),
			ColumnData::Uint4(container) => container.len(),
			ColumnData::Uint8(container) => container.len(),
			ColumnData::Uint16(container) => container.len(),
			ColumnData::Float4(container) => container.len(),
			ColumnData::Float8(container) => container.len(),
			ColumnData::Utf8(container) => container.len(),
			ColumnData::Array {
				offsets,
				..
			} => offsets.len(),
			ColumnData::Tuple {
				len,
				..
			} => *len,
			ColumnData::Nullable {
				bitvec,
				..
			} => bitvec.len(),
			ColumnData::Dictionary {
				keys,
				..
			} => keys.len(),
			ColumnData::Variant {
				discriminants,
				..
			} => discriminants.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
