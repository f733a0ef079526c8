// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod into;
pub mod is;
mod ordered_f32;
mod ordered_f64;
mod r#type;

pub use into::IntoValue;
pub use ordered_f32::OrderedF32;
pub use ordered_f64::OrderedF64;
pub use r#type::{GetType, Type};

/// A single row value, represented as a native Rust type.
///
/// Values are untagged with respect to encodings: a value read from a
/// `Dictionary` or `Variant` column is the plain inner value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Value {
	/// The absent value
	Null,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 16-byte signed integer
	Int16(i128),
	/// A 1-byte unsigned integer
	Uint1(u8),
	/// A 2-byte unsigned integer
	Uint2(u16),
	/// A 4-byte unsigned integer
	Uint4(u32),
	/// An 8-byte unsigned integer
	Uint8(u64),
	/// A 16-byte unsigned integer
	Uint16(u128),
	/// A 4-byte floating point
	Float4(OrderedF32),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A UTF-8 encoded text
	Utf8(String),
	/// An ordered list of values of one element type
	Array(Vec<Value>),
	/// A fixed sequence of values
	Tuple(Vec<Value>),
}

impl Value {
	pub fn utf8(value: impl Into<String>) -> Self {
		Value::Utf8(value.into())
	}

	pub fn float4(value: f32) -> Self {
		Value::Float4(OrderedF32::from(value))
	}

	pub fn float8(value: f64) -> Self {
		Value::Float8(OrderedF64::from(value))
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Widens a numeric value into the numeric `target` type. Returns `None`
	/// when the value is not numeric, the target is not numeric, or the
	/// value does not fit.
	pub fn convert_number(&self, target: &Type) -> Option<Value> {
		match self {
			Value::Int1(v) => convert_signed(*v as i128, target),
			Value::Int2(v) => convert_signed(*v as i128, target),
			Value::Int4(v) => convert_signed(*v as i128, target),
			Value::Int8(v) => convert_signed(*v as i128, target),
			Value::Int16(v) => convert_signed(*v, target),
			Value::Uint1(v) => convert_unsigned(*v as u128, target),
			Value::Uint2(v) => convert_unsigned(*v as u128, target),
			Value::Uint4(v) => convert_unsigned(*v as u128, target),
			Value::Uint8(v) => convert_unsigned(*v as u128, target),
			Value::Uint16(v) => convert_unsigned(*v, target),
			Value::Float4(v) => convert_float(v.value() as f64, target),
			Value::Float8(v) => convert_float(v.value(), target),
			_ => None,
		}
	}

	/// Interprets the value as a predicate outcome: `None` for NULL,
	/// non-zero numbers are true.
	pub fn as_predicate(&self) -> Option<Option<bool>> {
		match self {
			Value::Null => Some(None),
			Value::Boolean(b) => Some(Some(*b)),
			Value::Int1(v) => Some(Some(*v != 0)),
			Value::Int2(v) => Some(Some(*v != 0)),
			Value::Int4(v) => Some(Some(*v != 0)),
			Value::Int8(v) => Some(Some(*v != 0)),
			Value::Int16(v) => Some(Some(*v != 0)),
			Value::Uint1(v) => Some(Some(*v != 0)),
			Value::Uint2(v) => Some(Some(*v != 0)),
			Value::Uint4(v) => Some(Some(*v != 0)),
			Value::Uint8(v) => Some(Some(*v != 0)),
			Value::Uint16(v) => Some(Some(*v != 0)),
			Value::Float4(v) => Some(Some(v.value() != 0.0)),
			Value::Float8(v) => Some(Some(v.value() != 0.0)),
			Value::Utf8(_) | Value::Array(_) | Value::Tuple(_) => None,
		}
	}
}

fn convert_signed(v: i128, target: &Type) -> Option<Value> {
	match target {
		Type::Int1 => i8::try_from(v).ok().map(Value::Int1),
		Type::Int2 => i16::try_from(v).ok().map(Value::Int2),
		Type::Int4 => i32::try_from(v).ok().map(Value::Int4),
		Type::Int8 => i64::try_from(v).ok().map(Value::Int8),
		Type::Int16 => Some(Value::Int16(v)),
		Type::Uint1 => u8::try_from(v).ok().map(Value::Uint1),
		Type::Uint2 => u16::try_from(v).ok().map(Value::Uint2),
		Type::Uint4 => u32::try_from(v).ok().map(Value::Uint4),
		Type::Uint8 => u64::try_from(v).ok().map(Value::Uint8),
		Type::Uint16 => u128::try_from(v).ok().map(Value::Uint16),
		Type::Float4 => Some(Value::float4(v as f32)),
		Type::Float8 => Some(Value::float8(v as f64)),
		_ => None,
	}
}

fn convert_unsigned(v: u128, target: &Type) -> Option<Value> {
	match target {
		Type::Int1 => i8::try_from(v).ok().map(Value::Int1),
		Type::Int2 => i16::try_from(v).ok().map(Value::Int2),
		Type::Int4 => i32::try_from(v).ok().map(Value::Int4),
		Type::Int8 => i64::try_from(v).ok().map(Value::Int8),
		Type::Int16 => i128::try_from(v).ok().map(Value::Int16),
		Type::Uint1 => u8::try_from(v).ok().map(Value::Uint1),
		Type::Uint2 => u16::try_from(v).ok().map(Value::Uint2),
		Type::Uint4 => u32::try_from(v).ok().map(Value::Uint4),
		Type::Uint8 => u64::try_from(v).ok().map(Value::Uint8),
		Type::Uint16 => Some(Value::Uint16(v)),
		Type::Float4 => Some(Value::float4(v as f32)),
		Type::Float8 => Some(Value::float8(v as f64)),
		_ => None,
	}
}

fn convert_float(v: f64, target: &Type) -> Option<Value> {
	match target {
		Type::Float4 => Some(Value::float4(v as f32)),
		Type::Float8 => Some(Value::float8(v)),
		_ => None,
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Null => f.write_str("NULL"),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Int1(value) => Display::fmt(value, f),
			Value::Int2(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Int16(value) => Display::fmt(value, f),
			Value::Uint1(value) => Display::fmt(value, f),
			Value::Uint2(value) => Display::fmt(value, f),
			Value::Uint4(value) => Display::fmt(value, f),
			Value::Uint8(value) => Display::fmt(value, f),
			Value::Uint16(value) => Display::fmt(value, f),
			Value::Float4(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Utf8(value) => write!(f, "'{}'", value),
			Value::Array(values) => {
				f.write_str("[")?;
				for (idx, value) in values.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(value, f)?;
				}
				f.write_str("]")
			}
			Value::Tuple(values) => {
				f.write_str("(")?;
				for (idx, value) in values.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(value, f)?;
				}
				f.write_str(")")
			}
		}
	}
}
