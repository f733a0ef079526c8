// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::{OrderedF32, OrderedF64, Value};

pub trait IntoValue {
	fn into_value(self) -> Value;
}

macro_rules! impl_into_value {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl IntoValue for $ty {
				fn into_value(self) -> Value {
					Value::$variant(self)
				}
			}
		)*
	};
}

impl_into_value!(
	bool => Boolean,
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	i128 => Int16,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
	u128 => Uint16,
	String => Utf8,
);

impl IntoValue for f32 {
	fn into_value(self) -> Value {
		Value::Float4(OrderedF32::from(self))
	}
}

impl IntoValue for f64 {
	fn into_value(self) -> Value {
		Value::Float8(OrderedF64::from(self))
	}
}

impl IntoValue for &str {
	fn into_value(self) -> Value {
		Value::Utf8(self.to_string())
	}
}

impl<T: IntoValue> IntoValue for Option<T> {
	fn into_value(self) -> Value {
		match self {
			Some(value) => value.into_value(),
			None => Value::Null,
		}
	}
}

impl<T: IntoValue> IntoValue for Vec<T> {
	fn into_value(self) -> Value {
		Value::Array(self.into_iter().map(IntoValue::into_value).collect())
	}
}
