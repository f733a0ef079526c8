// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::Value;

mod get;
mod parse;
mod validate;

pub use get::GetType;

/// Upper bound on the number of alternatives a `Variant` can hold; one
/// discriminant byte per row.
pub const MAX_VARIANT_ALTERNATIVES: usize = u8::MAX as usize;

/// All data types a column or expression can have.
///
/// The declaration order is the canonical order: it drives the derived `Ord`
/// which sorts `Variant` alternatives by category first and structurally
/// within a category.
///
/// Construct wrapper types through [`Type::nullable`], [`Type::dictionary`]
/// and [`Type::variant`]; they keep the nesting invariants. A hand-built
/// shape can be checked with [`Type::validate`].
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// The type of a NULL literal; compatible with every type
	Null,
	/// A boolean: true or false.
	Boolean,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 16-byte signed integer
	Int16,
	/// A 1-byte unsigned integer
	Uint1,
	/// A 2-byte unsigned integer
	Uint2,
	/// A 4-byte unsigned integer
	Uint4,
	/// An 8-byte unsigned integer
	Uint8,
	/// A 16-byte unsigned integer
	Uint16,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A UTF-8 encoded text
	Utf8,
	/// A variable length list of one element type
	Array(Box<Type>),
	/// A fixed sequence of field types
	Tuple(Vec<Type>),
	/// The inner type, or NULL
	Nullable(Box<Type>),
	/// The inner type stored as keys into a deduplicated set of values
	Dictionary(Box<Type>),
	/// A tagged union; each row holds a value of one alternative or NULL
	Variant(Vec<Type>),
}

impl Type {
	pub fn array(element: Type) -> Type {
		Type::Array(Box::new(element))
	}

	/// A tuple of `fields`, which must not be empty. [`Type::try_tuple`]
	/// checks that for field lists that are not known up front.
	pub fn tuple(fields: impl IntoIterator<Item = Type>) -> Type {
		Type::Tuple(fields.into_iter().collect())
	}

	/// Wraps `inner` so it can hold NULL.
	///
	/// Idempotent. Types which already carry NULL (`Null`, `Nullable`,
	/// `Variant`) are returned as they are, and nullability is pushed inside a
	/// dictionary encoding.
	pub fn nullable(inner: Type) -> Type {
		match inner {
			Type::Null | Type::Nullable(_) | Type::Variant(_) => inner,
			Type::Dictionary(inner) => Type::Dictionary(Box::new(Type::nullable(*inner))),
			inner => Type::Nullable(Box::new(inner)),
		}
	}

	/// Dictionary encodes `inner` when the encoding applies to it, otherwise
	/// returns `inner` unchanged.
	pub fn dictionary(inner: Type) -> Type {
		match inner {
			Type::Dictionary(_) => inner,
			inner if inner.is_dictionary_encodable() => Type::Dictionary(Box::new(inner)),
			inner => inner,
		}
	}

	/// Builds the canonical tagged union over `alternatives`.
	///
	/// Nested variants are flattened, `Nullable` and `Dictionary` wrappers are
	/// stripped (the variant carries NULL itself and stores alternatives
	/// plainly), `Null` contributes no alternative, and the remaining types
	/// are deduplicated and sorted. A single remaining alternative collapses
	/// into that type, nullable when a NULL capable input was seen.
	pub fn variant(alternatives: impl IntoIterator<Item = Type>) -> Type {
		let mut result = Vec::new();
		let mut saw_null = false;

		fn collect(ty: Type, result: &mut Vec<Type>, saw_null: &mut bool) {
			match ty {
				Type::Null => *saw_null = true,
				Type::Nullable(inner) => {
					*saw_null = true;
					collect(*inner, result, saw_null);
				}
				Type::Dictionary(inner) => collect(*inner, result, saw_null),
				Type::Variant(alternatives) => {
					*saw_null = true;
					for alternative in alternatives {
						collect(alternative, result, saw_null);
					}
				}
				ty => result.push(ty),
			}
		}

		for alternative in alternatives {
			collect(alternative, &mut result, &mut saw_null);
		}

		result.sort();
		result.dedup();

		match result.len() {
			0 => Type::Null,
			1 => {
				let single = result.remove(0);
				if saw_null {
					Type::nullable(single)
				} else {
					single
				}
			}
			_ => Type::Variant(result),
		}
	}
}

impl Type {
	pub fn is_number(&self) -> bool {
		self.is_integer() || self.is_floating_point()
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Boolean)
	}

	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8 | Type::Int16)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(self, Type::Uint1 | Type::Uint2 | Type::Uint4 | Type::Uint8 | Type::Uint16)
	}

	pub fn is_integer(&self) -> bool {
		self.is_signed_integer() || self.is_unsigned_integer()
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Type::Null)
	}

	pub fn is_variant(&self) -> bool {
		matches!(self, Type::Variant(_))
	}

	pub fn is_dictionary(&self) -> bool {
		matches!(self, Type::Dictionary(_))
	}

	/// Whether values of this type can be NULL.
	pub fn is_nullable(&self) -> bool {
		match self {
			Type::Null | Type::Nullable(_) | Type::Variant(_) => true,
			Type::Dictionary(inner) => inner.is_nullable(),
			_ => false,
		}
	}

	/// Whether a dictionary encoding may wrap this type.
	pub fn is_dictionary_encodable(&self) -> bool {
		match self {
			Type::Nullable(inner) => inner.is_dictionary_encodable(),
			ty => ty.is_bool() || ty.is_number() || ty.is_utf8(),
		}
	}

	/// Byte width of a numeric type
	pub fn width(&self) -> Option<usize> {
		match self {
			Type::Int1 | Type::Uint1 => Some(1),
			Type::Int2 | Type::Uint2 => Some(2),
			Type::Int4 | Type::Uint4 | Type::Float4 => Some(4),
			Type::Int8 | Type::Uint8 | Type::Float8 => Some(8),
			Type::Int16 | Type::Uint16 => Some(16),
			_ => None,
		}
	}

	/// Removes one `Nullable` wrapper, also beneath a dictionary encoding.
	pub fn remove_nullable(&self) -> Type {
		match self {
			Type::Nullable(inner) => inner.as_ref().clone(),
			Type::Dictionary(inner) => Type::dictionary(inner.remove_nullable()),
			ty => ty.clone(),
		}
	}

	/// Removes a `Dictionary` wrapper.
	pub fn remove_dictionary(&self) -> Type {
		match self {
			Type::Dictionary(inner) => inner.as_ref().clone(),
			ty => ty.clone(),
		}
	}

	/// Position of `alternative` in a variant's canonical alternative list.
	pub fn variant_discriminant(&self, alternative: &Type) -> Option<u8> {
		match self {
			Type::Variant(alternatives) => alternatives
				.binary_search(alternative)
				.ok()
				.and_then(|idx| u8::try_from(idx).ok()),
			_ => None,
		}
	}

	/// The type of a literal value, `None` for empty arrays whose element
	/// type cannot be inferred.
	pub fn of_value(value: &Value) -> Option<Type> {
		Some(match value {
			Value::Null => Type::Null,
			Value::Boolean(_) => Type::Boolean,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Int16(_) => Type::Int16,
			Value::Uint1(_) => Type::Uint1,
			Value::Uint2(_) => Type::Uint2,
			Value::Uint4(_) => Type::Uint4,
			Value::Uint8(_) => Type::Uint8,
			Value::Uint16(_) => Type::Uint16,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Utf8(_) => Type::Utf8,
			Value::Array(values) => {
				let mut element: Option<Type> = None;
				for value in values {
					let ty = Type::of_value(value)?;
					element = Some(match element {
						None => ty,
						Some(previous) => crate::supertype::unify(&previous, &ty)?,
					});
				}
				Type::array(element?)
			}
			Value::Tuple(values) => Type::Tuple(values.iter().map(Type::of_value).collect::<Option<Vec<_>>>()?),
		})
	}

	/// Whether a column of this type can store `value` as it is.
	pub fn accepts(&self, value: &Value) -> bool {
		match (self, value) {
			(ty, Value::Null) => ty.is_nullable(),
			(Type::Nullable(inner), value) | (Type::Dictionary(inner), value) => inner.accepts(value),
			(Type::Variant(alternatives), value) => alternatives.iter().any(|alt| alt.accepts(value)),
			(Type::Array(element), Value::Array(values)) => values.iter().all(|v| element.accepts(v)),
			(Type::Tuple(fields), Value::Tuple(values)) => {
				fields.len() == values.len() && fields.iter().zip(values).all(|(ty, v)| ty.accepts(v))
			}
			(Type::Array(_) | Type::Tuple(_), _) => false,
			(ty, value) => Type::of_value(value).as_ref() == Some(ty),
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Null => f.write_str("Null"),
			Type::Boolean => f.write_str("Boolean"),
			Type::Int1 => f.write_str("Int1"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Int16 => f.write_str("Int16"),
			Type::Uint1 => f.write_str("Uint1"),
			Type::Uint2 => f.write_str("Uint2"),
			Type::Uint4 => f.write_str("Uint4"),
			Type::Uint8 => f.write_str("Uint8"),
			Type::Uint16 => f.write_str("Uint16"),
			Type::Float4 => f.write_str("Float4"),
			Type::Float8 => f.write_str("Float8"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::Array(element) => write!(f, "Array({})", element),
			Type::Tuple(fields) => write_list(f, "Tuple", fields),
			Type::Nullable(inner) => write!(f, "Nullable({})", inner),
			Type::Dictionary(inner) => write!(f, "Dictionary({})", inner),
			Type::Variant(alternatives) => write_list(f, "Variant", alternatives),
		}
	}
}

fn write_list(f: &mut Formatter<'_>, name: &str, types: &[Type]) -> std::fmt::Result {
	f.write_str(name)?;
	f.write_str("(")?;
	for (idx, ty) in types.iter().enumerate() {
		if idx > 0 {
			f.write_str(", ")?;
		}
		Display::fmt(ty, f)?;
	}
	f.write_str(")")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_nullable_collapses() {
		let once = Type::nullable(Type::Utf8);
		assert_eq!(once, Type::Nullable(Box::new(Type::Utf8)));
		assert_eq!(Type::nullable(once.clone()), once);
		assert_eq!(Type::nullable(Type::Null), Type::Null);
	}

	#[test]
	fn test_nullable_moves_inside_dictionary() {
		let ty = Type::nullable(Type::dictionary(Type::Utf8));
		assert_eq!(ty, Type::dictionary(Type::nullable(Type::Utf8)));
		assert_eq!(ty.to_string(), "Dictionary(Nullable(Utf8))");
		assert!(ty.is_nullable());
	}

	#[test]
	fn test_nullable_variant_is_variant() {
		let variant = Type::variant([Type::Utf8, Type::Int8]);
		assert_eq!(Type::nullable(variant.clone()), variant);
		assert!(variant.is_nullable());
	}

	#[test]
	fn test_dictionary_only_for_encodable() {
		assert_eq!(Type::dictionary(Type::array(Type::Int1)), Type::array(Type::Int1));
		assert_eq!(Type::dictionary(Type::dictionary(Type::Utf8)), Type::dictionary(Type::Utf8));
		assert!(Type::dictionary(Type::Uint8).is_dictionary());
	}

	#[test]
	fn test_variant_flattens_and_sorts() {
		let inner = Type::variant([Type::Utf8, Type::array(Type::Int8)]);
		let outer = Type::variant([Type::Int4, inner]);
		assert_eq!(outer, Type::Variant(vec![Type::Int4, Type::Utf8, Type::array(Type::Int8)]));
		assert_eq!(outer.to_string(), "Variant(Int4, Utf8, Array(Int8))");
	}

	#[test]
	fn test_variant_order_independent() {
		let a = Type::variant([Type::Utf8, Type::array(Type::Int8), Type::Float8]);
		let b = Type::variant([Type::array(Type::Int8), Type::Float8, Type::Utf8, Type::Utf8]);
		assert_eq!(a, b);
		assert_eq!(a.to_string(), b.to_string());
	}

	#[test]
	fn test_variant_single_alternative_collapses() {
		assert_eq!(Type::variant([Type::Utf8, Type::Utf8]), Type::Utf8);
		assert_eq!(Type::variant([Type::Utf8, Type::nullable(Type::Utf8)]), Type::nullable(Type::Utf8));
		assert_eq!(Type::variant([Type::Null, Type::Int4]), Type::nullable(Type::Int4));
		assert_eq!(Type::variant([]), Type::Null);
	}

	#[test]
	fn test_variant_strips_wrappers() {
		let ty = Type::variant([Type::dictionary(Type::Utf8), Type::nullable(Type::Int8)]);
		assert_eq!(ty, Type::Variant(vec![Type::Int8, Type::Utf8]));
	}

	#[test]
	fn test_variant_discriminant() {
		let ty = Type::variant([Type::Utf8, Type::array(Type::Int8)]);
		assert_eq!(ty.variant_discriminant(&Type::Utf8), Some(0));
		assert_eq!(ty.variant_discriminant(&Type::array(Type::Int8)), Some(1));
		assert_eq!(ty.variant_discriminant(&Type::Int8), None);
	}

	#[test]
	fn test_remove_nullable() {
		assert_eq!(Type::nullable(Type::Int4).remove_nullable(), Type::Int4);
		assert_eq!(
			Type::dictionary(Type::nullable(Type::Utf8)).remove_nullable(),
			Type::dictionary(Type::Utf8)
		);
		assert_eq!(Type::Utf8.remove_nullable(), Type::Utf8);
	}

	#[test]
	fn test_of_value() {
		let value = Value::Array(vec![Value::Int1(1), Value::Int4(2)]);
		assert_eq!(Type::of_value(&value), Some(Type::array(Type::Int4)));

		let value = Value::Array(vec![Value::Null, Value::utf8("a")]);
		assert_eq!(Type::of_value(&value), Some(Type::array(Type::nullable(Type::Utf8))));

		assert_eq!(Type::of_value(&Value::Array(vec![])), None);
		assert_eq!(Type::of_value(&Value::Array(vec![Value::Int1(1), Value::utf8("a")])), None);
	}

	#[test]
	fn test_accepts() {
		let ty = Type::variant([Type::Utf8, Type::array(Type::nullable(Type::Int8))]);
		assert!(ty.accepts(&Value::Null));
		assert!(ty.accepts(&Value::utf8("a")));
		assert!(ty.accepts(&Value::Array(vec![Value::Int8(1), Value::Null])));
		assert!(!ty.accepts(&Value::Int8(1)));

		assert!(!Type::Utf8.accepts(&Value::Null));
		assert!(Type::dictionary(Type::nullable(Type::Utf8)).accepts(&Value::Null));
		assert!(!Type::tuple([Type::Int1]).accepts(&Value::Tuple(vec![Value::Int1(1), Value::Int1(2)])));
	}

	#[test]
	fn test_serde_roundtrip() {
		let ty = Type::variant([Type::tuple([Type::Int4, Type::Utf8]), Type::nullable(Type::Float8)]);
		let json = serde_json::to_string(&ty).unwrap();
		assert_eq!(serde_json::from_str::<Type>(&json).unwrap(), ty);
	}
}
