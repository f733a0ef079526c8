// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{supertype::numeric::promote, value::Type};

/// Least common type of `left` and `right` under strict promotion, or `None`
/// when there is none.
///
/// Total over all inputs and bounded by the nesting depth of its arguments.
/// The dictionary encoding is unwrapped before the structural rules apply
/// and restored afterwards only when it stays cheap; `Null` unifies with
/// anything by making it nullable.
pub fn unify(left: &Type, right: &Type) -> Option<Type> {
	if left == right {
		return Some(left.clone());
	}

	match (left, right) {
		(Type::Dictionary(_), _) | (_, Type::Dictionary(_)) => unify_dictionary(left, right),

		(Type::Null, other) | (other, Type::Null) => Some(Type::nullable(other.clone())),

		(Type::Variant(_), _) | (_, Type::Variant(_)) => unify_variant(left, right),

		(Type::Nullable(l), Type::Nullable(r)) => unify(l, r).map(Type::nullable),

		(Type::Nullable(inner), other) | (other, Type::Nullable(inner)) => unify(inner, other).map(Type::nullable),

		(Type::Array(l), Type::Array(r)) => unify(l, r).map(Type::array),

		(Type::Tuple(l), Type::Tuple(r)) => {
			if l.len() != r.len() {
				return None;
			}
			l.iter().zip(r.iter()).map(|(l, r)| unify(l, r)).collect::<Option<Vec<_>>>().map(Type::Tuple)
		}

		(l, r) if l.is_number() && r.is_number() => promote(l, r),

		_ => None,
	}
}

/// The encoding survives when both sides are encoded, or when the unified
/// type is the encoded side's own type, possibly made nullable.
fn unify_dictionary(left: &Type, right: &Type) -> Option<Type> {
	let inner = unify(&left.remove_dictionary(), &right.remove_dictionary())?;

	let keep = (left.is_dictionary() && right.is_dictionary())
		|| [left, right]
			.into_iter()
			.filter(|ty| ty.is_dictionary())
			.any(|ty| ty.remove_dictionary().remove_nullable() == inner.remove_nullable());

	Some(if keep {
		Type::dictionary(inner)
	} else {
		inner
	})
}

/// A variant unifies with a type it already contains.
fn unify_variant(left: &Type, right: &Type) -> Option<Type> {
	let merged = Type::variant([left.clone(), right.clone()]);
	if &merged == left || &merged == right {
		Some(merged)
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn nullable(ty: Type) -> Type {
		Type::nullable(ty)
	}

	fn dictionary(ty: Type) -> Type {
		Type::dictionary(ty)
	}

	#[test]
	fn test_equal_types() {
		let ty = Type::tuple([Type::Utf8, Type::array(Type::Int4)]);
		assert_eq!(unify(&ty, &ty), Some(ty.clone()));
		assert_eq!(unify(&Type::Boolean, &Type::Boolean), Some(Type::Boolean));
	}

	#[test]
	fn test_one_side_nullable() {
		assert_eq!(unify(&nullable(Type::Int4), &Type::Int8), Some(nullable(Type::Int8)));
		assert_eq!(unify(&Type::Utf8, &nullable(Type::Utf8)), Some(nullable(Type::Utf8)));
		assert_eq!(unify(&nullable(Type::Utf8), &Type::Int1), None);
	}

	#[test]
	fn test_both_nullable() {
		assert_eq!(unify(&nullable(Type::Uint1), &nullable(Type::Int1)), Some(nullable(Type::Int2)));
	}

	#[test]
	fn test_numeric() {
		assert_eq!(unify(&Type::Int4, &Type::Int8), Some(Type::Int8));
		assert_eq!(unify(&Type::Uint1, &Type::Int1), Some(Type::Int2));
		assert_eq!(unify(&Type::Int4, &Type::Utf8), None);
		assert_eq!(unify(&Type::Int4, &Type::Boolean), None);
	}

	#[test]
	fn test_arrays() {
		assert_eq!(
			unify(&Type::array(Type::Int1), &Type::array(Type::Uint2)),
			Some(Type::array(Type::Int4))
		);
		assert_eq!(unify(&Type::array(Type::Int1), &Type::array(Type::Utf8)), None);
		assert_eq!(
			unify(&Type::array(Type::array(Type::Null)), &Type::array(Type::array(Type::Utf8))),
			Some(Type::array(Type::array(nullable(Type::Utf8))))
		);
	}

	#[test]
	fn test_tuples() {
		let left = Type::tuple([Type::Int1, Type::Utf8]);
		let right = Type::tuple([Type::Int8, nullable(Type::Utf8)]);
		assert_eq!(unify(&left, &right), Some(Type::tuple([Type::Int8, nullable(Type::Utf8)])));

		let shorter = Type::tuple([Type::Int1]);
		assert_eq!(unify(&left, &shorter), None);

		let incompatible = Type::tuple([Type::Int1, Type::Int1]);
		assert_eq!(unify(&left, &incompatible), None);
	}

	#[test]
	fn test_dictionary_both_encoded() {
		assert_eq!(
			unify(&dictionary(Type::Uint1), &dictionary(Type::Int1)),
			Some(dictionary(Type::Int2))
		);
	}

	#[test]
	fn test_dictionary_one_side_unchanged() {
		assert_eq!(unify(&dictionary(Type::Utf8), &Type::Utf8), Some(dictionary(Type::Utf8)));
		assert_eq!(
			unify(&Type::Utf8, &dictionary(nullable(Type::Utf8))),
			Some(dictionary(nullable(Type::Utf8)))
		);
		assert_eq!(
			unify(&dictionary(Type::Utf8), &nullable(Type::Utf8)),
			Some(dictionary(nullable(Type::Utf8)))
		);
	}

	#[test]
	fn test_dictionary_dropped_when_inner_changes() {
		assert_eq!(unify(&dictionary(Type::Int1), &Type::Int4), Some(Type::Int4));
		assert_eq!(unify(&dictionary(Type::Utf8), &Type::array(Type::Int1)), None);
	}

	#[test]
	fn test_null() {
		assert_eq!(unify(&Type::Null, &Type::Utf8), Some(nullable(Type::Utf8)));
		assert_eq!(unify(&Type::array(Type::Int8), &Type::Null), Some(nullable(Type::array(Type::Int8))));
		assert_eq!(unify(&Type::Null, &dictionary(Type::Utf8)), Some(dictionary(nullable(Type::Utf8))));
		assert_eq!(unify(&Type::Null, &Type::Null), Some(Type::Null));
	}

	#[test]
	fn test_variant_subsumes_alternative() {
		let variant = Type::variant([Type::Utf8, Type::array(Type::Int8)]);
		assert_eq!(unify(&variant, &Type::Utf8), Some(variant.clone()));
		assert_eq!(unify(&nullable(Type::Utf8), &variant), Some(variant.clone()));
		assert_eq!(unify(&variant, &Type::Null), Some(variant.clone()));
		assert_eq!(unify(&variant, &Type::Int8), None);
	}

	#[test]
	fn test_incompatible_shapes() {
		assert_eq!(unify(&Type::Utf8, &Type::array(Type::Utf8)), None);
		assert_eq!(unify(&Type::tuple([Type::Int1]), &Type::Int1), None);
		assert_eq!(unify(&Type::array(Type::Int1), &Type::tuple([Type::Int1])), None);
	}

	#[test]
	fn test_commutative() {
		let types = [
			Type::Null,
			Type::Int1,
			Type::Uint8,
			Type::Float4,
			Type::Utf8,
			nullable(Type::Int2),
			dictionary(Type::Utf8),
			dictionary(nullable(Type::Int1)),
			Type::array(Type::Int4),
			Type::array(nullable(Type::Uint1)),
			Type::tuple([Type::Int1, Type::Utf8]),
			Type::variant([Type::Utf8, Type::Int8]),
		];
		for a in &types {
			for b in &types {
				assert_eq!(unify(a, b), unify(b, a), "{} {}", a, b);
			}
		}
	}

	#[test]
	fn test_result_is_normalized() {
		let types = [
			Type::Null,
			nullable(Type::Int2),
			dictionary(nullable(Type::Utf8)),
			Type::Utf8,
			Type::array(nullable(Type::Uint1)),
			Type::array(Type::Null),
		];
		for a in &types {
			for b in &types {
				if let Some(ty) = unify(a, b) {
					assert!(ty.validate().is_ok(), "{} {} -> {}", a, b, ty);
				}
			}
		}
	}
}
