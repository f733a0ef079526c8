// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tracing::{debug, instrument};

use crate::{
	error::TypeError,
	return_error,
	supertype::{ResolutionContext, unify},
	value::Type,
};

/// Resolves the common type of the operands of a conditional expression.
///
/// `Null` operands contribute no type but make the result nullable. `Variant`
/// operands are folded apart from the other operands and the two results
/// unified last, so a variant absorbs the alternatives it already holds
/// wherever they appear. When strict unification fails and `ctx` allows the
/// fallback, the result is the `Variant` over every operand type; otherwise
/// the failure is a `TypeMismatch` naming the offending operand. A `Variant`
/// is never produced when strict unification succeeds.
#[instrument(name = "supertype::resolve", level = "trace", skip_all, fields(operands = types.len()))]
pub fn resolve(types: &[Type], ctx: &ResolutionContext) -> crate::Result<Type> {
	let saw_null = types.iter().any(Type::is_null);

	let result = match strict(types) {
		Ok(result) => result,
		Err(_) if ctx.fallback_active() => return fallback(types),
		Err(err) => return_error!(err),
	};

	Ok(match result {
		None => Type::Null,
		Some(ty) if saw_null => Type::nullable(ty),
		Some(ty) => ty,
	})
}

fn strict(types: &[Type]) -> Result<Option<Type>, TypeError> {
	let operands = types.iter().enumerate().filter(|(_, ty)| !ty.is_null());
	let (variants, plain): (Vec<_>, Vec<_>) = operands.partition(|(_, ty)| ty.is_variant());

	let plain = fold(&plain)?;
	let variant = fold(&variants)?;

	match (plain, variant) {
		(None, result) | (result, None) => Ok(result),
		(Some(plain), Some(variant)) => match unify(&plain, &variant) {
			Some(unified) => Ok(Some(unified)),
			None => Err(TypeError::TypeMismatch {
				left: plain,
				right: variant,
				position: variants[0].0,
			}),
		},
	}
}

fn fold(operands: &[(usize, &Type)]) -> Result<Option<Type>, TypeError> {
	let mut result: Option<Type> = None;
	for &(position, ty) in operands {
		let Some(current) = result.take() else {
			result = Some(ty.clone());
			continue;
		};
		match unify(&current, ty) {
			Some(unified) => result = Some(unified),
			None => {
				return Err(TypeError::TypeMismatch {
					left: current,
					right: ty.clone(),
					position,
				});
			}
		}
	}
	Ok(result)
}

fn fallback(types: &[Type]) -> crate::Result<Type> {
	let variant = Type::variant(types.iter().cloned());
	variant.validate()?;
	debug!(result = %variant, "no strict common type, falling back to variant");
	Ok(variant)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn strict() -> ResolutionContext {
		ResolutionContext::strict()
	}

	fn fallback() -> ResolutionContext {
		ResolutionContext::default()
	}

	#[test]
	fn test_numeric_promotion() {
		assert_eq!(resolve(&[Type::Int4, Type::Int8], &strict()).unwrap(), Type::Int8);
		assert_eq!(resolve(&[Type::Uint1, Type::Int1], &strict()).unwrap(), Type::Int2);
		assert_eq!(resolve(&[Type::Uint1, Type::Uint2, Type::Int1], &strict()).unwrap(), Type::Int4);
	}

	#[test]
	fn test_empty_and_single() {
		assert_eq!(resolve(&[], &strict()).unwrap(), Type::Null);
		assert_eq!(resolve(&[Type::Utf8], &strict()).unwrap(), Type::Utf8);
		assert_eq!(resolve(&[Type::Null, Type::Null], &strict()).unwrap(), Type::Null);
	}

	#[test]
	fn test_null_absorption() {
		let types = [
			Type::Utf8,
			Type::Int8,
			Type::array(Type::Int8),
			Type::tuple([Type::Int1, Type::Utf8]),
			Type::nullable(Type::Float4),
			Type::dictionary(Type::Utf8),
		];
		for ty in types {
			let expected = Type::nullable(ty.clone());
			assert_eq!(resolve(&[Type::Null, ty.clone()], &strict()).unwrap(), expected);
			assert_eq!(resolve(&[ty.clone(), Type::Null], &fallback()).unwrap(), expected);
		}
	}

	#[test]
	fn test_null_between_incompatible_types_still_fails_strict() {
		let err = resolve(&[Type::Utf8, Type::Null, Type::Int8], &strict()).unwrap_err();
		assert_eq!(err.code, "TYPE_001");
	}

	#[test]
	fn test_fallback_gating() {
		let types = [Type::array(Type::Int8), Type::Utf8];

		let err = resolve(&types, &strict()).unwrap_err();
		assert_eq!(err.code, "TYPE_001");
		assert_eq!(err.message, "No common type for Array(Int8) and Utf8");

		let disabled = ResolutionContext::default().variant_type(false);
		assert_eq!(resolve(&types, &disabled).unwrap_err().code, "TYPE_001");

		let ty = resolve(&types, &fallback()).unwrap();
		assert_eq!(ty, Type::Variant(vec![Type::Utf8, Type::array(Type::Int8)]));
	}

	#[test]
	fn test_mismatch_names_position() {
		let err = resolve(&[Type::Int1, Type::Int2, Type::Utf8], &strict()).unwrap_err();
		assert!(err.label.as_ref().unwrap().contains("operand 2 of type Utf8"));
		assert!(err.notes[0].contains("Int2"));
	}

	#[test]
	fn test_no_variant_when_strict_succeeds() {
		let ty = resolve(&[Type::Int1, Type::nullable(Type::Uint4)], &fallback()).unwrap();
		assert_eq!(ty, Type::nullable(Type::Int8));
	}

	#[test]
	fn test_fallback_is_flat() {
		let a = Type::array(Type::Int8);
		let b = Type::Utf8;
		let c = Type::tuple([Type::Float8]);

		let ty = resolve(&[Type::variant([a.clone(), b.clone()]), c.clone()], &fallback()).unwrap();
		assert_eq!(ty, Type::variant([a, b, c]));
		assert!(ty.validate().is_ok());
	}

	#[test]
	fn test_fallback_order_independent() {
		let types = [Type::Utf8, Type::array(Type::Int8), Type::Int4, Type::Null];
		let expected = resolve(&types, &fallback()).unwrap();
		assert_eq!(expected.to_string(), "Variant(Int4, Utf8, Array(Int8))");

		let mut permuted = types.to_vec();
		for _ in 0..types.len() {
			permuted.rotate_left(1);
			assert_eq!(resolve(&permuted, &fallback()).unwrap(), expected);
			permuted.reverse();
			assert_eq!(resolve(&permuted, &fallback()).unwrap(), expected);
		}
	}

	fn permutations(types: &[Type]) -> Vec<Vec<Type>> {
		if types.len() <= 1 {
			return vec![types.to_vec()];
		}
		let mut result = Vec::new();
		for idx in 0..types.len() {
			let mut rest = types.to_vec();
			let first = rest.remove(idx);
			for mut tail in permutations(&rest) {
				tail.insert(0, first.clone());
				result.push(tail);
			}
		}
		result
	}

	#[test]
	fn test_strict_order_independent_with_variant() {
		let variant = Type::variant([Type::Int8, Type::Utf8]);

		for types in permutations(&[variant.clone(), Type::Int8, Type::Utf8]) {
			assert_eq!(resolve(&types, &strict()).unwrap(), variant, "{:?}", types);
		}
		for types in permutations(&[Type::Int4, Type::Int8, variant.clone(), Type::Null]) {
			assert_eq!(resolve(&types, &strict()).unwrap(), variant, "{:?}", types);
		}
		for types in permutations(&[variant.clone(), Type::Int8, Type::array(Type::Int8)]) {
			assert_eq!(resolve(&types, &strict()).unwrap_err().code, "TYPE_001", "{:?}", types);
		}
	}

	#[test]
	fn test_strict_order_independent_between_variants() {
		let wide = Type::variant([Type::Int8, Type::Utf8, Type::Boolean]);
		let narrow = Type::variant([Type::Int8, Type::Utf8]);
		for types in permutations(&[narrow.clone(), Type::Boolean, wide.clone()]) {
			assert_eq!(resolve(&types, &strict()).unwrap(), wide, "{:?}", types);
		}
	}

	#[test]
	fn test_three_way_fallback() {
		let ty = resolve(&[Type::array(Type::Uint8), Type::Uint8, Type::Utf8], &fallback()).unwrap();
		assert_eq!(ty, Type::Variant(vec![Type::Uint8, Type::Utf8, Type::array(Type::Uint8)]));
	}

	#[test]
	fn test_variant_operand_unifies_strictly() {
		let variant = Type::variant([Type::Utf8, Type::Int8]);
		let ty = resolve(&[variant.clone(), Type::nullable(Type::Utf8)], &strict()).unwrap();
		assert_eq!(ty, variant);
	}

	#[test]
	fn test_fallback_drops_dictionary() {
		let ty = resolve(&[Type::dictionary(Type::Utf8), Type::array(Type::Int1)], &fallback()).unwrap();
		assert_eq!(ty, Type::Variant(vec![Type::Utf8, Type::array(Type::Int1)]));
	}
}
