// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::Type;

/// What a numeric type needs from a common type: the widest float, signed
/// and unsigned byte widths involved. Combining features is commutative and
/// associative, and so is promotion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Features {
	float: usize,
	signed: usize,
	unsigned: usize,
}

impl Features {
	fn of(ty: &Type) -> Option<Features> {
		let width = ty.width()?;
		let mut features = Features::default();
		if ty.is_floating_point() {
			features.float = width;
		} else if ty.is_signed_integer() {
			features.signed = width;
		} else {
			features.unsigned = width;
		}
		Some(features)
	}

	fn merge(self, other: Features) -> Features {
		Features {
			float: self.float.max(other.float),
			signed: self.signed.max(other.signed),
			unsigned: self.unsigned.max(other.unsigned),
		}
	}
}

/// Promotes two numeric types to their common numeric type.
///
/// - unsigned only: the widest unsigned
/// - signed only: the widest signed
/// - mixed sign: the smallest signed type wider than every unsigned operand
///   and as wide as every signed operand; `Float8` when even `Int16` cannot
///   hold the unsigned range
/// - floats only: the widest float
/// - floats mixed with integers: `Float8`
///
/// Returns `None` if either side is not numeric.
pub(crate) fn promote(left: &Type, right: &Type) -> Option<Type> {
	let features = Features::of(left)?.merge(Features::of(right)?);
	let integers = features.signed > 0 || features.unsigned > 0;

	if features.float > 0 {
		return Some(if features.float == 4 && !integers {
			Type::Float4
		} else {
			Type::Float8
		});
	}

	if features.signed == 0 {
		return unsigned(features.unsigned);
	}

	if features.unsigned == 0 {
		return signed(features.signed);
	}

	match wider(features.unsigned) {
		Some(width) => signed(width.max(features.signed)),
		None => Some(Type::Float8),
	}
}

fn wider(width: usize) -> Option<usize> {
	match width {
		1 => Some(2),
		2 => Some(4),
		4 => Some(8),
		8 => Some(16),
		_ => None,
	}
}

fn signed(width: usize) -> Option<Type> {
	match width {
		1 => Some(Type::Int1),
		2 => Some(Type::Int2),
		4 => Some(Type::Int4),
		8 => Some(Type::Int8),
		16 => Some(Type::Int16),
		_ => None,
	}
}

fn unsigned(width: usize) -> Option<Type> {
	match width {
		1 => Some(Type::Uint1),
		2 => Some(Type::Uint2),
		4 => Some(Type::Uint4),
		8 => Some(Type::Uint8),
		16 => Some(Type::Uint16),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const NUMBERS: [Type; 12] = [
		Type::Int1,
		Type::Int2,
		Type::Int4,
		Type::Int8,
		Type::Int16,
		Type::Uint1,
		Type::Uint2,
		Type::Uint4,
		Type::Uint8,
		Type::Uint16,
		Type::Float4,
		Type::Float8,
	];

	#[test]
	fn test_same_sign_widens() {
		assert_eq!(promote(&Type::Int4, &Type::Int8), Some(Type::Int8));
		assert_eq!(promote(&Type::Uint2, &Type::Uint1), Some(Type::Uint2));
		assert_eq!(promote(&Type::Int16, &Type::Int1), Some(Type::Int16));
	}

	#[test]
	fn test_mixed_sign_goes_to_wider_signed() {
		assert_eq!(promote(&Type::Uint1, &Type::Int1), Some(Type::Int2));
		assert_eq!(promote(&Type::Int1, &Type::Uint1), Some(Type::Int2));
		assert_eq!(promote(&Type::Uint4, &Type::Int2), Some(Type::Int8));
		assert_eq!(promote(&Type::Uint1, &Type::Int8), Some(Type::Int8));
		assert_eq!(promote(&Type::Uint8, &Type::Int4), Some(Type::Int16));
	}

	#[test]
	fn test_mixed_sign_without_wide_enough_signed() {
		assert_eq!(promote(&Type::Uint16, &Type::Int1), Some(Type::Float8));
	}

	#[test]
	fn test_floats() {
		assert_eq!(promote(&Type::Float4, &Type::Float4), Some(Type::Float4));
		assert_eq!(promote(&Type::Float4, &Type::Float8), Some(Type::Float8));
		assert_eq!(promote(&Type::Float4, &Type::Int1), Some(Type::Float8));
		assert_eq!(promote(&Type::Uint8, &Type::Float8), Some(Type::Float8));
	}

	#[test]
	fn test_non_numeric() {
		assert_eq!(promote(&Type::Utf8, &Type::Int1), None);
		assert_eq!(promote(&Type::Boolean, &Type::Uint1), None);
	}

	#[test]
	fn test_commutative_and_associative() {
		for a in &NUMBERS {
			for b in &NUMBERS {
				let ab = promote(a, b).unwrap();
				assert_eq!(Some(ab.clone()), promote(b, a), "{} {}", a, b);
				for c in &NUMBERS {
					let left = promote(&ab, c).unwrap();
					let right = promote(a, &promote(b, c).unwrap()).unwrap();
					assert_eq!(left, right, "({} {}) {}", a, b, c);
				}
			}
		}
	}

	#[test]
	fn test_result_holds_both_ranges() {
		for a in &NUMBERS {
			for b in &NUMBERS {
				let result = promote(a, b).unwrap();
				if result.is_integer() {
					assert!(result.width() >= a.width() && result.width() >= b.width());
					if a.is_unsigned_integer() && result.is_signed_integer() {
						assert!(result.width() > a.width(), "{} {} -> {}", a, b, result);
					}
				}
			}
		}
	}
}
