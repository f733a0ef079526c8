// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	error::TypeError,
	return_error,
	value::r#type::{MAX_VARIANT_ALTERNATIVES, Type},
};

impl Type {
	/// Like [`Type::tuple`], but an empty field list is an
	/// `UnsupportedNesting` error.
	pub fn try_tuple(fields: impl IntoIterator<Item = Type>) -> crate::Result<Type> {
		let ty = Type::tuple(fields);
		if matches!(&ty, Type::Tuple(fields) if fields.is_empty()) {
			return_error!(unsupported(&ty, "a tuple needs at least one field"));
		}
		Ok(ty)
	}

	/// Checks the nesting invariants the normalizing constructors maintain.
	///
	/// A violation is an `UnsupportedNesting` error: it can only come from a
	/// type assembled by hand, never from resolution.
	pub fn validate(&self) -> crate::Result<()> {
		match self {
			Type::Array(element) => element.validate(),

			Type::Tuple(fields) => {
				if fields.is_empty() {
					return_error!(unsupported(self, "a tuple needs at least one field"));
				}
				fields.iter().try_for_each(Type::validate)
			}

			Type::Nullable(inner) => {
				match inner.as_ref() {
					Type::Null | Type::Nullable(_) => {
						return_error!(unsupported(self, "nullable types cannot be nested"))
					}
					Type::Variant(_) => {
						return_error!(unsupported(self, "a variant carries NULL itself"))
					}
					Type::Dictionary(_) => {
						return_error!(unsupported(self, "nullability belongs inside the dictionary encoding"))
					}
					_ => {}
				}
				inner.validate()
			}

			Type::Dictionary(inner) => {
				if !inner.is_dictionary_encodable() {
					return_error!(unsupported(self, "only boolean, numeric and text types can be dictionary encoded"));
				}
				inner.validate()
			}

			Type::Variant(alternatives) => {
				if alternatives.len() > MAX_VARIANT_ALTERNATIVES {
					return_error!(TypeError::TooManyAlternatives {
						count: alternatives.len(),
						limit: MAX_VARIANT_ALTERNATIVES,
					});
				}
				if alternatives.len() < 2 {
					return_error!(unsupported(self, "a variant needs at least two alternatives"));
				}
				if !alternatives.windows(2).all(|w| w[0] < w[1]) {
					return_error!(unsupported(self, "variant alternatives must be sorted and distinct"));
				}
				for alternative in alternatives {
					if matches!(
						alternative,
						Type::Null | Type::Nullable(_) | Type::Dictionary(_) | Type::Variant(_)
					) {
						return_error!(unsupported(
							self,
							"variant alternatives cannot be Null, Nullable, Dictionary or Variant"
						));
					}
					alternative.validate()?;
				}
				Ok(())
			}

			_ => Ok(()),
		}
	}
}

fn unsupported(ty: &Type, reason: &str) -> TypeError {
	TypeError::UnsupportedNesting {
		ty: ty.clone(),
		reason: reason.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use crate::value::Type;

	#[test]
	fn test_constructed_types_are_valid() {
		let types = [
			Type::nullable(Type::nullable(Type::Int4)),
			Type::nullable(Type::dictionary(Type::Utf8)),
			Type::variant([Type::Utf8, Type::array(Type::nullable(Type::Int8)), Type::variant([Type::Float4, Type::Int1])]),
			Type::tuple([Type::Boolean, Type::array(Type::Utf8)]),
			Type::nullable(Type::variant([Type::Utf8, Type::Int8])),
		];
		for ty in types {
			assert!(ty.validate().is_ok(), "{} should be valid", ty);
		}
	}

	#[test]
	fn test_nullable_variant_is_unsupported() {
		let ty = Type::Nullable(Box::new(Type::Variant(vec![Type::Int8, Type::Utf8])));
		let err = ty.validate().unwrap_err();
		assert_eq!(err.code, "TYPE_002");
	}

	#[test]
	fn test_nested_nullable_is_unsupported() {
		let ty = Type::Nullable(Box::new(Type::Nullable(Box::new(Type::Int8))));
		assert_eq!(ty.validate().unwrap_err().code, "TYPE_002");
	}

	#[test]
	fn test_unsorted_variant_is_unsupported() {
		let ty = Type::Variant(vec![Type::Utf8, Type::Int8]);
		assert_eq!(ty.validate().unwrap_err().code, "TYPE_002");

		let ty = Type::Variant(vec![Type::Int8]);
		assert_eq!(ty.validate().unwrap_err().code, "TYPE_002");
	}

	#[test]
	fn test_dictionary_of_array_is_unsupported() {
		let ty = Type::Dictionary(Box::new(Type::array(Type::Utf8)));
		assert_eq!(ty.validate().unwrap_err().code, "TYPE_002");
	}

	#[test]
	fn test_empty_tuple() {
		let err = Type::try_tuple([]).unwrap_err();
		assert_eq!(err.code, "TYPE_002");
		assert_eq!(Type::tuple([]).validate().unwrap_err().code, "TYPE_002");

		let ty = Type::try_tuple([Type::Int1, Type::Utf8]).unwrap();
		assert_eq!(ty, Type::tuple([Type::Int1, Type::Utf8]));
		assert!(ty.validate().is_ok());
	}

	#[test]
	fn test_too_many_alternatives() {
		let alternatives = (0..300).map(|n| Type::tuple(vec![Type::Int1; n + 1])).collect::<Vec<_>>();
		let ty = Type::variant(alternatives);
		assert_eq!(ty.validate().unwrap_err().code, "TYPE_003");
	}
}
