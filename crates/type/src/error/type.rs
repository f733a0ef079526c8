// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	error::{Diagnostic, IntoDiagnostic},
	value::Type,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("No common type for {left} and {right}")]
	TypeMismatch {
		left: Type,
		right: Type,
		position: usize,
	},

	#[error("Unsupported nesting in {ty}: {reason}")]
	UnsupportedNesting {
		ty: Type,
		reason: String,
	},

	#[error("Variant with {count} alternatives exceeds the limit of {limit}")]
	TooManyAlternatives {
		count: usize,
		limit: usize,
	},

	#[error("Cannot cast {from} to {to}")]
	CastNotSupported {
		from: Type,
		to: Type,
	},

	#[error("Cannot cast {from} holding NULL to {to}")]
	CastNullToNonNullable {
		from: Type,
		to: Type,
	},

	#[error("Cannot parse type '{input}': {reason}")]
	TypeParse {
		input: String,
		reason: String,
	},
}

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TypeError::TypeMismatch {
				left,
				right,
				position,
			} => Diagnostic {
				code: "TYPE_001".to_string(),
				statement: None,
				message,
				label: Some(format!("operand {} of type {} is incompatible", position, right)),
				help: Some(
					"Cast the operands to a common type, or enable use_variant_as_common_type to combine them into a Variant"
						.to_string(),
				),
				notes: vec![
					format!("preceding operands resolved to {}", left),
					"Variant fallback also requires allow_experimental_variant_type".to_string(),
				],
				cause: None,
			},

			TypeError::UnsupportedNesting {
				ty,
				reason,
			} => Diagnostic {
				code: "TYPE_002".to_string(),
				statement: None,
				message,
				label: Some(format!("illegal type shape {}", ty)),
				help: Some("Build types through the normalizing constructors".to_string()),
				notes: vec![reason],
				cause: None,
			},

			TypeError::TooManyAlternatives {
				count,
				limit,
			} => Diagnostic {
				code: "TYPE_003".to_string(),
				statement: None,
				message,
				label: Some(format!("{} alternatives", count)),
				help: Some(format!("A Variant holds at most {} distinct alternatives", limit)),
				notes: vec![],
				cause: None,
			},

			TypeError::CastNotSupported {
				from,
				to,
			} => Diagnostic {
				code: "CAST_001".to_string(),
				statement: None,
				message,
				label: Some(format!("no conversion from {} to {}", from, to)),
				help: Some("Only widening conversions into a resolved common type are supported".to_string()),
				notes: vec![],
				cause: None,
			},

			TypeError::CastNullToNonNullable {
				from,
				to,
			} => Diagnostic {
				code: "CAST_002".to_string(),
				statement: None,
				message,
				label: Some(format!("{} cannot hold NULL", to)),
				help: Some(format!("Cast to Nullable({}) instead", to)),
				notes: vec![format!("source column of type {} contains NULL values", from)],
				cause: None,
			},

			TypeError::TypeParse {
				input,
				..
			} => Diagnostic {
				code: "TYPE_PARSE".to_string(),
				statement: Some(input),
				message,
				label: Some("invalid type name".to_string()),
				help: Some(
					"Use names such as Int4, Utf8, Array(Int8), Nullable(Utf8) or Variant(Int8, Utf8)"
						.to_string(),
				),
				notes: vec![],
				cause: None,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Error;

	#[test]
	fn test_type_mismatch_diagnostic() {
		let err: Error = TypeError::TypeMismatch {
			left: Type::array(Type::Int8),
			right: Type::Utf8,
			position: 1,
		}
		.into();

		assert_eq!(err.code, "TYPE_001");
		assert_eq!(err.message, "No common type for Array(Int8) and Utf8");
		assert!(err.label.as_ref().unwrap().contains("operand 1"));
	}

	#[test]
	fn test_type_parse_carries_input() {
		let diagnostic = TypeError::TypeParse {
			input: "Arr(Int1".to_string(),
			reason: "unknown type".to_string(),
		}
		.into_diagnostic();
		assert_eq!(diagnostic.code, "TYPE_PARSE");
		assert_eq!(diagnostic.statement.as_deref(), Some("Arr(Int1"));
	}
}
