// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::str::FromStr;

use crate::{error::TypeError, error, value::r#type::Type};

impl FromStr for Type {
	type Err = crate::Error;

	/// Parses the printed form of a type, e.g. `Variant(Array(Int8), Utf8)`.
	/// Wrapper types go through the normalizing constructors.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut parser = Parser {
			input: s,
			pos: 0,
		};
		let ty = parser.parse_type()?;
		parser.skip_whitespace();
		if parser.pos < s.len() {
			return Err(parser.error("unexpected trailing input"));
		}
		Ok(ty)
	}
}

struct Parser<'a> {
	input: &'a str,
	pos: usize,
}

impl<'a> Parser<'a> {
	fn parse_type(&mut self) -> crate::Result<Type> {
		self.skip_whitespace();
		let name = self.parse_name();
		if name.is_empty() {
			return Err(self.error("expected a type name"));
		}

		let simple = match name.to_uppercase().as_str() {
			"NULL" => Some(Type::Null),
			"BOOL" | "BOOLEAN" => Some(Type::Boolean),
			"INT1" => Some(Type::Int1),
			"INT2" => Some(Type::Int2),
			"INT4" => Some(Type::Int4),
			"INT8" => Some(Type::Int8),
			"INT16" => Some(Type::Int16),
			"UINT1" => Some(Type::Uint1),
			"UINT2" => Some(Type::Uint2),
			"UINT4" => Some(Type::Uint4),
			"UINT8" => Some(Type::Uint8),
			"UINT16" => Some(Type::Uint16),
			"FLOAT4" => Some(Type::Float4),
			"FLOAT8" => Some(Type::Float8),
			"UTF8" | "TEXT" => Some(Type::Utf8),
			_ => None,
		};
		if let Some(ty) = simple {
			return Ok(ty);
		}

		let upper = name.to_uppercase();
		let arguments = self.parse_arguments(&name)?;
		match (upper.as_str(), arguments.len()) {
			("ARRAY", 1) => Ok(Type::array(single(arguments))),
			("NULLABLE", 1) => Ok(Type::nullable(single(arguments))),
			("DICTIONARY", 1) => Ok(Type::dictionary(single(arguments))),
			("TUPLE", 0) => Err(self.error("Tuple takes at least one type argument")),
			("TUPLE", _) => Ok(Type::tuple(arguments)),
			("VARIANT", _) => Ok(Type::variant(arguments)),
			("ARRAY" | "NULLABLE" | "DICTIONARY", n) => {
				Err(self.error(&format!("{} takes exactly one type argument, got {}", name, n)))
			}
			_ => Err(self.error(&format!("unknown type {}", name))),
		}
	}

	fn parse_arguments(&mut self, name: &str) -> crate::Result<Vec<Type>> {
		self.skip_whitespace();
		if !self.eat('(') {
			return Err(self.error(&format!("unknown type {}", name)));
		}

		let mut arguments = vec![self.parse_type()?];
		loop {
			self.skip_whitespace();
			if self.eat(')') {
				return Ok(arguments);
			}
			if !self.eat(',') {
				return Err(self.error("expected ',' or ')'"));
			}
			arguments.push(self.parse_type()?);
		}
	}

	fn parse_name(&mut self) -> String {
		let start = self.pos;
		while let Some(ch) = self.input[self.pos..].chars().next() {
			if ch.is_ascii_alphanumeric() || ch == '_' {
				self.pos += ch.len_utf8();
			} else {
				break;
			}
		}
		self.input[start..self.pos].to_string()
	}

	fn eat(&mut self, expected: char) -> bool {
		if self.input[self.pos..].starts_with(expected) {
			self.pos += expected.len_utf8();
			true
		} else {
			false
		}
	}

	fn skip_whitespace(&mut self) {
		while let Some(ch) = self.input[self.pos..].chars().next() {
			if !ch.is_whitespace() {
				break;
			}
			self.pos += ch.len_utf8();
		}
	}

	fn error(&self, reason: &str) -> crate::Error {
		error!(TypeError::TypeParse {
			input: self.input.to_string(),
			reason: format!("{} at position {}", reason, self.pos),
		})
	}
}

fn single(mut arguments: Vec<Type>) -> Type {
	arguments.remove(0)
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use crate::value::Type;

	#[test]
	fn test_parse_simple() {
		assert_eq!(Type::from_str("Int8").unwrap(), Type::Int8);
		assert_eq!(Type::from_str("text").unwrap(), Type::Utf8);
		assert_eq!(Type::from_str(" Bool ").unwrap(), Type::Boolean);
	}

	#[test]
	fn test_parse_nested() {
		let ty = Type::from_str("Tuple(Array(Nullable(Int4)), Dictionary(Utf8))").unwrap();
		assert_eq!(
			ty,
			Type::tuple([Type::array(Type::nullable(Type::Int4)), Type::dictionary(Type::Utf8)])
		);
	}

	#[test]
	fn test_parse_normalizes() {
		assert_eq!(Type::from_str("Nullable(Nullable(Int1))").unwrap(), Type::nullable(Type::Int1));
		assert_eq!(
			Type::from_str("Variant(Utf8, Array(Int8), Utf8)").unwrap().to_string(),
			"Variant(Utf8, Array(Int8))"
		);
		assert_eq!(
			Type::from_str("Nullable(Dictionary(Utf8))").unwrap(),
			Type::dictionary(Type::nullable(Type::Utf8))
		);
	}

	#[test]
	fn test_printed_form_parses_back() {
		let types = [
			Type::variant([Type::Utf8, Type::array(Type::Int8), Type::tuple([Type::Float4, Type::Boolean])]),
			Type::dictionary(Type::nullable(Type::Uint2)),
			Type::array(Type::array(Type::Null)),
		];
		for ty in types {
			assert_eq!(Type::from_str(&ty.to_string()).unwrap(), ty);
		}
	}

	#[test]
	fn test_parse_errors() {
		for input in ["", "Int3", "Array(Int1", "Array(Int1, Int2)", "Int1)", "Nullable()", "Tuple()"] {
			let err = Type::from_str(input).unwrap_err();
			assert_eq!(err.code, "TYPE_PARSE", "input {:?}", input);
		}
	}
}
