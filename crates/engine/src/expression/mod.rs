// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use lattice_type::{Type, Value};
use serde::{Deserialize, Serialize};

mod call;
mod schema;
mod typing;

pub use schema::Schema;

/// An expression as handed over by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
	/// A literal of a known type.
	Constant {
		value: Value,
		ty: Type,
	},
	/// The NULL literal.
	Null,
	Column(String),
	If {
		condition: Box<Expression>,
		then: Box<Expression>,
		r#else: Box<Expression>,
	},
	MultiIf {
		branches: Vec<(Expression, Expression)>,
		default: Box<Expression>,
	},
	/// Turns a constant into a per-row column with the same type.
	Materialize(Box<Expression>),
	/// The printed name of the argument's type, as a Utf8 constant.
	TypeName(Box<Expression>),
}

impl Expression {
	pub fn constant(value: Value, ty: Type) -> Self {
		Expression::Constant {
			value,
			ty,
		}
	}

	pub fn column(name: impl Into<String>) -> Self {
		Expression::Column(name.into())
	}

	pub fn if_(condition: Expression, then: Expression, r#else: Expression) -> Self {
		Expression::If {
			condition: Box::new(condition),
			then: Box::new(then),
			r#else: Box::new(r#else),
		}
	}

	pub fn multi_if(branches: Vec<(Expression, Expression)>, default: Expression) -> Self {
		Expression::MultiIf {
			branches,
			default: Box::new(default),
		}
	}

	pub fn materialize(expr: Expression) -> Self {
		Expression::Materialize(Box::new(expr))
	}

	pub fn type_name(expr: Expression) -> Self {
		Expression::TypeName(Box::new(expr))
	}
}

/// The conditional functions. They differ only in how a NULL condition is
/// treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conditional {
	/// `if`: a NULL condition makes the row NULL.
	If,
	/// `multiIf`: the first true condition wins, a NULL condition is passed
	/// over like a false one.
	MultiIf,
}

impl Conditional {
	pub fn name(&self) -> &'static str {
		match self {
			Conditional::If => "if",
			Conditional::MultiIf => "multiIf",
		}
	}

	pub fn null_condition_yields_null(&self) -> bool {
		matches!(self, Conditional::If)
	}
}

impl Display for Conditional {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl Display for Expression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Expression::Constant {
				value,
				..
			} => Display::fmt(value, f),
			Expression::Null => f.write_str("NULL"),
			Expression::Column(name) => f.write_str(name),
			Expression::If {
				condition,
				then,
				r#else,
			} => write!(f, "if({}, {}, {})", condition, then, r#else),
			Expression::MultiIf {
				branches,
				default,
			} => {
				f.write_str("multiIf(")?;
				for (condition, value) in branches {
					write!(f, "{}, {}, ", condition, value)?;
				}
				write!(f, "{})", default)
			}
			Expression::Materialize(expr) => write!(f, "materialize({})", expr),
			Expression::TypeName(expr) => write!(f, "toTypeName({})", expr),
		}
	}
}
