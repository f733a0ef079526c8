// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use lattice_type::{
	error::diagnostic::function::{arity_mismatch, unknown_function},
	return_error,
};

use crate::expression::Expression;

impl Expression {
	/// Builds a function call from its name and flat argument list.
	///
	/// `multiIf(c1, v1, c2, v2, .., default)` takes its condition and value
	/// pairs followed by the default.
	pub fn call(name: &str, mut args: Vec<Expression>) -> crate::Result<Expression> {
		let len = args.len();
		match name {
			"if" => {
				let Ok([condition, then, r#else]) = <[Expression; 3]>::try_from(args) else {
					return_error!(arity_mismatch(name, "3", len));
				};
				Ok(Expression::if_(condition, then, r#else))
			}
			"multiIf" => {
				if len < 3 || len % 2 == 0 {
					return_error!(arity_mismatch(name, "an odd number of, at least 3,", len));
				}
				let Some(default) = args.pop() else {
					return_error!(arity_mismatch(name, "an odd number of, at least 3,", len));
				};
				let mut args = args.into_iter();
				let mut branches = Vec::with_capacity(len / 2);
				while let (Some(condition), Some(value)) = (args.next(), args.next()) {
					branches.push((condition, value));
				}
				Ok(Expression::multi_if(branches, default))
			}
			"materialize" | "toTypeName" => {
				let Ok([arg]) = <[Expression; 1]>::try_from(args) else {
					return_error!(arity_mismatch(name, "1", len));
				};
				Ok(if name == "materialize" {
					Expression::materialize(arg)
				} else {
					Expression::type_name(arg)
				})
			}
			_ => return_error!(unknown_function(name)),
		}
	}
}
