// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use lattice_core::{ColumnData, ColumnValue};
use lattice_type::{
	ResolutionContext, Type,
	error::diagnostic::{function::predicate_not_boolean, query::column_not_found},
	resolve, return_error,
};
use tracing::{instrument, trace};

use crate::{
	evaluate::{CompiledExpr, CompiledNode},
	expression::{Conditional, Expression, Schema},
};

impl Expression {
	/// Types the expression and resolves the result type of every
	/// conditional in it, before any row is read.
	///
	/// All type errors of an expression surface here: unknown columns,
	/// conditions that are not boolean, and branches without a common type.
	/// The compiled expression can then be evaluated over any number of
	/// blocks without resolving again.
	#[instrument(name = "expression::compile", level = "debug", skip_all, fields(expr = %self))]
	pub fn compile(&self, schema: &impl Schema, ctx: &ResolutionContext) -> crate::Result<CompiledExpr> {
		self.lower(schema, ctx)
	}

	/// The type the expression produces.
	pub fn return_type(&self, schema: &impl Schema, ctx: &ResolutionContext) -> crate::Result<Type> {
		Ok(self.compile(schema, ctx)?.get_type().clone())
	}

	fn lower(&self, schema: &impl Schema, ctx: &ResolutionContext) -> crate::Result<CompiledExpr> {
		match self {
			Expression::Constant {
				value,
				ty,
			} => {
				let constant = ColumnValue::constant(ty, value.clone())?;
				Ok(CompiledExpr::new(CompiledNode::Constant(constant), ty.clone()))
			}
			Expression::Null => Ok(CompiledExpr::new(CompiledNode::Null, Type::Null)),
			Expression::Column(name) => match schema.column_type(name) {
				Some(ty) => Ok(CompiledExpr::new(CompiledNode::Column(name.clone()), ty)),
				None => return_error!(column_not_found(name)),
			},
			Expression::If {
				condition,
				then,
				r#else,
			} => {
				let branches = vec![(condition.lower(schema, ctx)?, then.lower(schema, ctx)?)];
				conditional(Conditional::If, branches, r#else.lower(schema, ctx)?, ctx)
			}
			Expression::MultiIf {
				branches,
				default,
			} => {
				let branches = branches
					.iter()
					.map(|(condition, value)| Ok((condition.lower(schema, ctx)?, value.lower(schema, ctx)?)))
					.collect::<crate::Result<Vec<_>>>()?;
				conditional(Conditional::MultiIf, branches, default.lower(schema, ctx)?, ctx)
			}
			Expression::Materialize(expr) => {
				let inner = expr.lower(schema, ctx)?;
				let ty = inner.get_type().clone();
				Ok(CompiledExpr::new(CompiledNode::Materialize(Box::new(inner)), ty))
			}
			Expression::TypeName(expr) => {
				let name = expr.lower(schema, ctx)?.get_type().to_string();
				let constant = ColumnValue::Constant(ColumnData::utf8([name]));
				Ok(CompiledExpr::new(CompiledNode::Constant(constant), Type::Utf8))
			}
		}
	}
}

fn conditional(
	kind: Conditional,
	branches: Vec<(CompiledExpr, CompiledExpr)>,
	default: CompiledExpr,
	ctx: &ResolutionContext,
) -> crate::Result<CompiledExpr> {
	let conditions: Vec<Type> = branches.iter().map(|(condition, _)| condition.get_type().clone()).collect();
	let values: Vec<Type> = branches
		.iter()
		.map(|(_, value)| value.get_type().clone())
		.chain([default.get_type().clone()])
		.collect();

	let ty = conditional_type(kind, &conditions, &values, ctx)?;
	Ok(CompiledExpr::new(
		CompiledNode::Conditional {
			kind,
			branches,
			default: Box::new(default),
		},
		ty,
	))
}

/// The result type of a conditional given the types of its conditions and
/// of its values, the default value last.
///
/// The values resolve to their common type. For `if` it becomes nullable
/// when the condition can be NULL, since a NULL condition yields a NULL row.
fn conditional_type(
	kind: Conditional,
	conditions: &[Type],
	values: &[Type],
	ctx: &ResolutionContext,
) -> crate::Result<Type> {
	for (idx, condition) in conditions.iter().enumerate() {
		if !is_predicate(condition) {
			return_error!(predicate_not_boolean(kind.name(), idx * 2, condition.clone()));
		}
	}

	let ty = resolve(values, ctx)?;
	let ty = if kind.null_condition_yields_null() && conditions.iter().any(Type::is_nullable) {
		Type::nullable(ty)
	} else {
		ty
	};
	trace!(function = kind.name(), result = %ty, "conditional type");
	Ok(ty)
}

fn is_predicate(ty: &Type) -> bool {
	let plain = ty.remove_nullable().remove_dictionary();
	plain.is_null() || plain.is_bool() || plain.is_number()
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use lattice_type::Value;

	use super::*;

	fn schema() -> HashMap<String, Type> {
		HashMap::from([
			("flag".to_string(), Type::Boolean),
			("maybe".to_string(), Type::nullable(Type::Boolean)),
			("n".to_string(), Type::Uint8),
			("s".to_string(), Type::Utf8),
			("arr".to_string(), Type::array(Type::Uint8)),
			("tag".to_string(), Type::dictionary(Type::Utf8)),
		])
	}

	fn strict() -> ResolutionContext {
		ResolutionContext::strict()
	}

	fn col(name: &str) -> Expression {
		Expression::column(name)
	}

	#[test]
	fn test_if_resolves_branches() {
		let expr = Expression::if_(col("flag"), col("n"), Expression::constant(Value::Int1(-1), Type::Int1));
		assert_eq!(expr.return_type(&schema(), &strict()).unwrap(), Type::Int16);
	}

	#[test]
	fn test_nullable_condition_makes_result_nullable() {
		let expr = Expression::if_(col("maybe"), col("s"), col("s"));
		assert_eq!(expr.return_type(&schema(), &strict()).unwrap(), Type::nullable(Type::Utf8));

		let expr = Expression::if_(Expression::Null, col("s"), col("s"));
		assert_eq!(expr.return_type(&schema(), &strict()).unwrap(), Type::nullable(Type::Utf8));
	}

	#[test]
	fn test_multi_if_nullable_condition_keeps_type() {
		let expr = Expression::multi_if(vec![(col("maybe"), col("s")), (Expression::Null, col("s"))], col("s"));
		assert_eq!(expr.return_type(&schema(), &strict()).unwrap(), Type::Utf8);
	}

	#[test]
	fn test_nested_conditional_resolved_once() {
		let inner = Expression::if_(col("maybe"), col("n"), Expression::constant(Value::Int1(-1), Type::Int1));
		let expr = Expression::multi_if(vec![(col("flag"), inner)], col("s"));
		let compiled = expr.compile(&schema(), &ResolutionContext::default()).unwrap();

		let CompiledNode::Conditional {
			branches,
			..
		} = compiled.node()
		else {
			panic!("expected a conditional, got {:?}", compiled);
		};
		assert_eq!(branches[0].1.get_type(), &Type::nullable(Type::Int16));
		assert_eq!(compiled.get_type(), &Type::variant([Type::Int16, Type::Utf8]));
	}

	#[test]
	fn test_constant_widens_literal_numbers() {
		let value = Value::Array(vec![Value::Uint1(1), Value::Int1(-2)]);
		let compiled = Expression::constant(value, Type::array(Type::Int8)).compile(&schema(), &strict()).unwrap();
		let CompiledNode::Constant(constant) = compiled.node() else {
			panic!("expected a constant, got {:?}", compiled);
		};
		assert_eq!(constant.constant_value(), Some(Value::Array(vec![Value::Int8(1), Value::Int8(-2)])));
	}

	#[test]
	fn test_type_name_is_constant() {
		let expr = Expression::type_name(Expression::constant(Value::Null, Type::nullable(Type::Int4)));
		let compiled = expr.compile(&schema(), &strict()).unwrap();
		let CompiledNode::Constant(constant) = compiled.node() else {
			panic!("expected a constant, got {:?}", compiled);
		};
		assert_eq!(constant.constant_value(), Some(Value::utf8("Nullable(Int4)")));
	}

	#[test]
	fn test_nullable_condition_keeps_dictionary() {
		let expr = Expression::if_(col("maybe"), col("tag"), col("tag"));
		let ty = expr.return_type(&schema(), &strict()).unwrap();
		assert_eq!(ty, Type::dictionary(Type::nullable(Type::Utf8)));
	}

	#[test]
	fn test_predicate_must_be_boolean() {
		let expr = Expression::multi_if(vec![(col("flag"), col("s")), (col("s"), col("s"))], col("s"));
		let err = expr.return_type(&schema(), &strict()).unwrap_err();
		assert_eq!(err.code, "PREDICATE_001");
		assert!(err.message.contains("argument 3"));

		let expr = Expression::if_(col("n"), col("s"), col("s"));
		assert!(expr.return_type(&schema(), &strict()).is_ok());
	}

	#[test]
	fn test_incompatible_branches() {
		let expr = Expression::if_(col("flag"), col("arr"), col("s"));
		let err = expr.return_type(&schema(), &strict()).unwrap_err();
		assert_eq!(err.code, "TYPE_001");

		let ty = expr.return_type(&schema(), &ResolutionContext::default()).unwrap();
		assert_eq!(ty, Type::variant([Type::array(Type::Uint8), Type::Utf8]));
	}

	#[test]
	fn test_unknown_column() {
		let err = Expression::if_(col("flag"), col("missing"), col("s")).return_type(&schema(), &strict()).unwrap_err();
		assert_eq!(err.code, "QUERY_001");
	}

	#[test]
	fn test_type_name_and_materialize() {
		let expr = Expression::type_name(col("arr"));
		assert_eq!(expr.return_type(&schema(), &strict()).unwrap(), Type::Utf8);

		let expr = Expression::materialize(Expression::constant(Value::Int4(1), Type::Int4));
		assert_eq!(expr.return_type(&schema(), &strict()).unwrap(), Type::Int4);
	}
}
