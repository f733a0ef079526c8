// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, value::Type};

/// Function is not recognized or does not exist
pub fn unknown_function(name: &str) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_001".to_string(),
		statement: None,
		message: format!("Unknown function: {}", name),
		label: Some("unknown function".to_string()),
		help: Some("Available functions are if, multiIf, materialize and toTypeName".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Function called with the wrong number of arguments
pub fn arity_mismatch(name: &str, expected: &str, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_002".to_string(),
		statement: None,
		message: format!("Function {} expects {} arguments, got {}", name, expected, actual),
		label: Some("wrong number of arguments".to_string()),
		help: Some(format!("Provide {} arguments to function {}", expected, name)),
		notes: vec![],
		cause: None,
	}
}

/// Condition of a conditional function cannot be read as a boolean
pub fn predicate_not_boolean(name: &str, index: usize, actual: Type) -> Diagnostic {
	Diagnostic {
		code: "PREDICATE_001".to_string(),
		statement: None,
		message: format!("Function {} argument {} has type {}, expected a boolean condition", name, index + 1, actual),
		label: Some("condition is not boolean".to_string()),
		help: Some("Use a Boolean or numeric condition, non-zero numbers count as true".to_string()),
		notes: vec![],
		cause: None,
	}
}
