// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// Creates an internal error diagnostic carrying the source location of the
/// violated invariant.
pub fn internal_with_context(
	reason: impl Into<String>,
	file: &str,
	line: u32,
	column: u32,
	function: &str,
	module_path: &str,
) -> Diagnostic {
	let reason = reason.into();

	let error_id = format!("ERR-{}:{}", file.rsplit('/').next().unwrap_or(file).replace(".rs", ""), line);

	let help = format!(
		"This is an internal error that should never occur in normal operation.\n\
		 Error ID: {}\n\
		 Location: {}:{}:{}\n\
		 Function: {}\n\
		 Module: {}\n\
		 Version: {}",
		error_id,
		file,
		line,
		column,
		function,
		module_path,
		env!("CARGO_PKG_VERSION"),
	);

	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		statement: None,
		message: format!("Internal error [{}]: {}", error_id, reason),
		label: Some(format!("Internal invariant violated at {}:{}:{}", file, line, column)),
		help: Some(help),
		notes: vec![
			format!("Error occurred in function: {}", function),
			"The query was aborted and no partial result was produced.".to_string(),
		],
		cause: None,
	}
}

/// Internal error without location context
pub fn internal(reason: impl Into<String>) -> Diagnostic {
	internal_with_context(reason, "unknown", 0, 0, "unknown", "unknown")
}
