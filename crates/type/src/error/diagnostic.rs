// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod function;
pub mod internal;
pub mod query;
pub mod render;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub statement: Option<String>,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	/// Attaches the statement text the diagnostic was raised for, on this
	/// diagnostic and every cause below it.
	pub fn with_statement(&mut self, statement: impl Into<String>) {
		let statement = statement.into();
		if let Some(cause) = self.cause.as_mut() {
			cause.with_statement(statement.clone());
		}
		self.statement = Some(statement);
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}
