// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use lattice_core::Columns;
use lattice_type::Type;

/// Column types visible to an expression at compile time.
pub trait Schema {
	fn column_type(&self, name: &str) -> Option<Type>;
}

impl Schema for Columns {
	fn column_type(&self, name: &str) -> Option<Type> {
		self.column(name).map(|c| c.get_type())
	}
}

impl Schema for HashMap<String, Type> {
	fn column_type(&self, name: &str) -> Option<Type> {
		self.get(name).cloned()
	}
}
