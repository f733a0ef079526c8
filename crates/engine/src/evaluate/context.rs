// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use lattice_core::Columns;

/// What evaluation of one block reads besides the expression itself.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
	pub columns: &'a Columns,
	pub row_count: usize,
}

impl<'a> EvaluationContext<'a> {
	pub fn new(columns: &'a Columns) -> Self {
		Self {
			columns,
			row_count: columns.row_count(),
		}
	}
}
