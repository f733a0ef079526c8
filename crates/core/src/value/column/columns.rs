// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use lattice_type::{Type, Value, internal_err};

use crate::value::column::{Column, ColumnData};

/// A block of rows: named columns sharing one row count.
#[derive(Debug, Clone, PartialEq)]
pub struct Columns {
	row_count: usize,
	columns: Vec<Column>,
}

impl Deref for Columns {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}

impl Columns {
	/// The row count is taken from the first column. Columns of another
	/// length are rejected when an expression reads them.
	pub fn new(columns: Vec<Column>) -> Self {
		let row_count = columns.first().map_or(0, |c| c.data().len());
		Self {
			row_count,
			columns,
		}
	}

	pub fn with_row_count(row_count: usize, columns: Vec<Column>) -> Self {
		Self {
			row_count,
			columns,
		}
	}

	pub fn single_row<'a>(rows: impl IntoIterator<Item = (&'a str, Value)>) -> crate::Result<Self> {
		let mut columns = Vec::new();
		for (name, value) in rows {
			let Some(ty) = Type::of_value(&value) else {
				return internal_err!("cannot infer the type of {} for column {}", value, name);
			};
			columns.push(Column::new(name, ColumnData::from_values(&ty, [value])?));
		}
		Ok(Self::with_row_count(1, columns))
	}

	pub fn row_count(&self) -> usize {
		self.row_count
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|c| c.name() == name)
	}
}
