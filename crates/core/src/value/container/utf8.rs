// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Utf8Container {
	values: Vec<String>,
}

impl Utf8Container {
	pub fn new(values: Vec<String>) -> Self {
		Self {
			values,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			values: Vec::with_capacity(capacity),
		}
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn push(&mut self, value: String) {
		self.values.push(value);
	}

	pub fn get(&self, index: usize) -> Option<&String> {
		self.values.get(index)
	}
}

impl Deref for Utf8Container {
	type Target = [String];

	fn deref(&self) -> &Self::Target {
		&self.values
	}
}
