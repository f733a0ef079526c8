// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::util::BitVec;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoolContainer {
	data: BitVec,
}

impl BoolContainer {
	pub fn new(data: Vec<bool>) -> Self {
		Self {
			data: BitVec::from_slice(&data),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: BitVec::with_capacity(capacity),
		}
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: bool) {
		self.data.push(value);
	}

	pub fn get(&self, index: usize) -> Option<bool> {
		if index < self.len() {
			Some(self.data.get(index))
		} else {
			None
		}
	}

	pub fn data(&self) -> &BitVec {
		&self.data
	}

	pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
		self.data.iter()
	}
}
