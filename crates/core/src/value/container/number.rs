// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use lattice_type::value::is::IsNumber;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberContainer<T>
where
	T: IsNumber,
{
	values: Vec<T>,
}

impl<T> NumberContainer<T>
where
	T: IsNumber,
{
	pub fn new(values: Vec<T>) -> Self {
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

	pub fn push(&mut self, value: T) {
		self.values.push(value);
	}

	pub fn push_default(&mut self) {
		self.values.push(T::default());
	}

	pub fn get(&self, index: usize) -> Option<T> {
		self.values.get(index).copied()
	}

	pub fn values(&self) -> &[T] {
		&self.values
	}
}

impl<T> Deref for NumberContainer<T>
where
	T: IsNumber,
{
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		&self.values
	}
}
