// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};

/// A packed, growable sequence of bits.
///
/// Used as the validity mask of nullable columns (a set bit marks a defined
/// row) and as the storage of boolean columns.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitVec {
	bits: Vec<u8>,
	len: usize,
}

impl BitVec {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			bits: Vec::with_capacity(capacity.div_ceil(8)),
			len: 0,
		}
	}

	pub fn repeat(len: usize, value: bool) -> Self {
		let fill = if value {
			0xFF
		} else {
			0x00
		};
		let mut bits = vec![fill; len.div_ceil(8)];
		let tail = len % 8;
		if value && tail != 0 {
			if let Some(last) = bits.last_mut() {
				*last = (1u8 << tail) - 1;
			}
		}
		Self {
			bits,
			len,
		}
	}

	pub fn from_slice(values: &[bool]) -> Self {
		let mut result = Self::with_capacity(values.len());
		for &value in values {
			result.push(value);
		}
		result
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn push(&mut self, value: bool) {
		let bit = self.len % 8;
		if bit == 0 {
			self.bits.push(0);
		}
		if value {
			if let Some(last) = self.bits.last_mut() {
				*last |= 1 << bit;
			}
		}
		self.len += 1;
	}

	/// Returns the bit at `idx`, `false` when out of range.
	pub fn get(&self, idx: usize) -> bool {
		if idx >= self.len {
			return false;
		}
		self.bits[idx / 8] & (1 << (idx % 8)) != 0
	}

	pub fn set(&mut self, idx: usize, value: bool) {
		debug_assert!(idx < self.len);
		if idx >= self.len {
			return;
		}
		let mask = 1 << (idx % 8);
		if value {
			self.bits[idx / 8] |= mask;
		} else {
			self.bits[idx / 8] &= !mask;
		}
	}

	pub fn extend(&mut self, other: &BitVec) {
		for value in other.iter() {
			self.push(value);
		}
	}

	pub fn count_ones(&self) -> usize {
		self.bits.iter().map(|byte| byte.count_ones() as usize).sum()
	}

	pub fn count_zeros(&self) -> usize {
		self.len - self.count_ones()
	}

	pub fn all_ones(&self) -> bool {
		self.count_ones() == self.len
	}

	pub fn iter(&self) -> BitVecIter<'_> {
		BitVecIter {
			bitvec: self,
			pos: 0,
		}
	}
}

pub struct BitVecIter<'a> {
	bitvec: &'a BitVec,
	pos: usize,
}

impl Iterator for BitVecIter<'_> {
	type Item = bool;

	fn next(&mut self) -> Option<Self::Item> {
		if self.pos >= self.bitvec.len {
			return None;
		}
		let value = self.bitvec.get(self.pos);
		self.pos += 1;
		Some(value)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.bitvec.len - self.pos;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for BitVecIter<'_> {}

impl Debug for BitVec {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		for value in self.iter() {
			f.write_str(if value {
				"1"
			} else {
				"0"
			})?;
		}
		Ok(())
	}
}

impl FromIterator<bool> for BitVec {
	fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
		let iter = iter.into_iter();
		let mut result = Self::with_capacity(iter.size_hint().0);
		for value in iter {
			result.push(value);
		}
		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_repeat() {
		let bv = BitVec::repeat(11, true);
		assert_eq!(bv.len(), 11);
		assert_eq!(bv.count_ones(), 11);
		assert!(bv.all_ones());
		assert!(!bv.get(11));

		let bv = BitVec::repeat(9, false);
		assert_eq!(bv.count_zeros(), 9);
	}

	#[test]
	fn test_push_and_get() {
		let bv = BitVec::from_slice(&[true, false, true, true, false, false, false, false, true]);
		assert_eq!(bv.len(), 9);
		assert!(bv.get(0));
		assert!(!bv.get(1));
		assert!(bv.get(8));
		assert_eq!(bv.count_ones(), 4);
		assert_eq!(format!("{:?}", bv), "101100001");
	}

	#[test]
	fn test_set() {
		let mut bv = BitVec::repeat(10, false);
		bv.set(9, true);
		bv.set(0, true);
		bv.set(0, false);
		assert_eq!(bv.iter().collect::<Vec<_>>().iter().filter(|b| **b).count(), 1);
		assert!(bv.get(9));
	}

	#[test]
	fn test_extend() {
		let mut bv = BitVec::from_slice(&[true, false, true]);
		bv.extend(&BitVec::repeat(7, true));
		assert_eq!(bv.len(), 10);
		assert_eq!(bv.count_ones(), 9);
	}

	#[test]
	fn test_from_iter() {
		let bv: BitVec = (0..20).map(|n| n % 3 == 0).collect();
		assert_eq!(bv.len(), 20);
		assert_eq!(bv.count_ones(), 7);
	}
}
