// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Session flags consulted by [`resolve`](super::resolve).
///
/// Passed explicitly to every resolution; resolution reads nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionContext {
	/// Combine incompatible operands into a `Variant` instead of failing.
	pub variant_fallback_enabled: bool,
	/// Whether `Variant` is a legal result type at all.
	pub variant_type_enabled: bool,
}

impl Default for ResolutionContext {
	fn default() -> Self {
		Self {
			variant_fallback_enabled: true,
			variant_type_enabled: true,
		}
	}
}

impl ResolutionContext {
	pub fn new() -> Self {
		Self::default()
	}

	/// Strict unification only, incompatible operands are an error.
	pub fn strict() -> Self {
		Self {
			variant_fallback_enabled: false,
			variant_type_enabled: true,
		}
	}

	pub fn variant_fallback(mut self, enabled: bool) -> Self {
		self.variant_fallback_enabled = enabled;
		self
	}

	pub fn variant_type(mut self, enabled: bool) -> Self {
		self.variant_type_enabled = enabled;
		self
	}

	/// Fallback applies only when both flags are set.
	pub fn fallback_active(&self) -> bool {
		self.variant_fallback_enabled && self.variant_type_enabled
	}
}
