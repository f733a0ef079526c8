// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use lattice_type::ResolutionContext;
use serde::{Deserialize, Serialize};

/// Per-session settings read by expression typing and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
	/// Whether `Variant` may appear as a result type.
	pub allow_experimental_variant_type: bool,
	/// Combine branches without a common type into a `Variant` instead of
	/// rejecting the expression.
	pub use_variant_as_common_type: bool,
}

impl Default for SessionSettings {
	fn default() -> Self {
		Self {
			allow_experimental_variant_type: true,
			use_variant_as_common_type: true,
		}
	}
}

impl SessionSettings {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn allow_experimental_variant_type(mut self, enabled: bool) -> Self {
		self.allow_experimental_variant_type = enabled;
		self
	}

	pub fn use_variant_as_common_type(mut self, enabled: bool) -> Self {
		self.use_variant_as_common_type = enabled;
		self
	}

	pub fn resolution_context(&self) -> ResolutionContext {
		ResolutionContext::new()
			.variant_type(self.allow_experimental_variant_type)
			.variant_fallback(self.use_variant_as_common_type)
	}
}
