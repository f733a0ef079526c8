// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Common type resolution.
//!
//! [`unify`] computes the least common type of two types under the strict
//! promotion rules. [`resolve`] folds it over the operands of a conditional
//! expression and, when the session allows it, falls back to a `Variant`
//! over all operand types instead of failing.

mod context;
mod numeric;
mod resolve;
mod unify;

pub use context::ResolutionContext;
pub use resolve::resolve;
pub use unify::unify;
