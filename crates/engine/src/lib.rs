// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod evaluate;
pub mod expression;
mod session;

pub use evaluate::{CompiledExpr, EvaluationContext, evaluate};
pub use expression::{Conditional, Expression, Schema};
pub use lattice_type::{Error, Result};
pub use session::SessionSettings;
