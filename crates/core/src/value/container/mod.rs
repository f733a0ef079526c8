// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod bool;
mod number;
mod utf8;

pub use bool::BoolContainer;
pub use number::NumberContainer;
pub use utf8::Utf8Container;
