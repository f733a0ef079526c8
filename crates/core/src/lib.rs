// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod util;
pub mod value;

pub use lattice_type::{Error, Result};
pub use util::BitVec;
pub use value::{
	column::{Column, ColumnData, ColumnValue, Columns, cast_column},
	container::{BoolContainer, NumberContainer, Utf8Container},
};
