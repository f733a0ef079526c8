// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod supertype;
pub mod value;

pub use error::{Error, IntoDiagnostic, TypeError};
pub use supertype::{ResolutionContext, resolve, unify};
pub use value::{GetType, IntoValue, OrderedF32, OrderedF64, Type, Value};

pub type Result<T> = std::result::Result<T, Error>;
