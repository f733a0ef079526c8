// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod from;
mod get;
mod push;

pub(crate) use push::array_range;
