// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod analyzer;
pub mod batch;
pub mod exports;
pub mod extract;
pub mod format;
pub mod logging;
pub mod render;
pub mod terminal;
