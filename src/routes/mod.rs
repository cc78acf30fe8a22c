// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Route handlers for the web UI and the JSON API.

pub mod api;
pub mod ui;
