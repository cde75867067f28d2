// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paldex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paldex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Paldex: file-backed REST API for pals and elements.
//!
//! Two JSON documents are the durable store; [`store`] keeps them in memory
//! and rewrites them whole on every mutation, and [`api`] maps the CRUD
//! routes onto them.

pub mod api;
pub mod model;
pub mod store;
