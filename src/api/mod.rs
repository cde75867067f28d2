// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paldex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paldex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTTP surface of the service.
//!
//! [`server`] wires the route table over the shared stores; [`pals`] and
//! [`elements`] hold the per-collection handlers; [`error`] turns store
//! failures into status codes and JSON error bodies.

pub mod elements;
pub mod error;
pub mod pals;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use server::{router, serve, AppState};
