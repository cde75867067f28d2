// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paldex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paldex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Pals are sequentially-numbered records with open-ended extra attributes;
//! elements are name/url pairs. Both serialize to the JSON documents that
//! back their stores.

pub mod element;
pub mod ids;
pub mod pal;

pub use element::{Element, ElementDraft, ElementPatch};
pub use ids::PalId;
pub use pal::{Pal, PalDraft, PalPatch, PalsDoc};
