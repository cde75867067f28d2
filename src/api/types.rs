// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paldex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paldex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Response envelopes for the JSON API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{Element, Pal};

/// Single-pal read envelope.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PalResponse {
    pub pal: Pal,
}

/// Pal mutation envelope: a confirmation message plus the affected record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PalMessageResponse {
    pub message: String,
    pub pal: Pal,
}

/// Element mutation envelope.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ElementMessageResponse {
    pub message: String,
    pub element: Element,
}

/// Liveness payload for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
