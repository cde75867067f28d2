// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paldex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paldex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One element record: a display name plus its image URL.
///
/// The elements document is a flat name-to-url JSON object; `Element` is the
/// typed view of one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Element {
    pub name: String,
    pub url: String,
}

/// Create-request body for an element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Update-request body for an element. The name is the route key and cannot
/// change; only the url is accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementPatch {
    #[serde(default)]
    pub url: Option<String>,
}
