// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paldex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paldex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::PalId;

/// One pal record as stored in the pals document.
///
/// Attributes beyond `id`, `name` and `elements` are not interpreted; they
/// live in `extra` and round-trip through storage and responses untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Pal {
    pub id: PalId,
    pub name: String,
    pub elements: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Pal {
    /// Shallow merge: supplied fields override, everything else is kept, and
    /// the stored id survives whatever the patch claims.
    pub fn apply(&mut self, patch: PalPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(elements) = patch.elements {
            self.elements = elements;
        }
        for (key, value) in patch.extra {
            self.extra.insert(key, value);
        }
    }
}

/// Create-request body for a pal.
///
/// `name` and `elements` presence is checked by the store. A client-supplied
/// `id` is captured here so it neither overrides assignment nor leaks into
/// `extra`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PalDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub elements: Option<Vec<String>>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Update-request body for a pal. Fields left out keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PalPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub elements: Option<Vec<String>>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// On-disk shape of the pals document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PalsDoc {
    #[serde(default)]
    pub pals: Vec<Pal>,
}
