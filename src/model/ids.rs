// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paldex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paldex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifier for a pal record.
///
/// Ids are stored and compared as literal strings; `"1"` and `"001"` are
/// distinct. The canonical form produced by the store is a zero-padded
/// 3-digit decimal, and successor arithmetic only applies when the stored
/// value parses as one.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct PalId(String);

impl PalId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Renders the canonical zero-padded form: `from_index(7)` is `"007"`.
    pub fn from_index(index: u64) -> Self {
        Self(format!("{index:03}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The numeric value used for successor assignment, if the id is decimal.
    pub fn index(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for PalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PalId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for PalId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PalId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::PalId;

    #[test]
    fn from_index_zero_pads_to_three_digits() {
        assert_eq!(PalId::from_index(1).as_str(), "001");
        assert_eq!(PalId::from_index(42).as_str(), "042");
        assert_eq!(PalId::from_index(1000).as_str(), "1000");
    }

    #[test]
    fn index_parses_padded_decimal() {
        assert_eq!(PalId::new("007").index(), Some(7));
        assert_eq!(PalId::new("110").index(), Some(110));
    }

    #[test]
    fn index_is_none_for_non_numeric_ids() {
        assert_eq!(PalId::new("alpha").index(), None);
        assert_eq!(PalId::new("").index(), None);
    }

    #[test]
    fn padded_and_unpadded_ids_are_distinct() {
        assert_ne!(PalId::new("1"), PalId::new("001"));
    }
}
