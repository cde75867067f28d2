// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paldex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paldex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! File-backed stores for the two collections.
//!
//! Each store owns exactly one JSON document on disk: the whole document is
//! read at startup, held in memory, and rewritten in full after every
//! mutation. Atomicity of the rewrite comes from a same-directory temp file
//! plus rename; see [`fs`].

use std::fmt;
use std::io;
use std::path::PathBuf;

pub mod element_store;
pub mod fs;
pub mod pal_store;

pub use element_store::ElementStore;
pub use fs::WriteDurability;
pub use pal_store::PalStore;

/// Which collection a key belongs to. Lookup errors carry this so the HTTP
/// layer can word the response for the right resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Pal,
    Element,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pal => f.write_str("pal"),
            Self::Element => f.write_str("element"),
        }
    }
}

#[derive(Debug)]
pub enum StoreError {
    /// Input was rejected before touching the collection. `required` lists
    /// exactly the fields that were absent or empty.
    MissingFields { required: Vec<&'static str> },
    /// No record under the given key.
    NotFound { kind: RecordKind, key: String },
    /// An element with this exact name is already present.
    AlreadyExists { name: String },
    /// The last pal id in the document does not parse as a number, so no
    /// successor id can be assigned.
    NonNumericId { id: String },
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { required } => {
                write!(f, "missing required fields: {}", required.join(", "))
            }
            Self::NotFound { kind, key } => write!(f, "{kind} not found: {key:?}"),
            Self::AlreadyExists { name } => write!(f, "element already exists: {name:?}"),
            Self::NonNumericId { id } => {
                write!(f, "cannot assign a successor to non-numeric pal id {id:?}")
            }
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::MissingFields { .. }
            | Self::NotFound { .. }
            | Self::AlreadyExists { .. }
            | Self::NonNumericId { .. } => None,
        }
    }
}
