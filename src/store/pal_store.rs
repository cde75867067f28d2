// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paldex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paldex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The pal collection and its backing document.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::{Pal, PalDraft, PalId, PalPatch, PalsDoc};

use super::fs::write_atomic;
use super::{RecordKind, StoreError, WriteDurability};

/// Ordered pal collection mirrored to a single JSON document.
///
/// Every mutation rewrites the whole document before returning, so a failed
/// write surfaces as an error on the mutating call itself. Record order is
/// document order; new pals always append.
#[derive(Debug, Clone)]
pub struct PalStore {
    path: PathBuf,
    durability: WriteDurability,
    doc: PalsDoc,
}

impl PalStore {
    /// Loads the document at `path`, or eagerly writes an empty one when no
    /// file exists yet. Unreadable or unparseable documents fail the load.
    pub fn load_or_init(
        path: impl Into<PathBuf>,
        durability: WriteDurability,
    ) -> Result<Self, StoreError> {
        let path = path.into();
        let doc = match load_doc(&path) {
            Ok(doc) => doc,
            Err(StoreError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                let store = Self {
                    path,
                    durability,
                    doc: PalsDoc::default(),
                };
                store.save()?;
                return Ok(store);
            }
            Err(err) => return Err(err),
        };

        Ok(Self {
            path,
            durability,
            doc,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The whole document, exactly as the list endpoint serves it.
    pub fn doc(&self) -> &PalsDoc {
        &self.doc
    }

    pub fn list(&self) -> &[Pal] {
        &self.doc.pals
    }

    /// Exact-match lookup; `"1"` never finds a stored `"001"`.
    pub fn get(&self, id: &str) -> Result<&Pal, StoreError> {
        self.doc
            .pals
            .iter()
            .find(|pal| pal.id.as_str() == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: RecordKind::Pal,
                key: id.to_owned(),
            })
    }

    /// Appends a new pal under the next sequential id and persists.
    ///
    /// The id comes from the last record in the document, not the maximum,
    /// so ids freed by deletions are never handed out again. Any `id` the
    /// caller put in the draft is discarded.
    pub fn create(&mut self, draft: PalDraft) -> Result<Pal, StoreError> {
        let mut required = Vec::new();
        if draft.name.as_deref().map_or(true, str::is_empty) {
            required.push("name");
        }
        if draft.elements.as_ref().map_or(true, Vec::is_empty) {
            required.push("elements");
        }
        if !required.is_empty() {
            return Err(StoreError::MissingFields { required });
        }

        let pal = Pal {
            id: self.next_id()?,
            name: draft.name.unwrap_or_default(),
            elements: draft.elements.unwrap_or_default(),
            extra: draft.extra,
        };

        self.doc.pals.push(pal.clone());
        self.save()?;
        Ok(pal)
    }

    /// Shallow-merges the patch into the stored record and persists. The id
    /// is never patchable.
    pub fn update(&mut self, id: &str, patch: PalPatch) -> Result<Pal, StoreError> {
        let index = self.index_of(id)?;
        self.doc.pals[index].apply(patch);
        let pal = self.doc.pals[index].clone();
        self.save()?;
        Ok(pal)
    }

    /// Removes the record and persists, returning the removed pal.
    pub fn delete(&mut self, id: &str) -> Result<Pal, StoreError> {
        let index = self.index_of(id)?;
        let pal = self.doc.pals.remove(index);
        self.save()?;
        Ok(pal)
    }

    /// Rewrites the whole backing document.
    pub fn save(&self) -> Result<(), StoreError> {
        let doc_str = serde_json::to_string_pretty(&self.doc).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        write_atomic(
            &self.path,
            format!("{doc_str}\n").as_bytes(),
            self.durability,
        )
    }

    fn index_of(&self, id: &str) -> Result<usize, StoreError> {
        self.doc
            .pals
            .iter()
            .position(|pal| pal.id.as_str() == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: RecordKind::Pal,
                key: id.to_owned(),
            })
    }

    fn next_id(&self) -> Result<PalId, StoreError> {
        let last = match self.doc.pals.last() {
            Some(pal) => pal.id.index().ok_or_else(|| StoreError::NonNumericId {
                id: pal.id.as_str().to_owned(),
            })?,
            None => 0,
        };
        Ok(PalId::from_index(last.saturating_add(1)))
    }
}

fn load_doc(path: &Path) -> Result<PalsDoc, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}
