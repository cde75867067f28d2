// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paldex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paldex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The element collection and its backing document.
//!
//! On disk the collection is a single flat JSON object mapping element name
//! to url. In memory it is an ordered list of pairs, so the document keeps
//! its insertion order across rewrites.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::model::{Element, ElementDraft, ElementPatch};

use super::fs::write_atomic;
use super::{RecordKind, StoreError, WriteDurability};

#[derive(Debug, Clone)]
pub struct ElementStore {
    path: PathBuf,
    durability: WriteDurability,
    elements: Vec<Element>,
}

impl ElementStore {
    /// Loads the document at `path`, or eagerly writes an empty one when no
    /// file exists yet. Unreadable or unparseable documents fail the load.
    pub fn load_or_init(
        path: impl Into<PathBuf>,
        durability: WriteDurability,
    ) -> Result<Self, StoreError> {
        let path = path.into();
        let elements = match load_elements(&path) {
            Ok(elements) => elements,
            Err(StoreError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                let store = Self {
                    path,
                    durability,
                    elements: Vec::new(),
                };
                store.save()?;
                return Ok(store);
            }
            Err(err) => return Err(err),
        };

        Ok(Self {
            path,
            durability,
            elements,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list(&self) -> &[Element] {
        &self.elements
    }

    /// The flat name-to-url object in insertion order. Both the list
    /// endpoint and the persisted document use this shape.
    pub fn to_document(&self) -> Map<String, Value> {
        let mut doc = Map::new();
        for element in &self.elements {
            doc.insert(element.name.clone(), Value::String(element.url.clone()));
        }
        doc
    }

    /// Case-folded lookup: the first stored name matching ignoring case
    /// wins, and the pair comes back with its stored casing.
    pub fn get(&self, name: &str) -> Result<&Element, StoreError> {
        let folded = name.to_lowercase();
        self.elements
            .iter()
            .find(|element| element.name.to_lowercase() == folded)
            .ok_or_else(|| StoreError::NotFound {
                kind: RecordKind::Element,
                key: name.to_owned(),
            })
    }

    /// Appends a new pair and persists.
    ///
    /// The duplicate check is exact-case, unlike [`ElementStore::get`]; an
    /// existing `"Fire"` does not block creating `"fire"`.
    pub fn create(&mut self, draft: ElementDraft) -> Result<Element, StoreError> {
        let mut required = Vec::new();
        if draft.name.as_deref().map_or(true, str::is_empty) {
            required.push("name");
        }
        if draft.url.as_deref().map_or(true, str::is_empty) {
            required.push("url");
        }
        if !required.is_empty() {
            return Err(StoreError::MissingFields { required });
        }

        let name = draft.name.unwrap_or_default();
        let url = draft.url.unwrap_or_default();

        if self.elements.iter().any(|element| element.name == name) {
            return Err(StoreError::AlreadyExists { name });
        }

        let element = Element { name, url };
        self.elements.push(element.clone());
        self.save()?;
        Ok(element)
    }

    /// Replaces the url under an exact name and persists. No case folding
    /// here: a name that only [`ElementStore::get`] would match misses.
    pub fn update(&mut self, name: &str, patch: ElementPatch) -> Result<Element, StoreError> {
        let Some(url) = patch.url.filter(|url| !url.is_empty()) else {
            return Err(StoreError::MissingFields {
                required: vec!["url"],
            });
        };

        let index = self.index_of(name)?;
        self.elements[index].url = url;
        let element = self.elements[index].clone();
        self.save()?;
        Ok(element)
    }

    /// Removes the pair under an exact name and persists, returning it.
    pub fn delete(&mut self, name: &str) -> Result<Element, StoreError> {
        let index = self.index_of(name)?;
        let element = self.elements.remove(index);
        self.save()?;
        Ok(element)
    }

    /// Rewrites the whole backing document.
    pub fn save(&self) -> Result<(), StoreError> {
        let doc_str =
            serde_json::to_string_pretty(&self.to_document()).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;
        write_atomic(
            &self.path,
            format!("{doc_str}\n").as_bytes(),
            self.durability,
        )
    }

    fn index_of(&self, name: &str) -> Result<usize, StoreError> {
        self.elements
            .iter()
            .position(|element| element.name == name)
            .ok_or_else(|| StoreError::NotFound {
                kind: RecordKind::Element,
                key: name.to_owned(),
            })
    }
}

fn load_elements(path: &Path) -> Result<Vec<Element>, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: Map<String, Value> =
        serde_json::from_str(&raw).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let mut elements = Vec::with_capacity(doc.len());
    for (name, value) in doc {
        let Value::String(url) = value else {
            return Err(StoreError::Json {
                path: path.to_path_buf(),
                source: serde::de::Error::custom(format!("element {name:?} url must be a string")),
            });
        };
        elements.push(Element { name, url });
    }
    Ok(elements)
}
