// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paldex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paldex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("paldex_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

fn ascii_repeat_to_len(prefix: &str, fill: char, target_len: usize) -> String {
    if prefix.len() >= target_len {
        return prefix[..target_len].to_owned();
    }

    let mut out = String::with_capacity(target_len);
    out.push_str(prefix);
    while out.len() < target_len {
        out.push(fill);
    }
    out
}

const ELEMENT_CYCLE: [&str; 4] = ["fire", "water", "earth", "air"];

pub mod pals {
    use super::*;

    use paldex::model::{Pal, PalDraft, PalId, PalsDoc};
    use serde_json::{Map, Value};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub records: usize,
        pub elements_per_pal: usize,
        pub extra_fields: usize,
        pub name_len: usize,
    }

    impl Params {
        pub const fn new(
            records: usize,
            elements_per_pal: usize,
            extra_fields: usize,
            name_len: usize,
        ) -> Self {
            Self {
                records,
                elements_per_pal,
                extra_fields,
                name_len,
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        LargeWideRecords,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::LargeWideRecords => "large_wide_records",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(20, 2, 1, 12),
                Self::LargeWideRecords => Params::new(400, 4, 6, 32),
            }
        }
    }

    fn record(index: usize, params: Params) -> Pal {
        let mut elements = Vec::with_capacity(params.elements_per_pal);
        for k in 0..params.elements_per_pal {
            elements.push(ELEMENT_CYCLE[(index + k) % ELEMENT_CYCLE.len()].to_owned());
        }

        let mut extra = Map::new();
        for k in 0..params.extra_fields {
            let base = format!("value_{index:04}_{k:02}");
            extra.insert(
                format!("field_{k:02}"),
                Value::String(ascii_repeat_to_len(&base, 'x', params.name_len)),
            );
        }

        let base = format!("Pal_{index:04}");
        Pal {
            id: PalId::from_index(index as u64 + 1),
            name: ascii_repeat_to_len(&base, 'x', params.name_len),
            elements,
            extra,
        }
    }

    /// Deterministic pals document with sequential ids starting at `001`.
    pub fn document(params: Params) -> PalsDoc {
        let mut doc = PalsDoc::default();
        for index in 0..params.records {
            doc.pals.push(record(index, params));
        }
        doc
    }

    pub fn fixture(case: Case) -> PalsDoc {
        document(case.params())
    }

    /// Draft appended by the io benchmarks; valid by construction.
    pub fn draft() -> PalDraft {
        PalDraft {
            name: Some("Appended".to_owned()),
            elements: Some(vec!["fire".to_owned()]),
            ..PalDraft::default()
        }
    }
}

pub mod elements {
    use super::*;

    use paldex::model::{Element, ElementDraft};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub records: usize,
        pub url_len: usize,
    }

    impl Params {
        pub const fn new(records: usize, url_len: usize) -> Self {
            Self { records, url_len }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        LargeLongUrls,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::LargeLongUrls => "large_long_urls",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(8, 32),
                Self::LargeLongUrls => Params::new(200, 96),
            }
        }
    }

    /// Deterministic element catalog with unique names.
    pub fn catalog(params: Params) -> Vec<Element> {
        let mut elements = Vec::with_capacity(params.records);
        for index in 0..params.records {
            let base = format!("https://example.com/elements/e{index:04}");
            elements.push(Element {
                name: format!("Element_{index:04}"),
                url: ascii_repeat_to_len(&base, 'x', params.url_len),
            });
        }
        elements
    }

    pub fn fixture(case: Case) -> Vec<Element> {
        catalog(case.params())
    }

    /// Draft appended by the io benchmarks; its name never collides with the
    /// catalog fixtures.
    pub fn draft() -> ElementDraft {
        ElementDraft {
            name: Some("Appended".to_owned()),
            url: Some("https://example.com/elements/appended".to_owned()),
        }
    }
}
