//! `metadata.json`: the list index consumed by the blocker.

use crate::catalog::{FilterGroup, Source};
use anyhow::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// One successfully fetched list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub file_name: String,
    pub title: String,
    pub group: FilterGroup,
    pub enabled_by_default: bool,
}

impl From<&Source> for ManifestEntry {
    fn from(s: &Source) -> Self {
        Self {
            file_name: s.file_name(),
            title: s.title.clone(),
            group: s.group,
            enabled_by_default: s.enabled_by_default,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ManifestEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes entries in insertion order with object keys sorted,
    /// 4-space indentation and non-ASCII kept literal. No trailing newline.
    pub fn to_json(&self) -> Result<String> {
        // serde_json::Map is a BTreeMap, so going through Value sorts keys.
        let value = serde_json::to_value(&self.entries)?;
        let mut out = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
        value.serialize(&mut ser)?;
        Ok(String::from_utf8(out)?)
    }
}
