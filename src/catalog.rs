//! Catalog file storage
//!
//! The catalog is a single JSON array, loaded fresh for each run and
//! rewritten whole after an append.

use crate::error::Result;
use crate::submission::AppEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Ordered collection of catalog entries
///
/// Entries already on disk are carried through untouched; only appended
/// entries are guaranteed to be valid [`AppEntry`] records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<Value>,
}

impl Catalog {
    /// Empty catalog
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in catalog order
    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    /// Append an entry at the end (no deduplication)
    pub fn append(&mut self, entry: AppEntry) {
        self.entries.push(entry.into_value());
    }

    /// First entry whose `name` equals `name`
    ///
    /// Entries are never deduplicated, so when a name was submitted more
    /// than once the earliest entry wins.
    pub fn find_by_name(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|entry| entry_name(entry) == Some(name))
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

/// The `name` of a catalog entry, if it has a string one
pub fn entry_name(entry: &Value) -> Option<&str> {
    entry.get("name").and_then(Value::as_str)
}

/// Outcome of reading the catalog file
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogLoad {
    /// No catalog file yet
    Empty,
    /// File exists but could not be read or is not a JSON array
    Corrupt(String),
    /// Catalog read successfully
    Loaded(Catalog),
}

impl CatalogLoad {
    /// The loaded catalog, or an empty one for `Empty` and `Corrupt`
    pub fn into_catalog(self) -> Catalog {
        match self {
            Self::Loaded(catalog) => catalog,
            Self::Empty | Self::Corrupt(_) => Catalog::new(),
        }
    }
}

/// Catalog file on disk
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the catalog
    ///
    /// Never fails: problems are reported through [`CatalogLoad`].
    pub fn load(&self) -> CatalogLoad {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return CatalogLoad::Empty,
            Err(e) => return CatalogLoad::Corrupt(format!("cannot read catalog: {e}")),
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Array(entries)) => CatalogLoad::Loaded(Catalog { entries }),
            Ok(_) => CatalogLoad::Corrupt("catalog is not a JSON array".to_string()),
            Err(e) => CatalogLoad::Corrupt(format!("catalog is not valid JSON: {e}")),
        }
    }

    /// Overwrite the catalog file with `catalog`
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        std::fs::write(&self.path, catalog.to_json()?)?;
        Ok(())
    }
}
