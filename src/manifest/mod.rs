//! Categorized asset manifest.
//!
//! # Module Structure
//!
//! ```text
//! manifest/
//! ├── scan        # Category and asset discovery under the assets root
//! ├── normalize   # Filename stem -> display name
//! ├── write       # JSON serialization to the output file
//! ├── lookup      # Reading a manifest back and resolving search terms
//! ├── error       # ManifestError
//! └── mod.rs      # Manifest, AssetEntry, build_manifest (this file)
//! ```
//!
//! # Layout
//!
//! ```text
//! public/gifs/                     {
//! ├── peito/                         "peito": [
//! │   ├── Supino_Reto.gif   ->         { "nome": "supino reto",
//! │   └── ._Supino_Reto.gif              "url": "/gifs/peito/Supino_Reto.gif" }
//! └── vazio/                         ]
//!                                  }
//! ```

mod error;
mod lookup;
mod normalize;
mod scan;
mod write;

pub use error::{ManifestError, Result};
pub use normalize::{file_stem, normalize_name};
pub use scan::scan_assets;
pub use write::write_manifest;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ManifestConfig;
use crate::logger::Reporter;

/// A single asset as it appears in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    /// Normalized display name
    #[serde(rename = "nome")]
    pub name: String,
    /// Root-relative public URL, original filename preserved
    pub url: String,
}

impl AssetEntry {
    /// Build an entry from an asset filename inside `category`.
    pub fn from_file(mount: &str, category: &str, file_name: &str) -> Self {
        Self {
            name: normalize_name(file_stem(file_name)),
            url: asset_url(mount, category, file_name),
        }
    }
}

/// Public URL of an asset: `/<mount>/<category>/<file>`.
pub fn asset_url(mount: &str, category: &str, file_name: &str) -> String {
    format!("/{mount}/{category}/{file_name}")
}

/// Category name -> entries sorted by display name.
///
/// Keys iterate (and serialize) in ascending order, so the
/// output never depends on directory enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    categories: BTreeMap<String, Vec<AssetEntry>>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category. Entries are sorted by name; empty lists are dropped.
    ///
    /// The sort is stable: equal names keep their insertion order.
    pub fn insert(&mut self, category: impl Into<String>, mut entries: Vec<AssetEntry>) {
        if entries.is_empty() {
            return;
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        self.categories.insert(category.into(), entries);
    }

    pub fn get(&self, category: &str) -> Option<&[AssetEntry]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Iterate categories in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AssetEntry])> {
        self.categories
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of entries across all categories.
    pub fn asset_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

/// Scan the assets root and assemble the manifest.
///
/// Fails with [`ManifestError::MissingRoot`] before touching anything
/// else when the root is absent.
pub fn build_manifest(config: &ManifestConfig, reporter: &mut dyn Reporter) -> Result<Manifest> {
    let mount = config.mount_point();
    let mut manifest = Manifest::new();

    for category in scan_assets(&config.root, reporter)? {
        if category.files.is_empty() {
            reporter.debug(&format!("skipping empty category `{}`", category.name));
            continue;
        }

        let entries = category
            .files
            .iter()
            .map(|file| AssetEntry::from_file(&mount, &category.name, file))
            .collect();
        manifest.insert(category.name, entries);
    }

    Ok(manifest)
}
