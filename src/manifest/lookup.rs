//! Reading a manifest back and resolving search terms against it.
//!
//! Matching mirrors how the web front-end consumes `gifs.json`: both
//! sides are folded with [`fold_term`] and an entry matches when its
//! folded name equals or contains the folded term.

use std::fs;
use std::path::Path;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use super::{AssetEntry, Manifest, ManifestError, Result};

/// Fold text for matching: strip combining accents, separators to
/// spaces, lowercase.
///
/// Looser than [`super::normalize_name`]: non-ASCII base letters
/// survive and whitespace is left untouched.
pub fn fold_term(text: &str) -> String {
    text.nfd()
        .filter(|c| !matches!(c, '\u{0300}'..='\u{036f}'))
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit<'a> {
    pub category: &'a str,
    #[serde(flatten)]
    pub entry: &'a AssetEntry,
}

impl Manifest {
    /// Load a manifest previously written by [`super::write_manifest`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::ReadManifest {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ManifestError::ParseManifest {
            path: path.to_path_buf(),
            source,
        })
    }

    /// First entry matching `term`.
    ///
    /// Looks inside `category` first (when given and present), then
    /// across every category in key order.
    pub fn find(&self, term: &str, category: Option<&str>) -> Option<&AssetEntry> {
        let target = fold_term(term);
        let matches = |entry: &&AssetEntry| fold_term(&entry.name).contains(&target);

        category
            .and_then(|c| self.get(c))
            .and_then(|entries| entries.iter().find(matches))
            .or_else(|| self.iter().find_map(|(_, entries)| entries.iter().find(matches)))
    }

    /// URL for `term`, never failing.
    ///
    /// Falls back to the first entry of `category`, then the first entry
    /// of the first category, then an empty string.
    pub fn resolve_url(&self, term: &str, category: Option<&str>) -> &str {
        self.find(term, category)
            .or_else(|| category.and_then(|c| self.get(c)).and_then(<[_]>::first))
            .or_else(|| self.iter().next().and_then(|(_, entries)| entries.first()))
            .map_or("", |entry| entry.url.as_str())
    }

    /// Every entry whose folded name contains `term`, in manifest order.
    ///
    /// A blank term matches nothing.
    pub fn search(&self, term: &str) -> Vec<SearchHit<'_>> {
        if term.trim().is_empty() {
            return Vec::new();
        }

        let target = fold_term(term);
        self.iter()
            .flat_map(|(category, entries)| {
                entries.iter().map(move |entry| SearchHit { category, entry })
            })
            .filter(|hit| fold_term(&hit.entry.name).contains(&target))
            .collect()
    }
}
