//! Asset scanning functions (read-only, no side effects).
//!
//! ```text
//! public/gifs/
//! ├── README.md            -> (not a directory, skipped)
//! ├── costas/              -> category "costas"
//! │   ├── Remada.gif       -> asset
//! │   ├── Remada.GIF.txt   -> (wrong extension, skipped)
//! │   └── ._Remada.gif     -> (resource fork, skipped)
//! └── peito/               -> category "peito"
//!     └── Supino.Gif       -> asset
//! ```

use std::fs;
use std::path::Path;

use crate::logger::Reporter;

use super::{ManifestError, Result};

/// Extension of qualifying assets, compared case-insensitively
const ASSET_EXTENSION: &str = ".gif";

/// Prefix macOS uses for resource-fork sidecar files
const RESOURCE_FORK_PREFIX: &str = "._";

/// A category directory and the asset files found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDir {
    pub name: String,
    /// File names in enumeration order (not sorted).
    pub files: Vec<String>,
}

/// Scan every category under `root`.
///
/// Categories come back sorted by name. A missing root fails with
/// `MissingRoot`; a directory that cannot be listed aborts the scan.
pub fn scan_assets(root: &Path, reporter: &mut dyn Reporter) -> Result<Vec<CategoryDir>> {
    if !root.is_dir() {
        return Err(ManifestError::MissingRoot(root.to_path_buf()));
    }

    let mut categories = Vec::new();
    for name in list_categories(root, reporter)? {
        let files = list_assets(&root.join(&name), reporter)?;
        reporter.debug(&format!("category `{name}`: {} asset(s)", files.len()));
        categories.push(CategoryDir { name, files });
    }

    Ok(categories)
}

/// Immediate subdirectories of `root`, sorted ascending.
fn list_categories(root: &Path, reporter: &mut dyn Reporter) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in read_dir(root)? {
        let entry = entry.map_err(|source| read_error(root, source))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => reporter.warning(&format!(
                "skipping category with non UTF-8 name: {}",
                raw.to_string_lossy()
            )),
        }
    }

    names.sort();
    Ok(names)
}

/// Qualifying asset file names directly inside `dir`.
fn list_assets(dir: &Path, reporter: &mut dyn Reporter) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in read_dir(dir)? {
        let entry = entry.map_err(|source| read_error(dir, source))?;
        if entry.path().is_dir() {
            continue;
        }

        let raw = entry.file_name();
        let Some(name) = raw.to_str() else {
            if raw.to_string_lossy().to_ascii_lowercase().ends_with(ASSET_EXTENSION) {
                reporter.warning(&format!(
                    "skipping asset with non UTF-8 name in {}: {}",
                    dir.display(),
                    raw.to_string_lossy()
                ));
            }
            continue;
        };

        if is_qualifying_asset(name) {
            files.push(name.to_string());
        }
    }

    Ok(files)
}

/// Whether a file name is a manifest asset: `.gif` in any case,
/// not a `._` resource fork.
pub fn is_qualifying_asset(file_name: &str) -> bool {
    if file_name.starts_with(RESOURCE_FORK_PREFIX) {
        return false;
    }

    file_name
        .len()
        .checked_sub(ASSET_EXTENSION.len())
        .and_then(|start| file_name.get(start..))
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ASSET_EXTENSION))
}

fn read_dir(dir: &Path) -> Result<fs::ReadDir> {
    fs::read_dir(dir).map_err(|source| read_error(dir, source))
}

fn read_error(dir: &Path, source: std::io::Error) -> ManifestError {
    ManifestError::ReadDir {
        path: dir.to_path_buf(),
        source,
    }
}
