//! Manifest configuration.
//!
//! Two fixed paths: the assets root that gets scanned and the manifest
//! file that gets written, following the layout of the web app:
//!
//! ```text
//! public/
//! ├── gifs/          <- root
//! │   └── <category>/*.gif
//! └── gifs.json      <- output
//! ```

use std::path::{Path, PathBuf};

/// Default assets root, relative to the working directory
pub const DEFAULT_ROOT: &str = "public/gifs";

/// Default manifest path, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "public/gifs.json";

/// Paths the manifest pipeline works with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestConfig {
    /// Directory holding one subdirectory per category
    pub root: PathBuf,
    /// Manifest file, fully overwritten on every run
    pub output: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ManifestConfig {
    #[cfg(test)]
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
        }
    }

    /// First URL segment of every asset: the root's directory name.
    ///
    /// Roots without a usable name (`.`, `..`, `/`) are resolved
    /// against the filesystem first.
    pub fn mount_point(&self) -> String {
        dir_name(&self.root)
            .or_else(|| self.root.canonicalize().ok().as_deref().and_then(dir_name))
            .unwrap_or_default()
    }
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ManifestConfig::default();
        assert_eq!(config.root, Path::new("public/gifs"));
        assert_eq!(config.output, Path::new("public/gifs.json"));
        assert_eq!(config.mount_point(), "gifs");
    }

    #[test]
    fn test_mount_point_trailing_slash() {
        let config = ManifestConfig::new("public/gifs/", "gifs.json");
        assert_eq!(config.mount_point(), "gifs");
    }

    #[test]
    fn test_mount_point_resolves_dot() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("animacoes");
        std::fs::create_dir_all(&root).unwrap();

        let config = ManifestConfig::new(root.join("."), "gifs.json");
        assert_eq!(config.mount_point(), "animacoes");
    }
}
