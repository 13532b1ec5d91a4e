//! Manifest error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building, writing or reading a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("assets root `{}` not found", .0.display())]
    MissingRoot(PathBuf),

    #[error("failed to read directory `{}`", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write manifest `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize manifest")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to read manifest `{}`", path.display())]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest `{}` is not valid JSON", path.display())]
    ParseManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = ManifestError> = std::result::Result<T, E>;
