//! Manifest serialization.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::{Manifest, ManifestError, Result};

/// Indentation of the pretty-printed manifest
const INDENT: &[u8] = b"  ";

/// Render the manifest as pretty JSON.
///
/// Non-ASCII text is written as-is, never `\u` escaped. No trailing
/// newline, so the bytes are stable across runs.
pub fn to_json(manifest: &Manifest) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    manifest.serialize(&mut ser)?;
    Ok(buf)
}

/// Write the manifest to `path`, replacing any previous file.
///
/// Parent directories are created when missing.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<()> {
    let json = to_json(manifest)?;
    let write_error = |source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut file = fs::File::create(path).map_err(write_error)?;
    file.write_all(&json).map_err(write_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::AssetEntry;
    use tempfile::TempDir;

    fn sample() -> Manifest {
        let mut manifest = Manifest::new();
        manifest.insert(
            "pernas",
            vec![AssetEntry::from_file("gifs", "pernas", "Agachamento_Búlgaro.gif")],
        );
        manifest.insert(
            "costas",
            vec![
                AssetEntry::from_file("gifs", "costas", "Remada.gif"),
                AssetEntry::from_file("gifs", "costas", "Barra-Fixa.GIF"),
            ],
        );
        manifest
    }

    #[test]
    fn test_to_json_layout() {
        let json = String::from_utf8(to_json(&sample()).unwrap()).unwrap();
        let expected = r#"{
  "costas": [
    {
      "nome": "barra fixa",
      "url": "/gifs/costas/Barra-Fixa.GIF"
    },
    {
      "nome": "remada",
      "url": "/gifs/costas/Remada.gif"
    }
  ],
  "pernas": [
    {
      "nome": "agachamento bulgaro",
      "url": "/gifs/pernas/Agachamento_Búlgaro.gif"
    }
  ]
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_to_json_empty_manifest() {
        let json = to_json(&Manifest::new()).unwrap();
        assert_eq!(json, b"{}");
    }

    #[test]
    fn test_to_json_keeps_non_ascii_unescaped() {
        let json = String::from_utf8(to_json(&sample()).unwrap()).unwrap();
        assert!(json.contains("Búlgaro"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_write_overwrites_previous_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gifs.json");
        fs::write(&path, "stale content that is much longer than the new manifest").unwrap();

        write_manifest(&Manifest::new(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("public/data/gifs.json");

        write_manifest(&sample(), &path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_write_into_file_parent_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("public");
        fs::write(&blocker, "").unwrap();

        let err = write_manifest(&sample(), &blocker.join("gifs.json")).unwrap_err();
        assert!(matches!(err, ManifestError::Write { .. }));
    }
}
