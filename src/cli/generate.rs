//! Generate command implementation.
//!
//! One linear pass: validate root → scan → normalize → sort → write.
//! Nothing is written unless the whole scan succeeds.

use std::path::PathBuf;

use crate::config::ManifestConfig;
use crate::logger::Reporter;
use crate::manifest::{Result, build_manifest, write_manifest};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub categories: usize,
    pub assets: usize,
    pub output: PathBuf,
}

/// Regenerate the manifest described by `config`.
pub fn run(config: &ManifestConfig, reporter: &mut dyn Reporter) -> Result<Summary> {
    reporter.debug(&format!("scanning {}", config.root.display()));
    let manifest = build_manifest(config, reporter)?;
    if manifest.is_empty() {
        reporter.warning(&format!("no .gif assets found under {}", config.root.display()));
    } else {
        let names: Vec<_> = manifest.category_names().collect();
        reporter.debug(&format!("categories: {}", names.join(", ")));
    }

    write_manifest(&manifest, &config.output)?;

    let name = config
        .output
        .file_name()
        .map_or_else(|| config.output.display().to_string(), |n| n.to_string_lossy().into_owned());
    reporter.success(&format!("{name} generated"));
    reporter.info(&format!("categories found: {}", manifest.len()));
    reporter.info(&format!("saved to: {}", config.output.display()));

    Ok(Summary {
        categories: manifest.len(),
        assets: manifest.asset_count(),
        output: config.output.clone(),
    })
}
