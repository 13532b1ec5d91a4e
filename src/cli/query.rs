//! Query command implementation.
//!
//! Reads an existing manifest and prints matches as pretty JSON.

use anyhow::{Context, Result};
use serde_json::{Value as JsonValue, json};

use crate::cli::QueryArgs;
use crate::config::ManifestConfig;
use crate::debug;
use crate::manifest::Manifest;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &ManifestConfig) -> Result<()> {
    let manifest = Manifest::load(&config.output)
        .context("run `gifs-manifest generate` first to create the manifest")?;
    debug!("query"; "loaded {} categories from {}", manifest.len(), config.output.display());

    let output = query_manifest(&manifest, args);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Build the JSON answer for a query.
///
/// `--all` yields every hit; otherwise a single object with the best
/// match and the URL the web app would display for the term.
fn query_manifest(manifest: &Manifest, args: &QueryArgs) -> JsonValue {
    if args.all {
        return json!(manifest.search(&args.term));
    }

    let category = args.category.as_deref();
    json!({
        "term": args.term,
        "match": manifest.find(&args.term, category),
        "url": manifest.resolve_url(&args.term, category),
    })
}
