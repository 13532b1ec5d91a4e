//! gifs-manifest - JSON manifest generator for categorized gif assets.

mod cli;
mod config;
mod logger;
mod manifest;

use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ManifestConfig;
use logger::ConsoleReporter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log!("error"; "{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ManifestConfig::default();

    match &cli.command {
        None | Some(Commands::Generate) => {
            let summary = cli::generate::run(&config, &mut ConsoleReporter)?;
            debug!("manifest"; "{} assets in {} categories written to {}",
                summary.assets, summary.categories, summary.output.display());
            Ok(())
        }
        Some(Commands::Query { args }) => cli::query::run_query(args, &config),
    }
}
