//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};

/// Generate the categorized gif manifest consumed by the web app
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scan the assets root and rewrite the manifest
    #[command(visible_alias = "g")]
    Generate,

    /// Look up entries in an existing manifest
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Name (or part of a name) to look for; accents and case are ignored
    pub term: String,

    /// Category searched first before falling back to all categories
    #[arg(short, long)]
    pub category: Option<String>,

    /// List every matching entry instead of the best one
    #[arg(short, long, conflicts_with = "category")]
    pub all: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_generate() {
        let cli = Cli::parse_from(["gifs-manifest"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_generate_alias() {
        let cli = Cli::parse_from(["gifs-manifest", "g", "-v"]);
        assert!(matches!(cli.command, Some(Commands::Generate)));
        assert!(cli.verbose);
    }

    #[test]
    fn test_query_args() {
        let cli = Cli::parse_from(["gifs-manifest", "query", "remada", "-c", "costas"]);
        let Some(Commands::Query { args }) = cli.command else {
            panic!("expected query command");
        };
        assert_eq!(args.term, "remada");
        assert_eq!(args.category.as_deref(), Some("costas"));
        assert!(!args.all);
    }

    #[test]
    fn test_path_flags_rejected() {
        assert!(Cli::try_parse_from(["gifs-manifest", "--root", "/tmp/gifs"]).is_err());
        assert!(Cli::try_parse_from(["gifs-manifest", "--output", "/tmp/gifs.json"]).is_err());
        assert!(Cli::try_parse_from(["gifs-manifest", "q", "remada", "-o", "x.json"]).is_err());
    }

    #[test]
    fn test_query_all_conflicts_with_category() {
        let result = Cli::try_parse_from(["gifs-manifest", "q", "remada", "-a", "-c", "costas"]);
        assert!(result.is_err());
    }
}
