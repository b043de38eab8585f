use clap::{Parser, Subcommand};
use geodiv_core::{Level, SearchScope};
use std::convert::Infallible;
use std::path::PathBuf;

/// CLI arguments for geodiv
#[derive(Debug, Parser)]
#[command(
    name = "geodiv",
    version,
    about = "Search provinces, cities and districts by name or adcode",
    arg_required_else_help = true
)]
pub struct CliArgs {
    /// Dataset to load: .json, .json.gz, or a snapshot (.bin, .bin.gz).
    /// Defaults to the dataset bundled with geodiv-core.
    #[arg(short = 'i', long = "input", env = "GEODIV_DATASET", global = true)]
    pub input: Option<PathBuf>,

    /// Log loading details to stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

fn lenient_scope(s: &str) -> Result<SearchScope, Infallible> {
    Ok(SearchScope::parse_lenient(s))
}

fn lenient_level(s: &str) -> Result<Level, Infallible> {
    Ok(Level::from_label(s))
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find places whose name contains QUERY (case-sensitive)
    Search {
        query: String,

        /// province, city, district or all; anything else means all
        #[arg(short = 't', long = "type", default_value = "all", value_parser = lenient_scope)]
        scope: SearchScope,

        /// Print at most N results
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look a place up by its administrative code
    Code {
        /// Administrative code (e.g. 110105)
        adcode: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show per-level record counts
    Stats,

    /// List every place of one level
    List {
        /// province, city or district
        #[arg(value_parser = lenient_level)]
        level: Level,
    },

    /// Normalize a JSON dataset once and write a binary snapshot
    #[cfg(feature = "builder")]
    Build {
        /// Source dataset (.json or .json.gz)
        source: PathBuf,

        /// Output snapshot; a .gz suffix (e.g. info.bin.gz) selects gzip
        out: PathBuf,

        /// Write without gzip; OUT must then not end in .gz
        #[arg(long)]
        no_compress: bool,
    },
}
