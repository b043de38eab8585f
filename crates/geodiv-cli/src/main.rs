//! geodiv: command-line interface for geodiv-core
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ geodiv stats
//!
//! - Search every level, or one level, by substring
//!   $ geodiv search 朝阳
//!   $ geodiv search 深圳 --type city
//!
//! - Look a place up by adcode
//!   $ geodiv code 110105 --json
//!
//! - Precompile a dataset into a snapshot and use it
//!   $ geodiv build info.json info.bin.gz
//!   $ geodiv --input info.bin.gz search 北京
//!
//! Data source
//! -----------
//!
//! Without `--input` (or `GEODIV_DATASET`) the dataset bundled with
//! `geodiv-core` is loaded.
use anyhow::Context;
use clap::Parser;
use geodiv_cli::args::{CliArgs, Commands};
use geodiv_cli::output;
use geodiv_core::{GeoSearch, SearchOptions};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn load(input: &Path) -> anyhow::Result<GeoSearch> {
    GeoSearch::try_load_from_path(input)
        .with_context(|| format!("could not load dataset {}", input.display()))
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    // Determine input file (default: the dataset inside geodiv-core)
    let input: PathBuf = args.input.unwrap_or_else(|| {
        GeoSearch::default_data_dir().join(GeoSearch::default_dataset_filename())
    });

    match args.command {
        Commands::Stats => {
            let stats = load(&input)?.get_stats()?;
            println!("{}", output::stats_block(&stats));
        }

        Commands::Search {
            query,
            scope,
            limit,
            json,
        } => {
            let engine = load(&input)?;
            let mut hits = engine.search(&query, &SearchOptions { scope })?;
            if let Some(n) = limit {
                hits.truncate(n);
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else if hits.is_empty() {
                println!("No places found matching: {query}");
            } else {
                for hit in &hits {
                    println!("{}", output::result_line(hit));
                }
            }
        }

        Commands::Code { adcode, json } => {
            let engine = load(&input)?;
            println!("{}", output::code_report(&engine, &adcode, json)?);
        }

        Commands::List { level } => {
            let engine = load(&input)?;
            for rec in engine.records_at(level)? {
                println!("{} ({})", rec.name, rec.adcode);
            }
        }

        #[cfg(feature = "builder")]
        Commands::Build {
            source,
            out,
            no_compress,
        } => {
            use geodiv_core::loader::builder::{build_snapshot, CompressionMode};

            // The loader picks its decoder from the file name, so the name decides.
            let compression = if no_compress {
                CompressionMode::None
            } else {
                CompressionMode::for_path(&out)
            };
            let written = build_snapshot(&source, &out, compression)
                .with_context(|| format!("could not build snapshot from {}", source.display()))?;
            println!("Wrote {written} records to {}", out.display());
        }
    }

    Ok(())
}
