//! foodshare-match: match scoring and search ranking from the command line.
//!
//! Reads listings and contexts as JSON documents, runs the engine and prints
//! the result as text or JSON. Logs go to stderr.

use clap::{Parser, Subcommand};
use foodshare_matching::CriteriaPreset;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;
mod input;
mod output;

use config::Config;
use output::OutputFormat;

/// Match scoring and search ranking for FoodShare
#[derive(Parser)]
#[command(name = "foodshare-match")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how a search query is understood
    Parse {
        /// Raw search text
        query: String,

        /// Skip spelling correction and synonym expansion
        #[arg(long)]
        no_correct: bool,
    },

    /// Rank listings by relevance to a query
    Rank {
        /// Raw search text
        #[arg(short, long)]
        query: String,

        /// JSON array of listings ("-" for stdin)
        #[arg(short, long)]
        items: PathBuf,

        /// JSON search context; anonymous at the current time if omitted
        #[arg(long)]
        context: Option<PathBuf>,

        /// Maximum results to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Recommend the best candidates for a searcher
    Match {
        /// JSON array of candidates ("-" for stdin)
        #[arg(long)]
        candidates: PathBuf,

        /// JSON matching context
        #[arg(long)]
        context: PathBuf,

        /// Weighting preset (default, foodPickup, dietaryFocused, community)
        #[arg(short, long, default_value = "default")]
        preset: CriteriaPreset,

        /// Maximum matches to return
        #[arg(short, long, default_value = "10")]
        max_results: usize,
    },

    /// Great-circle distance and proximity between two points
    #[command(allow_negative_numbers = true)]
    Distance {
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,

        /// Range for the proximity score; defaults to the matching max distance
        #[arg(long)]
        max_km: Option<f64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let mut telemetry = config.app.telemetry.clone();
    if cli.verbose {
        telemetry.log_level = "debug".to_string();
    }
    foodshare_telemetry::init_with_config(&telemetry)?;

    if let Some(path) = &config.path {
        tracing::debug!(path = %path.display(), "Loaded config");
    }

    let result = match cli.command {
        Commands::Parse { query, no_correct } => {
            commands::parse::run(&query, no_correct, cli.format)
        }

        Commands::Rank {
            query,
            items,
            context,
            limit,
        } => commands::rank::run(
            &query,
            &items,
            context.as_deref(),
            limit,
            &config.app.ranking,
            cli.format,
        ),

        Commands::Match {
            candidates,
            context,
            preset,
            max_results,
        } => commands::best::run(
            &candidates,
            &context,
            preset,
            max_results,
            &config.app.matching,
            cli.format,
        ),

        Commands::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
            max_km,
        } => commands::distance::run(
            (lat1, lon1),
            (lat2, lon2),
            max_km.unwrap_or(config.app.matching.max_distance_km),
            cli.format,
        ),
    };

    if telemetry.metrics_enabled {
        tracing::debug!(metrics = %foodshare_telemetry::metrics().export_json(), "Metrics");
    }

    result
}
