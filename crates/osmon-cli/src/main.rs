mod collect;
mod query;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use osmon_core::AppConfig;
use osmon_db::JsonFileStore;
use tracing_subscriber::EnvFilter;

use crate::report::ReportFormat;

#[derive(Debug, Parser)]
#[command(name = "osmon")]
#[command(about = "Open-source mention monitor: collect, classify and report keyword mentions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect mentions for keywords, classify them and save them
    Collect {
        /// Keyword to track (repeatable); defaults to the watchlist file
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Source to search (repeatable): web, news, social, twitter, reddit
        #[arg(short, long = "source")]
        sources: Vec<String>,

        /// Maximum results per keyword per source
        #[arg(short, long)]
        max_results: Option<usize>,
    },
    /// List stored mentions
    Mentions {
        /// Show at most this many mentions
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Only mentions from this source (exact, case-sensitive)
        #[arg(long)]
        source: Option<String>,

        /// Only mentions that matched this keyword
        #[arg(long)]
        keyword: Option<String>,

        /// Only mentions with this sentiment label
        #[arg(long)]
        sentiment: Option<String>,

        /// Extra filter as key=value (repeatable)
        #[arg(long = "filter")]
        filters: Vec<String>,
    },
    /// Show store statistics
    Stats,
    /// Generate a report over stored mentions
    Report {
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only include the first N stored mentions
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Delete stored mentions
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,

        /// Keep the query log
        #[arg(long)]
        mentions_only: bool,
    },
    /// Show the active (non-secret) configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = osmon_core::load_app_config()?;

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Commands::Collect {
            keywords,
            sources,
            max_results,
        } => {
            let mut store = open_store(&config)?;
            collect::run_collect(&config, &mut store, keywords, sources, max_results)?;
        }
        Commands::Mentions {
            limit,
            source,
            keyword,
            sentiment,
            filters,
        } => {
            let filter = query::build_filter(
                source.as_deref(),
                keyword.as_deref(),
                sentiment.as_deref(),
                &filters,
            )?;
            query::run_mentions(&open_store(&config)?, &filter, limit)?;
        }
        Commands::Stats => query::run_stats(&open_store(&config)?)?,
        Commands::Report {
            format,
            output,
            limit,
        } => report::run_report(&open_store(&config)?, format, output.as_deref(), limit)?,
        Commands::Clear { yes, mentions_only } => {
            query::run_clear(&mut open_store(&config)?, yes, mentions_only)?;
        }
        Commands::Config => query::run_config(&config)?,
    }

    Ok(())
}

fn open_store(config: &AppConfig) -> anyhow::Result<JsonFileStore> {
    let store = JsonFileStore::open(&config.database_path)?;
    Ok(store)
}

#[cfg(test)]
mod tests;
