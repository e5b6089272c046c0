//! Report rendering and the `report` command.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use osmon_core::text::truncate_chars;
use osmon_core::Mention;
use osmon_db::{MentionFilter, MentionStore};
use osmon_sentiment::{platform_summary, statistics, SentimentStatistics};
use serde::Serialize;

const RULE_WIDTH: usize = 60;
const TOP_MENTIONS: usize = 5;
const PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    Text,
    Json,
}

/// Render a report over `mentions`.
///
/// Pure: the output depends only on the arguments.
///
/// # Errors
///
/// Returns an error if a mention cannot be serialized for the JSON format.
pub(crate) fn render<M: AsRef<Mention> + Serialize>(
    mentions: &[M],
    stats: &SentimentStatistics,
    format: ReportFormat,
    generated_at: DateTime<Utc>,
) -> anyhow::Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(mentions, stats, generated_at)?),
        ReportFormat::Json => {
            let report = serde_json::json!({
                "generated_at": generated_at.to_rfc3339(),
                "summary": stats,
                "mentions": mentions,
            });
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

fn render_text<M: AsRef<Mention>>(
    mentions: &[M],
    stats: &SentimentStatistics,
    generated_at: DateTime<Utc>,
) -> Result<String, std::fmt::Error> {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    writeln!(out, "{heavy}")?;
    writeln!(out, "OSMON MONITORING REPORT")?;
    writeln!(out, "{heavy}")?;
    writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(out)?;

    writeln!(out, "OVERVIEW")?;
    writeln!(out, "{light}")?;
    writeln!(out, "Total Mentions: {}", stats.total)?;
    writeln!(out)?;

    writeln!(out, "SENTIMENT ANALYSIS")?;
    writeln!(out, "{light}")?;
    writeln!(out, "Positive: {} ({:.1}%)", stats.positive, stats.positive_pct)?;
    writeln!(out, "Negative: {} ({:.1}%)", stats.negative, stats.negative_pct)?;
    writeln!(out, "Neutral:  {} ({:.1}%)", stats.neutral, stats.neutral_pct)?;
    writeln!(out, "Average Polarity: {:.3}", stats.avg_polarity)?;
    writeln!(out)?;

    // stable sort keeps first-seen order among equal counts
    let mut sources = platform_summary(mentions);
    sources.sort_by(|a, b| b.count.cmp(&a.count));
    writeln!(out, "SOURCES")?;
    writeln!(out, "{light}")?;
    for source in &sources {
        writeln!(out, "{}: {}", source.source, source.count)?;
    }
    writeln!(out)?;

    writeln!(out, "RECENT MENTIONS (TOP {TOP_MENTIONS})")?;
    writeln!(out, "{light}")?;
    for (i, mention) in mentions.iter().take(TOP_MENTIONS).enumerate() {
        let mention = mention.as_ref();
        let author = if mention.author.is_empty() {
            "unknown"
        } else {
            mention.author.as_str()
        };
        writeln!(out)?;
        writeln!(out, "{}. [{}] by {author}", i + 1, mention.source)?;
        writeln!(out, "   {}", truncate_chars(&mention.content, PREVIEW_CHARS))?;
        if let Some(sentiment) = mention.sentiment {
            writeln!(
                out,
                "   Sentiment: {} (polarity: {:.2})",
                sentiment.label, sentiment.polarity
            )?;
        }
    }
    writeln!(out)?;
    write!(out, "{heavy}")?;

    Ok(out)
}

/// Write a rendered report to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub(crate) fn save_report(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

/// Handler for `osmon report`.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the report cannot be
/// rendered or saved.
pub(crate) fn run_report(
    store: &dyn MentionStore,
    format: ReportFormat,
    output: Option<&Path>,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let mentions = store.query(&MentionFilter::new(), limit)?;
    let stats = statistics(&mentions);
    let content = render(&mentions, &stats, format, Utc::now())?;

    match output {
        Some(path) => {
            save_report(path, &content)?;
            tracing::info!(path = %path.display(), mentions = mentions.len(), "report saved");
            println!("report saved to {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
