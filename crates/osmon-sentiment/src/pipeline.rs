//! Ingestion: raw collector records to classified mentions.

use osmon_core::{Mention, RawRecord};

use crate::classifier::SentimentClassifier;

/// Normalize raw records into mentions and classify each one.
///
/// Keywords are matched against `tracked` once, here. Records with blank text
/// are dropped with a warning; everything else keeps its input order.
pub fn ingest<S: AsRef<str>>(
    records: Vec<RawRecord>,
    tracked: &[S],
    classifier: &SentimentClassifier,
) -> Vec<Mention> {
    let total = records.len();
    let mentions: Vec<Mention> = records
        .into_iter()
        .filter_map(|raw| match Mention::from_raw(raw, tracked) {
            Ok(mention) => Some(mention),
            Err(e) => {
                tracing::warn!(error = %e, "dropping raw record");
                None
            }
        })
        .collect();

    if mentions.len() != total {
        tracing::warn!(
            received = total,
            kept = mentions.len(),
            "some raw records were dropped during ingestion"
        );
    }

    classifier.analyze_batch(mentions)
}
