//! Ingestion driver: topic search composed into store upserts.

use crate::client::ArxivClient;
use crate::search;
use crate::store::PaperStore;

/// Counts from one ingestion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct IngestReport {
    /// Unique papers discovered by the search pipeline.
    pub discovered: usize,

    /// Papers durably written. May be lower than `discovered` when
    /// individual upserts fail; partial success is expected, not rolled
    /// back.
    pub stored: usize,
}

/// Search a topic and upsert every discovered paper in discovery order.
///
/// A failed upsert is logged and skipped; the remaining papers are still
/// written.
pub async fn ingest(
    client: &ArxivClient,
    store: &dyn PaperStore,
    topic: &str,
    max_results: usize,
) -> IngestReport {
    let outcome = search::search_topic(client, topic, max_results).await;
    let discovered = outcome.papers.len();

    let mut stored = 0;
    for paper in &outcome.papers {
        match store.upsert(paper).await {
            Ok(()) => stored += 1,
            Err(err) => {
                tracing::warn!(paper_id = %paper.paper_id, error = %err, "failed to store paper");
            }
        }
    }

    tracing::info!(topic, discovered, stored, "ingest complete");
    IngestReport { discovered, stored }
}
