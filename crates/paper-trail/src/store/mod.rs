//! Durable keyed storage for papers.
//!
//! The store is addressed by content-derived `paper_id` and exposed as a
//! trait so callers (and tests) can swap the graph backend for an
//! in-memory one without touching the pipeline or the API layer.

mod memory;
mod neo4j;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::Paper;

pub use memory::MemoryStore;
pub use neo4j::Neo4jStore;

/// Keyed paper storage.
///
/// Every operation is a single self-contained transaction; there is no
/// cross-call locking discipline. Upserts are idempotent, which makes
/// concurrent duplicate ingestion runs converge without coordination.
#[async_trait]
pub trait PaperStore: Send + Sync {
    /// Create or update the record for `paper`, keyed by the identity of
    /// its url. Duplicate writes of equivalent content never fail.
    ///
    /// Auxiliary links are not part of the durable record and are dropped.
    async fn upsert(&self, paper: &Paper) -> StoreResult<()>;

    /// All papers whose publication date falls within the given calendar
    /// year, in deterministic identifier order.
    ///
    /// An empty result is not an error.
    async fn find_by_year(&self, year: i32) -> StoreResult<Vec<Paper>>;

    /// Exact lookup by paper id. Absence is `None`, never a failure.
    async fn find_by_id(&self, paper_id: &str) -> StoreResult<Option<Paper>>;
}
