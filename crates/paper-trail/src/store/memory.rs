//! In-memory paper store for tests and offline development.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use super::PaperStore;
use crate::error::StoreResult;
use crate::identity;
use crate::models::Paper;

/// Paper store backed by a `BTreeMap`, so reads come back in identifier
/// order like the graph backend's `ORDER BY`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<String, Paper>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl PaperStore for MemoryStore {
    async fn upsert(&self, paper: &Paper) -> StoreResult<()> {
        let paper_id = identity::paper_id(&paper.url);
        let record = Paper {
            paper_id: paper_id.clone(),
            // Auxiliary links are not part of the durable record.
            links: Vec::new(),
            ..paper.clone()
        };

        self.records.write().await.insert(paper_id, record);
        Ok(())
    }

    async fn find_by_year(&self, year: i32) -> StoreResult<Vec<Paper>> {
        let (Some(from), Some(to)) =
            (NaiveDate::from_ymd_opt(year, 1, 1), NaiveDate::from_ymd_opt(year, 12, 31))
        else {
            return Ok(Vec::new());
        };

        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|p| (from..=to).contains(&p.published_date))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, paper_id: &str) -> StoreResult<Option<Paper>> {
        Ok(self.records.read().await.get(paper_id).cloned())
    }
}
