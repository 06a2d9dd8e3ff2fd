//! Neo4j-backed paper store.
//!
//! One `(:Paper)` node per record, keyed by the `paper_id` property.
//! Upserts are a single parameterized `MERGE`/`SET` statement, so the
//! backend's single-statement atomicity is all the coordination needed.

use async_trait::async_trait;
use chrono::NaiveDate;
use neo4rs::{Graph, Row, query};

use super::PaperStore;
use crate::error::{StoreError, StoreResult};
use crate::identity;
use crate::models::Paper;

/// Paper store over a long-lived Neo4j connection pool.
pub struct Neo4jStore {
    graph: Graph,
}

impl Neo4jStore {
    /// Connect to a Neo4j instance.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the connection cannot be
    /// established.
    pub async fn connect(uri: &str, user: &str, password: &str) -> StoreResult<Self> {
        let graph = Graph::new(uri, user, password).await?;
        Ok(Self { graph })
    }
}

#[async_trait]
impl PaperStore for Neo4jStore {
    async fn upsert(&self, paper: &Paper) -> StoreResult<()> {
        let paper_id = identity::paper_id(&paper.url);

        let statement = query(
            "MERGE (p:Paper {paper_id: $paper_id}) \
             SET p.title = $title, \
                 p.authors = $authors, \
                 p.published_date = $published_date, \
                 p.summary = $summary, \
                 p.url = $url",
        )
        .param("paper_id", paper_id)
        .param("title", paper.title.as_str())
        .param("authors", paper.authors.clone())
        .param("published_date", paper.published_date_iso())
        .param("summary", paper.summary.as_str())
        .param("url", paper.url.as_str());

        self.graph.run(statement).await?;
        Ok(())
    }

    async fn find_by_year(&self, year: i32) -> StoreResult<Vec<Paper>> {
        // Closed range over the ISO text: for well-formed YYYY-MM-DD values
        // lexicographic order equals date order. Records with dates in any
        // other shape fall outside the bounds and silently fail to match.
        let statement = query(
            "MATCH (p:Paper) \
             WHERE p.published_date >= $from AND p.published_date <= $to \
             RETURN p.paper_id AS paper_id, p.title AS title, p.authors AS authors, \
                    p.published_date AS published_date, p.summary AS summary, p.url AS url \
             ORDER BY p.paper_id",
        )
        .param("from", format!("{year}-01-01"))
        .param("to", format!("{year}-12-31"));

        let mut rows = self.graph.execute(statement).await?;
        let mut papers = Vec::new();
        while let Some(row) = rows.next().await? {
            papers.push(row_to_paper(&row)?);
        }
        Ok(papers)
    }

    async fn find_by_id(&self, paper_id: &str) -> StoreResult<Option<Paper>> {
        let statement = query(
            "MATCH (p:Paper {paper_id: $paper_id}) \
             RETURN p.paper_id AS paper_id, p.title AS title, p.authors AS authors, \
                    p.published_date AS published_date, p.summary AS summary, p.url AS url",
        )
        .param("paper_id", paper_id);

        let mut rows = self.graph.execute(statement).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_paper(&row)?)),
            None => Ok(None),
        }
    }
}

/// Map a result row back into the canonical schema.
fn row_to_paper(row: &Row) -> StoreResult<Paper> {
    let published: String = row.get("published_date")?;
    let published_date = NaiveDate::parse_from_str(&published, "%Y-%m-%d")
        .map_err(|err| StoreError::malformed(format!("published_date {published:?}: {err}")))?;

    Ok(Paper {
        paper_id: row.get("paper_id")?,
        title: row.get("title")?,
        authors: row.get("authors")?,
        published_date,
        summary: row.get("summary")?,
        url: row.get("url")?,
        links: Vec::new(),
    })
}

impl std::fmt::Debug for Neo4jStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Neo4jStore").finish_non_exhaustive()
    }
}
