//! Year-partitioned topic search with in-run deduplication.
//!
//! Bibliographic services cap how many results a single query can page
//! through; splitting a broad topic into calendar-year windows approximates
//! "all results" without deep pagination. Each year's inner loop stops on
//! the first of: an empty batch, a batch with no previously-unseen paper,
//! or the global result cap (which also ends the outer year loop).
//!
//! Transport and service failures abandon the current year only — they are
//! logged and the next year proceeds.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use chrono::{Datelike, Utc};

use crate::client::{ArxivClient, FeedEntry};
use crate::config::api;
use crate::models::Paper;

/// The result of one topic search: unique papers in discovery order plus
/// the set of canonical urls seen.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Deduplicated papers, insertion order = discovery order.
    pub papers: Vec<Paper>,

    /// Canonical urls of every collected paper.
    pub seen_urls: HashSet<String>,
}

/// Dedup state scoped to a single pipeline invocation.
///
/// Invariant: `collected.len() == seen_urls.len()`, and no two collected
/// papers share a url.
struct SearchSession {
    max_results: usize,
    seen_urls: HashSet<String>,
    collected: Vec<Paper>,
}

impl SearchSession {
    fn new(max_results: usize) -> Self {
        Self { max_results, seen_urls: HashSet::new(), collected: Vec::new() }
    }

    fn is_full(&self) -> bool {
        self.collected.len() >= self.max_results
    }

    /// Admit a feed entry if its url has not been seen in this session.
    /// Returns true when a new paper was collected.
    fn admit(&mut self, entry: FeedEntry) -> bool {
        if self.seen_urls.contains(&entry.id) {
            return false;
        }

        let paper = match Paper::from_feed_entry(entry) {
            Ok(paper) => paper,
            Err(err) => {
                tracing::debug!(error = %err, "skipping entry with unparseable published date");
                return false;
            }
        };

        self.seen_urls.insert(paper.url.clone());
        self.collected.push(paper);
        true
    }

    fn into_outcome(self) -> SearchOutcome {
        SearchOutcome { papers: self.collected, seen_urls: self.seen_urls }
    }
}

/// Search a topic across the default window (2019 through the current
/// calendar year), collecting at most `max_results` unique papers.
pub async fn search_topic(
    client: &ArxivClient,
    topic: &str,
    max_results: usize,
) -> SearchOutcome {
    let end_year = Utc::now().year();
    search_topic_in_years(client, topic, max_results, api::START_YEAR..=end_year).await
}

/// Search a topic across an explicit inclusive span of calendar years.
pub async fn search_topic_in_years(
    client: &ArxivClient,
    topic: &str,
    max_results: usize,
    years: RangeInclusive<i32>,
) -> SearchOutcome {
    let mut session = SearchSession::new(max_results);

    'years: for year in years {
        let query = year_query(topic, year);
        tracing::debug!(year, query = %query, "searching year partition");

        let mut start = 0;
        loop {
            if session.is_full() {
                break 'years;
            }

            let batch = match client.fetch_batch(&query, start).await {
                Ok(batch) => batch,
                Err(err) => {
                    tracing::warn!(year, error = %err, "search service failed, abandoning year");
                    break;
                }
            };

            if batch.is_empty() {
                tracing::debug!(year, "service exhausted for year");
                break;
            }
            start += batch.len();

            let mut progressed = false;
            for entry in batch {
                if session.is_full() {
                    break;
                }
                if session.admit(entry) {
                    progressed = true;
                }
            }

            if session.is_full() {
                break 'years;
            }
            if !progressed {
                tracing::debug!(year, "no new unique papers in batch");
                break;
            }
        }
    }

    let outcome = session.into_outcome();
    tracing::info!(topic, papers = outcome.papers.len(), "topic search complete");
    outcome
}

/// The per-year service query: topic conjoined with a submission-date
/// window covering the whole calendar year.
fn year_query(topic: &str, year: i32) -> String {
    format!("{topic} AND submittedDate:[{year}0101 TO {year}1231]")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(url: &str) -> FeedEntry {
        FeedEntry {
            id: url.to_string(),
            title: "T".to_string(),
            summary: "S".to_string(),
            published: "2021-01-02T00:00:00Z".to_string(),
            authors: vec!["A".to_string()],
            links: Vec::new(),
        }
    }

    #[test]
    fn test_year_query_shape() {
        assert_eq!(
            year_query("graph neural networks", 2021),
            "graph neural networks AND submittedDate:[20210101 TO 20211231]"
        );
    }

    #[test]
    fn test_session_dedup_and_invariant() {
        let mut session = SearchSession::new(10);
        assert!(session.admit(entry("http://arxiv.org/abs/1")));
        assert!(!session.admit(entry("http://arxiv.org/abs/1")));
        assert!(session.admit(entry("http://arxiv.org/abs/2")));

        assert_eq!(session.collected.len(), session.seen_urls.len());
        assert_eq!(session.collected.len(), 2);
    }

    #[test]
    fn test_session_skips_unparseable_date() {
        let mut session = SearchSession::new(10);
        let mut bad = entry("http://arxiv.org/abs/3");
        bad.published = "unknown".to_string();

        assert!(!session.admit(bad));
        assert!(session.collected.is_empty());
        assert!(session.seen_urls.is_empty());
    }

    #[test]
    fn test_session_cap() {
        let mut session = SearchSession::new(1);
        assert!(session.admit(entry("http://arxiv.org/abs/1")));
        assert!(session.is_full());
    }
}
