//! Multi-paper summarization.

use std::sync::Arc;

use serde::Serialize;

use super::generate::TextGenerator;
use crate::error::AgentResult;
use crate::models::Paper;

/// Key points extracted from one paper.
#[derive(Debug, Clone, Serialize)]
pub struct KeyPoints {
    /// Paper title.
    pub title: String,

    /// Generated highlights.
    pub key_points: String,
}

/// Summarizes findings across a set of papers.
pub struct SummarizeAgent {
    generator: Arc<dyn TextGenerator>,
}

impl SummarizeAgent {
    /// Create the agent.
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// High-level summary of the main findings across the papers.
    ///
    /// # Errors
    ///
    /// Returns error if generation fails.
    pub async fn summarize_findings(&self, papers: &[Paper]) -> AgentResult<String> {
        let prompt = format!(
            "Summaries of papers published:\n\n{}\n\nProvide a high-level summary \
             highlighting the main findings across these papers.",
            combined_summaries(papers)
        );
        self.generator.generate(&prompt).await
    }

    /// Future-work directions spanning all the papers.
    ///
    /// # Errors
    ///
    /// Returns error if generation fails.
    pub async fn future_works(&self, papers: &[Paper]) -> AgentResult<String> {
        let prompt = format!(
            "Summaries of papers published:\n\n{}\n\nBased on the above summaries, suggest \
             potential improvements, unexplored areas, and future research directions \
             across these studies.",
            combined_summaries(papers)
        );
        self.generator.generate(&prompt).await
    }

    /// Key points for each paper, one generation per paper.
    ///
    /// # Errors
    ///
    /// Returns error if generation fails for any paper.
    pub async fn extract_key_points(&self, papers: &[Paper]) -> AgentResult<Vec<KeyPoints>> {
        let mut all = Vec::with_capacity(papers.len());

        for paper in papers {
            let prompt = format!(
                "Title: {}\nSummary: {}\n\nExtract the key points or most important \
                 highlights from this paper.",
                paper.title, paper.summary
            );
            let key_points = self.generator.generate(&prompt).await?;
            all.push(KeyPoints { title: paper.title.clone(), key_points });
        }

        Ok(all)
    }
}

fn combined_summaries(papers: &[Paper]) -> String {
    papers.iter().map(|p| p.summary.as_str()).collect::<Vec<_>>().join("\n\n")
}

impl std::fmt::Debug for SummarizeAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizeAgent").finish_non_exhaustive()
    }
}
