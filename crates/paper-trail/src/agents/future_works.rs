//! Future-work suggestions and review-paper compilation.

use std::sync::Arc;

use super::generate::TextGenerator;
use crate::error::AgentResult;
use crate::models::Paper;

/// Generates research-direction suggestions from paper summaries.
pub struct FutureWorksAgent {
    generator: Arc<dyn TextGenerator>,
}

impl FutureWorksAgent {
    /// Create the agent.
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Suggest future research directions for one paper.
    ///
    /// # Errors
    ///
    /// Returns error if generation fails.
    pub async fn suggest(&self, paper: &Paper) -> AgentResult<String> {
        let prompt = format!(
            "Title: {}\nSummary: {}\n\nBased on the above summary, suggest potential \
             improvements, unexplored areas, and future research directions.",
            paper.title, paper.summary
        );
        self.generator.generate(&prompt).await
    }

    /// Compile a review paper from the given papers: one section per paper
    /// with its metadata, summary, and generated future-work suggestions.
    ///
    /// # Errors
    ///
    /// Returns error if generation fails for any section.
    pub async fn review_paper(&self, papers: &[Paper]) -> AgentResult<String> {
        let mut review = String::from("Review Paper: Future Directions in Research\n\n");

        for (i, paper) in papers.iter().enumerate() {
            review.push_str(&format!(
                "### {}. {}\n**Authors**: {}\n**Published Date**: {}\n**Summary**: {}\n\n",
                i + 1,
                paper.title,
                paper.author_names(),
                paper.published_date_iso(),
                paper.summary
            ));

            let directions = self.suggest(paper).await?;
            review.push_str(&format!("**Future Work Suggestions**:\n{directions}\n\n"));
        }

        Ok(review)
    }
}

impl std::fmt::Debug for FutureWorksAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FutureWorksAgent").finish_non_exhaustive()
    }
}
