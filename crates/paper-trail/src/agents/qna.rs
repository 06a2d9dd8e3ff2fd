//! Question answering over a single stored paper.

use std::sync::Arc;

use super::extract::TextExtractor;
use super::generate::TextGenerator;
use crate::config::defaults;
use crate::error::AgentResult;
use crate::models::Paper;

/// A classified question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    /// Answerable from text alone.
    Text(String),

    /// Asks about figures, charts, or other visual content.
    Visual(String),
}

/// Decides which variant a raw question belongs to.
pub trait QuestionClassifier: Send + Sync {
    /// Classify a raw question.
    fn classify(&self, question: &str) -> Question;
}

/// Keywords that mark a question as visual.
const VISUAL_KEYWORDS: &[&str] = &["image", "chart", "graph", "figure"];

/// Classifier that scans for figure-related keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl QuestionClassifier for KeywordClassifier {
    fn classify(&self, question: &str) -> Question {
        let lowered = question.to_lowercase();
        if VISUAL_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            Question::Visual(question.to_string())
        } else {
            Question::Text(question.to_string())
        }
    }
}

/// Answers questions about one paper, pulling in full text when a document
/// locator is available.
pub struct QnaAgent {
    generator: Arc<dyn TextGenerator>,
    extractor: Arc<dyn TextExtractor>,
    classifier: Box<dyn QuestionClassifier>,
}

impl QnaAgent {
    /// Create an agent with the default keyword classifier.
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>, extractor: Arc<dyn TextExtractor>) -> Self {
        Self::with_classifier(generator, extractor, Box::new(KeywordClassifier))
    }

    /// Create an agent with an explicit classifier.
    #[must_use]
    pub fn with_classifier(
        generator: Arc<dyn TextGenerator>,
        extractor: Arc<dyn TextExtractor>,
        classifier: Box<dyn QuestionClassifier>,
    ) -> Self {
        Self { generator, extractor, classifier }
    }

    /// Answer a question about the paper.
    ///
    /// # Errors
    ///
    /// Returns error if full-text extraction or generation fails.
    pub async fn answer(&self, paper: &Paper, question: &str) -> AgentResult<String> {
        match self.classifier.classify(question) {
            Question::Text(q) => self.answer_text(paper, &q).await,
            Question::Visual(q) => self.answer_visual(paper, &q).await,
        }
    }

    async fn answer_text(&self, paper: &Paper, question: &str) -> AgentResult<String> {
        let mut context = format!("Title: {}\nSummary: {}\n", paper.title, paper.summary);

        if let Some(locator) = paper.document_locator() {
            let full_text = self.extractor.extract_text(locator).await?;
            let excerpt: String =
                full_text.chars().take(defaults::FULL_TEXT_CONTEXT_CHARS).collect();
            context.push_str(&format!("\nContent:\n{excerpt}"));
        }

        let prompt = format!("{context}\n\nQuestion: {question}\nAnswer:");
        self.generator.generate(&prompt).await
    }

    async fn answer_visual(&self, paper: &Paper, question: &str) -> AgentResult<String> {
        let prompt = format!(
            "Title: {}\nSummary: {}\n\nQuestion: {}\nAnswer with details if this paper \
             contains images, charts, or figures relevant to the question.",
            paper.title, paper.summary, question
        );
        self.generator.generate(&prompt).await
    }
}

impl std::fmt::Debug for QnaAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QnaAgent").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_classifier_visual() {
        let classifier = KeywordClassifier;
        assert!(matches!(
            classifier.classify("What does Figure 3 show?"),
            Question::Visual(_)
        ));
        assert!(matches!(
            classifier.classify("Is there a chart of the ablations?"),
            Question::Visual(_)
        ));
    }

    #[test]
    fn test_keyword_classifier_text() {
        let classifier = KeywordClassifier;
        assert!(matches!(
            classifier.classify("What dataset was used?"),
            Question::Text(_)
        ));
    }
}
