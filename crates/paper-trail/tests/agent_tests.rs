//! Agent tests with a scripted generator and extractor.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use paper_trail::agents::{
    FutureWorksAgent, QnaAgent, SummarizeAgent, TextExtractor, TextGenerator,
};
use paper_trail::error::AgentResult;
use paper_trail::models::Paper;

/// Generator that records every prompt and answers with a fixed string.
#[derive(Default)]
struct ScriptedGenerator {
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> AgentResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok("generated".to_string())
    }
}

/// Extractor that counts calls and returns a long body.
#[derive(Default)]
struct ScriptedExtractor {
    calls: Mutex<Vec<String>>,
}

#[async_trait]
impl TextExtractor for ScriptedExtractor {
    async fn extract_text(&self, locator: &str) -> AgentResult<String> {
        self.calls.lock().unwrap().push(locator.to_string());
        Ok("x".repeat(3000))
    }
}

fn sample_paper() -> Paper {
    Paper::new(
        "Attention Is Not Enough",
        vec!["Ada Lovelace".to_string()],
        NaiveDate::from_ymd_opt(2021, 5, 3).unwrap(),
        "We study attention.",
        "http://arxiv.org/abs/2105.00001v1",
        Vec::new(),
    )
}

#[tokio::test]
async fn test_qna_text_question_without_document() {
    let generator = Arc::new(ScriptedGenerator::default());
    let extractor = Arc::new(ScriptedExtractor::default());
    let agent = QnaAgent::new(Arc::clone(&generator), Arc::clone(&extractor));

    let answer = agent.answer(&sample_paper(), "What dataset was used?").await.unwrap();

    assert_eq!(answer, "generated");
    assert!(extractor.calls.lock().unwrap().is_empty());

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Title: Attention Is Not Enough"));
    assert!(prompts[0].contains("Question: What dataset was used?"));
    assert!(!prompts[0].contains("Content:"));
}

#[tokio::test]
async fn test_qna_text_question_with_document_truncates_full_text() {
    let generator = Arc::new(ScriptedGenerator::default());
    let extractor = Arc::new(ScriptedExtractor::default());
    let agent = QnaAgent::new(Arc::clone(&generator), Arc::clone(&extractor));

    let mut paper = sample_paper();
    paper.links = vec!["http://arxiv.org/pdf/2105.00001v1.pdf".to_string()];

    agent.answer(&paper, "What dataset was used?").await.unwrap();

    assert_eq!(
        extractor.calls.lock().unwrap().as_slice(),
        ["http://arxiv.org/pdf/2105.00001v1.pdf"]
    );

    let prompts = generator.prompts();
    assert!(prompts[0].contains("Content:"));
    // Full text is capped at 2000 characters of the 3000 extracted.
    assert!(prompts[0].contains(&"x".repeat(2000)));
    assert!(!prompts[0].contains(&"x".repeat(2001)));
}

#[tokio::test]
async fn test_qna_visual_question_routes_to_visual_prompt() {
    let generator = Arc::new(ScriptedGenerator::default());
    let extractor = Arc::new(ScriptedExtractor::default());
    let agent = QnaAgent::new(Arc::clone(&generator), Arc::clone(&extractor));

    agent.answer(&sample_paper(), "What does Figure 3 show?").await.unwrap();

    let prompts = generator.prompts();
    assert!(prompts[0].contains("images, charts, or figures"));
    // Visual questions never pull full text.
    assert!(extractor.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_future_works_suggestion_prompt() {
    let generator = Arc::new(ScriptedGenerator::default());
    let agent = FutureWorksAgent::new(Arc::clone(&generator));

    let suggestion = agent.suggest(&sample_paper()).await.unwrap();

    assert_eq!(suggestion, "generated");
    let prompts = generator.prompts();
    assert!(prompts[0].contains("future research directions"));
    assert!(prompts[0].contains("We study attention."));
}

#[tokio::test]
async fn test_review_paper_sections() {
    let generator = Arc::new(ScriptedGenerator::default());
    let agent = FutureWorksAgent::new(Arc::clone(&generator));

    let mut second = sample_paper();
    second.title = "Retrieval Beats Scale".to_string();
    second.url = "http://arxiv.org/abs/2106.00002v1".to_string();

    let review = agent.review_paper(&[sample_paper(), second]).await.unwrap();

    assert!(review.starts_with("Review Paper: Future Directions in Research"));
    assert!(review.contains("### 1. Attention Is Not Enough"));
    assert!(review.contains("### 2. Retrieval Beats Scale"));
    assert!(review.contains("**Authors**: Ada Lovelace"));
    assert!(review.contains("**Published Date**: 2021-05-03"));
    assert!(review.contains("**Future Work Suggestions**:\ngenerated"));
}

#[tokio::test]
async fn test_summarize_findings_combines_summaries() {
    let generator = Arc::new(ScriptedGenerator::default());
    let agent = SummarizeAgent::new(Arc::clone(&generator));

    let mut second = sample_paper();
    second.summary = "We study retrieval.".to_string();

    let summary = agent.summarize_findings(&[sample_paper(), second]).await.unwrap();

    assert_eq!(summary, "generated");
    let prompts = generator.prompts();
    assert!(prompts[0].contains("We study attention.\n\nWe study retrieval."));
    assert!(prompts[0].contains("main findings across these papers"));
}

#[tokio::test]
async fn test_extract_key_points_one_generation_per_paper() {
    let generator = Arc::new(ScriptedGenerator::default());
    let agent = SummarizeAgent::new(Arc::clone(&generator));

    let mut second = sample_paper();
    second.title = "Retrieval Beats Scale".to_string();

    let key_points = agent.extract_key_points(&[sample_paper(), second]).await.unwrap();

    assert_eq!(key_points.len(), 2);
    assert_eq!(key_points[0].title, "Attention Is Not Enough");
    assert_eq!(key_points[1].title, "Retrieval Beats Scale");
    assert_eq!(generator.prompts().len(), 2);
}
