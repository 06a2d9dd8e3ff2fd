//! Retrieval-augmented agents over stored papers.
//!
//! The language model and the document text extractor are opaque
//! collaborators behind the [`TextGenerator`] and [`TextExtractor`] traits;
//! the agents only format prompts and forward them.

mod extract;
mod future_works;
mod generate;
mod qna;
mod summarize;

pub use extract::{PdfTextExtractor, TextExtractor};
pub use future_works::FutureWorksAgent;
pub use generate::{OllamaGenerator, TextGenerator};
pub use qna::{KeywordClassifier, QnaAgent, Question, QuestionClassifier};
pub use summarize::{KeyPoints, SummarizeAgent};
