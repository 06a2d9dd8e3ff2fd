//! The paper entity.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::client::feed::FeedEntry;
use crate::identity;

/// A research paper.
///
/// `paper_id` is always the content-addressed digest of `url` (see
/// [`crate::identity::paper_id`]); the constructors enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Content-addressed identifier derived from `url`.
    pub paper_id: String,

    /// Paper title.
    pub title: String,

    /// Authors in document order.
    pub authors: Vec<String>,

    /// Source-reported publication date.
    pub published_date: NaiveDate,

    /// Abstract text.
    pub summary: String,

    /// Canonical source locator, unique per paper.
    pub url: String,

    /// Auxiliary locators (e.g. the PDF download URL). Not part of the
    /// durable record.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
}

impl Paper {
    /// Build a paper, deriving `paper_id` from the url.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        authors: Vec<String>,
        published_date: NaiveDate,
        summary: impl Into<String>,
        url: impl Into<String>,
        links: Vec<String>,
    ) -> Self {
        let url = url.into();
        Self {
            paper_id: identity::paper_id(&url),
            title: title.into(),
            authors,
            published_date,
            summary: summary.into(),
            url,
            links,
        }
    }

    /// Map an Atom feed entry into the canonical schema.
    ///
    /// # Errors
    ///
    /// Returns error if the entry's published timestamp does not start with
    /// an ISO `YYYY-MM-DD` date.
    pub fn from_feed_entry(entry: FeedEntry) -> Result<Self, chrono::ParseError> {
        let date_part = entry.published.get(..10).unwrap_or(&entry.published);
        let published_date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")?;

        Ok(Self::new(
            entry.title,
            entry.authors,
            published_date,
            entry.summary,
            entry.id,
            entry.links,
        ))
    }

    /// Author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }

    /// Publication year.
    #[must_use]
    pub fn published_year(&self) -> i32 {
        self.published_date.year()
    }

    /// Publication date as ISO `YYYY-MM-DD` text, the durable
    /// representation.
    #[must_use]
    pub fn published_date_iso(&self) -> String {
        self.published_date.format("%Y-%m-%d").to_string()
    }

    /// Locator of a full-text document, if one is known.
    ///
    /// Checks the canonical url first, then the auxiliary links, for a
    /// `.pdf` suffix.
    #[must_use]
    pub fn document_locator(&self) -> Option<&str> {
        if self.url.ends_with(".pdf") {
            return Some(&self.url);
        }
        self.links.iter().find(|l| l.ends_with(".pdf")).map(String::as_str)
    }
}
