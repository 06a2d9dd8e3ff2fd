//! Atom feed parsing for arXiv query responses.
//!
//! The query API answers with an Atom document; one `<entry>` per paper.
//! Parsed with a small event state machine rather than a full feed model —
//! only the fields the canonical schema needs are pulled out.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::SearchResult;

/// One `<entry>` from an arXiv Atom feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    /// The entry id, arXiv's canonical abstract URL.
    pub id: String,

    /// Entry title (whitespace-joined; arXiv wraps long titles).
    pub title: String,

    /// Abstract text.
    pub summary: String,

    /// Submission timestamp as reported, RFC 3339.
    pub published: String,

    /// Author names in document order.
    pub authors: Vec<String>,

    /// All link hrefs other than the entry id itself.
    pub links: Vec<String>,
}

/// Which text-bearing element is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    None,
    Id,
    Title,
    Summary,
    Published,
}

/// Parse an Atom feed into its entries. An empty feed yields an empty list.
///
/// # Errors
///
/// Returns error if the document is not well-formed XML.
pub fn parse_feed(xml: &str) -> SearchResult<Vec<FeedEntry>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();

    let mut entry: Option<FeedEntry> = None;
    let mut field = Field::None;
    let mut in_author = false;
    let mut in_author_name = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match local_name(e.name().as_ref()).as_str() {
                "entry" => {
                    entry = Some(FeedEntry::default());
                    field = Field::None;
                }
                "author" if entry.is_some() => in_author = true,
                "name" if in_author => in_author_name = true,
                "id" if entry.is_some() && !in_author => field = Field::Id,
                "title" if entry.is_some() => field = Field::Title,
                "summary" if entry.is_some() => field = Field::Summary,
                "published" if entry.is_some() => field = Field::Published,
                "link" => {
                    if let Some(draft) = entry.as_mut() {
                        collect_link(e, draft);
                    }
                }
                _ => {}
            },
            Event::Empty(ref e) => {
                if local_name(e.name().as_ref()) == "link" {
                    if let Some(draft) = entry.as_mut() {
                        collect_link(e, draft);
                    }
                }
            }
            Event::Text(ref e) => {
                if let Some(draft) = entry.as_mut() {
                    let text = e.unescape().unwrap_or_default();
                    let text = text.trim();
                    if in_author_name {
                        draft.authors.push(text.to_string());
                    } else {
                        match field {
                            Field::Id => draft.id = text.to_string(),
                            Field::Title => append_joined(&mut draft.title, text),
                            Field::Summary => append_joined(&mut draft.summary, text),
                            Field::Published => draft.published = text.to_string(),
                            Field::None => {}
                        }
                    }
                }
            }
            Event::End(ref e) => match local_name(e.name().as_ref()).as_str() {
                "entry" => {
                    if let Some(mut draft) = entry.take() {
                        draft.links.retain(|href| *href != draft.id);
                        entries.push(draft);
                    }
                }
                "author" => {
                    in_author = false;
                    in_author_name = false;
                }
                "name" => in_author_name = false,
                "id" | "title" | "summary" | "published" => field = Field::None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(entries)
}

/// Strip any namespace prefix from a raw tag name.
fn local_name(raw: &[u8]) -> String {
    let name = String::from_utf8_lossy(raw);
    name.rsplit(':').next().unwrap_or_default().to_string()
}

/// Pull the href attribute off a `<link>` element.
fn collect_link(element: &BytesStart<'_>, draft: &mut FeedEntry) {
    for attr in element.attributes().flatten() {
        if attr.key.as_ref() == b"href" {
            let href = String::from_utf8_lossy(&attr.value).to_string();
            if !href.is_empty() {
                draft.links.push(href);
            }
        }
    }
}

/// Append wrapped text with a single joining space.
fn append_joined(target: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}
