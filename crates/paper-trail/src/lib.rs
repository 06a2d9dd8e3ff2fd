//! paper-trail
//!
//! Ingests arXiv papers by topic into a Neo4j graph and answers questions
//! about the stored papers with a local language model.
//!
//! # Features
//!
//! - **Year-partitioned search**: splits broad topics into yearly windows to
//!   work around service-side result ceilings, deduplicating per run
//! - **Idempotent store**: content-addressed paper ids, `MERGE`-based upserts
//! - **Retrieval-augmented agents**: QA, future-work suggestions, and
//!   multi-paper summaries over stored records
//! - **HTTP API + CLI**: thin axum dispatcher and a clap binary
//!
//! # Example
//!
//! ```no_run
//! use paper_trail::{client::ArxivClient, config::Config, store::MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ArxivClient::new(&config)?;
//!     let store = MemoryStore::default();
//!
//!     let report = paper_trail::ingest::ingest(&client, &store, "quantum error correction", 100).await;
//!     println!("stored {} of {} papers", report.stored, report.discovered);
//!     Ok(())
//! }
//! ```

pub mod agents;
pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod identity;
pub mod ingest;
pub mod models;
pub mod search;
pub mod store;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{AgentError, SearchError, StoreError};
pub use models::Paper;
pub use store::{MemoryStore, Neo4jStore, PaperStore};
