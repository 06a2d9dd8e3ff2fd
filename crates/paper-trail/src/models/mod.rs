//! Data models for papers and search results.

mod paper;

pub use paper::Paper;
