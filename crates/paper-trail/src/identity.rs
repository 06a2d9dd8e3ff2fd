//! Content-addressed paper identifiers.
//!
//! The identifier is the lowercase-hex MD5 digest of the UTF-8 bytes of the
//! paper's canonical url. The digest algorithm and encoding are part of the
//! durable format: records written by earlier deployments key on exactly
//! this digest, so it must not change without a migration path.

use md5::{Digest, Md5};

/// Derive the stable identifier for a paper from its canonical url.
///
/// Deterministic and pure: the same url always yields the same id, across
/// process restarts and implementations.
#[must_use]
pub fn paper_id(url: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(url.as_bytes());
    format!("{:x}", hasher.finalize())
}
