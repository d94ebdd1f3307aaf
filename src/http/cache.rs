//! HTTP cache control module
//!
//! `ETag` generation and `If-None-Match` handling.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::SystemTime;

/// `Cache-Control` value for static files
pub const STATIC_CACHE_CONTROL: &str = "public, max-age=3600";

/// Weak-free `ETag` derived from file size and modification time
///
/// Returns a quoted string, e.g. `"1a2b-5f3c"`.
pub fn generate_etag(len: u64, modified: Option<SystemTime>) -> String {
    let mut hasher = DefaultHasher::new();
    modified.hash(&mut hasher);
    format!("\"{len:x}-{:x}\"", hasher.finish())
}

/// Whether the client's `If-None-Match` covers `etag` (list or `*`)
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|header| {
        header
            .split(',')
            .map(str::trim)
            .any(|candidate| candidate == "*" || candidate.trim_start_matches("W/") == etag)
    })
}
