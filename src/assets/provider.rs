//! File provider abstraction
//!
//! A provider maps a relative request path to a file on disk.

use std::fmt::Debug;
use std::path::PathBuf;

/// A resolved file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Canonical path of the file
    pub path: PathBuf,
    /// File size in bytes
    pub len: u64,
}

/// Resolves relative paths to files
pub trait FileProvider: Debug + Send + Sync {
    /// Resolve `subpath` (relative, `/`-separated) to an existing file
    ///
    /// Returns `None` when the file does not exist or lies outside the provider.
    fn resolve(&self, subpath: &str) -> Option<FileEntry>;
}
