//! Physical file provider
//!
//! Serves files from a single directory on disk with index file support.

use super::provider::{FileEntry, FileProvider};
use crate::logger;
use std::path::{Component, Path, PathBuf};

/// File provider rooted at a directory
#[derive(Debug, Clone)]
pub struct PhysicalFileProvider {
    root: PathBuf,
    /// Canonical root, `None` if the directory was missing at construction
    canonical_root: Option<PathBuf>,
    index_files: Vec<String>,
}

impl PhysicalFileProvider {
    pub fn new(root: impl Into<PathBuf>, index_files: Vec<String>) -> Self {
        let root = root.into();
        let canonical_root = match root.canonicalize() {
            Ok(p) => Some(p),
            Err(e) => {
                logger::log_warning(&format!(
                    "Static directory not found or inaccessible '{}': {e}",
                    root.display()
                ));
                None
            }
        };
        Self {
            root,
            canonical_root,
            index_files,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_files(&self) -> &[String] {
        &self.index_files
    }
}

impl FileProvider for PhysicalFileProvider {
    fn resolve(&self, subpath: &str) -> Option<FileEntry> {
        let root = self.canonical_root.as_ref()?;
        let relative = sanitize(subpath)?;
        let mut file_path = root.join(&relative);

        // Directory request: try index files in order
        if file_path.is_dir() || relative.as_os_str().is_empty() || subpath.ends_with('/') {
            let index = self
                .index_files
                .iter()
                .map(|name| file_path.join(name))
                .find(|candidate| candidate.is_file())?;
            file_path = index;
        }

        // File not found is common (404), no need to log
        let canonical = file_path.canonicalize().ok()?;
        if !canonical.starts_with(root) {
            logger::log_warning(&format!(
                "Path traversal attempt blocked: {} -> {}",
                subpath,
                canonical.display()
            ));
            return None;
        }

        let metadata = std::fs::metadata(&canonical).ok()?;
        if !metadata.is_file() {
            return None;
        }

        Some(FileEntry {
            path: canonical,
            len: metadata.len(),
        })
    }
}

/// Turn a request subpath into a relative path, rejecting `..` and absolute parts
fn sanitize(subpath: &str) -> Option<PathBuf> {
    let mut clean = PathBuf::new();
    for component in Path::new(subpath.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(clean)
}
