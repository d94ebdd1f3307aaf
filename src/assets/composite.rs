//! Composite file provider
//!
//! Queries an ordered list of providers; the first match wins.

use super::provider::{FileEntry, FileProvider};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CompositeFileProvider {
    providers: Vec<Arc<dyn FileProvider>>,
}

impl CompositeFileProvider {
    pub fn new(providers: Vec<Arc<dyn FileProvider>>) -> Self {
        Self { providers }
    }

    pub fn providers(&self) -> &[Arc<dyn FileProvider>] {
        &self.providers
    }
}

impl FileProvider for CompositeFileProvider {
    fn resolve(&self, subpath: &str) -> Option<FileEntry> {
        self.providers.iter().find_map(|p| p.resolve(subpath))
    }
}
