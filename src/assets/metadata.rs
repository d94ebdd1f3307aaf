//! Build metadata module
//!
//! Key/value annotations embedded into the binary at compile time.

/// Metadata key naming the client assets output directory
pub const CLIENT_ASSETS_DIRECTORY_KEY: &str = "ClientAssetsDirectory";

/// Read-only set of build metadata entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildMetadata {
    entries: Vec<(String, String)>,
}

impl BuildMetadata {
    /// Metadata embedded by `build.rs` for this binary
    pub fn from_build() -> Self {
        let mut metadata = Self::default();
        if let Some(dir) = option_env!("CLIENT_ASSETS_DIRECTORY") {
            metadata = metadata.with_entry(CLIENT_ASSETS_DIRECTORY_KEY, dir);
        }
        metadata
    }

    /// Add an entry, returning the updated metadata
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// First value whose key matches `key`, ignoring ASCII case
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
