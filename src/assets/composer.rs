//! Client assets composition
//!
//! Layers the build-generated client assets directory in front of the
//! web root provider, once, during host startup.

use super::composite::CompositeFileProvider;
use super::metadata::{BuildMetadata, CLIENT_ASSETS_DIRECTORY_KEY};
use super::physical::PhysicalFileProvider;
use super::provider::FileProvider;
use crate::logger;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Hosting environment state touched during startup configuration
#[derive(Debug, Clone)]
pub struct WebHostEnvironment {
    /// Directory that relative asset paths are resolved against
    pub content_root: PathBuf,
    /// Provider used to serve static files
    pub web_root_provider: Arc<dyn FileProvider>,
    /// Index files used by providers created during configuration
    pub index_files: Vec<String>,
}

impl WebHostEnvironment {
    pub fn new(
        content_root: impl Into<PathBuf>,
        web_root_provider: Arc<dyn FileProvider>,
        index_files: Vec<String>,
    ) -> Self {
        Self {
            content_root: content_root.into(),
            web_root_provider,
            index_files,
        }
    }
}

/// Serve client assets from the directory named by build metadata
///
/// When the `ClientAssetsDirectory` entry exists and names an existing
/// directory (relative to the content root), the active provider becomes
/// `[client assets, previous provider]`. Otherwise the environment is left
/// untouched. Returns whether the provider was replaced.
pub fn use_client_assets(env: &mut WebHostEnvironment, metadata: &BuildMetadata) -> bool {
    let Some(assets_dir) = client_assets_dir(&env.content_root, metadata) else {
        return false;
    };

    logger::log_client_assets_enabled(&assets_dir);
    let client_assets: Arc<dyn FileProvider> = Arc::new(PhysicalFileProvider::new(
        assets_dir,
        env.index_files.clone(),
    ));
    let previous = Arc::clone(&env.web_root_provider);
    env.web_root_provider = Arc::new(CompositeFileProvider::new(vec![client_assets, previous]));
    true
}

/// Resolve the client assets directory, `None` if unset or missing
fn client_assets_dir(content_root: &Path, metadata: &BuildMetadata) -> Option<PathBuf> {
    let Some(value) = metadata
        .get(CLIENT_ASSETS_DIRECTORY_KEY)
        .map(str::trim)
        .filter(|v| !v.is_empty())
    else {
        logger::log_debug("[Assets] No client assets directory in build metadata");
        return None;
    };

    let dir = content_root.join(value);
    if dir.is_dir() {
        Some(dir)
    } else {
        logger::log_debug(&format!(
            "[Assets] Client assets directory '{}' does not exist, skipping",
            dir.display()
        ));
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn environment(content_root: &Path) -> WebHostEnvironment {
        let web_root = content_root.join("wwwroot");
        fs::create_dir_all(&web_root).unwrap();
        let provider: Arc<dyn FileProvider> =
            Arc::new(PhysicalFileProvider::new(web_root, Vec::new()));
        WebHostEnvironment::new(content_root, provider, vec!["index.html".to_string()])
    }

    #[test]
    fn test_layers_existing_directory() {
        let root = tempfile::tempdir().unwrap();
        let mut env = environment(root.path());
        fs::create_dir_all(root.path().join("obj/ClientAssets")).unwrap();
        fs::write(root.path().join("obj/ClientAssets/app.js"), b"generated").unwrap();
        fs::write(root.path().join("wwwroot/app.js"), b"static").unwrap();
        fs::write(root.path().join("wwwroot/site.css"), b"css").unwrap();

        let original = Arc::clone(&env.web_root_provider);
        let metadata = BuildMetadata::default().with_entry("clientassetsdirectory", "obj/ClientAssets");

        assert!(use_client_assets(&mut env, &metadata));
        assert!(!Arc::ptr_eq(&original, &env.web_root_provider));

        let app = env.web_root_provider.resolve("app.js").unwrap();
        assert_eq!(fs::read(app.path).unwrap(), b"generated");
        let css = env.web_root_provider.resolve("site.css").unwrap();
        assert_eq!(fs::read(css.path).unwrap(), b"css");
    }

    #[test]
    fn test_missing_metadata_is_noop() {
        let root = tempfile::tempdir().unwrap();
        let mut env = environment(root.path());
        let original = Arc::clone(&env.web_root_provider);

        assert!(!use_client_assets(&mut env, &BuildMetadata::default()));
        assert!(Arc::ptr_eq(&original, &env.web_root_provider));
    }

    #[test]
    fn test_missing_directory_is_noop() {
        let root = tempfile::tempdir().unwrap();
        let mut env = environment(root.path());
        let original = Arc::clone(&env.web_root_provider);
        let metadata = BuildMetadata::default().with_entry(CLIENT_ASSETS_DIRECTORY_KEY, "obj/missing");

        assert!(!use_client_assets(&mut env, &metadata));
        assert!(Arc::ptr_eq(&original, &env.web_root_provider));
    }

    #[test]
    fn test_file_value_is_noop() {
        let root = tempfile::tempdir().unwrap();
        let mut env = environment(root.path());
        fs::write(root.path().join("not-a-dir"), b"x").unwrap();
        let original = Arc::clone(&env.web_root_provider);
        let metadata = BuildMetadata::default().with_entry(CLIENT_ASSETS_DIRECTORY_KEY, "not-a-dir");

        assert!(!use_client_assets(&mut env, &metadata));
        assert!(Arc::ptr_eq(&original, &env.web_root_provider));
    }
}
