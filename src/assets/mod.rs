//! Static asset providers
//!
//! File providers used by the host, and the startup step that layers the
//! build-generated client assets directory over the web root.

pub mod composer;
pub mod composite;
pub mod metadata;
pub mod physical;
pub mod provider;

pub use composer::{use_client_assets, WebHostEnvironment};
pub use composite::CompositeFileProvider;
pub use metadata::{BuildMetadata, CLIENT_ASSETS_DIRECTORY_KEY};
pub use physical::PhysicalFileProvider;
pub use provider::{FileEntry, FileProvider};
