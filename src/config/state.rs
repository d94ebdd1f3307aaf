// Application state module
// Immutable per-process state shared by every connection

use super::types::Config;
use crate::assets::{FileProvider, WebHostEnvironment};
use std::sync::Arc;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Provider the host serves static files from, fixed after startup
    pub web_root_provider: Arc<dyn FileProvider>,
}

impl AppState {
    /// Freeze the configured environment into shared state
    pub fn new(config: Config, env: WebHostEnvironment) -> Self {
        Self {
            config,
            web_root_provider: env.web_root_provider,
        }
    }
}
