// Configuration module entry point
// Loads host and copier configuration from file, environment and defaults

mod state;
mod types;

use std::net::SocketAddr;
use std::path::PathBuf;

pub use state::AppState;
pub use types::{
    AssetsConfig, Config, CopierConfig, FailurePolicy, HealthConfig, HttpConfig, LoggingConfig,
    PerformanceConfig, ServerConfig,
};

impl Config {
    /// Load configuration from `config.toml` (optional) and `SERVER_*` variables
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            // e.g. SERVER_ASSETS__WEB_ROOT=public
            .add_source(
                config::Environment::with_prefix("SERVER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "client-assets-host")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("assets.content_root", ".")?
            .set_default("assets.web_root", "wwwroot")?
            .set_default("assets.index_files", vec!["index.html", "index.htm"])?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Web root directory, resolved against the content root
    pub fn web_root_path(&self) -> PathBuf {
        PathBuf::from(&self.assets.content_root).join(&self.assets.web_root)
    }
}

impl CopierConfig {
    /// Load from `copy-client-libs.toml` (optional) and `COPIER_*` variables
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("copy-client-libs")
    }

    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("COPIER"))
            .set_default("on_failure", "continue")?
            .set_default("fail_on_error", false)?
            .build()?;

        settings.try_deserialize()
    }
}
