use std::sync::Arc;

use client_assets::assets::{self, BuildMetadata, FileProvider, PhysicalFileProvider, WebHostEnvironment};
use client_assets::config;
use client_assets::logger;
use client_assets::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
        logger::log_info(&format!("[CONFIG] Using {workers} worker threads"));
    } else {
        logger::log_info("[CONFIG] Using default worker threads (CPU cores)");
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    let web_root: Arc<dyn FileProvider> = Arc::new(PhysicalFileProvider::new(
        cfg.web_root_path(),
        cfg.assets.index_files.clone(),
    ));
    let mut env = WebHostEnvironment::new(
        &cfg.assets.content_root,
        web_root,
        cfg.assets.index_files.clone(),
    );

    // Startup configuration: runs once, before the listener is bound
    assets::use_client_assets(&mut env, &BuildMetadata::from_build());

    let listener = server::create_listener(addr)?;
    logger::log_server_start(&addr, &cfg);

    let state = Arc::new(config::AppState::new(cfg, env));

    // hyper connections run on spawn_local
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::start_server_loop(listener, state))
        .await
}
