//! Client assets helpers
//!
//! Two independent tools:
//! - a static file host whose web root can be layered with a build-generated
//!   client assets directory ([`assets::use_client_assets`])
//! - a copier that refreshes front-end libraries from `node_modules`
//!   ([`libs::LibraryCopier`])

pub mod assets;
pub mod config;
pub mod handler;
pub mod http;
pub mod libs;
pub mod logger;
pub mod server;
