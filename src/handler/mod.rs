//! Request handler module
//!
//! Request routing dispatch and static file serving through the web root provider.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
