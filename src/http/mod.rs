//! HTTP protocol layer module
//!
//! Caching, MIME detection and response builders, independent of how files are found.

pub mod cache;
pub mod mime;
pub mod response;

pub use response::{
    build_304_response, build_404_response, build_405_response, build_413_response,
    build_file_response, build_health_response, build_options_response, HttpResponse,
};
