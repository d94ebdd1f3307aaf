//! Static file serving module
//!
//! Resolves request paths through the web root provider and builds file responses.

use crate::assets::{FileEntry, FileProvider};
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, HttpResponse};
use crate::logger;
use hyper::body::Bytes;
use std::time::SystemTime;
use tokio::fs;

/// A file loaded for a response
#[derive(Debug)]
pub struct LoadedFile {
    pub content: Bytes,
    pub content_type: &'static str,
    pub etag: String,
}

/// Serve `ctx.path` from `provider`, 404 when nothing resolves
pub async fn serve_from_provider(
    ctx: &RequestContext<'_>,
    provider: &dyn FileProvider,
) -> (HttpResponse, usize) {
    let Some(entry) = provider.resolve(ctx.path) else {
        return (http::build_404_response(), 0);
    };

    let Some(file) = load_file(&entry).await else {
        return (http::build_404_response(), 0);
    };

    if cache::check_etag_match(ctx.if_none_match.as_deref(), &file.etag) {
        return (http::build_304_response(&file.etag), 0);
    }

    let sent = if ctx.is_head { 0 } else { file.content.len() };
    let resp = http::build_file_response(file.content, file.content_type, &file.etag, ctx.is_head);
    (resp, sent)
}

/// Read a resolved file and compute its headers
pub async fn load_file(entry: &FileEntry) -> Option<LoadedFile> {
    let content = match fs::read(&entry.path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                entry.path.display()
            ));
            return None;
        }
    };

    let modified: Option<SystemTime> = fs::metadata(&entry.path)
        .await
        .ok()
        .and_then(|m| m.modified().ok());

    Some(LoadedFile {
        etag: cache::generate_etag(content.len() as u64, modified),
        content_type: mime::content_type_for(&entry.path),
        content: Bytes::from(content),
    })
}
