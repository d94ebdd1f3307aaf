//! HTTP response building module
//!
//! Builders for the responses the static host sends.

use super::cache::STATIC_CACHE_CONTROL;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::response::Builder;
use hyper::{Response, StatusCode};

pub type HttpResponse = Response<Full<Bytes>>;

const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// Finish a builder, falling back to an empty response with the same status
fn finish(builder: Builder, status: StatusCode, body: Bytes) -> HttpResponse {
    builder.body(Full::new(body)).unwrap_or_else(|e| {
        crate::logger::log_error(&format!("Failed to build {status} response: {e}"));
        let mut fallback = Response::new(Full::new(Bytes::new()));
        *fallback.status_mut() = status;
        fallback
    })
}

fn plain_text(status: StatusCode, text: &'static str) -> HttpResponse {
    let builder = Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", text.len());
    finish(builder, status, Bytes::from_static(text.as_bytes()))
}

/// 200 with file content, `ETag` and cache headers; empty body for HEAD
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    etag: &str,
    is_head: bool,
) -> HttpResponse {
    let builder = Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .header("Content-Length", data.len())
        .header("ETag", etag)
        .header("Cache-Control", STATIC_CACHE_CONTROL);
    let body = if is_head { Bytes::new() } else { data };
    finish(builder, StatusCode::OK, body)
}

pub fn build_304_response(etag: &str) -> HttpResponse {
    let builder = Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header("ETag", etag)
        .header("Cache-Control", STATIC_CACHE_CONTROL);
    finish(builder, StatusCode::NOT_MODIFIED, Bytes::new())
}

pub fn build_404_response() -> HttpResponse {
    plain_text(StatusCode::NOT_FOUND, "404 Not Found")
}

pub fn build_405_response() -> HttpResponse {
    let mut resp = plain_text(StatusCode::METHOD_NOT_ALLOWED, "405 Method Not Allowed");
    resp.headers_mut()
        .insert("Allow", hyper::header::HeaderValue::from_static(ALLOWED_METHODS));
    resp
}

pub fn build_413_response() -> HttpResponse {
    plain_text(StatusCode::PAYLOAD_TOO_LARGE, "413 Payload Too Large")
}

pub fn build_health_response() -> HttpResponse {
    plain_text(StatusCode::OK, "ok")
}

/// 204 for OPTIONS, with CORS preflight headers when enabled
pub fn build_options_response(enable_cors: bool) -> HttpResponse {
    let mut builder = Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", ALLOWED_METHODS);

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", ALLOWED_METHODS)
            .header("Access-Control-Allow-Headers", "Content-Type, If-None-Match")
            .header("Access-Control-Max-Age", "86400");
    }

    finish(builder, StatusCode::NO_CONTENT, Bytes::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_bytes(resp: HttpResponse) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_file_response_headers() {
        let resp = build_file_response(Bytes::from_static(b"body{}"), "text/css", "\"e\"", false);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Length"], "6");
        assert_eq!(resp.headers()["ETag"], "\"e\"");
        assert_eq!(body_bytes(resp).await, "body{}");
    }

    #[tokio::test]
    async fn test_head_keeps_length_drops_body() {
        let resp = build_file_response(Bytes::from_static(b"body{}"), "text/css", "\"e\"", true);
        assert_eq!(resp.headers()["Content-Length"], "6");
        assert!(body_bytes(resp).await.is_empty());
    }

    #[test]
    fn test_error_responses() {
        assert_eq!(build_404_response().status(), StatusCode::NOT_FOUND);
        let resp = build_405_response();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["Allow"], ALLOWED_METHODS);
        assert_eq!(build_304_response("\"e\"").status(), StatusCode::NOT_MODIFIED);
    }

    #[test]
    fn test_options_cors() {
        let plain = build_options_response(false);
        assert!(plain.headers().get("Access-Control-Allow-Origin").is_none());
        let cors = build_options_response(true);
        assert_eq!(cors.headers()["Access-Control-Allow-Origin"], "*");
    }
}
