//! Header parsing utilities and client identification.

use axum::extract::ConnectInfo;
use axum::http::{HeaderMap, Request};
use std::net::SocketAddr;

/// Extension trait for convenient header parsing.
pub trait HeaderMapExt {
    /// Get a header value as a string, returning None if missing.
    fn get_str(&self, name: &str) -> Option<&str>;

    /// First entry of a comma-separated header, trimmed and non-empty.
    fn first_list_entry(&self, name: &str) -> Option<&str>;
}

impl HeaderMapExt for HeaderMap {
    fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.to_str().ok())
    }

    fn first_list_entry(&self, name: &str) -> Option<&str> {
        self.get_str(name)
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// Key used to count a client's requests.
///
/// First `X-Forwarded-For` entry, else the peer address, else `"unknown"`.
pub fn client_key<B>(request: &Request<B>) -> String {
    if let Some(forwarded) = request.headers().first_list_entry("x-forwarded-for") {
        return forwarded.to_string();
    }
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
