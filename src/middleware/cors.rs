// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for the web and mobile clients
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::config::ServerConfig;
use http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS settings from `CORS_ALLOWED_ORIGINS`
///
/// `*` or an empty value allows any origin; otherwise the comma-separated
/// list is used. Unparseable entries are skipped, and if none remain any
/// origin is allowed.
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://192.168.1.104:3000"
/// ```
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let allow_origin = parse_origins(&config.cors.allowed_origins)
        .map_or_else(AllowOrigin::any, AllowOrigin::list);

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .expose_headers([header::HeaderName::from_static("x-request-id")])
}

/// Explicit origin list, or `None` for "any origin"
fn parse_origins(allowed: &str) -> Option<Vec<HeaderValue>> {
    if allowed.trim().is_empty() || allowed.trim() == "*" {
        return None;
    }

    let origins: Vec<HeaderValue> = allowed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    (!origins.is_empty()).then_some(origins)
}
