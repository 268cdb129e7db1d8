// ABOUTME: HTTP middleware for authentication, cross-origin access and request tracing
// ABOUTME: Bearer-token extractor, CORS layer configuration, request spans and error correlation

/// Bearer-token authentication extractor
pub mod auth;
/// CORS layer configuration
pub mod cors;
/// Request spans and request-id correlation
pub mod tracing;

// Authentication extractor
pub use auth::AuthenticatedUser;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use self::tracing::{attach_request_id, create_request_span, REQUEST_ID_HEADER};
