// ABOUTME: Bearer-token authentication extractor for protected routes
// ABOUTME: Validates the JWT, loads the user and rejects disabled accounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::auth::invalid_credentials;
use crate::resources::ServerResources;
use axum::async_trait;
use axum::extract::FromRequestParts;
use helena_core::errors::{AppError, AppResult};
use helena_core::models::User;
use http::header::AUTHORIZATION;
use http::request::Parts;
use http::HeaderMap;
use std::sync::Arc;

/// The active user behind a valid bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl AuthenticatedUser {
    /// Authenticate from request headers
    ///
    /// # Errors
    ///
    /// - `AUTH_REQUIRED` without an `Authorization: Bearer` header
    /// - `AUTH_INVALID`/`AUTH_EXPIRED` for an unusable token or unknown user
    /// - `USER_DISABLED` for a disabled account
    #[tracing::instrument(skip_all, fields(user_id = tracing::field::Empty))]
    pub async fn from_headers(headers: &HeaderMap, resources: &ServerResources) -> AppResult<Self> {
        let token = bearer_token(headers).ok_or_else(AppError::auth_required)?;
        let claims = resources.auth_manager.validate_token(token)?;
        let user_id = claims.user_id()?;
        tracing::Span::current().record("user_id", user_id.to_string());

        let user = resources
            .database
            .get_user(user_id)
            .await?
            .ok_or_else(invalid_credentials)?;

        if user.disabled {
            return Err(AppError::user_disabled());
        }
        Ok(Self(user))
    }
}

#[async_trait]
impl FromRequestParts<Arc<ServerResources>> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        resources: &Arc<ServerResources>,
    ) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers, resources).await
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_none());

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("bearer  xyz "));
        assert_eq!(bearer_token(&headers), Some("xyz"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(bearer_token(&headers).is_none());

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert!(bearer_token(&headers).is_none());
    }
}
