// ABOUTME: JWT-based user authentication and password hashing
// ABOUTME: Issues and validates HS256 access tokens; hashes and verifies passwords with bcrypt
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Authentication
//!
//! Access tokens are HS256 JWTs carrying the user id as `sub`. Password
//! hashing is CPU-bound and always runs on the blocking thread pool.

use crate::constants::auth::MIN_PASSWORD_LENGTH;
use chrono::{Duration, Utc};
use helena_core::errors::{AppError, AppResult};
use helena_core::models::User;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// `JWT` claims for user authentication
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User `ID`
    pub sub: String,
    /// User email
    pub email: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// User id carried in `sub`
    ///
    /// # Errors
    ///
    /// Returns `AUTH_INVALID` if `sub` is not a UUID
    pub fn user_id(&self) -> AppResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|_| invalid_credentials())
    }
}

/// Authentication manager for `JWT` tokens
#[derive(Clone)]
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_minutes: i64,
}

impl fmt::Debug for AuthManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthManager")
            .field("token_expiry_minutes", &self.token_expiry_minutes)
            .finish_non_exhaustive()
    }
}

impl AuthManager {
    /// Create a new authentication manager
    #[must_use]
    pub fn new(secret: &[u8], token_expiry_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            token_expiry_minutes,
        }
    }

    /// Token lifetime in minutes
    #[must_use]
    pub const fn token_expiry_minutes(&self) -> i64 {
        self.token_expiry_minutes
    }

    /// Generate an access token for a user
    ///
    /// # Errors
    ///
    /// Returns an error if JWT encoding fails
    pub fn generate_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiry = now + Duration::minutes(self.token_expiry_minutes);

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to issue token: {e}")))
    }

    /// Validate an access token
    ///
    /// # Errors
    ///
    /// Returns `AUTH_EXPIRED` for expired tokens and `AUTH_INVALID` for any
    /// other signature, format or claim failure
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::auth_expired(),
                _ => {
                    tracing::debug!("JWT validation failed: {e}");
                    invalid_credentials()
                }
            })
    }
}

/// 401 error returned for any unusable bearer token
#[must_use]
pub fn invalid_credentials() -> AppError {
    AppError::auth_invalid("Could not validate credentials")
}

/// Hash a password with bcrypt on the blocking pool
///
/// # Errors
///
/// Returns an error if hashing fails or the blocking task panics
pub async fn hash_password(password: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
}

/// Verify a password against a bcrypt hash on the blocking pool
///
/// A malformed stored hash counts as a mismatch.
///
/// # Errors
///
/// Returns an error if the blocking task panics
pub async fn verify_password(password: String, hashed_password: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || {
        bcrypt::verify(password, &hashed_password).unwrap_or(false)
    })
    .await
    .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))
}

/// Check registration input before hashing
///
/// # Errors
///
/// Returns `INVALID_INPUT` for a malformed email or a short password
pub fn validate_registration(email: &str, password: &str) -> AppResult<()> {
    let valid_email = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && !domain.contains('@')
            && domain
                .split_once('.')
                .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
    });
    if !valid_email {
        return Err(AppError::invalid_input("Invalid email address"));
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::invalid_input(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }

    Ok(())
}
