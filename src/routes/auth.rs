// ABOUTME: User registration, token login and current-user route handlers
// ABOUTME: OAuth2 password-style form login issuing bearer JWTs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Authentication routes
//!
//! `POST /token` takes the OAuth2 password form (`username` is the email)
//! so that standard OAuth2 clients can log in without adaptation.

use super::{form_body, json_body};
use crate::auth::{hash_password, validate_registration, verify_password};
use crate::constants::auth::TOKEN_TYPE;
use crate::logging::AppLogger;
use crate::middleware::AuthenticatedUser;
use crate::resources::ServerResources;
use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use helena_core::errors::{AppError, AppResult};
use helena_core::models::User;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of `POST /users/create/`
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Login email, unique
    pub email: String,
    /// Plain-text password, hashed before storage
    pub password: String,
    /// Display name
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Form of `POST /token`
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Email address
    pub username: String,
    /// Plain-text password
    pub password: String,
}

/// Response of `POST /token`
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed JWT
    pub access_token: String,
    /// Always `bearer`
    pub token_type: String,
}

/// Authentication routes
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/users/create/", post(Self::handle_register))
            .route("/token", post(Self::handle_login))
            .route("/users/me/", get(Self::handle_me))
            .with_state(resources)
    }

    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<RegisterRequest>, JsonRejection>,
    ) -> AppResult<Response> {
        let request = json_body(payload)?;
        let email = request.email.trim().to_lowercase();
        validate_registration(&email, &request.password)?;

        let hashed_password = hash_password(request.password).await?;
        let full_name = request
            .full_name
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty());
        let user = User::new(email, hashed_password, full_name);

        resources.database.create_user(&user).await?;
        AppLogger::log_auth_event(&user.email, "register", true, None);

        Ok((StatusCode::CREATED, Json(user)).into_response())
    }

    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Form<LoginForm>, FormRejection>,
    ) -> AppResult<Json<TokenResponse>> {
        let form = form_body(payload)?;
        let email = form.username.trim().to_lowercase();

        let Some(user) = resources.database.get_user_by_email(&email).await? else {
            AppLogger::log_auth_event(&email, "login", false, Some("unknown email"));
            return Err(incorrect_credentials());
        };

        if !verify_password(form.password, user.hashed_password.clone()).await? {
            AppLogger::log_auth_event(&email, "login", false, Some("wrong password"));
            return Err(incorrect_credentials());
        }

        if user.disabled {
            AppLogger::log_auth_event(&email, "login", false, Some("disabled"));
            return Err(AppError::user_disabled());
        }

        let access_token = resources.auth_manager.generate_token(&user)?;
        AppLogger::log_auth_event(&email, "login", true, None);

        Ok(Json(TokenResponse {
            access_token,
            token_type: TOKEN_TYPE.to_owned(),
        }))
    }

    async fn handle_me(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
        Json(user)
    }
}

fn incorrect_credentials() -> AppError {
    AppError::auth_invalid("Incorrect email or password")
}
