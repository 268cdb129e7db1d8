// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory resources, the full router and user/token helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `helena_ir_server`

use anyhow::Result;
use axum::Router;
use helena_core::models::User;
use helena_ir_server::{
    auth::{hash_password, AuthManager},
    config::ServerConfig,
    database::Database,
    resources::ServerResources,
    server::build_router,
};
use helena_scoring::ScoringConfig;
use std::path::PathBuf;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Default password for users created by [`create_test_user`]
pub const TEST_PASSWORD: &str = "correct horse battery";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Path of the shipped cutoff configuration
pub fn cutoffs_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/cutoffs.json")
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// Complete resources over an in-memory database and the shipped cutoffs
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let config = ServerConfig::for_testing(cutoffs_path());
    let scoring = ScoringConfig::load(&config.cutoffs_path)?;
    let database = create_test_database().await?;
    let auth_manager = AuthManager::new(
        config.auth.jwt_secret.as_bytes(),
        config.auth.jwt_expiry_minutes,
    );

    Ok(Arc::new(ServerResources::new(
        database,
        auth_manager,
        scoring,
        Arc::new(config),
    )))
}

/// Full application router plus the resources behind it
pub async fn create_test_app() -> (Router, Arc<ServerResources>) {
    let resources = create_test_resources()
        .await
        .expect("Failed to create test resources");
    (build_router(&resources), resources)
}

/// Store a user with [`TEST_PASSWORD`]
pub async fn create_test_user(database: &Database, email: &str) -> Result<User> {
    let hashed_password = hash_password(TEST_PASSWORD.to_owned()).await?;
    let user = User::new(email.to_owned(), hashed_password, Some("Test Child".to_owned()));
    database.create_user(&user).await?;
    Ok(user)
}

/// Store a user and issue an access token for it
pub async fn create_test_user_with_token(
    resources: &ServerResources,
    email: &str,
) -> Result<(User, String)> {
    let user = create_test_user(&resources.database, email).await?;
    let token = resources.auth_manager.generate_token(&user)?;
    Ok((user, token))
}
