// ABOUTME: Shared server resources handed to every route handler
// ABOUTME: Database, authentication manager, scoring configuration and server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::database::Database;
use helena_scoring::ScoringConfig;
use std::sync::Arc;

/// Resources created once at startup and shared read-only across requests
#[derive(Clone)]
pub struct ServerResources {
    /// User and questionnaire storage
    pub database: Arc<Database>,
    /// Password hashing and token issuing
    pub auth_manager: Arc<AuthManager>,
    /// Cutoff tables; immutable for the lifetime of the process
    pub scoring: Arc<ScoringConfig>,
    /// Environment configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wrap the startup components for sharing
    #[must_use]
    pub fn new(
        database: Database,
        auth_manager: AuthManager,
        scoring: ScoringConfig,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            database: Arc::new(database),
            auth_manager: Arc::new(auth_manager),
            scoring: Arc::new(scoring),
            config,
        }
    }
}
