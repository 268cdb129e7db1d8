// ABOUTME: SQLite persistence for users and questionnaire results
// ABOUTME: Owns the connection pool and creates the schema on startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! Schema is created with `CREATE TABLE IF NOT EXISTS` each time a
//! [`Database`] is opened; there is no separate migration step.

mod questionnaire_results;
mod users;

use helena_core::errors::{AppError, AppResult, ErrorCode};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Instant;

use crate::config::DatabaseUrl;
use crate::logging::AppLogger;

/// Database manager for user and questionnaire-result storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open the database and create the schema
    ///
    /// In-memory databases are held by a single connection that never
    /// expires, otherwise every pooled connection would see its own empty
    /// database.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema creation fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let url = DatabaseUrl::parse_url(database_url);
        if let DatabaseUrl::SQLite { path } = &url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::database(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }
        let options = SqliteConnectOptions::from_str(&url.to_connection_string())?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = if url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new().connect_with(options).await?
        };

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Create all tables
    ///
    /// # Errors
    ///
    /// Returns an error if any DDL statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        let started = Instant::now();
        self.migrate_users().await?;
        self.migrate_questionnaire_results().await?;
        AppLogger::log_database_operation(
            "migrate",
            "*",
            true,
            elapsed_ms(started),
        );
        Ok(())
    }

    /// Liveness probe used by the readiness endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the database does not answer
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Map a unique-constraint failure to a conflict with a client-facing message
///
/// Other failures pass through the usual `sqlx::Error` conversion.
fn conflict_with(message: impl FnOnce() -> String) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        let error = AppError::from(e);
        if error.code == ErrorCode::ResourceAlreadyExists {
            AppError::already_exists(message())
        } else {
            error
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
