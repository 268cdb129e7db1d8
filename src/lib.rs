// ABOUTME: Main library entry point for the HELENA-IR screening API
// ABOUTME: HTTP layer, authentication and persistence around the helena-scoring engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # HELENA-IR Server
//!
//! REST API for insulin-resistance risk screening of children and
//! adolescents. The scoring itself lives in the `helena-scoring` crate; this
//! crate adds the HTTP surface, input range validation, user accounts with
//! bearer tokens, and storage of submitted questionnaires.
//!
//! ## Architecture
//!
//! - **Routes**: one router per domain, merged in [`server::build_router`]
//! - **Validation**: API-level input ranges, enforced before the engine runs
//! - **Auth**: bcrypt password hashing and HS256 access tokens
//! - **Database**: `SQLite` via `sqlx`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use helena_ir_server::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("HELENA-IR server configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Bearer tokens and password hashing
pub mod auth;

/// Environment-driven server configuration
pub mod config;

/// Application constants: env keys, defaults and input ranges
pub mod constants;

/// `SQLite` persistence for users and questionnaire results
pub mod database;

/// Structured logging setup
pub mod logging;

/// Authentication extractor, CORS and request tracing
pub mod middleware;

/// Shared state handed to route handlers
pub mod resources;

/// HTTP route handlers by domain
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// API-level input range checks
pub mod validation;
