// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-driven server configuration; scoring cutoffs live in helena-scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the HELENA-IR server
//!
//! - **Environment**: ports, database, JWT, CORS and cutoff-file location
//!   read from environment variables
//!
//! The cutoff tables themselves are loaded by
//! [`helena_scoring::ScoringConfig::load`] from the path configured here.

/// Environment and server configuration
pub mod environment;

pub use environment::{DatabaseUrl, Environment, ServerConfig};
