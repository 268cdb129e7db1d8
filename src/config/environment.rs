// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses ports, database URL, JWT, CORS and cutoff-file settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, env_keys};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// Environment type for security and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development; a fallback JWT secret is allowed
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// SQLite database with file path
    SQLite {
        /// Database file
        path: PathBuf,
    },
    /// In-memory SQLite (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string; anything without a `sqlite:` prefix is taken as a file path
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(defaults::DATABASE_URL)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// JWT settings
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Access token lifetime in minutes
    pub jwt_expiry_minutes: i64,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiry_minutes", &self.jwt_expiry_minutes)
            .finish()
    }
}

/// Cross-origin settings
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*`
    pub allowed_origins: String,
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Database location
    pub database: DatabaseUrl,
    /// JWT settings
    pub auth: AuthConfig,
    /// CORS settings
    pub cors: CorsConfig,
    /// Location of the scoring cutoff tables
    pub cutoffs_path: PathBuf,
    /// Deployment environment
    pub environment: Environment,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or if
    /// `JWT_SECRET` is missing outside development.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let environment = Environment::from_str_or_default(&env_var_or(env_keys::ENVIRONMENT, ""));

        let jwt_secret = match env::var(env_keys::JWT_SECRET) {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ if environment.is_development() => {
                warn!("JWT_SECRET not set; using the development secret");
                defaults::DEVELOPMENT_JWT_SECRET.to_owned()
            }
            _ => anyhow::bail!("JWT_SECRET must be set in the {environment} environment"),
        };

        let config = Self {
            http_port: env_var_or(env_keys::HTTP_PORT, &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            host: env_var_or(env_keys::HOST, defaults::HOST),
            database: DatabaseUrl::parse_url(&env_var_or(
                env_keys::DATABASE_URL,
                defaults::DATABASE_URL,
            )),
            auth: AuthConfig {
                jwt_secret,
                jwt_expiry_minutes: env_var_or(
                    env_keys::JWT_EXPIRY_MINUTES,
                    &defaults::JWT_EXPIRY_MINUTES.to_string(),
                )
                .parse()
                .context("Invalid JWT_EXPIRY_MINUTES value")?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    env_keys::CORS_ALLOWED_ORIGINS,
                    defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
            cutoffs_path: PathBuf::from(env_var_or(env_keys::CUTOFFS_PATH, defaults::CUTOFFS_PATH)),
            environment,
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the token lifetime is not positive.
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_expiry_minutes <= 0 {
            anyhow::bail!("JWT_EXPIRY_MINUTES must be positive");
        }
        Ok(())
    }

    /// Configuration suitable for tests: in-memory database, fixed secret
    #[must_use]
    pub fn for_testing(cutoffs_path: impl Into<PathBuf>) -> Self {
        Self {
            http_port: 0,
            host: defaults::HOST.to_owned(),
            database: DatabaseUrl::Memory,
            auth: AuthConfig {
                jwt_secret: "test-secret-for-helena-ir".to_owned(),
                jwt_expiry_minutes: defaults::JWT_EXPIRY_MINUTES,
            },
            cors: CorsConfig {
                allowed_origins: "*".to_owned(),
            },
            cutoffs_path: cutoffs_path.into(),
            environment: Environment::Testing,
        }
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "HELENA-IR Server Configuration:\n\
             - Environment: {}\n\
             - Bind: {}:{}\n\
             - Database: {}\n\
             - JWT expiry: {} minutes\n\
             - CORS origins: {}\n\
             - Cutoff tables: {}",
            self.environment,
            self.host,
            self.http_port,
            self.database,
            self.auth.jwt_expiry_minutes,
            self.cors.allowed_origins,
            self.cutoffs_path.display()
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("anything"),
            Environment::Development
        );
    }

    #[test]
    fn test_database_url_parsing() {
        assert_eq!(DatabaseUrl::parse_url("sqlite::memory:"), DatabaseUrl::Memory);
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:./data/helena.db"),
            DatabaseUrl::SQLite {
                path: PathBuf::from("./data/helena.db")
            }
        );
        assert_eq!(
            DatabaseUrl::parse_url("/var/lib/helena.db").to_connection_string(),
            "sqlite:/var/lib/helena.db"
        );
    }

    #[test]
    fn test_secret_is_redacted_from_debug_and_summary() {
        let config = ServerConfig::for_testing("config/cutoffs.json");
        assert!(!format!("{config:?}").contains("test-secret"));
        assert!(!config.summary().contains("test-secret"));
    }
}
