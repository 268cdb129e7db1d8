// ABOUTME: System-wide constants for the HELENA-IR screening server
// ABOUTME: Service names, environment variable keys, defaults and accepted input ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults and the accepted range of every numeric request field.
//! Environment-driven values are read by [`crate::config::environment`].

/// Service identification
pub mod service_names {
    /// Name used in logs and health responses
    pub const HELENA_IR_SERVER: &str = "helena-ir-server";

    /// Crate version
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Environment variable names
pub mod env_keys {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP bind address
    pub const HOST: &str = "HOST";
    /// `sqlite:` URL of the database
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// HMAC secret for access tokens
    pub const JWT_SECRET: &str = "JWT_SECRET";
    /// Access-token lifetime
    pub const JWT_EXPIRY_MINUTES: &str = "JWT_EXPIRY_MINUTES";
    /// Comma-separated origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Cutoff configuration file
    pub const CUTOFFS_PATH: &str = "HELENA_CUTOFFS_PATH";
    /// `development`, `production` or `testing`
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8000;
    /// Loopback unless overridden
    pub const HOST: &str = "127.0.0.1";
    /// Database file relative to the working directory
    pub const DATABASE_URL: &str = "sqlite:./data/helena.db";
    /// Access-token lifetime in minutes
    pub const JWT_EXPIRY_MINUTES: i64 = 30;
    /// Local web client
    pub const CORS_ALLOWED_ORIGINS: &str = "http://localhost:3000";
    /// Shipped cutoff tables
    pub const CUTOFFS_PATH: &str = "config/cutoffs.json";

    /// Only ever used when `ENVIRONMENT=development` and no secret is set
    pub const DEVELOPMENT_JWT_SECRET: &str = "helena-development-secret-change-me";

    /// Per-request timeout applied by the HTTP stack
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Maximum accepted request body
    pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
}

/// Authentication limits
pub mod auth {
    /// Minimum password length accepted at registration
    pub const MIN_PASSWORD_LENGTH: usize = 8;

    /// Token type returned by the login endpoint
    pub const TOKEN_TYPE: &str = "bearer";
}

/// Accepted range of each numeric request field
pub mod input_ranges {
    use crate::validation::{Bound, InputRange};

    /// Height in cm
    pub const HEIGHT_CM: InputRange = InputRange::new(Bound::Inclusive(70.0), Bound::Exclusive(200.0));
    /// Body weight in kg
    pub const WEIGHT_KG: InputRange = InputRange::new(Bound::Inclusive(25.0), Bound::Exclusive(300.0));
    /// Fat mass in kg
    pub const FAT_MASS_KG: InputRange = InputRange::new(Bound::Exclusive(0.0), Bound::Exclusive(240.0));
    /// Body fat in percent
    pub const BODY_FAT_PERCENTAGE: InputRange =
        InputRange::new(Bound::Exclusive(0.0), Bound::Exclusive(80.0));
    /// Final shuttle-run stage speed in km/h
    pub const SPEED_KM_PER_H: InputRange =
        InputRange::new(Bound::Exclusive(8.49), Bound::Exclusive(20.0));
    /// Age in whole years
    pub const AGE_YR: InputRange = InputRange::new(Bound::Inclusive(7.0), Bound::Inclusive(18.0));
    /// VO2max in ml/kg/min
    pub const VO2MAX: InputRange = InputRange::new(Bound::Exclusive(22.71), Bound::Exclusive(94.54));
    /// Body mass index
    pub const BMI: InputRange = InputRange::new(Bound::Exclusive(13.0), Bound::Exclusive(35.0));
    /// Fat mass index
    pub const FMI: InputRange = InputRange::new(Bound::Exclusive(3.4), Bound::Exclusive(25.0));
    /// Daily TV viewing in hours
    pub const TV_HOURS: InputRange = InputRange::new(Bound::Inclusive(0.0), Bound::Inclusive(19.0));
    /// Summed risk score
    pub const RISK_SCORE: InputRange = InputRange::new(Bound::Inclusive(0.0), Bound::Exclusive(44.0));
}
