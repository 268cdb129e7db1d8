// ABOUTME: Configuration error types for scoring configuration validation
// ABOUTME: Defines variants for unreadable files, malformed JSON and invalid cutoff tables

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Scoring configuration errors
///
/// Any of these aborts startup; defaults are never substituted.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Configuration file {path} could not be read: {source}")]
    Io {
        /// Offending path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration is not valid JSON, misses a required table, or uses an unknown label
    #[error("Configuration contains invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A cutoff table has no entries
    #[error("Cutoff table '{0}' must contain at least one entry")]
    EmptyTable(String),

    /// A bound is NaN or infinite
    #[error("Cutoff table '{table}' has a non-finite bound for label {label}")]
    NonFiniteBound {
        /// Table name
        table: String,
        /// Label whose bound is invalid
        label: String,
    },

    /// Bounds are not strictly increasing
    #[error("Cutoff table '{table}' bounds must strictly increase ({previous} followed by {next})")]
    NonIncreasingBounds {
        /// Table name
        table: String,
        /// Earlier bound
        previous: f64,
        /// Later bound that fails to exceed it
        next: f64,
    },

    /// A label occurs twice in one table
    #[error("Cutoff table '{table}' repeats label {label}")]
    DuplicateLabel {
        /// Table name
        table: String,
        /// Repeated label
        label: String,
    },

    /// A free-form label is blank
    #[error("Cutoff table '{0}' contains a blank label")]
    BlankLabel(String),
}
