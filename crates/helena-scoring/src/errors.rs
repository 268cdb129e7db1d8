// ABOUTME: Error type returned by calculators, the risk scorer and the risk classifier
// ABOUTME: Distinguishes missing mandatory inputs from values no cutoff bucket covers

use helena_core::errors::AppError;
use thiserror::Error;

/// Failure of a single scoring call
///
/// Both variants are per-call and leave the loaded configuration untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// A mandatory input for the requested gender/branch was not supplied
    #[error("{0}")]
    InsufficientData(String),

    /// A value was supplied but no configured cutoff bucket covers it
    #[error("{0}")]
    InvalidInput(String),
}

/// Result alias for scoring operations
pub type ScoringResult<T> = Result<T, ScoringError>;

impl From<ScoringError> for AppError {
    fn from(error: ScoringError) -> Self {
        match error {
            ScoringError::InsufficientData(message) => Self::insufficient_data(message),
            ScoringError::InvalidInput(message) => Self::invalid_input(message),
        }
    }
}
