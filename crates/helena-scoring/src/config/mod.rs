// ABOUTME: Scoring configuration module: cutoff tables loaded once at startup
// ABOUTME: Exposes the immutable ScoringConfig value and its validation errors

mod error;
mod scoring;

pub use error::ConfigError;
pub use scoring::{RiskCutoffs, ScoringConfig};

#[cfg(test)]
pub(crate) use scoring::TEST_CONFIG_JSON;
