// ABOUTME: Risk-scoring and classification engine for HELENA-IR screening
// ABOUTME: Metric calculators, cutoff tables, risk scorer, risk classifier and their configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Helena Scoring
//!
//! Every operation here is a pure function of its inputs and of an immutable
//! [`ScoringConfig`] built once at startup, so callers may share the
//! configuration across threads freely.
//!
//! Control flow: measurements go through the metric calculators, the
//! [`RiskScorer`] awards points per factor using the cutoff tables, and the
//! [`RiskClassifier`] labels the summed score.

/// Metric calculators, factor classes and the risk scorer/classifier
pub mod algorithms;

/// Scoring configuration (cutoff tables) loading and validation
pub mod config;

/// Ordered cutoff tables and the shared classification primitive
pub mod cutoff;

/// Engine error type
pub mod errors;

pub use algorithms::metrics::{calculate_bmi, calculate_fmi, calculate_vo2max};
pub use algorithms::risk::{
    calculate_risk_score, classify_risk_score, RiskAssessment, RiskClassifier, RiskFactors,
    RiskScoreBreakdown, RiskScorer,
};
pub use config::{ConfigError, RiskCutoffs, ScoringConfig};
pub use cutoff::{Cutoff, CutoffTable};
pub use errors::{ScoringError, ScoringResult};
