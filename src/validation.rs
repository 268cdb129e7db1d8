// ABOUTME: Range validation for numeric request fields
// ABOUTME: Collects every out-of-range field of a request into one structured 422 error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Request range validation
//!
//! The scoring engine trusts its inputs; this module is the only place where
//! accepted ranges are enforced. A rejected request reports every violated
//! field at once:
//!
//! ```json
//! {"error": {"code": "VALUE_OUT_OF_RANGE", "message": "...",
//!   "details": [{"field": "height_cm", "type": "less_than", "limit": 200.0, "input": 210.0}]}}
//! ```

use helena_core::errors::{AppError, AppResult, ErrorCode};
use serde::Serialize;

/// One end of an accepted range
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// The limit itself is accepted
    Inclusive(f64),
    /// The limit itself is rejected
    Exclusive(f64),
}

/// Accepted interval of a numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange {
    /// Lower end
    pub lower: Bound,
    /// Upper end
    pub upper: Bound,
}

/// Kind of constraint a value violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    /// Value must exceed the limit
    GreaterThan,
    /// Value must be at least the limit
    GreaterThanEqual,
    /// Value must be below the limit
    LessThan,
    /// Value must be at most the limit
    LessThanEqual,
}

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    /// Request field name
    pub field: &'static str,
    /// Violated constraint
    #[serde(rename = "type")]
    pub kind: ConstraintKind,
    /// Limit of the violated end
    pub limit: f64,
    /// Rejected value
    pub input: f64,
}

impl InputRange {
    /// Range between `lower` and `upper`
    #[must_use]
    pub const fn new(lower: Bound, upper: Bound) -> Self {
        Self { lower, upper }
    }

    /// Check `value`, reporting the first violated end
    #[must_use]
    pub fn violation(&self, field: &'static str, value: f64) -> Option<FieldViolation> {
        let (kind, limit) = match (self.lower, self.upper) {
            (Bound::Inclusive(limit), _) if value < limit => (ConstraintKind::GreaterThanEqual, limit),
            (Bound::Exclusive(limit), _) if value <= limit => (ConstraintKind::GreaterThan, limit),
            (_, Bound::Inclusive(limit)) if value > limit => (ConstraintKind::LessThanEqual, limit),
            (_, Bound::Exclusive(limit)) if value >= limit => (ConstraintKind::LessThan, limit),
            _ => return None,
        };

        Some(FieldViolation {
            field,
            kind,
            limit,
            input: value,
        })
    }
}

/// Accumulates range checks for one request
#[derive(Debug, Default)]
pub struct RangeValidator {
    violations: Vec<FieldViolation>,
}

impl RangeValidator {
    /// Empty validator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a mandatory field
    #[must_use]
    pub fn check(mut self, field: &'static str, value: f64, range: InputRange) -> Self {
        if let Some(violation) = range.violation(field, value) {
            self.violations.push(violation);
        }
        self
    }

    /// Check an optional field; absent values are not this validator's concern
    #[must_use]
    pub fn check_optional(self, field: &'static str, value: Option<f64>, range: InputRange) -> Self {
        match value {
            Some(value) => self.check(field, value, range),
            None => self,
        }
    }

    /// Violations collected so far
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Finish validation
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::ValueOutOfRange`] listing every violation, if any.
    pub fn finish(self) -> AppResult<()> {
        if self.violations.is_empty() {
            return Ok(());
        }

        let fields: Vec<&str> = self.violations.iter().map(|v| v.field).collect();
        let message = format!("Value out of range: {}", fields.join(", "));
        let details = serde_json::to_value(&self.violations)?;
        Err(AppError::new(ErrorCode::ValueOutOfRange, message).with_details(details))
    }
}
