// ABOUTME: Questionnaire result models for persisted screening outcomes
// ABOUTME: Stores the measured factors together with the computed score and classification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Gender;

/// A screening outcome ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestionnaireResult {
    /// Owner
    pub user_id: Uuid,
    /// Client-chosen questionnaire identifier, unique per user
    pub questionnaire_id: String,
    /// Gender used for scoring
    pub gender: Gender,
    /// Estimated VO2max (ml/kg/min)
    pub vo2max: f64,
    /// Body mass index, if supplied
    pub bmi: Option<f64>,
    /// Fat mass index, if supplied
    pub fmi: Option<f64>,
    /// Daily TV hours, if supplied
    pub tv_hours: Option<f64>,
    /// Computed risk score
    pub score: u32,
    /// Risk classification label
    pub classification: String,
}

/// A stored screening outcome
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionnaireResult {
    /// Row identifier
    pub id: i64,
    /// Owner
    pub user_id: Uuid,
    /// Client-chosen questionnaire identifier
    pub questionnaire_id: String,
    /// Gender used for scoring
    pub gender: Gender,
    /// Estimated VO2max (ml/kg/min)
    pub vo2max: f64,
    /// Body mass index
    pub bmi: Option<f64>,
    /// Fat mass index
    pub fmi: Option<f64>,
    /// Daily TV hours
    pub tv_hours: Option<f64>,
    /// Computed risk score
    pub score: u32,
    /// Risk classification label
    pub classification: String,
    /// When the result was stored
    pub timestamp: DateTime<Utc>,
}
