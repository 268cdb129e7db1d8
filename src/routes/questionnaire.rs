// ABOUTME: Questionnaire result route handlers
// ABOUTME: Scores and stores a submitted questionnaire and lists the caller's history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::json_body;
use crate::constants::input_ranges;
use crate::logging::AppLogger;
use crate::middleware::AuthenticatedUser;
use crate::resources::ServerResources;
use crate::validation::RangeValidator;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use helena_core::errors::{AppError, AppResult};
use helena_core::models::{Gender, NewQuestionnaireResult, QuestionnaireResult};
use helena_scoring::{RiskFactors, RiskScorer};
use serde::Deserialize;
use std::sync::Arc;

/// Body of `POST /questionnaire-results`
#[derive(Debug, Deserialize)]
pub struct SubmitQuestionnaireRequest {
    /// Client-chosen id, unique per user
    pub questionnaire_id: String,
    /// Selects the scoring branch
    pub gender: Gender,
    /// VO2max in ml/kg/min
    pub vo2max: f64,
    /// Required for boys
    #[serde(default)]
    pub bmi: Option<f64>,
    /// Required for girls
    #[serde(default)]
    pub fmi: Option<f64>,
    /// Daily TV hours; required for girls
    #[serde(default)]
    pub tv_hours: Option<f64>,
}

/// Questionnaire routes; all require a bearer token
pub struct QuestionnaireRoutes;

impl QuestionnaireRoutes {
    /// Create all questionnaire routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/questionnaire-results",
                get(Self::handle_list).post(Self::handle_submit),
            )
            .with_state(resources)
    }

    async fn handle_submit(
        State(resources): State<Arc<ServerResources>>,
        AuthenticatedUser(user): AuthenticatedUser,
        payload: Result<Json<SubmitQuestionnaireRequest>, JsonRejection>,
    ) -> AppResult<Response> {
        let request = json_body(payload)?;
        let questionnaire_id = request.questionnaire_id.trim().to_owned();
        if questionnaire_id.is_empty() {
            return Err(AppError::invalid_input("questionnaire_id must not be empty"));
        }
        RangeValidator::new()
            .check("vo2max", request.vo2max, input_ranges::VO2MAX)
            .check_optional("bmi", request.bmi, input_ranges::BMI)
            .check_optional("fmi", request.fmi, input_ranges::FMI)
            .check_optional("tv_hours", request.tv_hours, input_ranges::TV_HOURS)
            .finish()?;

        let factors = RiskFactors {
            gender: request.gender,
            vo2max: request.vo2max,
            bmi: request.bmi,
            fmi: request.fmi,
            tv_hours: request.tv_hours,
        };
        let assessment = RiskScorer::new(&resources.scoring).assess(&factors)?;

        let stored = resources
            .database
            .create_questionnaire_result(&NewQuestionnaireResult {
                user_id: user.id,
                questionnaire_id,
                gender: request.gender,
                vo2max: request.vo2max,
                bmi: request.bmi,
                fmi: request.fmi,
                tv_hours: request.tv_hours,
                score: assessment.score,
                classification: assessment.classification,
            })
            .await?;

        AppLogger::log_calculation(
            "questionnaire",
            Some(request.gender.as_str()),
            &stored.classification,
        );
        Ok((StatusCode::CREATED, Json(stored)).into_response())
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        AuthenticatedUser(user): AuthenticatedUser,
    ) -> AppResult<Json<Vec<QuestionnaireResult>>> {
        let results = resources
            .database
            .list_questionnaire_results(user.id)
            .await?;
        Ok(Json(results))
    }
}
