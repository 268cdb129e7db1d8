// ABOUTME: Classification route handlers for risk scores
// ABOUTME: Maps a score and gender to the configured risk label

use super::json_body;
use crate::constants::input_ranges;
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use crate::validation::RangeValidator;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use helena_core::errors::AppResult;
use helena_core::models::Gender;
use helena_scoring::classify_risk_score;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of `POST /classify/risk-score`
#[derive(Debug, Deserialize)]
pub struct ClassificationRequest {
    /// Summed risk score
    pub risk_score: u32,
    /// Selects the risk table
    pub gender: Gender,
}

#[derive(Debug, Serialize)]
struct ClassificationResponse {
    classification: String,
}

/// Classification routes
pub struct ClassificationRoutes;

impl ClassificationRoutes {
    /// Create all classification routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/classify/risk-score", post(Self::handle_risk_score))
            .with_state(resources)
    }

    async fn handle_risk_score(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<ClassificationRequest>, JsonRejection>,
    ) -> AppResult<Json<ClassificationResponse>> {
        let request = json_body(payload)?;
        RangeValidator::new()
            .check(
                "risk_score",
                f64::from(request.risk_score),
                input_ranges::RISK_SCORE,
            )
            .finish()?;

        let classification =
            classify_risk_score(&resources.scoring, request.risk_score, request.gender)?;
        AppLogger::log_calculation(
            "risk_classification",
            Some(request.gender.as_str()),
            &classification,
        );
        Ok(Json(ClassificationResponse { classification }))
    }
}
