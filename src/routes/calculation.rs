// ABOUTME: Calculation route handlers for BMI, FMI, VO2max and risk score
// ABOUTME: Range-checks request bodies and delegates to the helena-scoring calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculation routes
//!
//! Every handler validates its numeric fields against
//! [`crate::constants::input_ranges`] before calling the engine, which
//! trusts its inputs.

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
use helena_scoring::{calculate_bmi, calculate_fmi, calculate_risk_score, calculate_vo2max};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of `POST /calculate/bmi`
#[derive(Debug, Deserialize)]
pub struct BmiRequest {
    /// Height in cm
    pub height_cm: f64,
    /// Body weight in kg
    pub weight_kg: f64,
}

/// Body of `POST /calculate/fmi`
///
/// Either `fat_mass_kg`, or both `weight_kg` and `body_fat_percentage`.
#[derive(Debug, Deserialize)]
pub struct FmiRequest {
    /// Height in cm
    pub height_cm: f64,
    /// Body weight in kg
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Fat mass in kg; takes precedence when present
    #[serde(default)]
    pub fat_mass_kg: Option<f64>,
    /// Body fat in percent
    #[serde(default)]
    pub body_fat_percentage: Option<f64>,
}

/// Body of `POST /calculate/vo2max`
#[derive(Debug, Deserialize)]
pub struct Vo2maxRequest {
    /// Final shuttle-run stage speed
    pub speed_km_per_h: f64,
    /// Age in whole years
    pub age_yr: u32,
}

/// Body of `POST /calculate/risk-score`
#[derive(Debug, Deserialize)]
pub struct RiskScoreRequest {
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

#[derive(Debug, Serialize)]
struct BmiResponse {
    bmi: f64,
}

#[derive(Debug, Serialize)]
struct FmiResponse {
    fmi: f64,
}

#[derive(Debug, Serialize)]
struct Vo2maxResponse {
    vo2max: f64,
}

#[derive(Debug, Serialize)]
struct RiskScoreResponse {
    risk_score: u32,
}

/// Calculation routes
pub struct CalculationRoutes;

impl CalculationRoutes {
    /// Create all calculation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/calculate/bmi", post(Self::handle_bmi))
            .route("/calculate/fmi", post(Self::handle_fmi))
            .route("/calculate/vo2max", post(Self::handle_vo2max))
            .route("/calculate/risk-score", post(Self::handle_risk_score))
            .with_state(resources)
    }

    async fn handle_bmi(
        payload: Result<Json<BmiRequest>, JsonRejection>,
    ) -> AppResult<Json<BmiResponse>> {
        let request = json_body(payload)?;
        RangeValidator::new()
            .check("height_cm", request.height_cm, input_ranges::HEIGHT_CM)
            .check("weight_kg", request.weight_kg, input_ranges::WEIGHT_KG)
            .finish()?;

        let bmi = calculate_bmi(request.height_cm, request.weight_kg);
        AppLogger::log_calculation("bmi", None, &bmi.to_string());
        Ok(Json(BmiResponse { bmi }))
    }

    async fn handle_fmi(
        payload: Result<Json<FmiRequest>, JsonRejection>,
    ) -> AppResult<Json<FmiResponse>> {
        let request = json_body(payload)?;
        RangeValidator::new()
            .check("height_cm", request.height_cm, input_ranges::HEIGHT_CM)
            .check_optional("weight_kg", request.weight_kg, input_ranges::WEIGHT_KG)
            .check_optional("fat_mass_kg", request.fat_mass_kg, input_ranges::FAT_MASS_KG)
            .check_optional(
                "body_fat_percentage",
                request.body_fat_percentage,
                input_ranges::BODY_FAT_PERCENTAGE,
            )
            .finish()?;

        let fmi = calculate_fmi(
            request.height_cm,
            request.weight_kg,
            request.fat_mass_kg,
            request.body_fat_percentage,
        )?;
        AppLogger::log_calculation("fmi", None, &fmi.to_string());
        Ok(Json(FmiResponse { fmi }))
    }

    async fn handle_vo2max(
        payload: Result<Json<Vo2maxRequest>, JsonRejection>,
    ) -> AppResult<Json<Vo2maxResponse>> {
        let request = json_body(payload)?;
        RangeValidator::new()
            .check(
                "speed_km_per_h",
                request.speed_km_per_h,
                input_ranges::SPEED_KM_PER_H,
            )
            .check("age_yr", f64::from(request.age_yr), input_ranges::AGE_YR)
            .finish()?;

        let vo2max = calculate_vo2max(request.speed_km_per_h, request.age_yr);
        AppLogger::log_calculation("vo2max", None, &vo2max.to_string());
        Ok(Json(Vo2maxResponse { vo2max }))
    }

    async fn handle_risk_score(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<RiskScoreRequest>, JsonRejection>,
    ) -> AppResult<Json<RiskScoreResponse>> {
        let request = json_body(payload)?;
        RangeValidator::new()
            .check("vo2max", request.vo2max, input_ranges::VO2MAX)
            .check_optional("bmi", request.bmi, input_ranges::BMI)
            .check_optional("fmi", request.fmi, input_ranges::FMI)
            .check_optional("tv_hours", request.tv_hours, input_ranges::TV_HOURS)
            .finish()?;

        let risk_score = calculate_risk_score(
            &resources.scoring,
            request.gender,
            request.vo2max,
            request.bmi,
            request.fmi,
            request.tv_hours,
        )?;
        AppLogger::log_calculation(
            "risk_score",
            Some(request.gender.as_str()),
            &risk_score.to_string(),
        );
        Ok(Json(RiskScoreResponse { risk_score }))
    }
}
