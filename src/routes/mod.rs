// ABOUTME: Route module organization for the HELENA-IR HTTP endpoints
// ABOUTME: Groups routes by domain and converts body rejections into the unified error format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the HELENA-IR server
//!
//! Each domain module contains route definitions and thin handlers that
//! validate ranges, call into `helena-scoring` or the database, and map
//! errors through [`AppError`].

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::{Form, Json};
use helena_core::errors::{AppError, AppResult};

/// Registration, login and current-user routes
pub mod auth;
/// BMI, FMI, VO2max and risk-score calculation routes
pub mod calculation;
/// Risk-score classification routes
pub mod classification;
/// Health check and system status routes
pub mod health;
/// Questionnaire result submission and history routes
pub mod questionnaire;

/// Authentication route handlers
pub use auth::AuthRoutes;
/// Calculation route handlers
pub use calculation::CalculationRoutes;
/// Classification route handlers
pub use classification::ClassificationRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Questionnaire route handlers
pub use questionnaire::QuestionnaireRoutes;

/// Unwrap a JSON body, reporting malformed or incomplete bodies as `INVALID_INPUT`
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}

/// Unwrap a form body, reporting malformed or incomplete bodies as `INVALID_INPUT`
pub(crate) fn form_body<T>(payload: Result<Form<T>, FormRejection>) -> AppResult<T> {
    payload
        .map(|Form(body)| body)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}
