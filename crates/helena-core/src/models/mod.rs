// ABOUTME: Core data models for the HELENA-IR screening platform
// ABOUTME: Re-exports Gender, User and QuestionnaireResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Gender`: closed two-value enumeration driving which metrics are mandatory
//! - `User`: registered account that owns questionnaire results
//! - `QuestionnaireResult`: one persisted screening outcome

mod gender;
mod questionnaire;
mod user;

pub use gender::Gender;
pub use questionnaire::{NewQuestionnaireResult, QuestionnaireResult};
pub use user::User;
