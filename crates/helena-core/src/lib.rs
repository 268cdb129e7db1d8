// ABOUTME: Core types for the HELENA-IR screening platform
// ABOUTME: Foundation crate with error handling and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Helena Core
//!
//! Foundation crate providing shared types for the HELENA-IR screening
//! service. It changes rarely, which keeps incremental builds of the scoring
//! engine and the server fast.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `ErrorResponse`
//! - **models**: `Gender`, `User`, `QuestionnaireResult`

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models
pub mod models;
