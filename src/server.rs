// ABOUTME: HTTP server assembly and lifecycle for the screening API
// ABOUTME: Merges domain routers, applies the middleware stack and serves until ctrl-c
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::defaults::{MAX_REQUEST_BODY_BYTES, REQUEST_TIMEOUT_SECS};
use crate::middleware::{attach_request_id, create_request_span, setup_cors, REQUEST_ID_HEADER};
use crate::resources::ServerResources;
use crate::routes::{
    AuthRoutes, CalculationRoutes, ClassificationRoutes, HealthRoutes, QuestionnaireRoutes,
};
use anyhow::{Context, Result};
use axum::http::HeaderName;
use axum::response::IntoResponse;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the complete application router
///
/// Layers run outside-in: request id, trace span, error correlation, CORS,
/// timeout, body limit.
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(CalculationRoutes::routes(resources.clone()))
        .merge(ClassificationRoutes::routes(resources.clone()))
        .merge(AuthRoutes::routes(resources.clone()))
        .merge(QuestionnaireRoutes::routes(resources.clone()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    request_id_header.clone(),
                    MakeRequestUuid,
                ))
                .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
                .layer(PropagateRequestIdLayer::new(request_id_header))
                .layer(axum::middleware::from_fn(attach_request_id))
                .layer(setup_cors(&resources.config))
                .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
                // Re-box the body-limit response body so the outer layers' `Default` bound holds
                .map_response(IntoResponse::into_response)
                .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES)),
        )
}

/// Bind the configured address and serve until ctrl-c
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr = format!("{}:{}", resources.config.host, resources.config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;

    let app = build_router(&resources);
    info!("HTTP server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated with an error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}

/// Endpoints served by [`build_router`], for the startup banner
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health"),
    ("GET", "/ready"),
    ("POST", "/calculate/bmi"),
    ("POST", "/calculate/fmi"),
    ("POST", "/calculate/vo2max"),
    ("POST", "/calculate/risk-score"),
    ("POST", "/classify/risk-score"),
    ("POST", "/users/create/"),
    ("POST", "/token"),
    ("GET", "/users/me/"),
    ("POST", "/questionnaire-results"),
    ("GET", "/questionnaire-results"),
];
