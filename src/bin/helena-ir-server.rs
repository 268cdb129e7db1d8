// ABOUTME: HELENA-IR screening API server binary
// ABOUTME: Loads configuration and cutoffs, opens the database and serves the HTTP API
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # HELENA-IR Server Binary
//!
//! Starts the screening API. Invalid cutoff configuration aborts startup
//! before the listener is bound.

use anyhow::{Context, Result};
use clap::Parser;
use helena_ir_server::{
    auth::AuthManager,
    config::ServerConfig,
    database::Database,
    logging,
    resources::ServerResources,
    server::{self, ENDPOINTS},
};
use helena_scoring::ScoringConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Command-line overrides applied on top of the environment
#[derive(Parser)]
#[command(name = "helena-ir-server")]
#[command(about = "HELENA-IR screening API - BMI, FMI, VO2max and insulin-resistance risk")]
pub struct Args {
    /// Cutoff configuration file (overrides `HELENA_CUTOFFS_PATH`)
    #[arg(short, long)]
    cutoffs: Option<PathBuf>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(cutoffs) = args.cutoffs {
        config.cutoffs_path = cutoffs;
    }

    logging::init_from_env()?;

    info!("Starting HELENA-IR screening API");
    info!("{}", config.summary());

    let scoring = ScoringConfig::load(&config.cutoffs_path).with_context(|| {
        format!(
            "Failed to load cutoff configuration from {}",
            config.cutoffs_path.display()
        )
    })?;
    info!(
        "Cutoff configuration loaded from {}",
        config.cutoffs_path.display()
    );

    let database = Database::new(&config.database.to_connection_string()).await?;
    info!("Database initialized: {}", config.database);

    let auth_manager = AuthManager::new(
        config.auth.jwt_secret.as_bytes(),
        config.auth.jwt_expiry_minutes,
    );
    info!(
        "Authentication manager initialized (token expiry {} minutes)",
        auth_manager.token_expiry_minutes()
    );

    let resources = Arc::new(ServerResources::new(
        database,
        auth_manager,
        scoring,
        Arc::new(config),
    ));

    display_available_endpoints(&resources);
    server::run(resources).await
}

fn display_available_endpoints(resources: &ServerResources) {
    let base = format!(
        "http://{}:{}",
        resources.config.host, resources.config.http_port
    );
    info!("=== Available API Endpoints ===");
    for (method, path) in ENDPOINTS {
        info!("  {method:<5} {base}{path}");
    }
}
