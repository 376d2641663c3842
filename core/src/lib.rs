/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod consts;
pub mod database;
pub mod error;
pub mod input;
pub mod project;
pub mod tag;
pub mod token;
pub mod types;
pub mod user;
pub mod vacancy;

use anyhow::{Context, Result};
use clap::Parser;
use database::connect_db;
use input::load_secret;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use types::*;

pub fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("Invalid log level")?;

    let registry = tracing_subscriber::registry().with(filter);

    if cli.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(cli.debug))
            .try_init()
            .context("Failed to initialize logging")?;
    }

    Ok(())
}

pub async fn init_state() -> Result<Arc<ServerState>> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    tracing::info!("Starting Shance Server on {}:{}", cli.ip, cli.port);

    let jwt_secret = load_secret(&cli.jwt_secret_file);

    if jwt_secret.is_empty() {
        anyhow::bail!("JWT secret file {} is empty or missing", cli.jwt_secret_file);
    }

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState::new(db, cli, &jwt_secret)))
}
