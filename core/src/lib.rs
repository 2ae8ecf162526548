/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod seed;
pub mod types;

use anyhow::{Context, Result};
use database::connect_db;
use input::load_secret;
use seed::load_and_apply_seed;
use std::sync::Arc;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    tracing::info!("Starting Atelier Server on {}:{}", cli.ip, cli.port);

    let jwt_secret = load_secret(&cli.jwt_secret_file);
    if jwt_secret.is_empty() {
        anyhow::bail!("JWT secret file {} is empty or unreadable", cli.jwt_secret_file);
    }

    let db = connect_db(&cli).await?;

    load_and_apply_seed(&db, cli.seed_file.as_deref())
        .await
        .context("Failed to apply seed file")?;

    Ok(Arc::new(ServerState {
        db,
        cli,
        jwt_secret,
    }))
}
