/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebError;
use atelier_core::consts::TOKEN_LIFETIME_HOURS;
use atelier_core::types::*;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    pub id: Uuid,
}

/// Guards the admin area: requires `Authorization: Bearer <jwt>` for an
/// existing admin and hands the admin row to the handler.
pub async fn authorize(
    state: State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, WebError> {
    let auth_header = match req.headers().get(axum::http::header::AUTHORIZATION) {
        Some(header) => header
            .to_str()
            .map_err(|_| WebError::Forbidden("Authorization header empty".to_string()))?,
        None => {
            return Err(WebError::Forbidden(
                "Authorization header not found".to_string(),
            ));
        }
    };

    let mut header = auth_header.split_whitespace();

    let token = match (header.next(), header.next()) {
        (Some("Bearer"), Some(token)) => token.to_string(),
        _ => {
            return Err(WebError::Forbidden(
                "Invalid Authorization header".to_string(),
            ));
        }
    };

    let token_data = decode_jwt(&state.jwt_secret, &token)
        .map_err(|_| WebError::Unauthorized("Unable to decode token".to_string()))?;

    let current_admin = EAdmin::find_by_id(token_data.claims.id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::Unauthorized("Admin not found".to_string()))?;

    req.extensions_mut().insert(current_admin);
    Ok(next.run(req).await)
}

pub fn encode_jwt(secret: &str, id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expire: chrono::TimeDelta = Duration::hours(TOKEN_LIFETIME_HOURS);
    let exp: usize = (now + expire).timestamp() as usize;
    let iat: usize = now.timestamp() as usize;

    let claim = Claims { iat, exp, id };

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

pub fn decode_jwt(secret: &str, jwt: &str) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
    decode(
        jwt,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
}

pub async fn update_last_login<C>(db: &C, admin: MAdmin) -> Result<MAdmin, DbErr>
where
    C: ConnectionTrait,
{
    let mut aadmin: AAdmin = admin.into();

    aadmin.last_login_at = Set(Utc::now().naive_utc());
    aadmin.update(db).await
}
