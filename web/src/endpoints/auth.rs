/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::auth::{encode_jwt, update_last_login};
use crate::error::{WebError, WebResult};
use atelier_core::types::*;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use chrono::NaiveDateTime;
use password_auth::verify_password;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminProfile,
}

/// What the admin area shows about the signed-in account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AdminProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub last_login_at: NaiveDateTime,
}

impl From<MAdmin> for AdminProfile {
    fn from(admin: MAdmin) -> Self {
        AdminProfile {
            id: admin.id,
            name: admin.name,
            email: admin.email,
            last_login_at: admin.last_login_at,
        }
    }
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeLoginRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<LoginResponse>>> {
    let Json(body) = payload?;

    let admin = EAdmin::find()
        .filter(CAdmin::Email.eq(body.email.trim().to_lowercase()))
        .one(&state.db)
        .await?
        .ok_or_else(WebError::invalid_credentials)?;

    if verify_password(&body.password, &admin.password).is_err() {
        tracing::warn!("Failed login attempt for {}", admin.email);
        return Err(WebError::invalid_credentials());
    }

    let token =
        encode_jwt(&state.jwt_secret, admin.id).map_err(|_| WebError::failed_to_generate_token())?;

    let admin = update_last_login(&state.db, admin).await?;
    tracing::info!("Admin {} logged in", admin.email);

    let res = BaseResponse {
        error: false,
        message: LoginResponse {
            token,
            admin: admin.into(),
        },
    };

    Ok(Json(res))
}

pub async fn get_me(
    Extension(admin): Extension<MAdmin>,
) -> WebResult<Json<BaseResponse<AdminProfile>>> {
    let res = BaseResponse {
        error: false,
        message: admin.into(),
    };

    Ok(Json(res))
}
