/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult, check};
use atelier_core::input::*;
use atelier_core::types::*;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeClientRequest {
    pub name: String,
    pub logo: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchClientRequest {
    pub name: Option<String>,
    pub logo: Option<String>,
}

async fn find_client(state: &ServerState, id: Uuid) -> WebResult<MClient> {
    EClient::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Client"))
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<BaseResponse<Vec<MClient>>>> {
    let clients = EClient::find()
        .order_by_asc(CClient::CreatedAt)
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: clients,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeClientRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MClient>>> {
    let Json(body) = payload?;

    check("name", check_required("Name", &body.name))?;
    check("logo", validate_image_name(&body.logo))?;

    let now = Utc::now().naive_utc();
    let client = AClient {
        id: Set(Uuid::new_v4()),
        name: Set(body.name.trim().to_string()),
        logo: Set(body.logo.trim().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let client = client.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: client,
    };

    Ok(Json(res))
}

pub async fn get_client(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MClient>>> {
    let client = find_client(&state, id).await?;

    let res = BaseResponse {
        error: false,
        message: client,
    };

    Ok(Json(res))
}

pub async fn patch_client(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<PatchClientRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MClient>>> {
    let Json(body) = payload?;
    let client = find_client(&state, id).await?;
    let mut aclient: AClient = client.into();

    if let Some(name) = body.name {
        check("name", check_required("Name", &name))?;
        aclient.name = Set(name.trim().to_string());
    }

    if let Some(logo) = body.logo {
        check("logo", validate_image_name(&logo))?;
        aclient.logo = Set(logo.trim().to_string());
    }

    aclient.updated_at = Set(Utc::now().naive_utc());
    let client = aclient.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: client,
    };

    Ok(Json(res))
}

pub async fn delete_client(
    state: State<Arc<ServerState>>,
    Extension(admin): Extension<MAdmin>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    let client = find_client(&state, id).await?;
    client.delete(&state.db).await?;

    tracing::info!("Admin {} deleted client {}", admin.email, id);

    let res = BaseResponse {
        error: false,
        message: "Client deleted".to_string(),
    };

    Ok(Json(res))
}
