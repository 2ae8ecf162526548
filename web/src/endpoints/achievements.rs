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
pub struct MakeAchievementRequest {
    pub title: String,
    pub count: i32,
    pub icon: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchAchievementRequest {
    pub title: Option<String>,
    pub count: Option<i32>,
    pub icon: Option<String>,
}

async fn find_achievement(state: &ServerState, id: Uuid) -> WebResult<MAchievement> {
    EAchievement::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Achievement"))
}

pub async fn get(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<MAchievement>>>> {
    let achievements = EAchievement::find()
        .order_by_asc(CAchievement::CreatedAt)
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: achievements,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeAchievementRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MAchievement>>> {
    let Json(body) = payload?;

    check("title", check_required("Title", &body.title))?;
    check("count", validate_count(body.count))?;

    let icon = normalize_optional(body.icon);
    if let Some(icon) = &icon {
        check("icon", validate_image_name(icon))?;
    }

    let now = Utc::now().naive_utc();
    let achievement = AAchievement {
        id: Set(Uuid::new_v4()),
        title: Set(body.title.trim().to_string()),
        count: Set(body.count),
        icon: Set(icon),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let achievement = achievement.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: achievement,
    };

    Ok(Json(res))
}

pub async fn get_achievement(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MAchievement>>> {
    let achievement = find_achievement(&state, id).await?;

    let res = BaseResponse {
        error: false,
        message: achievement,
    };

    Ok(Json(res))
}

pub async fn patch_achievement(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<PatchAchievementRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MAchievement>>> {
    let Json(body) = payload?;
    let achievement = find_achievement(&state, id).await?;
    let mut aachievement: AAchievement = achievement.into();

    if let Some(title) = body.title {
        check("title", check_required("Title", &title))?;
        aachievement.title = Set(title.trim().to_string());
    }

    if let Some(count) = body.count {
        check("count", validate_count(count))?;
        aachievement.count = Set(count);
    }

    if let Some(icon) = body.icon {
        let icon = normalize_optional(Some(icon));
        if let Some(name) = &icon {
            check("icon", validate_image_name(name))?;
        }
        aachievement.icon = Set(icon);
    }

    aachievement.updated_at = Set(Utc::now().naive_utc());
    let achievement = aachievement.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: achievement,
    };

    Ok(Json(res))
}

pub async fn delete_achievement(
    state: State<Arc<ServerState>>,
    Extension(admin): Extension<MAdmin>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    let achievement = find_achievement(&state, id).await?;
    achievement.delete(&state.db).await?;

    tracing::info!("Admin {} deleted achievement {}", admin.email, id);

    let res = BaseResponse {
        error: false,
        message: "Achievement deleted".to_string(),
    };

    Ok(Json(res))
}
