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
pub struct MakeTestimonialRequest {
    pub name: String,
    #[serde(default)]
    pub designation: String,
    pub message: String,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchTestimonialRequest {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub message: Option<String>,
    pub image: Option<String>,
}

async fn find_testimonial(state: &ServerState, id: Uuid) -> WebResult<MTestimonial> {
    ETestimonial::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Testimonial"))
}

pub async fn get(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<MTestimonial>>>> {
    let testimonials = ETestimonial::find()
        .order_by_desc(CTestimonial::CreatedAt)
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: testimonials,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeTestimonialRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MTestimonial>>> {
    let Json(body) = payload?;

    check("name", check_required("Name", &body.name))?;
    check("message", check_required("Message", &body.message))?;

    let image = normalize_optional(body.image);
    if let Some(image) = &image {
        check("image", validate_image_name(image))?;
    }

    let now = Utc::now().naive_utc();
    let testimonial = ATestimonial {
        id: Set(Uuid::new_v4()),
        name: Set(body.name.trim().to_string()),
        designation: Set(body.designation.trim().to_string()),
        message: Set(body.message),
        image: Set(image),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let testimonial = testimonial.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: testimonial,
    };

    Ok(Json(res))
}

pub async fn get_testimonial(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MTestimonial>>> {
    let testimonial = find_testimonial(&state, id).await?;

    let res = BaseResponse {
        error: false,
        message: testimonial,
    };

    Ok(Json(res))
}

pub async fn patch_testimonial(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<PatchTestimonialRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MTestimonial>>> {
    let Json(body) = payload?;
    let testimonial = find_testimonial(&state, id).await?;
    let mut atestimonial: ATestimonial = testimonial.into();

    if let Some(name) = body.name {
        check("name", check_required("Name", &name))?;
        atestimonial.name = Set(name.trim().to_string());
    }

    if let Some(designation) = body.designation {
        atestimonial.designation = Set(designation.trim().to_string());
    }

    if let Some(message) = body.message {
        check("message", check_required("Message", &message))?;
        atestimonial.message = Set(message);
    }

    if let Some(image) = body.image {
        let image = normalize_optional(Some(image));
        if let Some(name) = &image {
            check("image", validate_image_name(name))?;
        }
        atestimonial.image = Set(image);
    }

    atestimonial.updated_at = Set(Utc::now().naive_utc());
    let testimonial = atestimonial.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: testimonial,
    };

    Ok(Json(res))
}

pub async fn delete_testimonial(
    state: State<Arc<ServerState>>,
    Extension(admin): Extension<MAdmin>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    let testimonial = find_testimonial(&state, id).await?;
    testimonial.delete(&state.db).await?;

    tracing::info!("Admin {} deleted testimonial {}", admin.email, id);

    let res = BaseResponse {
        error: false,
        message: "Testimonial deleted".to_string(),
    };

    Ok(Json(res))
}
