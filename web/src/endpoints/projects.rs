/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult, check};
use atelier_core::database::{
    CascadeReport, add_project_images, delete_project as delete_project_cascade,
    insert_project_images,
};
use atelier_core::input::*;
use atelier_core::types::*;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeProjectRequest {
    pub title: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub cover_image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchProjectRequest {
    pub title: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AddProjectImagesRequest {
    pub images: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectDetailsResponse {
    #[serde(flatten)]
    pub project: MProject,
    pub images: Vec<MProjectImage>,
}

fn check_image_names(field: &str, names: &[String]) -> WebResult<()> {
    for name in names {
        check(field, validate_image_name(name))?;
    }

    Ok(())
}

async fn find_project(state: &ServerState, id: Uuid) -> WebResult<MProject> {
    EProject::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))
}

pub(crate) async fn project_details<C>(db: &C, id: Uuid) -> WebResult<ProjectDetailsResponse>
where
    C: ConnectionTrait,
{
    let project = EProject::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let images = EProjectImage::find()
        .filter(CProjectImage::ProjectId.eq(project.id))
        .order_by_asc(CProjectImage::CreatedAt)
        .order_by_asc(CProjectImage::ImageName)
        .all(db)
        .await?;

    Ok(ProjectDetailsResponse { project, images })
}

pub async fn get(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<MProject>>>> {
    let projects = EProject::find()
        .order_by_desc(CProject::CreatedAt)
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: projects,
    };

    Ok(Json(res))
}

/// Creates a project and its initial gallery together.
pub async fn post(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeProjectRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<ProjectDetailsResponse>>> {
    let Json(body) = payload?;

    check("title", check_required("Title", &body.title))?;
    check("location", check_required("Location", &body.location))?;

    let cover_image = normalize_optional(body.cover_image);
    if let Some(cover_image) = &cover_image {
        check("cover_image", validate_image_name(cover_image))?;
    }

    check_image_names("images", &body.images)?;

    let now = Utc::now().naive_utc();
    let txn = state.db.begin().await?;

    let project = AProject {
        id: Set(Uuid::new_v4()),
        title: Set(body.title.trim().to_string()),
        location: Set(body.location.trim().to_string()),
        description: Set(body.description),
        cover_image: Set(cover_image),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    insert_project_images(&txn, project.id, &body.images).await?;
    let details = project_details(&txn, project.id).await?;
    txn.commit().await?;

    let res = BaseResponse {
        error: false,
        message: details,
    };

    Ok(Json(res))
}

pub async fn get_project(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<ProjectDetailsResponse>>> {
    let details = project_details(&state.db, id).await?;

    let res = BaseResponse {
        error: false,
        message: details,
    };

    Ok(Json(res))
}

pub async fn patch_project(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<PatchProjectRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MProject>>> {
    let Json(body) = payload?;
    let project = find_project(&state, id).await?;
    let mut aproject: AProject = project.into();

    if let Some(title) = body.title {
        check("title", check_required("Title", &title))?;
        aproject.title = Set(title.trim().to_string());
    }

    if let Some(location) = body.location {
        check("location", check_required("Location", &location))?;
        aproject.location = Set(location.trim().to_string());
    }

    if let Some(description) = body.description {
        aproject.description = Set(description);
    }

    if let Some(cover_image) = body.cover_image {
        let cover_image = normalize_optional(Some(cover_image));
        if let Some(name) = &cover_image {
            check("cover_image", validate_image_name(name))?;
        }
        aproject.cover_image = Set(cover_image);
    }

    aproject.updated_at = Set(Utc::now().naive_utc());
    let project = aproject.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: project,
    };

    Ok(Json(res))
}

/// Removes the project and every gallery image that belongs to it.
pub async fn delete_project(
    state: State<Arc<ServerState>>,
    Extension(admin): Extension<MAdmin>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<CascadeReport>>> {
    let report = delete_project_cascade(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    tracing::info!(
        "Admin {} deleted project {} ({} images)",
        admin.email,
        id,
        report.project_images
    );

    let res = BaseResponse {
        error: false,
        message: report,
    };

    Ok(Json(res))
}

pub async fn post_project_images(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<AddProjectImagesRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<ProjectDetailsResponse>>> {
    let Json(body) = payload?;

    if body.images.is_empty() {
        return Err(WebError::BadRequest("No images given".to_string()));
    }

    check_image_names("images", &body.images)?;

    let project = find_project(&state, id).await?;
    add_project_images(&state.db, project.id, &body.images).await?;

    let details = project_details(&state.db, project.id).await?;

    let res = BaseResponse {
        error: false,
        message: details,
    };

    Ok(Json(res))
}

pub async fn delete_project_image(
    state: State<Arc<ServerState>>,
    Path((id, image)): Path<(Uuid, Uuid)>,
) -> WebResult<Json<BaseResponse<String>>> {
    let image = EProjectImage::find_by_id(image)
        .filter(CProjectImage::ProjectId.eq(id))
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Project image"))?;

    image.delete(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Project image deleted".to_string(),
    };

    Ok(Json(res))
}
