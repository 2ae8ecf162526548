/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Read-only content for the public website plus the careers application
//! form. Routes keep the paths the deployed frontend calls.

use super::applicants::{MakeApplicantRequest, new_applicant};
use super::jobs::find_job;
use super::projects::{ProjectDetailsResponse, project_details};
use super::services::{CategoryDetailsResponse, ServiceDetailsResponse, service_details};
use crate::error::{WebError, WebResult};
use atelier_core::types::*;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use chrono::Utc;
use entity::applicant::STATUS_PENDING;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_projects(
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

pub async fn get_clients(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<MClient>>>> {
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

pub async fn get_testimonials(
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

pub async fn get_services(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<MMainService>>>> {
    let services = EMainService::find()
        .order_by_asc(CMainService::CreatedAt)
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: services,
    };

    Ok(Json(res))
}

pub async fn get_service(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<ServiceDetailsResponse>>> {
    let details = service_details(&state.db, id).await?;

    let res = BaseResponse {
        error: false,
        message: details,
    };

    Ok(Json(res))
}

/// Every category with its sub-categories, for the services menu.
pub async fn get_categories(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<CategoryDetailsResponse>>>> {
    let categories = EMainServicesCategory::find()
        .order_by_asc(CMainServicesCategory::Title)
        .all(&state.db)
        .await?;

    let mut sub_categories: HashMap<Uuid, Vec<MMainServicesSubCategory>> = HashMap::new();
    for sub_category in EMainServicesSubCategory::find()
        .order_by_asc(CMainServicesSubCategory::Title)
        .all(&state.db)
        .await?
    {
        sub_categories
            .entry(sub_category.category_id)
            .or_default()
            .push(sub_category);
    }

    let categories = categories
        .into_iter()
        .map(|category| CategoryDetailsResponse {
            sub_categories: sub_categories.remove(&category.id).unwrap_or_default(),
            category,
        })
        .collect();

    let res = BaseResponse {
        error: false,
        message: categories,
    };

    Ok(Json(res))
}

pub async fn get_achievements(
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

/// Open positions: jobs whose deadline has not passed yet.
pub async fn get_jobs(state: State<Arc<ServerState>>) -> WebResult<Json<BaseResponse<Vec<MJob>>>> {
    let today = Utc::now().date_naive();

    let jobs = EJob::find()
        .filter(CJob::Deadline.gte(today))
        .order_by_asc(CJob::Deadline)
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: jobs,
    };

    Ok(Json(res))
}

pub async fn get_job(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MJob>>> {
    let job = find_job(&state, id).await?;

    let res = BaseResponse {
        error: false,
        message: job,
    };

    Ok(Json(res))
}

pub async fn post_apply(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<MakeApplicantRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<Uuid>>> {
    let Json(body) = payload?;
    let job = find_job(&state, id).await?;

    if job.deadline < Utc::now().date_naive() {
        return Err(WebError::BadRequest(
            "Applications for this job are closed".to_string(),
        ));
    }

    let applicant = new_applicant(body, &job, STATUS_PENDING)?
        .insert(&state.db)
        .await?;

    tracing::info!("New application {} for job {}", applicant.id, job.id);

    let res = BaseResponse {
        error: false,
        message: applicant.id,
    };

    Ok(Json(res))
}
