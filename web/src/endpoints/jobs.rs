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
use chrono::{NaiveDate, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeJobRequest {
    pub deadline: NaiveDate,
    pub position: String,
    pub location: String,
    #[serde(default)]
    pub salary: String,
    pub vacancies: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub key_responsibilities: String,
    #[serde(default)]
    pub skills_experience: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchJobRequest {
    pub deadline: Option<NaiveDate>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub vacancies: Option<i32>,
    pub description: Option<String>,
    pub key_responsibilities: Option<String>,
    pub skills_experience: Option<String>,
}

pub(crate) async fn find_job(state: &ServerState, id: Uuid) -> WebResult<MJob> {
    EJob::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Job"))
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<BaseResponse<Vec<MJob>>>> {
    let jobs = EJob::find()
        .order_by_asc(CJob::Deadline)
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: jobs,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeJobRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MJob>>> {
    let Json(body) = payload?;

    check("position", check_required("Position", &body.position))?;
    check("location", check_required("Location", &body.location))?;
    check("vacancies", validate_vacancies(body.vacancies))?;

    let now = Utc::now().naive_utc();
    let job = AJob {
        id: Set(Uuid::new_v4()),
        deadline: Set(body.deadline),
        position: Set(body.position.trim().to_string()),
        location: Set(body.location.trim().to_string()),
        salary: Set(body.salary.trim().to_string()),
        vacancies: Set(body.vacancies),
        description: Set(body.description),
        key_responsibilities: Set(body.key_responsibilities),
        skills_experience: Set(body.skills_experience),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let job = job.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: job,
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

pub async fn patch_job(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<PatchJobRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MJob>>> {
    let Json(body) = payload?;
    let job = find_job(&state, id).await?;
    let mut ajob: AJob = job.into();

    if let Some(deadline) = body.deadline {
        ajob.deadline = Set(deadline);
    }

    if let Some(position) = body.position {
        check("position", check_required("Position", &position))?;
        ajob.position = Set(position.trim().to_string());
    }

    if let Some(location) = body.location {
        check("location", check_required("Location", &location))?;
        ajob.location = Set(location.trim().to_string());
    }

    if let Some(salary) = body.salary {
        ajob.salary = Set(salary.trim().to_string());
    }

    if let Some(vacancies) = body.vacancies {
        check("vacancies", validate_vacancies(vacancies))?;
        ajob.vacancies = Set(vacancies);
    }

    if let Some(description) = body.description {
        ajob.description = Set(description);
    }

    if let Some(key_responsibilities) = body.key_responsibilities {
        ajob.key_responsibilities = Set(key_responsibilities);
    }

    if let Some(skills_experience) = body.skills_experience {
        ajob.skills_experience = Set(skills_experience);
    }

    ajob.updated_at = Set(Utc::now().naive_utc());
    let job = ajob.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: job,
    };

    Ok(Json(res))
}

/// Applicants keep their rows when the job goes; they only refer to it.
pub async fn delete_job(
    state: State<Arc<ServerState>>,
    Extension(admin): Extension<MAdmin>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    let job = find_job(&state, id).await?;
    job.delete(&state.db).await?;

    tracing::info!("Admin {} deleted job {}", admin.email, id);

    let res = BaseResponse {
        error: false,
        message: "Job deleted".to_string(),
    };

    Ok(Json(res))
}
