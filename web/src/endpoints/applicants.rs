/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::jobs::find_job;
use crate::error::{WebError, WebResult, check};
use atelier_core::input::*;
use atelier_core::types::*;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use chrono::Utc;
use entity::applicant::STATUS_PENDING;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MakeApplicantRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub choose_position: String,
    pub portfolio: Option<String>,
    pub resume: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AdminApplicantRequest {
    #[serde(flatten)]
    pub applicant: MakeApplicantRequest,
    pub job_id: Uuid,
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchApplicantRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub salary: Option<String>,
    pub choose_position: Option<String>,
    pub portfolio: Option<String>,
    pub resume: Option<String>,
    pub job_id: Option<Uuid>,
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApplicantStatusRequest {
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ApplicantFilter {
    pub job: Option<Uuid>,
    pub status: Option<String>,
}

/// Builds a new applicant row for `job`. An empty position falls back to
/// the job's own position.
pub(crate) fn new_applicant(
    body: MakeApplicantRequest,
    job: &MJob,
    status: &str,
) -> WebResult<AApplicant> {
    check("name", check_required("Name", &body.name))?;
    check("email", validate_email(&body.email))?;
    check("status", check_required("Status", status))?;

    let portfolio = normalize_optional(body.portfolio);
    let resume = normalize_optional(body.resume);

    if let Some(portfolio) = &portfolio {
        check("portfolio", validate_image_name(portfolio))?;
    }

    if let Some(resume) = &resume {
        check("resume", validate_image_name(resume))?;
    }

    let choose_position = match body.choose_position.trim() {
        "" => job.position.clone(),
        position => position.to_string(),
    };

    let now = Utc::now().naive_utc();
    Ok(AApplicant {
        id: Set(Uuid::new_v4()),
        name: Set(body.name.trim().to_string()),
        email: Set(body.email.trim().to_string()),
        phone: Set(body.phone.trim().to_string()),
        address: Set(body.address),
        education: Set(body.education),
        experience: Set(body.experience),
        salary: Set(body.salary.trim().to_string()),
        choose_position: Set(choose_position),
        portfolio: Set(portfolio),
        resume: Set(resume),
        job_id: Set(job.id),
        status: Set(status.trim().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    })
}

async fn find_applicant(state: &ServerState, id: Uuid) -> WebResult<MApplicant> {
    EApplicant::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Applicant"))
}

pub async fn get(
    state: State<Arc<ServerState>>,
    filter: Result<Query<ApplicantFilter>, QueryRejection>,
) -> WebResult<Json<BaseResponse<Vec<MApplicant>>>> {
    let Query(filter) = filter?;
    let mut query = EApplicant::find().order_by_desc(CApplicant::CreatedAt);

    if let Some(job) = filter.job {
        query = query.filter(CApplicant::JobId.eq(job));
    }

    if let Some(status) = normalize_optional(filter.status) {
        query = query.filter(CApplicant::Status.eq(status));
    }

    let applicants = query.all(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: applicants,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    payload: Result<Json<AdminApplicantRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MApplicant>>> {
    let Json(body) = payload?;
    let job = find_job(&state, body.job_id).await?;
    let status = body.status.unwrap_or_else(|| STATUS_PENDING.to_string());

    let applicant = new_applicant(body.applicant, &job, &status)?
        .insert(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: applicant,
    };

    Ok(Json(res))
}

pub async fn get_applicant(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MApplicant>>> {
    let applicant = find_applicant(&state, id).await?;

    let res = BaseResponse {
        error: false,
        message: applicant,
    };

    Ok(Json(res))
}

pub async fn patch_applicant(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<PatchApplicantRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MApplicant>>> {
    let Json(body) = payload?;
    let applicant = find_applicant(&state, id).await?;
    let mut aapplicant: AApplicant = applicant.into();

    if let Some(name) = body.name {
        check("name", check_required("Name", &name))?;
        aapplicant.name = Set(name.trim().to_string());
    }

    if let Some(email) = body.email {
        check("email", validate_email(&email))?;
        aapplicant.email = Set(email.trim().to_string());
    }

    if let Some(phone) = body.phone {
        aapplicant.phone = Set(phone.trim().to_string());
    }

    if let Some(address) = body.address {
        aapplicant.address = Set(address);
    }

    if let Some(education) = body.education {
        aapplicant.education = Set(education);
    }

    if let Some(experience) = body.experience {
        aapplicant.experience = Set(experience);
    }

    if let Some(salary) = body.salary {
        aapplicant.salary = Set(salary.trim().to_string());
    }

    if let Some(choose_position) = body.choose_position {
        aapplicant.choose_position = Set(choose_position.trim().to_string());
    }

    if let Some(portfolio) = body.portfolio {
        let portfolio = normalize_optional(Some(portfolio));
        if let Some(name) = &portfolio {
            check("portfolio", validate_image_name(name))?;
        }
        aapplicant.portfolio = Set(portfolio);
    }

    if let Some(resume) = body.resume {
        let resume = normalize_optional(Some(resume));
        if let Some(name) = &resume {
            check("resume", validate_image_name(name))?;
        }
        aapplicant.resume = Set(resume);
    }

    if let Some(job_id) = body.job_id {
        let job = find_job(&state, job_id).await?;
        aapplicant.job_id = Set(job.id);
    }

    if let Some(status) = body.status {
        check("status", check_required("Status", &status))?;
        aapplicant.status = Set(status.trim().to_string());
    }

    aapplicant.updated_at = Set(Utc::now().naive_utc());
    let applicant = aapplicant.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: applicant,
    };

    Ok(Json(res))
}

/// Moves an application along the hiring pipeline. Any non-empty label is
/// accepted.
pub async fn patch_applicant_status(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<ApplicantStatusRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MApplicant>>> {
    let Json(body) = payload?;
    check("status", check_required("Status", &body.status))?;

    let applicant = find_applicant(&state, id).await?;
    let mut aapplicant: AApplicant = applicant.into();

    aapplicant.status = Set(body.status.trim().to_string());
    aapplicant.updated_at = Set(Utc::now().naive_utc());
    let applicant = aapplicant.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: applicant,
    };

    Ok(Json(res))
}

pub async fn delete_applicant(
    state: State<Arc<ServerState>>,
    Extension(admin): Extension<MAdmin>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    let applicant = find_applicant(&state, id).await?;
    applicant.delete(&state.db).await?;

    tracing::info!("Admin {} deleted applicant {}", admin.email, id);

    let res = BaseResponse {
        error: false,
        message: "Applicant deleted".to_string(),
    };

    Ok(Json(res))
}
