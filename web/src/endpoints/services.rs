/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Service categories, their sub-categories and the services filed under
//! them. Removing a category or sub-category takes everything below it.

use crate::error::{WebError, WebResult, check};
use atelier_core::database::{
    CascadeReport, MissingParent, delete_service_category, delete_service_sub_category,
    find_missing_service_parent, move_service_sub_category,
};
use atelier_core::input::*;
use atelier_core::types::*;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeCategoryRequest {
    pub title: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeSubCategoryRequest {
    pub title: String,
    pub category_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchSubCategoryRequest {
    pub title: Option<String>,
    pub category_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeServiceRequest {
    pub sub_title: String,
    pub logo: String,
    pub background_image: Option<String>,
    pub video_link: Option<String>,
    #[serde(default)]
    pub description: String,
    pub category_id: Uuid,
    pub sub_category_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchServiceRequest {
    pub sub_title: Option<String>,
    pub logo: Option<String>,
    pub background_image: Option<String>,
    pub video_link: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub sub_category_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ServiceFilter {
    pub category: Option<Uuid>,
    pub sub_category: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryDetailsResponse {
    #[serde(flatten)]
    pub category: MMainServicesCategory,
    pub sub_categories: Vec<MMainServicesSubCategory>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceDetailsResponse {
    #[serde(flatten)]
    pub service: MMainService,
    pub category: Option<MMainServicesCategory>,
    pub sub_category: Option<MMainServicesSubCategory>,
}

fn check_optional_image(field: &str, value: Option<String>) -> WebResult<Option<String>> {
    let value = normalize_optional(value);
    if let Some(name) = &value {
        check(field, validate_image_name(name))?;
    }

    Ok(value)
}

fn check_optional_video(value: Option<String>) -> WebResult<Option<String>> {
    let value = normalize_optional(value);
    if let Some(link) = &value {
        check("video_link", validate_video_link(link))?;
    }

    Ok(value)
}

async fn find_category(state: &ServerState, id: Uuid) -> WebResult<MMainServicesCategory> {
    EMainServicesCategory::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Service category"))
}

async fn find_sub_category(state: &ServerState, id: Uuid) -> WebResult<MMainServicesSubCategory> {
    EMainServicesSubCategory::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Service sub-category"))
}

async fn find_service(state: &ServerState, id: Uuid) -> WebResult<MMainService> {
    EMainService::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Service"))
}

async fn ensure_unique_category_title(
    state: &ServerState,
    title: &str,
    except: Option<Uuid>,
) -> WebResult<()> {
    let mut condition = Condition::all().add(CMainServicesCategory::Title.eq(title));
    if let Some(id) = except {
        condition = condition.add(CMainServicesCategory::Id.ne(id));
    }

    let existing = EMainServicesCategory::find()
        .filter(condition)
        .one(&state.db)
        .await?;

    if existing.is_some() {
        return Err(WebError::already_exists("Service category"));
    }

    Ok(())
}

async fn ensure_unique_sub_category_title(
    state: &ServerState,
    category_id: Uuid,
    title: &str,
    except: Option<Uuid>,
) -> WebResult<()> {
    let mut condition = Condition::all()
        .add(CMainServicesSubCategory::CategoryId.eq(category_id))
        .add(CMainServicesSubCategory::Title.eq(title));
    if let Some(id) = except {
        condition = condition.add(CMainServicesSubCategory::Id.ne(id));
    }

    let existing = EMainServicesSubCategory::find()
        .filter(condition)
        .one(&state.db)
        .await?;

    if existing.is_some() {
        return Err(WebError::already_exists("Service sub-category"));
    }

    Ok(())
}

async fn ensure_service_parents(
    state: &ServerState,
    category_id: Uuid,
    sub_category_id: Uuid,
) -> WebResult<()> {
    match find_missing_service_parent(&state.db, category_id, sub_category_id).await? {
        Some(parent) => Err(parent.into()),
        None => Ok(()),
    }
}

pub(crate) async fn category_details<C>(
    db: &C,
    category: MMainServicesCategory,
) -> WebResult<CategoryDetailsResponse>
where
    C: ConnectionTrait,
{
    let sub_categories = EMainServicesSubCategory::find()
        .filter(CMainServicesSubCategory::CategoryId.eq(category.id))
        .order_by_asc(CMainServicesSubCategory::Title)
        .all(db)
        .await?;

    Ok(CategoryDetailsResponse {
        category,
        sub_categories,
    })
}

pub(crate) async fn service_details<C>(db: &C, id: Uuid) -> WebResult<ServiceDetailsResponse>
where
    C: ConnectionTrait,
{
    let service = EMainService::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| WebError::not_found("Service"))?;

    let category = EMainServicesCategory::find_by_id(service.category_id)
        .one(db)
        .await?;

    let sub_category = EMainServicesSubCategory::find_by_id(service.sub_category_id)
        .one(db)
        .await?;

    Ok(ServiceDetailsResponse {
        service,
        category,
        sub_category,
    })
}

pub async fn get_categories(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<MMainServicesCategory>>>> {
    let categories = EMainServicesCategory::find()
        .order_by_asc(CMainServicesCategory::Title)
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: categories,
    };

    Ok(Json(res))
}

pub async fn post_category(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeCategoryRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MMainServicesCategory>>> {
    let Json(body) = payload?;
    let title = body.title.trim().to_string();

    check("title", check_required("Title", &title))?;
    ensure_unique_category_title(&state, &title, None).await?;

    let now = Utc::now().naive_utc();
    let category = AMainServicesCategory {
        id: Set(Uuid::new_v4()),
        title: Set(title),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&state.db)
    .await?;

    let res = BaseResponse {
        error: false,
        message: category,
    };

    Ok(Json(res))
}

pub async fn get_category(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<CategoryDetailsResponse>>> {
    let category = find_category(&state, id).await?;
    let details = category_details(&state.db, category).await?;

    let res = BaseResponse {
        error: false,
        message: details,
    };

    Ok(Json(res))
}

pub async fn patch_category(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<MakeCategoryRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MMainServicesCategory>>> {
    let Json(body) = payload?;
    let title = body.title.trim().to_string();

    check("title", check_required("Title", &title))?;

    let category = find_category(&state, id).await?;
    ensure_unique_category_title(&state, &title, Some(category.id)).await?;

    let mut acategory: AMainServicesCategory = category.into();
    acategory.title = Set(title);
    acategory.updated_at = Set(Utc::now().naive_utc());
    let category = acategory.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: category,
    };

    Ok(Json(res))
}

pub async fn delete_category(
    state: State<Arc<ServerState>>,
    Extension(admin): Extension<MAdmin>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<CascadeReport>>> {
    let report = delete_service_category(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Service category"))?;

    tracing::info!(
        "Admin {} deleted service category {} ({} sub-categories, {} services)",
        admin.email,
        id,
        report.sub_categories,
        report.services
    );

    let res = BaseResponse {
        error: false,
        message: report,
    };

    Ok(Json(res))
}

pub async fn get_sub_categories(
    state: State<Arc<ServerState>>,
    filter: Result<Query<ServiceFilter>, QueryRejection>,
) -> WebResult<Json<BaseResponse<Vec<MMainServicesSubCategory>>>> {
    let Query(filter) = filter?;
    let mut query = EMainServicesSubCategory::find().order_by_asc(CMainServicesSubCategory::Title);

    if let Some(category) = filter.category {
        query = query.filter(CMainServicesSubCategory::CategoryId.eq(category));
    }

    let sub_categories = query.all(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: sub_categories,
    };

    Ok(Json(res))
}

pub async fn post_sub_category(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeSubCategoryRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MMainServicesSubCategory>>> {
    let Json(body) = payload?;
    let title = body.title.trim().to_string();

    check("title", check_required("Title", &title))?;

    if EMainServicesCategory::find_by_id(body.category_id)
        .one(&state.db)
        .await?
        .is_none()
    {
        return Err(MissingParent::Category.into());
    }

    ensure_unique_sub_category_title(&state, body.category_id, &title, None).await?;

    let now = Utc::now().naive_utc();
    let sub_category = AMainServicesSubCategory {
        id: Set(Uuid::new_v4()),
        title: Set(title),
        category_id: Set(body.category_id),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&state.db)
    .await?;

    let res = BaseResponse {
        error: false,
        message: sub_category,
    };

    Ok(Json(res))
}

pub async fn get_sub_category(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MMainServicesSubCategory>>> {
    let sub_category = find_sub_category(&state, id).await?;

    let res = BaseResponse {
        error: false,
        message: sub_category,
    };

    Ok(Json(res))
}

pub async fn patch_sub_category(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<PatchSubCategoryRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MMainServicesSubCategory>>> {
    let Json(body) = payload?;
    let sub_category = find_sub_category(&state, id).await?;

    let category_id = body.category_id.unwrap_or(sub_category.category_id);
    let title = match body.title {
        Some(title) => {
            check("title", check_required("Title", &title))?;
            title.trim().to_string()
        }
        None => sub_category.title.clone(),
    };

    if category_id != sub_category.category_id
        && EMainServicesCategory::find_by_id(category_id)
            .one(&state.db)
            .await?
            .is_none()
    {
        return Err(MissingParent::Category.into());
    }

    ensure_unique_sub_category_title(&state, category_id, &title, Some(sub_category.id)).await?;

    let (sub_category, _) =
        move_service_sub_category(&state.db, sub_category, title, category_id).await?;

    let res = BaseResponse {
        error: false,
        message: sub_category,
    };

    Ok(Json(res))
}

pub async fn delete_sub_category(
    state: State<Arc<ServerState>>,
    Extension(admin): Extension<MAdmin>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<CascadeReport>>> {
    let report = delete_service_sub_category(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Service sub-category"))?;

    tracing::info!(
        "Admin {} deleted service sub-category {} ({} services)",
        admin.email,
        id,
        report.services
    );

    let res = BaseResponse {
        error: false,
        message: report,
    };

    Ok(Json(res))
}

pub async fn get_services(
    state: State<Arc<ServerState>>,
    filter: Result<Query<ServiceFilter>, QueryRejection>,
) -> WebResult<Json<BaseResponse<Vec<MMainService>>>> {
    let Query(filter) = filter?;
    let mut query = EMainService::find().order_by_asc(CMainService::CreatedAt);

    if let Some(category) = filter.category {
        query = query.filter(CMainService::CategoryId.eq(category));
    }

    if let Some(sub_category) = filter.sub_category {
        query = query.filter(CMainService::SubCategoryId.eq(sub_category));
    }

    let services = query.all(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: services,
    };

    Ok(Json(res))
}

pub async fn post_service(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeServiceRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MMainService>>> {
    let Json(body) = payload?;

    check("sub_title", check_required("Sub title", &body.sub_title))?;
    check("logo", validate_image_name(&body.logo))?;
    let background_image = check_optional_image("background_image", body.background_image)?;
    let video_link = check_optional_video(body.video_link)?;

    ensure_service_parents(&state, body.category_id, body.sub_category_id).await?;

    let now = Utc::now().naive_utc();
    let service = AMainService {
        id: Set(Uuid::new_v4()),
        sub_title: Set(body.sub_title.trim().to_string()),
        logo: Set(body.logo.trim().to_string()),
        background_image: Set(background_image),
        video_link: Set(video_link),
        description: Set(body.description),
        category_id: Set(body.category_id),
        sub_category_id: Set(body.sub_category_id),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&state.db)
    .await?;

    let res = BaseResponse {
        error: false,
        message: service,
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

pub async fn patch_service(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<PatchServiceRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MMainService>>> {
    let Json(body) = payload?;
    let service = find_service(&state, id).await?;

    let category_id = body.category_id.unwrap_or(service.category_id);
    let sub_category_id = body.sub_category_id.unwrap_or(service.sub_category_id);

    if body.category_id.is_some() || body.sub_category_id.is_some() {
        ensure_service_parents(&state, category_id, sub_category_id).await?;
    }

    let mut aservice: AMainService = service.into();
    aservice.category_id = Set(category_id);
    aservice.sub_category_id = Set(sub_category_id);

    if let Some(sub_title) = body.sub_title {
        check("sub_title", check_required("Sub title", &sub_title))?;
        aservice.sub_title = Set(sub_title.trim().to_string());
    }

    if let Some(logo) = body.logo {
        check("logo", validate_image_name(&logo))?;
        aservice.logo = Set(logo.trim().to_string());
    }

    if body.background_image.is_some() {
        aservice.background_image =
            Set(check_optional_image("background_image", body.background_image)?);
    }

    if body.video_link.is_some() {
        aservice.video_link = Set(check_optional_video(body.video_link)?);
    }

    if let Some(description) = body.description {
        aservice.description = Set(description);
    }

    aservice.updated_at = Set(Utc::now().naive_utc());
    let service = aservice.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: service,
    };

    Ok(Json(res))
}

pub async fn delete_service(
    state: State<Arc<ServerState>>,
    Extension(admin): Extension<MAdmin>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<String>>> {
    let service = find_service(&state, id).await?;
    service.delete(&state.db).await?;

    tracing::info!("Admin {} deleted service {}", admin.email, id);

    let res = BaseResponse {
        error: false,
        message: "Service deleted".to_string(),
    };

    Ok(Json(res))
}
