/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::consts::IMAGE_INSERT_CHUNK;
use super::types::*;

/// Rows removed by a cascading delete, parent included.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeReport {
    pub parents: u64,
    pub project_images: u64,
    pub sub_categories: u64,
    pub services: u64,
}

/// A service reference to a parent row that does not exist, or to a
/// sub-category filed under another category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingParent {
    Category,
    SubCategory,
    SubCategoryOutsideCategory,
}

impl std::fmt::Display for MissingParent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingParent::Category => write!(f, "Service category does not exist"),
            MissingParent::SubCategory => write!(f, "Service sub-category does not exist"),
            MissingParent::SubCategoryOutsideCategory => write!(
                f,
                "Service sub-category does not belong to the service category"
            ),
        }
    }
}

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file)
            .context("Failed to read database url from file")?
            .trim()
            .to_string()
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(cli.database_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(300));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database connected and migrated");
    Ok(db)
}

/// Deletes a project together with its gallery in one transaction.
///
/// Returns `None` when the project does not exist; nothing is removed then.
pub async fn delete_project<C>(db: &C, project_id: Uuid) -> Result<Option<CascadeReport>, DbErr>
where
    C: TransactionTrait,
{
    let txn = db.begin().await?;

    let images = EProjectImage::delete_many()
        .filter(CProjectImage::ProjectId.eq(project_id))
        .exec(&txn)
        .await?;

    let project = EProject::delete_by_id(project_id).exec(&txn).await?;

    if project.rows_affected == 0 {
        txn.rollback().await?;
        return Ok(None);
    }

    txn.commit().await?;

    tracing::info!(
        "Deleted project {} with {} images",
        project_id,
        images.rows_affected
    );

    Ok(Some(CascadeReport {
        parents: project.rows_affected,
        project_images: images.rows_affected,
        ..Default::default()
    }))
}

/// Deletes a service category, its sub-categories and every service that
/// references either of them.
pub async fn delete_service_category<C>(
    db: &C,
    category_id: Uuid,
) -> Result<Option<CascadeReport>, DbErr>
where
    C: TransactionTrait,
{
    let txn = db.begin().await?;

    let sub_categories_of_category = Query::select()
        .column(CMainServicesSubCategory::Id)
        .from(EMainServicesSubCategory::default())
        .and_where(CMainServicesSubCategory::CategoryId.eq(category_id))
        .to_owned();

    let services = EMainService::delete_many()
        .filter(
            Condition::any()
                .add(CMainService::CategoryId.eq(category_id))
                .add(CMainService::SubCategoryId.in_subquery(sub_categories_of_category)),
        )
        .exec(&txn)
        .await?;

    let sub_categories = EMainServicesSubCategory::delete_many()
        .filter(CMainServicesSubCategory::CategoryId.eq(category_id))
        .exec(&txn)
        .await?;

    let category = EMainServicesCategory::delete_by_id(category_id)
        .exec(&txn)
        .await?;

    if category.rows_affected == 0 {
        txn.rollback().await?;
        return Ok(None);
    }

    txn.commit().await?;

    tracing::info!(
        "Deleted service category {} with {} sub-categories and {} services",
        category_id,
        sub_categories.rows_affected,
        services.rows_affected
    );

    Ok(Some(CascadeReport {
        parents: category.rows_affected,
        sub_categories: sub_categories.rows_affected,
        services: services.rows_affected,
        ..Default::default()
    }))
}

/// Deletes a service sub-category and the services filed under it.
pub async fn delete_service_sub_category<C>(
    db: &C,
    sub_category_id: Uuid,
) -> Result<Option<CascadeReport>, DbErr>
where
    C: TransactionTrait,
{
    let txn = db.begin().await?;

    let services = EMainService::delete_many()
        .filter(CMainService::SubCategoryId.eq(sub_category_id))
        .exec(&txn)
        .await?;

    let sub_category = EMainServicesSubCategory::delete_by_id(sub_category_id)
        .exec(&txn)
        .await?;

    if sub_category.rows_affected == 0 {
        txn.rollback().await?;
        return Ok(None);
    }

    txn.commit().await?;

    tracing::info!(
        "Deleted service sub-category {} with {} services",
        sub_category_id,
        services.rows_affected
    );

    Ok(Some(CascadeReport {
        parents: sub_category.rows_affected,
        services: services.rows_affected,
        ..Default::default()
    }))
}

/// Checks that both parents of a service exist and agree with each other
/// before it is written.
pub async fn find_missing_service_parent<C>(
    db: &C,
    category_id: Uuid,
    sub_category_id: Uuid,
) -> Result<Option<MissingParent>, DbErr>
where
    C: ConnectionTrait,
{
    let categories = EMainServicesCategory::find_by_id(category_id)
        .count(db)
        .await?;

    if categories == 0 {
        return Ok(Some(MissingParent::Category));
    }

    let Some(sub_category) = EMainServicesSubCategory::find_by_id(sub_category_id)
        .one(db)
        .await?
    else {
        return Ok(Some(MissingParent::SubCategory));
    };

    if sub_category.category_id != category_id {
        return Ok(Some(MissingParent::SubCategoryOutsideCategory));
    }

    Ok(None)
}

/// Renames a sub-category or files it under another category. Services
/// below it follow it to the new category in the same transaction.
///
/// Returns the updated sub-category and the number of services moved.
pub async fn move_service_sub_category<C>(
    db: &C,
    sub_category: MMainServicesSubCategory,
    title: String,
    category_id: Uuid,
) -> Result<(MMainServicesSubCategory, u64), DbErr>
where
    C: TransactionTrait,
{
    let previous_category_id = sub_category.category_id;
    let now = Utc::now().naive_utc();
    let txn = db.begin().await?;

    let mut asub_category: AMainServicesSubCategory = sub_category.into();
    asub_category.title = Set(title);
    asub_category.category_id = Set(category_id);
    asub_category.updated_at = Set(now);
    let sub_category = asub_category.update(&txn).await?;

    let mut moved = 0;
    if previous_category_id != category_id {
        moved = EMainService::update_many()
            .col_expr(CMainService::CategoryId, Expr::value(category_id))
            .col_expr(CMainService::UpdatedAt, Expr::value(now))
            .filter(CMainService::SubCategoryId.eq(sub_category.id))
            .exec(&txn)
            .await?
            .rows_affected;
    }

    txn.commit().await?;

    if moved > 0 {
        tracing::info!(
            "Moved service sub-category {} with {} services to category {}",
            sub_category.id,
            moved,
            category_id
        );
    }

    Ok((sub_category, moved))
}

pub async fn count_project_images<C>(db: &C, project_id: Uuid) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    EProjectImage::find()
        .filter(CProjectImage::ProjectId.eq(project_id))
        .count(db)
        .await
}

/// Bulk inserts gallery rows for one project.
pub async fn insert_project_images<C>(
    db: &C,
    project_id: Uuid,
    image_names: &[String],
) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let now = Utc::now().naive_utc();
    let mut inserted = 0;

    for chunk in image_names.chunks(IMAGE_INSERT_CHUNK) {
        let images = chunk.iter().map(|name| AProjectImage {
            id: Set(Uuid::new_v4()),
            image_name: Set(name.trim().to_string()),
            project_id: Set(project_id),
            created_at: Set(now),
            updated_at: Set(now),
        });

        inserted += EProjectImage::insert_many(images)
            .exec_without_returning(db)
            .await?;
    }

    Ok(inserted)
}

/// Appends images to an existing gallery. Either every image is added or
/// none is.
pub async fn add_project_images<C>(
    db: &C,
    project_id: Uuid,
    image_names: &[String],
) -> Result<u64, DbErr>
where
    C: TransactionTrait,
{
    let txn = db.begin().await?;
    let inserted = insert_project_images(&txn, project_id, image_names).await?;
    txn.commit().await?;

    Ok(inserted)
}
