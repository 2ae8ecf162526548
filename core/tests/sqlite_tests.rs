/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Runs the real migrations on SQLite to check foreign key behaviour

use atelier_core::database::*;
use atelier_core::seed::*;
use atelier_core::types::*;
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectOptions, Database, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr,
};
use tempfile::TempDir;
use uuid::Uuid;

async fn setup_db() -> (TempDir, DatabaseConnection) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("atelier.db").display());

    let mut opt = ConnectOptions::new(url);
    opt.max_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    (dir, db)
}

fn gallery_seed(dir: &TempDir, image_count: usize) -> SeedConfiguration {
    let password_file = dir.path().join("admin-password");
    std::fs::write(&password_file, "Blueprint2026\n").unwrap();

    let images: Vec<String> = (0..image_count)
        .map(|i| format!("museum-{i:04}.jpg"))
        .collect();

    let json = serde_json::json!({
        "admins": [{
            "name": "Office",
            "email": "Office@Atelier.example",
            "password_file": password_file.to_str().unwrap(),
        }],
        "categories": [{ "title": "Architecture" }, { "title": "Interior" }],
        "sub_categories": [
            { "title": "Residential", "category": "Architecture" },
            { "title": "Residential", "category": "Interior" },
        ],
        "services": [
            { "sub_title": "Homes", "logo": "home.svg", "category": "Architecture", "sub_category": "Residential" },
            { "sub_title": "Kitchens", "logo": "kitchen.svg", "category": "Interior", "sub_category": "Residential" },
        ],
        "projects": [{
            "title": "Museum Extension",
            "location": "Basel",
            "images": images,
        }],
        "jobs": [{ "position": "Architect", "location": "Berlin", "salary": "", "deadline": "2026-12-31" }],
        "applicants": [{ "name": "Sam", "email": "sam@example.com", "job": "Architect" }],
        "clients": [{ "name": "City of Basel", "logo": "basel.png" }],
    });

    serde_json::from_value(json).unwrap()
}

#[tokio::test]
async fn test_project_delete_removes_whole_gallery() {
    let (dir, db) = setup_db().await;
    let config = gallery_seed(&dir, 1374);
    assert!(config.validate().is_valid);

    let report = apply_seed(&db, &config).await.unwrap();
    assert_eq!(report.admins, 1);
    assert_eq!(report.projects, 1);
    assert_eq!(report.project_images, 1374);
    assert_eq!(report.services, 2);
    assert_eq!(report.applicants, 1);

    let project = EProject::find().one(&db).await.unwrap().unwrap();
    assert_eq!(count_project_images(&db, project.id).await.unwrap(), 1374);

    let cascade = delete_project(&db, project.id).await.unwrap().unwrap();
    assert_eq!(cascade.parents, 1);
    assert_eq!(cascade.project_images, 1374);

    assert_eq!(count_project_images(&db, project.id).await.unwrap(), 0);
    assert_eq!(EProjectImage::find().count(&db).await.unwrap(), 0);
    assert!(delete_project(&db, project.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_seed_is_not_applied_twice() {
    let (dir, db) = setup_db().await;
    let config = gallery_seed(&dir, 3);

    apply_seed(&db, &config).await.unwrap();
    let second = apply_seed(&db, &config).await.unwrap();

    assert_eq!(second, SeedReport::default());
    assert_eq!(EProjectImage::find().count(&db).await.unwrap(), 3);

    let admin = EAdmin::find()
        .filter(CAdmin::Email.eq("office@atelier.example"))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert!(password_auth::verify_password("Blueprint2026", &admin.password).is_ok());

    let applicant = EApplicant::find().one(&db).await.unwrap().unwrap();
    assert_eq!(applicant.status, "Pending");
    assert_eq!(applicant.choose_position, "Architect");
}

#[tokio::test]
async fn test_service_with_unknown_parent_is_rejected() {
    let (_dir, db) = setup_db().await;
    let now = Utc::now().naive_utc();

    let category = AMainServicesCategory {
        id: Set(Uuid::new_v4()),
        title: Set("Architecture".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&db)
    .await
    .unwrap();

    let sub_category = AMainServicesSubCategory {
        id: Set(Uuid::new_v4()),
        title: Set("Residential".to_string()),
        category_id: Set(category.id),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&db)
    .await
    .unwrap();

    let service = |category_id: Uuid, sub_category_id: Uuid| AMainService {
        id: Set(Uuid::new_v4()),
        sub_title: Set("Homes".to_string()),
        logo: Set("home.svg".to_string()),
        background_image: Set(None),
        video_link: Set(None),
        description: Set(String::new()),
        category_id: Set(category_id),
        sub_category_id: Set(sub_category_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let unknown = Uuid::new_v4();
    assert!(service(unknown, sub_category.id).insert(&db).await.is_err());
    assert!(service(category.id, unknown).insert(&db).await.is_err());
    assert_eq!(EMainService::find().count(&db).await.unwrap(), 0);

    assert_eq!(
        find_missing_service_parent(&db, unknown, sub_category.id)
            .await
            .unwrap(),
        Some(MissingParent::Category)
    );

    service(category.id, sub_category.id).insert(&db).await.unwrap();
    assert_eq!(EMainService::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_foreign_keys_cascade_without_application_help() {
    let (dir, db) = setup_db().await;
    apply_seed(&db, &gallery_seed(&dir, 10)).await.unwrap();

    let architecture = EMainServicesCategory::find()
        .filter(CMainServicesCategory::Title.eq("Architecture"))
        .one(&db)
        .await
        .unwrap()
        .unwrap();

    EMainServicesCategory::delete_by_id(architecture.id)
        .exec(&db)
        .await
        .unwrap();

    assert_eq!(EMainServicesSubCategory::find().count(&db).await.unwrap(), 1);
    assert_eq!(EMainService::find().count(&db).await.unwrap(), 1);

    let project = EProject::find().one(&db).await.unwrap().unwrap();
    EProject::delete_by_id(project.id).exec(&db).await.unwrap();
    assert_eq!(EProjectImage::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_service_category_cascades() {
    let (dir, db) = setup_db().await;
    apply_seed(&db, &gallery_seed(&dir, 1)).await.unwrap();

    let interior = EMainServicesCategory::find()
        .filter(CMainServicesCategory::Title.eq("Interior"))
        .one(&db)
        .await
        .unwrap()
        .unwrap();

    let report = delete_service_category(&db, interior.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(report.parents, 1);
    assert_eq!(report.sub_categories, 1);
    assert_eq!(report.services, 1);

    let remaining = EMainService::find().all(&db).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].sub_title, "Homes");
}

async fn insert_category(db: &DatabaseConnection, title: &str) -> Result<MMainServicesCategory, DbErr> {
    let now = Utc::now().naive_utc();

    AMainServicesCategory {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
}

async fn insert_sub_category(
    db: &DatabaseConnection,
    category_id: Uuid,
    title: &str,
) -> Result<MMainServicesSubCategory, DbErr> {
    let now = Utc::now().naive_utc();

    AMainServicesSubCategory {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        category_id: Set(category_id),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
}

async fn insert_service(
    db: &DatabaseConnection,
    category_id: Uuid,
    sub_category_id: Uuid,
) -> Result<MMainService, DbErr> {
    let now = Utc::now().naive_utc();

    AMainService {
        id: Set(Uuid::new_v4()),
        sub_title: Set("Homes".to_string()),
        logo: Set("home.svg".to_string()),
        background_image: Set(None),
        video_link: Set(None),
        description: Set(String::new()),
        category_id: Set(category_id),
        sub_category_id: Set(sub_category_id),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
}

#[tokio::test]
async fn test_duplicate_titles_are_rejected_by_storage() {
    let (_dir, db) = setup_db().await;

    let architecture = insert_category(&db, "Architecture").await.unwrap();
    let err = insert_category(&db, "Architecture").await.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    let count = EMainServicesCategory::find()
        .filter(CMainServicesCategory::Title.eq("Architecture"))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let interior = insert_category(&db, "Interior").await.unwrap();
    insert_sub_category(&db, architecture.id, "Residential")
        .await
        .unwrap();
    insert_sub_category(&db, interior.id, "Residential")
        .await
        .unwrap();

    let err = insert_sub_category(&db, architecture.id, "Residential")
        .await
        .unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
}

#[tokio::test]
async fn test_service_needs_sub_category_of_its_category() {
    let (_dir, db) = setup_db().await;

    let architecture = insert_category(&db, "Architecture").await.unwrap();
    let interior = insert_category(&db, "Interior").await.unwrap();
    let kitchens = insert_sub_category(&db, interior.id, "Kitchens")
        .await
        .unwrap();

    assert_eq!(
        find_missing_service_parent(&db, architecture.id, kitchens.id)
            .await
            .unwrap(),
        Some(MissingParent::SubCategoryOutsideCategory)
    );
    assert_eq!(
        find_missing_service_parent(&db, interior.id, kitchens.id)
            .await
            .unwrap(),
        None
    );
}

#[tokio::test]
async fn test_moved_sub_category_takes_its_services() {
    let (_dir, db) = setup_db().await;

    let architecture = insert_category(&db, "Architecture").await.unwrap();
    let interior = insert_category(&db, "Interior").await.unwrap();
    let residential = insert_sub_category(&db, architecture.id, "Residential")
        .await
        .unwrap();
    let service = insert_service(&db, architecture.id, residential.id)
        .await
        .unwrap();

    let (moved, services) =
        move_service_sub_category(&db, residential, "Living".to_string(), interior.id)
            .await
            .unwrap();
    assert_eq!(moved.category_id, interior.id);
    assert_eq!(moved.title, "Living");
    assert_eq!(services, 1);

    let service = EMainService::find_by_id(service.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(service.category_id, interior.id);

    let report = delete_service_category(&db, architecture.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(report.services, 0);
    assert_eq!(EMainService::find().count(&db).await.unwrap(), 1);
}
