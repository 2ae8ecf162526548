/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for project and project image entities

use chrono::NaiveDate;
use entity::*;
use sea_orm::sea_query::ForeignKeyAction;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

fn naive_date() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn test_project_with_gallery() -> Result<(), DbErr> {
    let project_id = Uuid::new_v4();

    let project = project::Model {
        id: project_id,
        title: "Lakeside Residence".to_owned(),
        location: "Pokhara".to_owned(),
        description: "Two-storey family home facing the lake".to_owned(),
        cover_image: Some("lakeside-cover.jpg".to_owned()),
        created_at: naive_date(),
        updated_at: naive_date(),
    };

    let images = (0..3)
        .map(|i| project_image::Model {
            id: Uuid::new_v4(),
            image_name: format!("lakeside-{}.jpg", i),
            project_id,
            created_at: naive_date(),
            updated_at: naive_date(),
        })
        .collect::<Vec<_>>();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![project.clone()]])
        .append_query_results([images.clone()])
        .into_connection();

    let found = project::Entity::find_by_id(project_id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(found.title, "Lakeside Residence");

    let gallery = found.find_related(project_image::Entity).all(&db).await?;
    assert_eq!(gallery.len(), 3);
    assert!(gallery.iter().all(|i| i.project_id == project_id));
    assert_eq!(gallery[2].image_name, "lakeside-2.jpg");

    Ok(())
}

#[test]
fn test_project_image_relation_cascades() {
    let relation = project_image::Relation::Project.def();

    assert!(matches!(relation.on_delete, Some(ForeignKeyAction::Cascade)));
    assert!(matches!(relation.on_update, Some(ForeignKeyAction::Cascade)));
}
