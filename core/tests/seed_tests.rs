/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for seed file parsing and validation

use atelier_core::seed::*;
use sea_orm::{DatabaseBackend, MockDatabase};

fn sample_json() -> &'static str {
    r#"{
        "admins": [
            { "name": "Office", "email": "office@atelier.example", "password_file": "/run/secrets/office" }
        ],
        "categories": [ { "title": "Architecture" } ],
        "sub_categories": [ { "title": "Residential", "category": "Architecture" } ],
        "services": [
            {
                "sub_title": "Private homes",
                "logo": "house.svg",
                "video_link": "https://www.youtube.com/watch?v=abc",
                "category": "Architecture",
                "sub_category": "Residential"
            }
        ],
        "projects": [
            { "title": "Lakeside Villa", "location": "Zurich", "images": ["a.jpg", "b.jpg"] }
        ],
        "jobs": [
            { "position": "Architect", "location": "Berlin", "salary": "Negotiable", "deadline": "2026-12-31" }
        ],
        "applicants": [
            { "name": "Sam Doe", "email": "sam@example.com", "job": "Architect", "status": "ShortListed" }
        ],
        "achievements": [ { "title": "Projects done", "count": 120 } ]
    }"#
}

fn error_fields(config: &SeedConfiguration) -> Vec<String> {
    config
        .validate()
        .errors
        .into_iter()
        .map(|e| e.field)
        .collect()
}

#[test]
fn test_parse_seed_defaults() {
    let config: SeedConfiguration = serde_json::from_str(sample_json()).unwrap();

    assert_eq!(config.admins.len(), 1);
    assert_eq!(config.projects[0].images.len(), 2);
    assert_eq!(config.projects[0].description, "");
    assert_eq!(config.jobs[0].vacancies, 1);
    assert_eq!(config.applicants[0].status, "ShortListed");
    assert!(config.testimonials.is_empty());
    assert!(config.clients.is_empty());

    let result = config.validate();
    assert!(result.is_valid, "{:?}", result.errors);
}

#[test]
fn test_applicant_status_defaults_to_pending() {
    let config: SeedConfiguration = serde_json::from_str(
        r#"{
            "jobs": [ { "position": "Intern", "location": "Vienna", "salary": "", "deadline": "2026-06-01" } ],
            "applicants": [ { "name": "Kim", "email": "kim@example.com", "job": "Intern" } ]
        }"#,
    )
    .unwrap();

    assert_eq!(config.applicants[0].status, "Pending");
    assert!(config.validate().is_valid);
}

#[test]
fn test_validation_collects_all_errors() {
    let mut config: SeedConfiguration = serde_json::from_str(sample_json()).unwrap();
    config.admins.push(config.admins[0].clone());
    config.sub_categories[0].category = "Interiors".to_string();
    config.projects[0].images.push("../etc/passwd".to_string());
    config.jobs[0].vacancies = 0;
    config.applicants[0].job = "Draftsman".to_string();
    config.achievements[0].count = -5;

    let result = config.validate();
    assert!(!result.is_valid);

    let fields = error_fields(&config);
    assert!(fields.contains(&"admins.office@atelier.example.email".to_string()));
    assert!(fields.contains(&"sub_categories.Residential.category".to_string()));
    assert!(fields.contains(&"services.Private homes.sub_category".to_string()));
    assert!(fields.contains(&"projects.Lakeside Villa.images".to_string()));
    assert!(fields.contains(&"jobs.Architect.vacancies".to_string()));
    assert!(fields.contains(&"applicants.sam@example.com.job".to_string()));
    assert!(fields.contains(&"achievements.Projects done.count".to_string()));
}

#[test]
fn test_service_requires_known_category() {
    let mut config: SeedConfiguration = serde_json::from_str(sample_json()).unwrap();
    config.services[0].category = "Landscape".to_string();

    let fields = error_fields(&config);
    assert_eq!(fields, vec!["services.Private homes.category".to_string()]);
}

#[test]
fn test_references_ignore_surrounding_whitespace() {
    let mut config: SeedConfiguration = serde_json::from_str(sample_json()).unwrap();
    config.sub_categories[0].category = " Architecture".to_string();
    config.services[0].category = "Architecture ".to_string();
    config.services[0].sub_category = " Residential ".to_string();
    config.applicants[0].job = "Architect\n".to_string();

    let result = config.validate();
    assert!(result.is_valid, "{:?}", result.errors);

    config.categories.push(SeedCategory {
        title: "Architecture ".to_string(),
    });
    config.jobs.push(config.jobs[0].clone());
    config.jobs[1].position = " Architect".to_string();

    let fields = error_fields(&config);
    assert!(fields.contains(&"categories.Architecture .title".to_string()));
    assert!(fields.contains(&"jobs. Architect.position".to_string()));
}

#[test]
fn test_validation_error_display() {
    let error = ValidationError {
        field: "jobs.Architect.vacancies".to_string(),
        message: "Vacancies must be at least 1".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Validation error in field 'jobs.Architect.vacancies': Vacancies must be at least 1"
    );
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    std::fs::write(&path, sample_json()).unwrap();

    let config = SeedConfiguration::from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(config.services[0].sub_category, "Residential");

    std::fs::write(&path, "{ not json").unwrap();
    assert!(SeedConfiguration::from_file(path.to_str().unwrap()).is_err());
    assert!(SeedConfiguration::from_file("/nonexistent/seed.json").is_err());
}

#[tokio::test]
async fn test_no_seed_file_touches_nothing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let report = load_and_apply_seed(&db, None).await.unwrap();
    assert!(report.is_none());
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn test_invalid_seed_file_is_rejected_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    std::fs::write(
        &path,
        r#"{ "clients": [ { "name": "", "logo": "https://cdn.example.com/logo.png" } ] }"#,
    )
    .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let error = load_and_apply_seed(&db, path.to_str())
        .await
        .unwrap_err()
        .to_string();

    assert!(error.contains("clients..name"));
    assert!(error.contains("clients..logo"));
    assert!(db.into_transaction_log().is_empty());
}
