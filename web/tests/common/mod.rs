/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use atelier_core::types::*;
use axum_test::TestServer;
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::DatabaseConnection;
use std::sync::{Arc, LazyLock};
use uuid::Uuid;

pub const JWT_SECRET: &str = "test_jwt_secret";

static ADMIN_PASSWORD_HASH: LazyLock<String> =
    LazyLock::new(|| password_auth::generate_hash("Blueprint2026"));

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        debug: true,
        ip: "127.0.0.1".to_string(),
        port: 3000,
        frontend_url: "http://127.0.0.1:8000".to_string(),
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        database_max_connections: 1,
        jwt_secret_file: "test_jwt".to_string(),
        seed_file: None,
    }
}

pub fn create_mock_state(db: DatabaseConnection) -> Arc<ServerState> {
    Arc::new(ServerState {
        db,
        cli: create_mock_cli(),
        jwt_secret: JWT_SECRET.to_string(),
    })
}

pub fn create_test_server(db: DatabaseConnection) -> TestServer {
    TestServer::new(web::create_router(create_mock_state(db))).unwrap()
}

pub fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 5)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

pub fn admin_model() -> MAdmin {
    MAdmin {
        id: Uuid::parse_str("7c1f2a52-3a4e-4d1b-9d36-0f1a9c6b2e10").unwrap(),
        name: "Office".to_string(),
        email: "office@atelier.example".to_string(),
        password: ADMIN_PASSWORD_HASH.clone(),
        last_login_at: timestamp(),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn admin_token() -> String {
    web::auth::encode_jwt(JWT_SECRET, admin_model().id).unwrap()
}

pub fn job_model(deadline: NaiveDate) -> MJob {
    MJob {
        id: Uuid::new_v4(),
        deadline,
        position: "Architect".to_string(),
        location: "Berlin".to_string(),
        salary: "Negotiable".to_string(),
        vacancies: 2,
        description: "Design and deliver residential projects.".to_string(),
        key_responsibilities: "Concept design".to_string(),
        skills_experience: "Five years".to_string(),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn applicant_model(job_id: Uuid, status: &str) -> MApplicant {
    MApplicant {
        id: Uuid::new_v4(),
        name: "Sam Doe".to_string(),
        email: "sam@example.com".to_string(),
        phone: "+49 30 1234".to_string(),
        address: "Berlin".to_string(),
        education: "M.Arch".to_string(),
        experience: "4 years".to_string(),
        salary: "60k".to_string(),
        choose_position: "Architect".to_string(),
        portfolio: Some("sam-portfolio.pdf".to_string()),
        resume: None,
        job_id,
        status: status.to_string(),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn testimonial_model(name: &str) -> MTestimonial {
    MTestimonial {
        id: Uuid::new_v4(),
        name: name.to_string(),
        designation: "Homeowner".to_string(),
        message: "They listened.".to_string(),
        image: None,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}
