/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use atelier_core::types::*;
use axum::http::StatusCode;
use common::*;
use http::HeaderValue;
use http::header::AUTHORIZATION;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{Value, json};
use web::auth::{decode_jwt, encode_jwt};
use web::endpoints::auth::*;

#[test]
fn test_make_login_request_serialization() {
    let request = MakeLoginRequest {
        email: "office@atelier.example".to_string(),
        password: "Blueprint2026".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("office@atelier.example"));
    assert!(json.contains("Blueprint2026"));
}

#[test]
fn test_jwt_roundtrip_and_wrong_secret() {
    let admin = admin_model();
    let token = encode_jwt(JWT_SECRET, admin.id).unwrap();

    let data = decode_jwt(JWT_SECRET, &token).unwrap();
    assert_eq!(data.claims.id, admin.id);
    assert_eq!(data.claims.exp - data.claims.iat, 24 * 60 * 60);

    assert!(decode_jwt("another_secret", &token).is_err());
    assert!(decode_jwt(JWT_SECRET, "not.a.token").is_err());
}

#[test]
fn test_admin_profile_hides_password() {
    let profile: AdminProfile = admin_model().into();
    let json = serde_json::to_value(&profile).unwrap();

    assert_eq!(json["email"], "office@atelier.example");
    assert!(json.get("password").is_none());

    let model = serde_json::to_value(admin_model()).unwrap();
    assert!(model.get("password").is_none());
    assert!(!format!("{:?}", admin_model()).contains("$argon2"));
}

#[tokio::test]
async fn test_missing_authorization_header_is_forbidden() {
    let server = create_test_server(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

    let response = server.get("/admin/job").await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let body: Value = response.json();
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "Authorization header not found");
}

#[tokio::test]
async fn test_malformed_authorization_header_is_forbidden() {
    let server = create_test_server(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

    let response = server
        .get("/admin/auth/me")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Token abc"))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let response = server
        .get("/admin/auth/me")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer"))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    let server = create_test_server(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

    let response = server
        .get("/admin/auth/me")
        .authorization_bearer("garbage")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json();
    assert_eq!(body["message"], "Unable to decode token");
}

#[tokio::test]
async fn test_token_of_deleted_admin_is_unauthorized() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MAdmin>::new()])
        .into_connection();
    let server = create_test_server(db);

    let response = server
        .get("/admin/auth/me")
        .authorization_bearer(admin_token())
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_returns_profile() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![admin_model()]])
        .into_connection();
    let server = create_test_server(db);

    let response = server
        .get("/admin/auth/me")
        .authorization_bearer(admin_token())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["error"], false);
    assert_eq!(body["message"]["name"], "Office");
    assert_eq!(body["message"]["id"], admin_model().id.to_string());
}

#[tokio::test]
async fn test_login_issues_token() {
    let admin = admin_model();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![admin.clone()], vec![admin.clone()]])
        .into_connection();
    let server = create_test_server(db);

    let response = server
        .post("/admin/auth/login")
        .json(&json!({ "email": "Office@Atelier.example", "password": "Blueprint2026" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let token = body["message"]["token"].as_str().unwrap();
    assert_eq!(decode_jwt(JWT_SECRET, token).unwrap().claims.id, admin.id);
    assert_eq!(body["message"]["admin"]["email"], "office@atelier.example");
}

#[tokio::test]
async fn test_login_rejects_wrong_password_and_unknown_email() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![admin_model()], vec![]])
        .into_connection();
    let server = create_test_server(db);

    let response = server
        .post("/admin/auth/login")
        .json(&json!({ "email": "office@atelier.example", "password": "wrong" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid credentials");

    let response = server
        .post("/admin/auth/login")
        .json(&json!({ "email": "nobody@atelier.example", "password": "Blueprint2026" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
