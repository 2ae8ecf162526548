/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use connector::session::*;
use connector::*;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

async fn me(State(hits): State<Arc<AtomicUsize>>, headers: HeaderMap) -> impl IntoResponse {
    hits.fetch_add(1, Ordering::SeqCst);

    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some("Bearer good");

    if authorized {
        (
            StatusCode::OK,
            axum::Json(json!({
                "error": false,
                "message": {
                    "id": "7c1f2a52-3a4e-4d1b-9d36-0f1a9c6b2e10",
                    "name": "Office",
                    "email": "office@atelier.example",
                    "last_login_at": "2026-01-05T09:30:00"
                }
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            axum::Json(json!({ "error": true, "message": "Unable to decode token" })),
        )
    }
}

async fn spawn_api() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));

    let app = Router::new()
        .route(
            "/api/health",
            get(|| async { axum::Json(json!({ "error": false, "message": "200 ALIVE" })) }),
        )
        .route(
            "/user/testimonial",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(json!({ "error": true, "message": "Database error" })),
                )
            }),
        )
        .route("/user/project", get(|| async { "<html>maintenance</html>" }))
        .route(
            "/user/viewWeAchieved",
            get(|| async {
                axum::Json(json!({
                    "error": false,
                    "message": [{ "id": "a", "title": "Projects", "count": 120, "icon": null }]
                }))
            }),
        )
        .route("/admin/auth/me", get(me))
        .with_state(Arc::clone(&hits));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), hits)
}

fn config(server_url: &str, token: Option<&str>) -> RequestConfig {
    RequestConfig {
        server_url: server_url.to_string(),
        asset_url: "https://static.atelier.example/uploads".to_string(),
        token: token.map(str::to_string),
    }
}

#[tokio::test]
async fn test_successful_fetch() {
    let (url, _) = spawn_api().await;
    let config = config(&url, None);

    assert_eq!(
        health(&config).await,
        FetchState::Success("200 ALIVE".to_string())
    );

    let achievements = content::get_achievements(&config).await.success().unwrap();
    assert_eq!(achievements.len(), 1);
    assert_eq!(achievements[0].count, 120);
}

#[tokio::test]
async fn test_http_failure_is_error_not_success() {
    let (url, _) = spawn_api().await;
    let config = config(&url, None);

    let state = content::get_testimonials(&config).await;
    assert_eq!(state, FetchState::Error("Database error".to_string()));

    let state = content::get_projects(&config).await;
    assert!(!state.is_success());
    assert!(state.error().unwrap().starts_with("Unexpected response"));

    let state = content::get_clients(&config).await;
    assert!(state.error().unwrap().contains("404"));
}

#[tokio::test]
async fn test_unreachable_server_is_error() {
    let config = config("http://127.0.0.1:9", None);

    let state = content::get_jobs(&config).await;
    assert!(state.error().unwrap().starts_with("Failed to reach server"));
}

#[tokio::test]
async fn test_gate_redirects_without_token_and_without_request() {
    let (url, hits) = spawn_api().await;

    let decision = check_admin_session(&config(&url, None)).await;
    assert_eq!(decision, GateDecision::Redirect("/admin/login".to_string()));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_gate_checks_token_once() {
    let (url, hits) = spawn_api().await;

    let decision = check_admin_session(&config(&url, Some("stale"))).await;
    assert_eq!(decision, GateDecision::Redirect(LOGIN_ROUTE.to_string()));
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    match check_admin_session(&config(&url, Some("good"))).await {
        GateDecision::Admit(profile) => assert_eq!(profile.email, "office@atelier.example"),
        other => panic!("expected admission, got {:?}", other),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_gate_with_unreachable_server_redirects() {
    let decision = check_admin_session(&config("http://127.0.0.1:9", Some("good"))).await;
    assert_eq!(decision, GateDecision::Redirect(LOGIN_ROUTE.to_string()));
}

#[tokio::test]
async fn test_stored_session() {
    let (url, hits) = spawn_api().await;
    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::new(dir.path().join("atelier").join("session.toml"));

    assert_eq!(store.load(), None);
    let decision = check_stored_session(&config(&url, None), &store).await;
    assert_eq!(decision, GateDecision::Redirect(LOGIN_ROUTE.to_string()));
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    store.save("good").unwrap();
    assert_eq!(store.load(), Some("good".to_string()));
    assert!(matches!(
        check_stored_session(&config(&url, None), &store).await,
        GateDecision::Admit(_)
    ));

    store.clear().unwrap();
    store.clear().unwrap();
    assert_eq!(store.load(), None);

    std::fs::write(store.path(), "token = [").unwrap();
    assert_eq!(store.load(), None);
}

#[test]
fn test_fetch_state_helpers() {
    let state: FetchState<u32> = FetchState::default();
    assert!(state.is_loading());

    let state = FetchState::from(Ok::<u32, String>(3)).map(|n| n * 2);
    assert_eq!(state, FetchState::Success(6));

    let state: FetchState<u32> = Err("offline".to_string()).into();
    assert_eq!(state.error(), Some("offline"));
    assert_eq!(state.success(), None);
}

#[test]
fn test_asset_url() {
    let config = config("http://localhost:3000", None);

    assert_eq!(
        asset_url(&config, "facade-01.webp").as_deref(),
        Some("https://static.atelier.example/uploads/facade-01.webp")
    );
    assert_eq!(
        asset_url(&config, "/museum 2.jpg").as_deref(),
        Some("https://static.atelier.example/uploads/museum%202.jpg")
    );

    let broken = RequestConfig {
        asset_url: "not a url".to_string(),
        ..config
    };
    assert_eq!(asset_url(&broken, "a.png"), None);
}
