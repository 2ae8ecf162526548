/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod endpoints;
pub mod error;

use atelier_core::types::{Cli, ServerState};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::{delete, get, patch, post};
use axum::{Router, middleware};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use endpoints::*;

pub fn cors_layer(cli: &Cli) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    let frontend: HeaderValue = cli.frontend_url.trim_end_matches('/').parse()?;

    let allow_origin = if cli.debug {
        let local: HeaderValue = format!("http://{}:8000", cli.ip).parse()?;
        AllowOrigin::list(vec![frontend, local])
    } else {
        AllowOrigin::exact(frontend)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers(vec![AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true))
}

pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/admin/auth/me", get(endpoints::auth::get_me))
        .route("/admin/job", get(jobs::get).post(jobs::post))
        .route(
            "/admin/job/{id}",
            get(jobs::get_job)
                .patch(jobs::patch_job)
                .delete(jobs::delete_job),
        )
        .route(
            "/admin/applicant",
            get(applicants::get).post(applicants::post),
        )
        .route(
            "/admin/applicant/{id}",
            get(applicants::get_applicant)
                .patch(applicants::patch_applicant)
                .delete(applicants::delete_applicant),
        )
        .route(
            "/admin/applicant/{id}/status",
            patch(applicants::patch_applicant_status),
        )
        .route("/admin/client", get(clients::get).post(clients::post))
        .route(
            "/admin/client/{id}",
            get(clients::get_client)
                .patch(clients::patch_client)
                .delete(clients::delete_client),
        )
        .route("/admin/project", get(projects::get).post(projects::post))
        .route(
            "/admin/project/{id}",
            get(projects::get_project)
                .patch(projects::patch_project)
                .delete(projects::delete_project),
        )
        .route(
            "/admin/project/{id}/image",
            post(projects::post_project_images),
        )
        .route(
            "/admin/project/{id}/image/{image}",
            delete(projects::delete_project_image),
        )
        .route(
            "/admin/category",
            get(services::get_categories).post(services::post_category),
        )
        .route(
            "/admin/category/{id}",
            get(services::get_category)
                .patch(services::patch_category)
                .delete(services::delete_category),
        )
        .route(
            "/admin/subcategory",
            get(services::get_sub_categories).post(services::post_sub_category),
        )
        .route(
            "/admin/subcategory/{id}",
            get(services::get_sub_category)
                .patch(services::patch_sub_category)
                .delete(services::delete_sub_category),
        )
        .route(
            "/admin/service",
            get(services::get_services).post(services::post_service),
        )
        .route(
            "/admin/service/{id}",
            get(services::get_service)
                .patch(services::patch_service)
                .delete(services::delete_service),
        )
        .route(
            "/admin/testimonial",
            get(testimonials::get).post(testimonials::post),
        )
        .route(
            "/admin/testimonial/{id}",
            get(testimonials::get_testimonial)
                .patch(testimonials::patch_testimonial)
                .delete(testimonials::delete_testimonial),
        )
        .route(
            "/admin/achievement",
            get(achievements::get).post(achievements::post),
        )
        .route(
            "/admin/achievement/{id}",
            get(achievements::get_achievement)
                .patch(achievements::patch_achievement)
                .delete(achievements::delete_achievement),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            crate::auth::authorize,
        ))
        .route("/admin/auth/login", post(endpoints::auth::post_login))
        .route("/api/health", get(get_health))
        .route("/user/project", get(public::get_projects))
        .route("/user/project/{id}", get(public::get_project))
        .route("/user/viewClient", get(public::get_clients))
        .route("/user/testimonial", get(public::get_testimonials))
        .route("/user/servives", get(public::get_services))
        .route("/user/servives/{id}", get(public::get_service))
        .route("/user/category", get(public::get_categories))
        .route("/user/viewWeAchieved", get(public::get_achievements))
        .route("/user/job", get(public::get_jobs))
        .route("/user/job/{id}", get(public::get_job))
        .route("/user/job/{id}/apply", post(public::post_apply))
        .fallback(handle_404)
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);

    let cors = cors_layer(&state.cli)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);
    axum::serve(listener, app).await
}
