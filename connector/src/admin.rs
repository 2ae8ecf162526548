/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
struct MakeLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct ApplicantStatusRequest {
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AdminProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub last_login_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminProfile,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Applicant {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub education: String,
    pub experience: String,
    pub salary: String,
    pub choose_position: String,
    pub portfolio: Option<String>,
    pub resume: Option<String>,
    pub job_id: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CascadeReport {
    pub parents: u64,
    pub project_images: u64,
    pub sub_categories: u64,
    pub services: u64,
}

pub async fn login(config: &RequestConfig, email: &str, password: &str) -> FetchState<LoginResponse> {
    let req = MakeLoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let client = get_client(config, "admin/auth/login", RequestType::POST, false)
        .map(|client| client.json(&req));

    fetch(client).await
}

pub async fn get_me(config: &RequestConfig) -> FetchState<AdminProfile> {
    fetch(get_client(config, "admin/auth/me", RequestType::GET, true)).await
}

pub async fn get_applicants(
    config: &RequestConfig,
    job: Option<&str>,
    status: Option<&str>,
) -> FetchState<Vec<Applicant>> {
    let mut query = Vec::new();
    if let Some(job) = job {
        query.push(("job", job));
    }
    if let Some(status) = status {
        query.push(("status", status));
    }

    let client = get_client(config, "admin/applicant", RequestType::GET, true)
        .map(|client| client.query(&query));

    fetch(client).await
}

pub async fn set_applicant_status(
    config: &RequestConfig,
    id: &str,
    status: &str,
) -> FetchState<Applicant> {
    let req = ApplicantStatusRequest {
        status: status.to_string(),
    };

    let client = get_client(
        config,
        &format!("admin/applicant/{}/status", id),
        RequestType::PATCH,
        true,
    )
    .map(|client| client.json(&req));

    fetch(client).await
}

pub async fn delete_project(config: &RequestConfig, id: &str) -> FetchState<CascadeReport> {
    fetch(get_client(
        config,
        &format!("admin/project/{}", id),
        RequestType::DELETE,
        true,
    ))
    .await
}

pub async fn delete_category(config: &RequestConfig, id: &str) -> FetchState<CascadeReport> {
    fetch(get_client(
        config,
        &format!("admin/category/{}", id),
        RequestType::DELETE,
        true,
    ))
    .await
}
