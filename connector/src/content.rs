/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub location: String,
    pub description: String,
    pub cover_image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectImage {
    pub id: String,
    pub image_name: String,
    pub project_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectDetails {
    #[serde(flatten)]
    pub project: Project,
    pub images: Vec<ProjectImage>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub logo: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub designation: String,
    pub message: String,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Service {
    pub id: String,
    pub sub_title: String,
    pub logo: String,
    pub background_image: Option<String>,
    pub video_link: Option<String>,
    pub description: String,
    pub category_id: String,
    pub sub_category_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub title: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubCategory {
    pub id: String,
    pub title: String,
    pub category_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceDetails {
    #[serde(flatten)]
    pub service: Service,
    pub category: Option<Category>,
    pub sub_category: Option<SubCategory>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryDetails {
    #[serde(flatten)]
    pub category: Category,
    pub sub_categories: Vec<SubCategory>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub count: i32,
    pub icon: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Job {
    pub id: String,
    pub deadline: String,
    pub position: String,
    pub location: String,
    pub salary: String,
    pub vacancies: i32,
    pub description: String,
    pub key_responsibilities: String,
    pub skills_experience: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ApplicationRequest {
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
}

pub async fn get_projects(config: &RequestConfig) -> FetchState<Vec<Project>> {
    fetch(get_client(config, "user/project", RequestType::GET, false)).await
}

pub async fn get_project(config: &RequestConfig, id: &str) -> FetchState<ProjectDetails> {
    fetch(get_client(
        config,
        &format!("user/project/{}", id),
        RequestType::GET,
        false,
    ))
    .await
}

pub async fn get_clients(config: &RequestConfig) -> FetchState<Vec<Client>> {
    fetch(get_client(config, "user/viewClient", RequestType::GET, false)).await
}

pub async fn get_testimonials(config: &RequestConfig) -> FetchState<Vec<Testimonial>> {
    fetch(get_client(config, "user/testimonial", RequestType::GET, false)).await
}

pub async fn get_services(config: &RequestConfig) -> FetchState<Vec<Service>> {
    fetch(get_client(config, "user/servives", RequestType::GET, false)).await
}

pub async fn get_service(config: &RequestConfig, id: &str) -> FetchState<ServiceDetails> {
    fetch(get_client(
        config,
        &format!("user/servives/{}", id),
        RequestType::GET,
        false,
    ))
    .await
}

pub async fn get_categories(config: &RequestConfig) -> FetchState<Vec<CategoryDetails>> {
    fetch(get_client(config, "user/category", RequestType::GET, false)).await
}

pub async fn get_achievements(config: &RequestConfig) -> FetchState<Vec<Achievement>> {
    fetch(get_client(config, "user/viewWeAchieved", RequestType::GET, false)).await
}

pub async fn get_jobs(config: &RequestConfig) -> FetchState<Vec<Job>> {
    fetch(get_client(config, "user/job", RequestType::GET, false)).await
}

pub async fn get_job(config: &RequestConfig, id: &str) -> FetchState<Job> {
    fetch(get_client(
        config,
        &format!("user/job/{}", id),
        RequestType::GET,
        false,
    ))
    .await
}

/// Submits the careers form. Resolves to the new application's id.
pub async fn apply_for_job(
    config: &RequestConfig,
    job_id: &str,
    application: &ApplicationRequest,
) -> FetchState<String> {
    let client = get_client(
        config,
        &format!("user/job/{}/apply", job_id),
        RequestType::POST,
        false,
    )
    .map(|client| client.json(application));

    fetch(client).await
}
