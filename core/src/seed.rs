/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Declarative demo and fixture content loaded from a JSON file at start-up.
//!
//! The file is validated as a whole before anything is written. Content
//! sections are only applied to empty tables so restarting with the same
//! file does not duplicate rows; admins are matched by email.

use crate::database::insert_project_images;
use crate::input::*;
use crate::types::*;
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use entity::applicant::STATUS_PENDING;
use password_auth::generate_hash;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait,
    PaginatorTrait, QueryFilter, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAdmin {
    pub name: String,
    pub email: String,
    pub password_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedProject {
    pub title: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedJob {
    pub position: String,
    pub location: String,
    pub salary: String,
    #[serde(default = "default_vacancies")]
    pub vacancies: i32,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub key_responsibilities: String,
    #[serde(default)]
    pub skills_experience: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedApplicant {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub salary: String,
    /// Position of the job applied for.
    pub job: String,
    #[serde(default)]
    pub portfolio: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCategory {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSubCategory {
    pub title: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedService {
    pub sub_title: String,
    pub logo: String,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub video_link: Option<String>,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub sub_category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedTestimonial {
    pub name: String,
    #[serde(default)]
    pub designation: String,
    pub message: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedClient {
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAchievement {
    pub title: String,
    pub count: i32,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfiguration {
    #[serde(default)]
    pub admins: Vec<SeedAdmin>,
    #[serde(default)]
    pub projects: Vec<SeedProject>,
    #[serde(default)]
    pub jobs: Vec<SeedJob>,
    #[serde(default)]
    pub applicants: Vec<SeedApplicant>,
    #[serde(default)]
    pub categories: Vec<SeedCategory>,
    #[serde(default)]
    pub sub_categories: Vec<SeedSubCategory>,
    #[serde(default)]
    pub services: Vec<SeedService>,
    #[serde(default)]
    pub testimonials: Vec<SeedTestimonial>,
    #[serde(default)]
    pub clients: Vec<SeedClient>,
    #[serde(default)]
    pub achievements: Vec<SeedAchievement>,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Validation error in field '{field}': {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub is_valid: bool,
}

/// Rows written by one seed run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub admins: u64,
    pub projects: u64,
    pub project_images: u64,
    pub jobs: u64,
    pub applicants: u64,
    pub categories: u64,
    pub sub_categories: u64,
    pub services: u64,
    pub testimonials: u64,
    pub clients: u64,
    pub achievements: u64,
}

fn default_vacancies() -> i32 {
    1
}

fn default_status() -> String {
    STATUS_PENDING.to_string()
}

struct Collector {
    errors: Vec<ValidationError>,
}

impl Collector {
    fn push(&mut self, field: String, message: impl Into<String>) {
        self.errors.push(ValidationError {
            field,
            message: message.into(),
        });
    }

    fn check(&mut self, field: String, result: Result<(), String>) {
        if let Err(message) = result {
            self.push(field, message);
        }
    }
}

impl SeedConfiguration {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path))?;
        let config: SeedConfiguration =
            serde_json::from_str(&content).context("Failed to parse seed file")?;
        Ok(config)
    }

    pub fn validate(&self) -> ValidationResult {
        let mut c = Collector { errors: Vec::new() };

        let mut seen_emails = HashSet::new();
        for admin in &self.admins {
            let key = admin.email.trim().to_lowercase();
            c.check(format!("admins.{}.name", admin.email), check_required("Name", &admin.name));
            c.check(format!("admins.{}.email", admin.email), validate_email(&admin.email));
            c.check(
                format!("admins.{}.password_file", admin.email),
                check_required("Password file", &admin.password_file),
            );

            if !seen_emails.insert(key) {
                c.push(
                    format!("admins.{}.email", admin.email),
                    "Duplicate admin email found",
                );
            }
        }

        let mut category_titles = HashSet::new();
        for category in &self.categories {
            c.check(
                format!("categories.{}.title", category.title),
                check_required("Title", &category.title),
            );

            if !category_titles.insert(category.title.trim()) {
                c.push(
                    format!("categories.{}.title", category.title),
                    "Duplicate category title found",
                );
            }
        }

        let mut sub_category_keys = HashSet::new();
        for sub in &self.sub_categories {
            let field = format!("sub_categories.{}", sub.title);
            c.check(format!("{}.title", field), check_required("Title", &sub.title));

            if !category_titles.contains(sub.category.trim()) {
                c.push(
                    format!("{}.category", field),
                    format!("Category '{}' does not exist", sub.category),
                );
            }

            if !sub_category_keys.insert((sub.category.trim(), sub.title.trim())) {
                c.push(
                    format!("{}.title", field),
                    "Duplicate sub-category within category",
                );
            }
        }

        for service in &self.services {
            let field = format!("services.{}", service.sub_title);
            c.check(format!("{}.sub_title", field), check_required("Sub title", &service.sub_title));
            c.check(format!("{}.logo", field), validate_image_name(&service.logo));

            if let Some(background) = &service.background_image {
                c.check(format!("{}.background_image", field), validate_image_name(background));
            }

            if let Some(link) = &service.video_link {
                c.check(format!("{}.video_link", field), validate_video_link(link));
            }

            if !category_titles.contains(service.category.trim()) {
                c.push(
                    format!("{}.category", field),
                    format!("Category '{}' does not exist", service.category),
                );
            } else if !sub_category_keys
                .contains(&(service.category.trim(), service.sub_category.trim()))
            {
                c.push(
                    format!("{}.sub_category", field),
                    format!(
                        "Sub-category '{}' does not exist in category '{}'",
                        service.sub_category, service.category
                    ),
                );
            }
        }

        for project in &self.projects {
            let field = format!("projects.{}", project.title);
            c.check(format!("{}.title", field), check_required("Title", &project.title));
            c.check(format!("{}.location", field), check_required("Location", &project.location));

            if let Some(cover) = &project.cover_image {
                c.check(format!("{}.cover_image", field), validate_image_name(cover));
            }

            for image in &project.images {
                c.check(format!("{}.images", field), validate_image_name(image));
            }
        }

        let mut positions = HashSet::new();
        for job in &self.jobs {
            let field = format!("jobs.{}", job.position);
            c.check(format!("{}.position", field), check_required("Position", &job.position));
            c.check(format!("{}.location", field), check_required("Location", &job.location));
            c.check(format!("{}.vacancies", field), validate_vacancies(job.vacancies));

            if !positions.insert(job.position.trim()) {
                c.push(format!("{}.position", field), "Duplicate job position found");
            }
        }

        for applicant in &self.applicants {
            let field = format!("applicants.{}", applicant.email);
            c.check(format!("{}.name", field), check_required("Name", &applicant.name));
            c.check(format!("{}.email", field), validate_email(&applicant.email));
            c.check(format!("{}.status", field), check_required("Status", &applicant.status));

            if !positions.contains(applicant.job.trim()) {
                c.push(
                    format!("{}.job", field),
                    format!("Job '{}' does not exist", applicant.job),
                );
            }
        }

        for testimonial in &self.testimonials {
            let field = format!("testimonials.{}", testimonial.name);
            c.check(format!("{}.name", field), check_required("Name", &testimonial.name));
            c.check(format!("{}.message", field), check_required("Message", &testimonial.message));

            if let Some(image) = &testimonial.image {
                c.check(format!("{}.image", field), validate_image_name(image));
            }
        }

        for client in &self.clients {
            let field = format!("clients.{}", client.name);
            c.check(format!("{}.name", field), check_required("Name", &client.name));
            c.check(format!("{}.logo", field), validate_image_name(&client.logo));
        }

        for achievement in &self.achievements {
            let field = format!("achievements.{}", achievement.title);
            c.check(format!("{}.title", field), check_required("Title", &achievement.title));
            c.check(format!("{}.count", field), validate_count(achievement.count));
        }

        ValidationResult {
            is_valid: c.errors.is_empty(),
            errors: c.errors,
        }
    }
}

pub async fn load_and_apply_seed<C>(db: &C, seed_file_path: Option<&str>) -> Result<Option<SeedReport>>
where
    C: TransactionTrait,
{
    let Some(path) = seed_file_path else {
        tracing::info!("No seed file configured, skipping seeding");
        return Ok(None);
    };

    tracing::info!("Loading seed file from: {}", path);
    let config = SeedConfiguration::from_file(path)?;

    let validation = config.validate();
    if !validation.is_valid {
        let error_messages: Vec<String> = validation
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();

        anyhow::bail!("Seed file validation failed:\n{}", error_messages.join("\n"));
    }

    let report = apply_seed(db, &config).await?;
    tracing::info!("Seed applied: {:?}", report);

    Ok(Some(report))
}

/// Writes a validated configuration in a single transaction.
pub async fn apply_seed<C>(db: &C, config: &SeedConfiguration) -> Result<SeedReport>
where
    C: TransactionTrait,
{
    let txn = db.begin().await.context("Failed to start seed transaction")?;
    let mut report = SeedReport::default();

    report.admins = apply_admins(&txn, &config.admins).await?;
    apply_services(&txn, config, &mut report).await?;
    apply_projects(&txn, &config.projects, &mut report).await?;
    apply_jobs(&txn, config, &mut report).await?;
    apply_showcase(&txn, config, &mut report).await?;

    txn.commit().await.context("Failed to commit seed transaction")?;
    Ok(report)
}

async fn table_is_empty<E, C>(db: &C) -> Result<bool>
where
    E: EntityTrait,
    E::Model: Sync,
    C: ConnectionTrait,
{
    let rows = E::find()
        .count(db)
        .await
        .context("Failed to count existing rows")?;
    Ok(rows == 0)
}

async fn apply_admins(txn: &DatabaseTransaction, admins: &[SeedAdmin]) -> Result<u64> {
    let mut created = 0;

    for seed_admin in admins {
        let existing = EAdmin::find()
            .filter(CAdmin::Email.eq(seed_admin.email.trim().to_lowercase()))
            .one(txn)
            .await
            .context("Failed to query admin")?;

        if existing.is_some() {
            tracing::debug!("Admin {} already exists, skipping", seed_admin.email);
            continue;
        }

        let password = load_secret(&seed_admin.password_file);
        validate_password(&password).map_err(|e| {
            anyhow::anyhow!(
                "Password in {} for admin {} is not usable: {}",
                seed_admin.password_file,
                seed_admin.email,
                e
            )
        })?;

        let now = Utc::now().naive_utc();
        let admin = AAdmin {
            id: Set(Uuid::new_v4()),
            name: Set(seed_admin.name.trim().to_string()),
            email: Set(seed_admin.email.trim().to_lowercase()),
            password: Set(generate_hash(password)),
            last_login_at: Set(*crate::consts::NULL_TIME),
            created_at: Set(now),
            updated_at: Set(now),
        };

        admin.insert(txn).await.context("Failed to insert admin")?;
        tracing::info!("Created admin: {}", seed_admin.email);
        created += 1;
    }

    Ok(created)
}

async fn apply_services(
    txn: &DatabaseTransaction,
    config: &SeedConfiguration,
    report: &mut SeedReport,
) -> Result<()> {
    let now = Utc::now().naive_utc();

    if table_is_empty::<EMainServicesCategory, _>(txn).await? {
        for category in &config.categories {
            AMainServicesCategory {
                id: Set(Uuid::new_v4()),
                title: Set(category.title.trim().to_string()),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(txn)
            .await
            .context("Failed to insert service category")?;
            report.categories += 1;
        }
    }

    let categories: HashMap<String, Uuid> = EMainServicesCategory::find()
        .all(txn)
        .await
        .context("Failed to load service categories")?
        .into_iter()
        .map(|c| (c.title, c.id))
        .collect();

    if table_is_empty::<EMainServicesSubCategory, _>(txn).await? {
        for sub in &config.sub_categories {
            let Some(category_id) = categories.get(sub.category.trim()) else {
                anyhow::bail!("Category '{}' not found", sub.category);
            };

            AMainServicesSubCategory {
                id: Set(Uuid::new_v4()),
                title: Set(sub.title.trim().to_string()),
                category_id: Set(*category_id),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(txn)
            .await
            .context("Failed to insert service sub-category")?;
            report.sub_categories += 1;
        }
    }

    let sub_categories: HashMap<(Uuid, String), Uuid> = EMainServicesSubCategory::find()
        .all(txn)
        .await
        .context("Failed to load service sub-categories")?
        .into_iter()
        .map(|s| ((s.category_id, s.title), s.id))
        .collect();

    if table_is_empty::<EMainService, _>(txn).await? {
        for service in &config.services {
            let Some(category_id) = categories.get(service.category.trim()) else {
                anyhow::bail!("Category '{}' not found", service.category);
            };

            let Some(sub_category_id) =
                sub_categories.get(&(*category_id, service.sub_category.trim().to_string()))
            else {
                anyhow::bail!("Sub-category '{}' not found", service.sub_category);
            };

            AMainService {
                id: Set(Uuid::new_v4()),
                sub_title: Set(service.sub_title.trim().to_string()),
                logo: Set(service.logo.clone()),
                background_image: Set(normalize_optional(service.background_image.clone())),
                video_link: Set(normalize_optional(service.video_link.clone())),
                description: Set(service.description.clone()),
                category_id: Set(*category_id),
                sub_category_id: Set(*sub_category_id),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(txn)
            .await
            .context("Failed to insert service")?;
            report.services += 1;
        }
    }

    Ok(())
}

async fn apply_projects(
    txn: &DatabaseTransaction,
    projects: &[SeedProject],
    report: &mut SeedReport,
) -> Result<()> {
    if !table_is_empty::<EProject, _>(txn).await? {
        tracing::debug!("Projects already present, skipping");
        return Ok(());
    }

    let now = Utc::now().naive_utc();

    for seed_project in projects {
        let project = AProject {
            id: Set(Uuid::new_v4()),
            title: Set(seed_project.title.trim().to_string()),
            location: Set(seed_project.location.trim().to_string()),
            description: Set(seed_project.description.clone()),
            cover_image: Set(normalize_optional(seed_project.cover_image.clone())),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(txn)
        .await
        .context("Failed to insert project")?;
        report.projects += 1;

        report.project_images += insert_project_images(txn, project.id, &seed_project.images)
            .await
            .context("Failed to insert project images")?;
    }

    Ok(())
}

async fn apply_jobs(
    txn: &DatabaseTransaction,
    config: &SeedConfiguration,
    report: &mut SeedReport,
) -> Result<()> {
    let now = Utc::now().naive_utc();

    if table_is_empty::<EJob, _>(txn).await? {
        for job in &config.jobs {
            AJob {
                id: Set(Uuid::new_v4()),
                deadline: Set(job.deadline),
                position: Set(job.position.trim().to_string()),
                location: Set(job.location.trim().to_string()),
                salary: Set(job.salary.trim().to_string()),
                vacancies: Set(job.vacancies),
                description: Set(job.description.clone()),
                key_responsibilities: Set(job.key_responsibilities.clone()),
                skills_experience: Set(job.skills_experience.clone()),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(txn)
            .await
            .context("Failed to insert job")?;
            report.jobs += 1;
        }
    }

    if !table_is_empty::<EApplicant, _>(txn).await? {
        return Ok(());
    }

    let jobs: HashMap<String, Uuid> = EJob::find()
        .all(txn)
        .await
        .context("Failed to load jobs")?
        .into_iter()
        .map(|j| (j.position, j.id))
        .collect();

    for applicant in &config.applicants {
        let Some(job_id) = jobs.get(applicant.job.trim()) else {
            anyhow::bail!("Job '{}' not found", applicant.job);
        };

        AApplicant {
            id: Set(Uuid::new_v4()),
            name: Set(applicant.name.trim().to_string()),
            email: Set(applicant.email.trim().to_string()),
            phone: Set(applicant.phone.clone()),
            address: Set(applicant.address.clone()),
            education: Set(applicant.education.clone()),
            experience: Set(applicant.experience.clone()),
            salary: Set(applicant.salary.clone()),
            choose_position: Set(applicant.job.trim().to_string()),
            portfolio: Set(normalize_optional(applicant.portfolio.clone())),
            resume: Set(normalize_optional(applicant.resume.clone())),
            job_id: Set(*job_id),
            status: Set(applicant.status.trim().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(txn)
        .await
        .context("Failed to insert applicant")?;
        report.applicants += 1;
    }

    Ok(())
}

async fn apply_showcase(
    txn: &DatabaseTransaction,
    config: &SeedConfiguration,
    report: &mut SeedReport,
) -> Result<()> {
    let now = Utc::now().naive_utc();

    if table_is_empty::<ETestimonial, _>(txn).await? {
        for testimonial in &config.testimonials {
            ATestimonial {
                id: Set(Uuid::new_v4()),
                name: Set(testimonial.name.trim().to_string()),
                designation: Set(testimonial.designation.trim().to_string()),
                message: Set(testimonial.message.clone()),
                image: Set(normalize_optional(testimonial.image.clone())),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(txn)
            .await
            .context("Failed to insert testimonial")?;
            report.testimonials += 1;
        }
    }

    if table_is_empty::<EClient, _>(txn).await? {
        for client in &config.clients {
            AClient {
                id: Set(Uuid::new_v4()),
                name: Set(client.name.trim().to_string()),
                logo: Set(client.logo.clone()),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(txn)
            .await
            .context("Failed to insert client")?;
            report.clients += 1;
        }
    }

    if table_is_empty::<EAchievement, _>(txn).await? {
        for achievement in &config.achievements {
            AAchievement {
                id: Set(Uuid::new_v4()),
                title: Set(achievement.title.trim().to_string()),
                count: Set(achievement.count),
                icon: Set(normalize_optional(achievement.icon.clone())),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(txn)
            .await
            .context("Failed to insert achievement")?;
            report.achievements += 1;
        }
    }

    Ok(())
}
