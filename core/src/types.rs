/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "Atelier", display_name = "Atelier", bin_name = "atelier-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "ATELIER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "ATELIER_DEBUG", default_value = "false")]
    pub debug: bool,
    #[arg(long, env = "ATELIER_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "ATELIER_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(
        long,
        env = "ATELIER_FRONTEND_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    pub frontend_url: String,
    #[arg(long, env = "ATELIER_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "ATELIER_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "ATELIER_DATABASE_MAX_CONNECTIONS", value_parser = greater_than_zero::<u32>, default_value = "20")]
    pub database_max_connections: u32,
    #[arg(long, env = "ATELIER_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "ATELIER_SEED_FILE")]
    pub seed_file: Option<String>,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
    pub jwt_secret: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EAchievement = achievement::Entity;
pub type EAdmin = admin::Entity;
pub type EApplicant = applicant::Entity;
pub type EClient = client::Entity;
pub type EJob = job::Entity;
pub type EMainService = main_service::Entity;
pub type EMainServicesCategory = main_services_category::Entity;
pub type EMainServicesSubCategory = main_services_sub_category::Entity;
pub type EProject = project::Entity;
pub type EProjectImage = project_image::Entity;
pub type ETestimonial = testimonial::Entity;

pub type MAchievement = achievement::Model;
pub type MAdmin = admin::Model;
pub type MApplicant = applicant::Model;
pub type MClient = client::Model;
pub type MJob = job::Model;
pub type MMainService = main_service::Model;
pub type MMainServicesCategory = main_services_category::Model;
pub type MMainServicesSubCategory = main_services_sub_category::Model;
pub type MProject = project::Model;
pub type MProjectImage = project_image::Model;
pub type MTestimonial = testimonial::Model;

pub type AAchievement = achievement::ActiveModel;
pub type AAdmin = admin::ActiveModel;
pub type AApplicant = applicant::ActiveModel;
pub type AClient = client::ActiveModel;
pub type AJob = job::ActiveModel;
pub type AMainService = main_service::ActiveModel;
pub type AMainServicesCategory = main_services_category::ActiveModel;
pub type AMainServicesSubCategory = main_services_sub_category::ActiveModel;
pub type AProject = project::ActiveModel;
pub type AProjectImage = project_image::ActiveModel;
pub type ATestimonial = testimonial::ActiveModel;

pub type CAchievement = achievement::Column;
pub type CAdmin = admin::Column;
pub type CApplicant = applicant::Column;
pub type CClient = client::Column;
pub type CJob = job::Column;
pub type CMainService = main_service::Column;
pub type CMainServicesCategory = main_services_category::Column;
pub type CMainServicesSubCategory = main_services_sub_category::Column;
pub type CProject = project::Column;
pub type CProjectImage = project_image::Column;
pub type CTestimonial = testimonial::Column;
