/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20260105_100000_create_table_admin;
mod m20260105_100100_create_table_project;
mod m20260105_100200_create_table_project_image;
mod m20260105_100300_create_table_job;
mod m20260105_100400_create_table_applicant;
mod m20260105_100500_create_table_main_services_category;
mod m20260105_100600_create_table_main_services_sub_category;
mod m20260105_100700_create_table_main_service;
mod m20260105_100800_create_table_testimonial;
mod m20260105_100900_create_table_client;
mod m20260105_101000_create_table_achievement;
mod m20260212_000000_add_image_to_main_service;
mod m20260318_000000_remove_image_from_main_service;
mod m20260318_000001_add_background_image_to_main_service;
mod m20260401_000000_add_unique_service_titles;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_100000_create_table_admin::Migration),
            Box::new(m20260105_100100_create_table_project::Migration),
            Box::new(m20260105_100200_create_table_project_image::Migration),
            Box::new(m20260105_100300_create_table_job::Migration),
            Box::new(m20260105_100400_create_table_applicant::Migration),
            Box::new(m20260105_100500_create_table_main_services_category::Migration),
            Box::new(m20260105_100600_create_table_main_services_sub_category::Migration),
            Box::new(m20260105_100700_create_table_main_service::Migration),
            Box::new(m20260105_100800_create_table_testimonial::Migration),
            Box::new(m20260105_100900_create_table_client::Migration),
            Box::new(m20260105_101000_create_table_achievement::Migration),
            Box::new(m20260212_000000_add_image_to_main_service::Migration),
            Box::new(m20260318_000000_remove_image_from_main_service::Migration),
            Box::new(m20260318_000001_add_background_image_to_main_service::Migration),
            Box::new(m20260401_000000_add_unique_service_titles::Migration),
        ]
    }
}
