/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Job::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Job::Deadline).date().not_null())
                    .col(ColumnDef::new(Job::Position).string().not_null())
                    .col(ColumnDef::new(Job::Location).string().not_null())
                    .col(ColumnDef::new(Job::Salary).string().not_null())
                    .col(ColumnDef::new(Job::Vacancies).integer().not_null())
                    .col(ColumnDef::new(Job::Description).text().not_null())
                    .col(ColumnDef::new(Job::KeyResponsibilities).text().not_null())
                    .col(ColumnDef::new(Job::SkillsExperience).text().not_null())
                    .col(ColumnDef::new(Job::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Job::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Job {
    Table,
    Id,
    Deadline,
    Position,
    Location,
    Salary,
    Vacancies,
    Description,
    KeyResponsibilities,
    SkillsExperience,
    CreatedAt,
    UpdatedAt,
}
