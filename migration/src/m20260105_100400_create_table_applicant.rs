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
        // job_id is a plain column: applicants outlive the job posting they answered.
        manager
            .create_table(
                Table::create()
                    .table(Applicant::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applicant::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Applicant::Name).string().not_null())
                    .col(ColumnDef::new(Applicant::Email).string().not_null())
                    .col(ColumnDef::new(Applicant::Phone).string().not_null())
                    .col(ColumnDef::new(Applicant::Address).text().not_null())
                    .col(ColumnDef::new(Applicant::Education).text().not_null())
                    .col(ColumnDef::new(Applicant::Experience).text().not_null())
                    .col(ColumnDef::new(Applicant::Salary).string().not_null())
                    .col(ColumnDef::new(Applicant::ChoosePosition).string().not_null())
                    .col(ColumnDef::new(Applicant::Portfolio).string().null())
                    .col(ColumnDef::new(Applicant::Resume).string().null())
                    .col(ColumnDef::new(Applicant::JobId).uuid().not_null())
                    .col(ColumnDef::new(Applicant::Status).string().not_null())
                    .col(ColumnDef::new(Applicant::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Applicant::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-applicant-job_id")
                    .table(Applicant::Table)
                    .col(Applicant::JobId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Applicant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Applicant {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Address,
    Education,
    Experience,
    Salary,
    ChoosePosition,
    Portfolio,
    Resume,
    JobId,
    Status,
    CreatedAt,
    UpdatedAt,
}
