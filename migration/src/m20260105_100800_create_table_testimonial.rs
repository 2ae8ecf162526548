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
                    .table(Testimonial::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Testimonial::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Testimonial::Name).string().not_null())
                    .col(ColumnDef::new(Testimonial::Designation).string().not_null())
                    .col(ColumnDef::new(Testimonial::Message).text().not_null())
                    .col(ColumnDef::new(Testimonial::Image).string().null())
                    .col(ColumnDef::new(Testimonial::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Testimonial::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Testimonial::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Testimonial {
    Table,
    Id,
    Name,
    Designation,
    Message,
    Image,
    CreatedAt,
    UpdatedAt,
}
