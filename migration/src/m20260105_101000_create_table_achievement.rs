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
                    .table(Achievement::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Achievement::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Achievement::Title).string().not_null())
                    .col(
                        ColumnDef::new(Achievement::Count)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Achievement::Icon).string().null())
                    .col(ColumnDef::new(Achievement::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Achievement::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Achievement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Achievement {
    Table,
    Id,
    Title,
    Count,
    Icon,
    CreatedAt,
    UpdatedAt,
}
