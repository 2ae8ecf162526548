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
                    .table(Admin::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Admin::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Admin::Name).string().not_null())
                    .col(
                        ColumnDef::new(Admin::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Admin::Password).string().not_null())
                    .col(ColumnDef::new(Admin::LastLoginAt).date_time().not_null())
                    .col(ColumnDef::new(Admin::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Admin::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Admin::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Admin {
    Table,
    Id,
    Name,
    Email,
    Password,
    LastLoginAt,
    CreatedAt,
    UpdatedAt,
}
