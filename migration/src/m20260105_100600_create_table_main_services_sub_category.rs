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
                    .table(MainServicesSubCategory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MainServicesSubCategory::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MainServicesSubCategory::Title)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MainServicesSubCategory::CategoryId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MainServicesSubCategory::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MainServicesSubCategory::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-main_services_sub_category-category_id")
                            .from(
                                MainServicesSubCategory::Table,
                                MainServicesSubCategory::CategoryId,
                            )
                            .to(MainServicesCategory::Table, MainServicesCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(MainServicesSubCategory::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum MainServicesSubCategory {
    Table,
    Id,
    Title,
    CategoryId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum MainServicesCategory {
    Table,
    Id,
}
