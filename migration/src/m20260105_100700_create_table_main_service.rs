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
                    .table(MainService::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MainService::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MainService::SubTitle).string().not_null())
                    .col(ColumnDef::new(MainService::Logo).string().not_null())
                    .col(ColumnDef::new(MainService::VideoLink).string().null())
                    .col(ColumnDef::new(MainService::Description).text().not_null())
                    .col(ColumnDef::new(MainService::CategoryId).uuid().not_null())
                    .col(ColumnDef::new(MainService::SubCategoryId).uuid().not_null())
                    .col(ColumnDef::new(MainService::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(MainService::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-main_service-category_id")
                            .from(MainService::Table, MainService::CategoryId)
                            .to(MainServicesCategory::Table, MainServicesCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-main_service-sub_category_id")
                            .from(MainService::Table, MainService::SubCategoryId)
                            .to(MainServicesSubCategory::Table, MainServicesSubCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MainService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MainService {
    Table,
    Id,
    SubTitle,
    Logo,
    VideoLink,
    Description,
    CategoryId,
    SubCategoryId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum MainServicesCategory {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum MainServicesSubCategory {
    Table,
    Id,
}
