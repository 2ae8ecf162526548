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
            .create_index(
                Index::create()
                    .name("idx-main_services_category-title")
                    .table(MainServicesCategory::Table)
                    .col(MainServicesCategory::Title)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-main_services_sub_category-category_id-title")
                    .table(MainServicesSubCategory::Table)
                    .col(MainServicesSubCategory::CategoryId)
                    .col(MainServicesSubCategory::Title)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx-main_services_sub_category-category_id-title")
                    .table(MainServicesSubCategory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx-main_services_category-title")
                    .table(MainServicesCategory::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum MainServicesCategory {
    Table,
    Title,
}

#[derive(DeriveIden)]
enum MainServicesSubCategory {
    Table,
    CategoryId,
    Title,
}
