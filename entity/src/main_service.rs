/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "main_service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub sub_title: String,
    pub logo: String,
    pub background_image: Option<String>,
    pub video_link: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(indexed)]
    pub category_id: Uuid,
    #[sea_orm(indexed)]
    pub sub_category_id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::main_services_category::Entity",
        from = "Column::CategoryId",
        to = "super::main_services_category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::main_services_sub_category::Entity",
        from = "Column::SubCategoryId",
        to = "super::main_services_sub_category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SubCategory,
}

impl Related<super::main_services_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::main_services_sub_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
