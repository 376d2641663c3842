/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "project_vacancy")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub project: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::Project",
        to = "super::project::Column::Id"
    )]
    Project,
    #[sea_orm(has_many = "super::vacancy_technology::Entity")]
    VacancyTechnology,
    #[sea_orm(has_many = "super::vacancy_question::Entity")]
    VacancyQuestion,
    #[sea_orm(has_many = "super::vacancy_response::Entity")]
    VacancyResponse,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<super::vacancy_technology::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VacancyTechnology.def()
    }
}

impl Related<super::vacancy_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VacancyQuestion.def()
    }
}

impl Related<super::vacancy_response::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VacancyResponse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
