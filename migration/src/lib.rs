/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_table_user;
mod m20250601_000002_create_table_tag;
mod m20250601_000003_create_table_user_tag;
mod m20250601_000004_create_table_project;
mod m20250601_000005_create_table_project_member;
mod m20250601_000006_create_table_project_tag;
mod m20250601_000007_create_table_technology;
mod m20250601_000008_create_table_question;
mod m20250601_000009_create_table_project_vacancy;
mod m20250601_000010_create_table_vacancy_technology;
mod m20250601_000011_create_table_vacancy_question;
mod m20250601_000012_create_table_vacancy_response;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_table_user::Migration),
            Box::new(m20250601_000002_create_table_tag::Migration),
            Box::new(m20250601_000003_create_table_user_tag::Migration),
            Box::new(m20250601_000004_create_table_project::Migration),
            Box::new(m20250601_000005_create_table_project_member::Migration),
            Box::new(m20250601_000006_create_table_project_tag::Migration),
            Box::new(m20250601_000007_create_table_technology::Migration),
            Box::new(m20250601_000008_create_table_question::Migration),
            Box::new(m20250601_000009_create_table_project_vacancy::Migration),
            Box::new(m20250601_000010_create_table_vacancy_technology::Migration),
            Box::new(m20250601_000011_create_table_vacancy_question::Migration),
            Box::new(m20250601_000012_create_table_vacancy_response::Migration),
        ]
    }
}
