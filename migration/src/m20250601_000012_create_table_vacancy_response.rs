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
                    .table(VacancyResponse::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VacancyResponse::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VacancyResponse::Vacancy).uuid().not_null())
                    .col(ColumnDef::new(VacancyResponse::User).uuid().not_null())
                    .col(ColumnDef::new(VacancyResponse::Message).text().not_null())
                    .col(
                        ColumnDef::new(VacancyResponse::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-vacancy_response-vacancy")
                            .from(VacancyResponse::Table, VacancyResponse::Vacancy)
                            .to(ProjectVacancy::Table, ProjectVacancy::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-vacancy_response-user")
                            .from(VacancyResponse::Table, VacancyResponse::User)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VacancyResponse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VacancyResponse {
    Table,
    Id,
    Vacancy,
    User,
    Message,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProjectVacancy {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
