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
                    .table(VacancyQuestion::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(VacancyQuestion::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(VacancyQuestion::Vacancy).uuid().not_null())
                    .col(ColumnDef::new(VacancyQuestion::Question).uuid().not_null())
                    .col(ColumnDef::new(VacancyQuestion::Position).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-vacancy_question-vacancy")
                            .from(VacancyQuestion::Table, VacancyQuestion::Vacancy)
                            .to(ProjectVacancy::Table, ProjectVacancy::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-vacancy_question-question")
                            .from(VacancyQuestion::Table, VacancyQuestion::Question)
                            .to(Question::Table, Question::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-vacancy_question-vacancy-question")
                    .table(VacancyQuestion::Table)
                    .col(VacancyQuestion::Vacancy)
                    .col(VacancyQuestion::Question)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VacancyQuestion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VacancyQuestion {
    Table,
    Id,
    Vacancy,
    Question,
    Position,
}

#[derive(DeriveIden)]
enum ProjectVacancy {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Question {
    Table,
    Id,
}
