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
                    .table(VacancyTechnology::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(VacancyTechnology::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(VacancyTechnology::Vacancy).uuid().not_null())
                    .col(ColumnDef::new(VacancyTechnology::Technology).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-vacancy_technology-vacancy")
                            .from(VacancyTechnology::Table, VacancyTechnology::Vacancy)
                            .to(ProjectVacancy::Table, ProjectVacancy::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-vacancy_technology-technology")
                            .from(VacancyTechnology::Table, VacancyTechnology::Technology)
                            .to(Technology::Table, Technology::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-vacancy_technology-vacancy-technology")
                    .table(VacancyTechnology::Table)
                    .col(VacancyTechnology::Vacancy)
                    .col(VacancyTechnology::Technology)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VacancyTechnology::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VacancyTechnology {
    Table,
    Id,
    Vacancy,
    Technology,
}

#[derive(DeriveIden)]
enum ProjectVacancy {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Technology {
    Table,
    Id,
}
