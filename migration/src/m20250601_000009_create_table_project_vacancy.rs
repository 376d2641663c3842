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
                    .table(ProjectVacancy::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectVacancy::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProjectVacancy::Project).uuid().not_null())
                    .col(ColumnDef::new(ProjectVacancy::Title).string().not_null())
                    .col(ColumnDef::new(ProjectVacancy::Description).text().not_null())
                    .col(
                        ColumnDef::new(ProjectVacancy::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-project_vacancy-project")
                            .from(ProjectVacancy::Table, ProjectVacancy::Project)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectVacancy::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectVacancy {
    Table,
    Id,
    Project,
    Title,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
}
