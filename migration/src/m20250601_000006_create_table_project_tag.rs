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
                    .table(ProjectTag::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ProjectTag::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(ProjectTag::Project).uuid().not_null())
                    .col(ColumnDef::new(ProjectTag::Tag).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-project_tag-project")
                            .from(ProjectTag::Table, ProjectTag::Project)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-project_tag-tag")
                            .from(ProjectTag::Table, ProjectTag::Tag)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-project_tag-project-tag")
                    .table(ProjectTag::Table)
                    .col(ProjectTag::Project)
                    .col(ProjectTag::Tag)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectTag {
    Table,
    Id,
    Project,
    Tag,
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Tag {
    Table,
    Id,
}
