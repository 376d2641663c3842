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
                    .table(UserTag::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserTag::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(UserTag::User).uuid().not_null())
                    .col(ColumnDef::new(UserTag::Tag).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_tag-user")
                            .from(UserTag::Table, UserTag::User)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_tag-tag")
                            .from(UserTag::Table, UserTag::Tag)
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
                    .name("idx-user_tag-user-tag")
                    .table(UserTag::Table)
                    .col(UserTag::User)
                    .col(UserTag::Tag)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserTag {
    Table,
    Id,
    User,
    Tag,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Tag {
    Table,
    Id,
}
