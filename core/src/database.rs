/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::Migrator;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr,
    EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, SqlErr,
};
use sea_orm_migration::prelude::MigratorTrait;
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file)
            .context("Failed to read database url from file")?
            .trim()
            .to_string()
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    Ok(db)
}

pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Returns the tag called `name`, inserting it first when it does not exist.
/// A concurrent insert of the same name is absorbed by the unique index.
pub async fn get_or_create_tag<C: ConnectionTrait>(db: &C, name: &str) -> Result<MTag, DbErr> {
    let atag = ATag {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
    };

    ETag::insert(atag)
        .on_conflict(OnConflict::column(CTag::Name).do_nothing().to_owned())
        .exec_without_returning(db)
        .await?;

    ETag::find()
        .filter(CTag::Name.eq(name))
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("tag {}", name)))
}

pub async fn get_or_create_question<C: ConnectionTrait>(
    db: &C,
    description: &str,
) -> Result<MQuestion, DbErr> {
    let aquestion = AQuestion {
        id: Set(Uuid::new_v4()),
        description: Set(description.to_string()),
    };

    EQuestion::insert(aquestion)
        .on_conflict(OnConflict::column(CQuestion::Description).do_nothing().to_owned())
        .exec_without_returning(db)
        .await?;

    EQuestion::find()
        .filter(CQuestion::Description.eq(description))
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("question {}", description)))
}

/// Replaces the tag set of a project. `names` must already be cleaned.
pub async fn set_project_tags<C: ConnectionTrait>(
    db: &C,
    project_id: Uuid,
    names: &[String],
) -> Result<(), DbErr> {
    EProjectTag::delete_many()
        .filter(CProjectTag::Project.eq(project_id))
        .exec(db)
        .await?;

    for name in names {
        let tag = get_or_create_tag(db, name).await?;

        let aproject_tag = AProjectTag {
            id: Set(Uuid::new_v4()),
            project: Set(project_id),
            tag: Set(tag.id),
        };

        EProjectTag::insert(aproject_tag)
            .exec_without_returning(db)
            .await?;
    }

    Ok(())
}

/// Replaces the tag set of a user. `names` must already be cleaned.
pub async fn set_user_tags<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    names: &[String],
) -> Result<(), DbErr> {
    EUserTag::delete_many()
        .filter(CUserTag::User.eq(user_id))
        .exec(db)
        .await?;

    for name in names {
        let tag = get_or_create_tag(db, name).await?;

        let auser_tag = AUserTag {
            id: Set(Uuid::new_v4()),
            user: Set(user_id),
            tag: Set(tag.id),
        };

        EUserTag::insert(auser_tag).exec_without_returning(db).await?;
    }

    Ok(())
}

pub async fn get_project_tag_names<C: ConnectionTrait>(
    db: &C,
    project_id: Uuid,
) -> Result<Vec<String>, DbErr> {
    let tags = ETag::find()
        .join_rev(
            JoinType::InnerJoin,
            EProjectTag::belongs_to(entity::tag::Entity)
                .from(CProjectTag::Tag)
                .to(CTag::Id)
                .into(),
        )
        .filter(CProjectTag::Project.eq(project_id))
        .order_by_asc(CTag::Name)
        .all(db)
        .await?;

    Ok(tags.into_iter().map(|t| t.name).collect())
}

pub async fn get_user_tag_names<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
) -> Result<Vec<String>, DbErr> {
    let tags = ETag::find()
        .join(JoinType::InnerJoin, entity::tag::Relation::UserTag.def())
        .filter(CUserTag::User.eq(user_id))
        .order_by_asc(CTag::Name)
        .all(db)
        .await?;

    Ok(tags.into_iter().map(|t| t.name).collect())
}
