/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::database::is_unique_violation;
use super::error::{ServiceError, ServiceResult};
use super::input::{like_pattern, require_field};
use super::types::*;

#[async_trait]
pub trait TagService: Send + Sync {
    async fn create(&self, name: &str) -> ServiceResult<MTag>;
    async fn get_by_id(&self, id: Uuid) -> ServiceResult<MTag>;
    async fn update(&self, id: Uuid, name: &str) -> ServiceResult<MTag>;
    async fn delete(&self, id: Uuid) -> ServiceResult<()>;
    async fn list(&self) -> ServiceResult<Vec<MTag>>;
    async fn search(&self, query: &str) -> ServiceResult<Vec<MTag>>;
}

pub struct DbTagService {
    db: Arc<DatabaseConnection>,
}

impl DbTagService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        DbTagService { db }
    }

    async fn name_taken(&self, name: &str, except: Option<Uuid>) -> ServiceResult<bool> {
        let tag = ETag::find()
            .filter(CTag::Name.eq(name))
            .one(self.db.as_ref())
            .await?;

        Ok(tag.is_some_and(|t| Some(t.id) != except))
    }
}

fn map_conflict(e: sea_orm::DbErr) -> ServiceError {
    if is_unique_violation(&e) {
        ServiceError::already_exists("Tag")
    } else {
        ServiceError::Database(e)
    }
}

#[async_trait]
impl TagService for DbTagService {
    async fn create(&self, name: &str) -> ServiceResult<MTag> {
        let name = require_field(name, "name")?;

        if self.name_taken(&name, None).await? {
            return Err(ServiceError::already_exists("Tag"));
        }

        let atag = ATag {
            id: Set(Uuid::new_v4()),
            name: Set(name),
        };

        atag.insert(self.db.as_ref()).await.map_err(map_conflict)
    }

    async fn get_by_id(&self, id: Uuid) -> ServiceResult<MTag> {
        ETag::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or_else(|| ServiceError::not_found("Tag"))
    }

    async fn update(&self, id: Uuid, name: &str) -> ServiceResult<MTag> {
        let name = require_field(name, "name")?;
        let tag = self.get_by_id(id).await?;

        if self.name_taken(&name, Some(id)).await? {
            return Err(ServiceError::already_exists("Tag"));
        }

        let mut atag: ATag = tag.into();
        atag.name = Set(name);
        atag.update(self.db.as_ref()).await.map_err(map_conflict)
    }

    async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        let txn = self.db.begin().await?;

        if ETag::find_by_id(id).one(&txn).await?.is_none() {
            return Err(ServiceError::not_found("Tag"));
        }

        EProjectTag::delete_many()
            .filter(CProjectTag::Tag.eq(id))
            .exec(&txn)
            .await?;
        EUserTag::delete_many()
            .filter(CUserTag::Tag.eq(id))
            .exec(&txn)
            .await?;
        ETag::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    async fn list(&self) -> ServiceResult<Vec<MTag>> {
        Ok(ETag::find()
            .order_by_asc(CTag::Name)
            .all(self.db.as_ref())
            .await?)
    }

    async fn search(&self, query: &str) -> ServiceResult<Vec<MTag>> {
        let pattern = like_pattern(query.trim());

        Ok(ETag::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((entity::tag::Entity, CTag::Name))))
                    .like(LikeExpr::new(pattern).escape('\\')),
            )
            .order_by_asc(CTag::Name)
            .all(self.db.as_ref())
            .await?)
    }
}
