/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    JoinType, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::database::{get_user_tag_names, set_user_tags};
use super::error::{ServiceError, ServiceResult};
use super::input::{clean_names, normalize_email, require_field};
use super::project::project_details;
use super::types::*;

pub async fn find_user_by_email<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> Result<Option<MUser>, DbErr> {
    EUser::find()
        .filter(CUser::Email.eq(normalize_email(email)))
        .one(db)
        .await
}

pub async fn find_user_by_id<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<MUser>, DbErr> {
    EUser::find_by_id(id).one(db).await
}

#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> ServiceResult<UserProfile>;
    async fn get_by_email(&self, email: &str) -> ServiceResult<UserProfile>;
    async fn update(&self, id: Uuid, update: UserUpdate) -> ServiceResult<UserProfile>;
    /// Every project the user holds a membership in, owned ones included.
    async fn get_own_projects(&self, id: Uuid) -> ServiceResult<Vec<ProjectDetails>>;
    async fn delete(&self, id: Uuid) -> ServiceResult<()>;
}

pub struct DbUserService {
    db: Arc<DatabaseConnection>,
}

impl DbUserService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        DbUserService { db }
    }

    async fn profile(&self, user: MUser) -> ServiceResult<UserProfile> {
        let tags = get_user_tag_names(self.db.as_ref(), user.id).await?;
        Ok(UserProfile::new(user, tags))
    }
}

#[async_trait]
impl UserService for DbUserService {
    async fn get_by_id(&self, id: Uuid) -> ServiceResult<UserProfile> {
        let user = find_user_by_id(self.db.as_ref(), id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        self.profile(user).await
    }

    async fn get_by_email(&self, email: &str) -> ServiceResult<UserProfile> {
        let user = find_user_by_email(self.db.as_ref(), email)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        self.profile(user).await
    }

    async fn update(&self, id: Uuid, update: UserUpdate) -> ServiceResult<UserProfile> {
        let txn = self.db.begin().await?;

        let user = find_user_by_id(&txn, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        let mut auser: AUser = user.into();

        if let Some(first_name) = update.first_name {
            auser.first_name = Set(require_field(&first_name, "first_name")?);
        }

        if let Some(last_name) = update.last_name {
            auser.last_name = Set(require_field(&last_name, "last_name")?);
        }

        if let Some(phone) = update.phone {
            auser.phone = Set(phone.trim().to_string());
        }

        if let Some(country) = update.country {
            auser.country = Set(country.trim().to_string());
        }

        if let Some(city) = update.city {
            auser.city = Set(city.trim().to_string());
        }

        let user = auser.update(&txn).await?;

        if let Some(tags) = update.tags {
            set_user_tags(&txn, user.id, &clean_names(tags)).await?;
        }

        txn.commit().await?;

        tracing::debug!("Updated user {}", user.id);
        self.profile(user).await
    }

    async fn get_own_projects(&self, id: Uuid) -> ServiceResult<Vec<ProjectDetails>> {
        let projects = EProject::find()
            .join_rev(
                JoinType::InnerJoin,
                EProjectMember::belongs_to(entity::project::Entity)
                    .from(CProjectMember::Project)
                    .to(CProject::Id)
                    .into(),
            )
            .filter(CProjectMember::User.eq(id))
            .order_by_asc(CProjectMember::JoinedAt)
            .all(self.db.as_ref())
            .await?;

        let mut details = Vec::with_capacity(projects.len());

        for project in projects {
            details.push(project_details(self.db.as_ref(), project).await?);
        }

        Ok(details)
    }

    async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        let result = EUser::delete_by_id(id).exec(self.db.as_ref()).await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("User"));
        }

        tracing::info!("Deleted user {}", id);
        Ok(())
    }
}
