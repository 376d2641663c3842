/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::consts::{DEFAULT_PROJECT_STATUS, OWNER_ROLE};
use super::database::{get_project_tag_names, is_unique_violation, set_project_tags};
use super::error::{ServiceError, ServiceResult};
use super::input::*;
use super::types::*;
use super::user::{find_user_by_email, find_user_by_id};

#[async_trait]
pub trait ProjectService: Send + Sync {
    async fn create(&self, data: ProjectData, owner_id: Uuid) -> ServiceResult<ProjectDetails>;
    async fn list(&self) -> ServiceResult<Vec<ProjectDetails>>;
    async fn get_by_id(&self, id: Uuid) -> ServiceResult<ProjectDetails>;
    /// Overwrites every editable field and the tag set. Ownership is kept.
    async fn update(&self, id: Uuid, data: ProjectData) -> ServiceResult<ProjectDetails>;
    async fn delete(&self, id: Uuid) -> ServiceResult<()>;
    async fn search(&self, query: &str) -> ServiceResult<Vec<ProjectDetails>>;
    async fn is_owner(&self, project_id: Uuid, user_id: Uuid) -> ServiceResult<bool>;
    async fn invite_member(
        &self,
        project_id: Uuid,
        email: &str,
        role: &str,
    ) -> ServiceResult<MemberInfo>;
    async fn list_members(&self, project_id: Uuid) -> ServiceResult<Vec<MemberInfo>>;
}

/// Loads the tags and the creator profile of `project`.
pub async fn project_details<C: ConnectionTrait>(
    db: &C,
    project: MProject,
) -> ServiceResult<ProjectDetails> {
    let tags = get_project_tag_names(db, project.id).await?;
    let owner = EUser::find_by_id(project.created_by)
        .one(db)
        .await?
        .map(UserSummary::from);

    Ok(ProjectDetails {
        id: project.id,
        name: project.name,
        title: project.title,
        subtitle: project.subtitle,
        description: project.description,
        photos: decode_photos(&project.photos),
        status: project.status,
        start_date: project.start_date.map(|d| d.and_utc()),
        end_date: project.end_date.map(|d| d.and_utc()),
        tags,
        created_by: project.created_by,
        owner,
        created_at: project.created_at.and_utc(),
    })
}

fn project_status(status: Option<String>) -> String {
    status
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_PROJECT_STATUS.to_string())
}

fn contains_ignore_case(column: CProject, pattern: &str) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(Func::lower(Expr::col((entity::project::Entity, column))))
        .like(LikeExpr::new(pattern).escape('\\'))
}

pub struct DbProjectService {
    db: Arc<DatabaseConnection>,
}

impl DbProjectService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        DbProjectService { db }
    }

    async fn find_project(&self, id: Uuid) -> ServiceResult<MProject> {
        EProject::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or_else(|| ServiceError::not_found("Project"))
    }

    async fn details_list(&self, projects: Vec<MProject>) -> ServiceResult<Vec<ProjectDetails>> {
        let mut details = Vec::with_capacity(projects.len());

        for project in projects {
            details.push(project_details(self.db.as_ref(), project).await?);
        }

        Ok(details)
    }
}

#[async_trait]
impl ProjectService for DbProjectService {
    async fn create(&self, data: ProjectData, owner_id: Uuid) -> ServiceResult<ProjectDetails> {
        let name = require_field(&data.name, "name")?;
        let photos = encode_photos(&data.photos)?;
        let tags = clean_names(data.tags);
        let now = Utc::now().naive_utc();

        let aproject = AProject {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            title: Set(data.title),
            subtitle: Set(data.subtitle),
            description: Set(data.description),
            photos: Set(photos),
            status: Set(project_status(data.status)),
            start_date: Set(data.start_date.map(|d| d.naive_utc())),
            end_date: Set(data.end_date.map(|d| d.naive_utc())),
            created_by: Set(owner_id),
            created_at: Set(now),
        };

        let txn = self.db.begin().await?;

        // The token may outlive its account.
        if find_user_by_id(&txn, owner_id).await?.is_none() {
            return Err(ServiceError::UserNotFound);
        }

        let project = aproject.insert(&txn).await?;

        let amember = AProjectMember {
            id: Set(Uuid::new_v4()),
            project: Set(project.id),
            user: Set(owner_id),
            role: Set(OWNER_ROLE.to_string()),
            joined_at: Set(now),
        };

        amember.insert(&txn).await?;
        set_project_tags(&txn, project.id, &tags).await?;
        txn.commit().await?;

        tracing::info!("Created project {} for user {}", project.id, owner_id);
        project_details(self.db.as_ref(), project).await
    }

    async fn list(&self) -> ServiceResult<Vec<ProjectDetails>> {
        let projects = EProject::find()
            .order_by_desc(CProject::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        self.details_list(projects).await
    }

    async fn get_by_id(&self, id: Uuid) -> ServiceResult<ProjectDetails> {
        let project = self.find_project(id).await?;
        project_details(self.db.as_ref(), project).await
    }

    async fn update(&self, id: Uuid, data: ProjectData) -> ServiceResult<ProjectDetails> {
        let name = require_field(&data.name, "name")?;
        let photos = encode_photos(&data.photos)?;
        let tags = clean_names(data.tags);

        let txn = self.db.begin().await?;

        let project = EProject::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found("Project"))?;

        let mut aproject: AProject = project.into();
        aproject.name = Set(name);
        aproject.title = Set(data.title);
        aproject.subtitle = Set(data.subtitle);
        aproject.description = Set(data.description);
        aproject.photos = Set(photos);
        aproject.status = Set(project_status(data.status));
        aproject.start_date = Set(data.start_date.map(|d| d.naive_utc()));
        aproject.end_date = Set(data.end_date.map(|d| d.naive_utc()));

        let project = aproject.update(&txn).await?;
        set_project_tags(&txn, project.id, &tags).await?;
        txn.commit().await?;

        project_details(self.db.as_ref(), project).await
    }

    async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        let txn = self.db.begin().await?;

        if EProject::find_by_id(id).one(&txn).await?.is_none() {
            return Err(ServiceError::not_found("Project"));
        }

        let vacancies: Vec<Uuid> = EProjectVacancy::find()
            .filter(CProjectVacancy::Project.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|v| v.id)
            .collect();

        EVacancyTechnology::delete_many()
            .filter(CVacancyTechnology::Vacancy.is_in(vacancies.clone()))
            .exec(&txn)
            .await?;
        EVacancyQuestion::delete_many()
            .filter(CVacancyQuestion::Vacancy.is_in(vacancies.clone()))
            .exec(&txn)
            .await?;
        EVacancyResponse::delete_many()
            .filter(CVacancyResponse::Vacancy.is_in(vacancies))
            .exec(&txn)
            .await?;
        EProjectVacancy::delete_many()
            .filter(CProjectVacancy::Project.eq(id))
            .exec(&txn)
            .await?;
        EProjectTag::delete_many()
            .filter(CProjectTag::Project.eq(id))
            .exec(&txn)
            .await?;
        EProjectMember::delete_many()
            .filter(CProjectMember::Project.eq(id))
            .exec(&txn)
            .await?;
        EProject::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        tracing::info!("Deleted project {}", id);
        Ok(())
    }

    async fn search(&self, query: &str) -> ServiceResult<Vec<ProjectDetails>> {
        let pattern = like_pattern(query.trim());

        let projects = EProject::find()
            .filter(
                Condition::any()
                    .add(contains_ignore_case(CProject::Name, &pattern))
                    .add(contains_ignore_case(CProject::Title, &pattern))
                    .add(contains_ignore_case(CProject::Description, &pattern)),
            )
            .order_by_desc(CProject::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        self.details_list(projects).await
    }

    async fn is_owner(&self, project_id: Uuid, user_id: Uuid) -> ServiceResult<bool> {
        let member = EProjectMember::find()
            .filter(
                Condition::all()
                    .add(CProjectMember::Project.eq(project_id))
                    .add(CProjectMember::User.eq(user_id))
                    .add(CProjectMember::Role.eq(OWNER_ROLE)),
            )
            .one(self.db.as_ref())
            .await?;

        Ok(member.is_some())
    }

    async fn invite_member(
        &self,
        project_id: Uuid,
        email: &str,
        role: &str,
    ) -> ServiceResult<MemberInfo> {
        let role = require_field(role, "role")?;

        if role == OWNER_ROLE {
            return Err(ServiceError::Validation(
                "The owner role cannot be granted by invitation".to_string(),
            ));
        }

        self.find_project(project_id).await?;

        let user = find_user_by_email(self.db.as_ref(), email)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        let existing = EProjectMember::find()
            .filter(
                Condition::all()
                    .add(CProjectMember::Project.eq(project_id))
                    .add(CProjectMember::User.eq(user.id)),
            )
            .one(self.db.as_ref())
            .await?;

        if existing.is_some() {
            return Err(ServiceError::already_member());
        }

        let amember = AProjectMember {
            id: Set(Uuid::new_v4()),
            project: Set(project_id),
            user: Set(user.id),
            role: Set(role),
            joined_at: Set(Utc::now().naive_utc()),
        };

        let member = amember.insert(self.db.as_ref()).await.map_err(|e| {
            if is_unique_violation(&e) {
                ServiceError::already_member()
            } else {
                ServiceError::Database(e)
            }
        })?;

        tracing::info!("Added user {} to project {}", user.id, project_id);
        Ok(MemberInfo::new(member, user))
    }

    async fn list_members(&self, project_id: Uuid) -> ServiceResult<Vec<MemberInfo>> {
        self.find_project(project_id).await?;

        let members = EProjectMember::find()
            .find_also_related(entity::user::Entity)
            .filter(CProjectMember::Project.eq(project_id))
            .order_by_asc(CProjectMember::JoinedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(members
            .into_iter()
            .filter_map(|(member, user)| user.map(|u| MemberInfo::new(member, u)))
            .collect())
    }
}
