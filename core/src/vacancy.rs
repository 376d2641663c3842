/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use super::database::{get_or_create_question, is_unique_violation};
use super::error::{ServiceError, ServiceResult};
use super::input::{clean_names, require_field};
use super::types::*;
use super::user::find_user_by_id;

#[async_trait]
pub trait VacancyService: Send + Sync {
    async fn create_technology(&self, name: &str) -> ServiceResult<MTechnology>;
    async fn list_technologies(&self) -> ServiceResult<Vec<MTechnology>>;
    async fn create_vacancy(
        &self,
        project_id: Uuid,
        data: VacancyData,
    ) -> ServiceResult<VacancyDetails>;
    async fn list_vacancies(&self, project_id: Uuid) -> ServiceResult<Vec<VacancyDetails>>;
    async fn get_vacancy(&self, id: Uuid) -> ServiceResult<MProjectVacancy>;
    /// Records a response. The same user may respond more than once.
    async fn respond(
        &self,
        vacancy_id: Uuid,
        user_id: Uuid,
        message: &str,
    ) -> ServiceResult<MVacancyResponse>;
    async fn list_responses(&self, vacancy_id: Uuid) -> ServiceResult<Vec<ResponseInfo>>;
}

async fn vacancy_details<C: ConnectionTrait>(
    db: &C,
    vacancy: MProjectVacancy,
) -> ServiceResult<VacancyDetails> {
    let technologies = ETechnology::find()
        .join(
            JoinType::InnerJoin,
            entity::technology::Relation::VacancyTechnology.def(),
        )
        .filter(CVacancyTechnology::Vacancy.eq(vacancy.id))
        .order_by_asc(CTechnology::Name)
        .all(db)
        .await?;

    let questions = EQuestion::find()
        .join(
            JoinType::InnerJoin,
            entity::question::Relation::VacancyQuestion.def(),
        )
        .filter(CVacancyQuestion::Vacancy.eq(vacancy.id))
        .order_by_asc(CVacancyQuestion::Position)
        .all(db)
        .await?;

    Ok(VacancyDetails {
        id: vacancy.id,
        project_id: vacancy.project,
        title: vacancy.title,
        description: vacancy.description,
        technology_names: technologies.into_iter().map(|t| t.name).collect(),
        questions: questions.into_iter().map(|q| q.description).collect(),
        created_at: vacancy.created_at.and_utc(),
    })
}

pub struct DbVacancyService {
    db: Arc<DatabaseConnection>,
}

impl DbVacancyService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        DbVacancyService { db }
    }
}

#[async_trait]
impl VacancyService for DbVacancyService {
    async fn create_technology(&self, name: &str) -> ServiceResult<MTechnology> {
        let name = require_field(name, "name")?;

        let existing = ETechnology::find()
            .filter(CTechnology::Name.eq(name.as_str()))
            .one(self.db.as_ref())
            .await?;

        if existing.is_some() {
            return Err(ServiceError::already_exists("Technology"));
        }

        let atechnology = ATechnology {
            id: Set(Uuid::new_v4()),
            name: Set(name),
        };

        atechnology.insert(self.db.as_ref()).await.map_err(|e| {
            if is_unique_violation(&e) {
                ServiceError::already_exists("Technology")
            } else {
                ServiceError::Database(e)
            }
        })
    }

    async fn list_technologies(&self) -> ServiceResult<Vec<MTechnology>> {
        Ok(ETechnology::find()
            .order_by_asc(CTechnology::Name)
            .all(self.db.as_ref())
            .await?)
    }

    async fn create_vacancy(
        &self,
        project_id: Uuid,
        data: VacancyData,
    ) -> ServiceResult<VacancyDetails> {
        let title = require_field(&data.title, "title")?;
        let description = require_field(&data.description, "description")?;
        let questions = clean_names(data.questions);

        let mut seen = HashSet::new();
        let technologies: Vec<Uuid> = data
            .technologies
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect();

        let txn = self.db.begin().await?;

        if EProject::find_by_id(project_id).one(&txn).await?.is_none() {
            return Err(ServiceError::not_found("Project"));
        }

        let known: HashSet<Uuid> = ETechnology::find()
            .filter(CTechnology::Id.is_in(technologies.clone()))
            .all(&txn)
            .await?
            .into_iter()
            .map(|t| t.id)
            .collect();

        if let Some(unknown) = technologies.iter().find(|id| !known.contains(id)) {
            return Err(ServiceError::Validation(format!(
                "Unknown technology {}",
                unknown
            )));
        }

        let avacancy = AProjectVacancy {
            id: Set(Uuid::new_v4()),
            project: Set(project_id),
            title: Set(title),
            description: Set(description),
            created_at: Set(Utc::now().naive_utc()),
        };

        let vacancy = avacancy.insert(&txn).await?;

        for technology in technologies {
            let alink = AVacancyTechnology {
                id: Set(Uuid::new_v4()),
                vacancy: Set(vacancy.id),
                technology: Set(technology),
            };

            alink.insert(&txn).await?;
        }

        for (position, text) in questions.iter().enumerate() {
            let question = get_or_create_question(&txn, text).await?;

            let alink = AVacancyQuestion {
                id: Set(Uuid::new_v4()),
                vacancy: Set(vacancy.id),
                question: Set(question.id),
                position: Set(position as i32),
            };

            alink.insert(&txn).await?;
        }

        let details = vacancy_details(&txn, vacancy).await?;
        txn.commit().await?;

        tracing::info!("Created vacancy {} for project {}", details.id, project_id);
        Ok(details)
    }

    async fn list_vacancies(&self, project_id: Uuid) -> ServiceResult<Vec<VacancyDetails>> {
        if EProject::find_by_id(project_id).one(self.db.as_ref()).await?.is_none() {
            return Err(ServiceError::not_found("Project"));
        }

        let vacancies = EProjectVacancy::find()
            .filter(CProjectVacancy::Project.eq(project_id))
            .order_by_asc(CProjectVacancy::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        let mut details = Vec::with_capacity(vacancies.len());

        for vacancy in vacancies {
            details.push(vacancy_details(self.db.as_ref(), vacancy).await?);
        }

        Ok(details)
    }

    async fn get_vacancy(&self, id: Uuid) -> ServiceResult<MProjectVacancy> {
        EProjectVacancy::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or_else(|| ServiceError::not_found("Vacancy"))
    }

    async fn respond(
        &self,
        vacancy_id: Uuid,
        user_id: Uuid,
        message: &str,
    ) -> ServiceResult<MVacancyResponse> {
        let vacancy = self.get_vacancy(vacancy_id).await?;

        if find_user_by_id(self.db.as_ref(), user_id).await?.is_none() {
            return Err(ServiceError::UserNotFound);
        }

        let aresponse = AVacancyResponse {
            id: Set(Uuid::new_v4()),
            vacancy: Set(vacancy.id),
            user: Set(user_id),
            message: Set(message.trim().to_string()),
            created_at: Set(Utc::now().naive_utc()),
        };

        Ok(aresponse.insert(self.db.as_ref()).await?)
    }

    async fn list_responses(&self, vacancy_id: Uuid) -> ServiceResult<Vec<ResponseInfo>> {
        let vacancy = self.get_vacancy(vacancy_id).await?;

        let responses = EVacancyResponse::find()
            .find_also_related(entity::user::Entity)
            .filter(CVacancyResponse::Vacancy.eq(vacancy.id))
            .order_by_asc(CVacancyResponse::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(responses
            .into_iter()
            .filter_map(|(response, user)| {
                user.map(|u| ResponseInfo {
                    first_name: u.first_name,
                    last_name: u.last_name,
                    email: u.email,
                    phone: u.phone,
                    message: response.message,
                    created_at: response.created_at.and_utc(),
                })
            })
            .collect())
    }
}
