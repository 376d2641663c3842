/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::auth::{AuthService, DbAuthService};
use super::input::{greater_than_zero, port_in_range};
use super::project::{DbProjectService, ProjectService};
use super::tag::{DbTagService, TagService};
use super::token::TokenService;
use super::user::{DbUserService, UserService};
use super::vacancy::{DbVacancyService, VacancyService};
use chrono::{DateTime, Utc};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

pub type EUser = user::Entity;
pub type EProject = project::Entity;
pub type EProjectMember = project_member::Entity;
pub type EProjectTag = project_tag::Entity;
pub type EProjectVacancy = project_vacancy::Entity;
pub type EQuestion = question::Entity;
pub type ETag = tag::Entity;
pub type ETechnology = technology::Entity;
pub type EUserTag = user_tag::Entity;
pub type EVacancyQuestion = vacancy_question::Entity;
pub type EVacancyResponse = vacancy_response::Entity;
pub type EVacancyTechnology = vacancy_technology::Entity;

pub type MUser = user::Model;
pub type MProject = project::Model;
pub type MProjectMember = project_member::Model;
pub type MProjectTag = project_tag::Model;
pub type MProjectVacancy = project_vacancy::Model;
pub type MQuestion = question::Model;
pub type MTag = tag::Model;
pub type MTechnology = technology::Model;
pub type MUserTag = user_tag::Model;
pub type MVacancyQuestion = vacancy_question::Model;
pub type MVacancyResponse = vacancy_response::Model;
pub type MVacancyTechnology = vacancy_technology::Model;

pub type AUser = user::ActiveModel;
pub type AProject = project::ActiveModel;
pub type AProjectMember = project_member::ActiveModel;
pub type AProjectTag = project_tag::ActiveModel;
pub type AProjectVacancy = project_vacancy::ActiveModel;
pub type AQuestion = question::ActiveModel;
pub type ATag = tag::ActiveModel;
pub type ATechnology = technology::ActiveModel;
pub type AUserTag = user_tag::ActiveModel;
pub type AVacancyQuestion = vacancy_question::ActiveModel;
pub type AVacancyResponse = vacancy_response::ActiveModel;
pub type AVacancyTechnology = vacancy_technology::ActiveModel;

pub type CUser = user::Column;
pub type CProject = project::Column;
pub type CProjectMember = project_member::Column;
pub type CProjectTag = project_tag::Column;
pub type CProjectVacancy = project_vacancy::Column;
pub type CQuestion = question::Column;
pub type CTag = tag::Column;
pub type CTechnology = technology::Column;
pub type CUserTag = user_tag::Column;
pub type CVacancyQuestion = vacancy_question::Column;
pub type CVacancyResponse = vacancy_response::Column;
pub type CVacancyTechnology = vacancy_technology::Column;

#[derive(Parser, Debug, Clone)]
#[command(name = "Shance", display_name = "Shance", bin_name = "shance-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "SHANCE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "SHANCE_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    #[arg(long, env = "SHANCE_DEBUG", default_value = "false")]
    pub debug: bool,
    #[arg(long, env = "SHANCE_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "SHANCE_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "SHANCE_SERVE_URL", default_value = "http://127.0.0.1:8000")]
    pub serve_url: String,
    #[arg(long, env = "SHANCE_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "SHANCE_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "SHANCE_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    /// Access token lifetime in minutes.
    #[arg(long, env = "SHANCE_ACCESS_TOKEN_TTL", value_parser = greater_than_zero::<i64>, default_value = "15")]
    pub access_token_ttl: i64,
    /// Refresh token lifetime in days.
    #[arg(long, env = "SHANCE_REFRESH_TOKEN_TTL", value_parser = greater_than_zero::<i64>, default_value = "30")]
    pub refresh_token_ttl: i64,
    #[arg(long, env = "SHANCE_SECURE_COOKIES", default_value = "false")]
    pub secure_cookies: bool,
}

pub struct ServerState {
    pub db: Arc<DatabaseConnection>,
    pub cli: Cli,
    pub tokens: Arc<TokenService>,
    pub auth: Arc<dyn AuthService>,
    pub projects: Arc<dyn ProjectService>,
    pub tags: Arc<dyn TagService>,
    pub users: Arc<dyn UserService>,
    pub vacancies: Arc<dyn VacancyService>,
}

impl ServerState {
    /// Wires the database backed services around one connection pool.
    pub fn new(db: DatabaseConnection, cli: Cli, jwt_secret: &str) -> Self {
        let db = Arc::new(db);
        let tokens = Arc::new(TokenService::from_cli(&cli, jwt_secret));

        ServerState {
            auth: Arc::new(DbAuthService::new(Arc::clone(&db), Arc::clone(&tokens))),
            projects: Arc::new(DbProjectService::new(Arc::clone(&db))),
            tags: Arc::new(DbTagService::new(Arc::clone(&db))),
            users: Arc::new(DbUserService::new(Arc::clone(&db))),
            vacancies: Arc::new(DbVacancyService::new(Arc::clone(&db))),
            tokens,
            db,
            cli,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<MUser> for UserSummary {
    fn from(user: MUser) -> Self {
        UserSummary {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role: String,
    pub country: String,
    pub city: String,
    pub tags: Vec<String>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(user: MUser, tags: Vec<String>) -> Self {
        UserProfile {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            role: user.role,
            country: user.country,
            city: user.city,
            tags,
            last_login_at: user.last_login_at.map(|t| t.and_utc()),
            created_at: user.created_at.and_utc(),
        }
    }
}

/// Partial update: `None` leaves the stored value untouched. The role is
/// signed into tokens and is not self-service.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ProjectData {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "photo")]
    pub photos: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectDetails {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub photos: Vec<String>,
    pub status: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    pub created_by: Uuid,
    pub owner: Option<UserSummary>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MemberInfo {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

impl MemberInfo {
    pub fn new(member: MProjectMember, user: MUser) -> Self {
        MemberInfo {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: member.role,
            joined_at: member.joined_at.and_utc(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct VacancyData {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<Uuid>,
    #[serde(default)]
    pub questions: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VacancyDetails {
    pub id: Uuid,
    pub project_id: Uuid,
    pub title: String,
    pub description: String,
    pub technology_names: Vec<String>,
    pub questions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResponseInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
