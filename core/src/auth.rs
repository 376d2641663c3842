/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use async_trait::async_trait;
use chrono::Utc;
use password_auth::{generate_hash, verify_password};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, TransactionTrait};
use std::sync::{Arc, LazyLock};
use uuid::Uuid;

use super::consts::DEFAULT_USER_ROLE;
use super::database::{is_unique_violation, set_user_tags};
use super::error::{ServiceError, ServiceResult};
use super::input::*;
use super::token::TokenService;
use super::types::*;
use super::user::{find_user_by_email, find_user_by_id};

/// Verified against when the login email is unknown, so both failure paths
/// do the same amount of hashing work.
static DUMMY_HASH: LazyLock<String> = LazyLock::new(|| generate_hash("shance-dummy-password"));

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn register(&self, data: RegisterData) -> ServiceResult<TokenPair>;
    async fn login(&self, email: &str, password: &str) -> ServiceResult<TokenPair>;
    async fn refresh(&self, refresh_token: &str) -> ServiceResult<TokenPair>;
}

pub struct DbAuthService {
    db: Arc<DatabaseConnection>,
    tokens: Arc<TokenService>,
}

impl DbAuthService {
    pub fn new(db: Arc<DatabaseConnection>, tokens: Arc<TokenService>) -> Self {
        DbAuthService { db, tokens }
    }
}

async fn hash_password(password: String) -> ServiceResult<String> {
    tokio::task::spawn_blocking(move || generate_hash(password))
        .await
        .map_err(|e| ServiceError::Internal(format!("Password hashing failed: {}", e)))
}

async fn check_password(password: String, hash: Option<String>) -> ServiceResult<bool> {
    tokio::task::spawn_blocking(move || {
        let hash = hash.as_deref().unwrap_or(DUMMY_HASH.as_str());
        verify_password(password, hash).is_ok()
    })
    .await
    .map_err(|e| ServiceError::Internal(format!("Password verification failed: {}", e)))
}

#[async_trait]
impl AuthService for DbAuthService {
    async fn register(&self, data: RegisterData) -> ServiceResult<TokenPair> {
        let email = normalize_email(&data.email);
        validate_email(&email)?;
        validate_password(&data.password)?;
        let first_name = require_field(&data.first_name, "first_name")?;
        let last_name = require_field(&data.last_name, "last_name")?;

        if find_user_by_email(self.db.as_ref(), &email).await?.is_some() {
            return Err(ServiceError::already_exists("User with this email"));
        }

        let role = data
            .role
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_USER_ROLE.to_string());

        let password = hash_password(data.password).await?;

        let auser = AUser {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            password: Set(password),
            first_name: Set(first_name),
            last_name: Set(last_name),
            phone: Set(data.phone.trim().to_string()),
            role: Set(role),
            country: Set(data.country.trim().to_string()),
            city: Set(data.city.trim().to_string()),
            last_login_at: Set(None),
            created_at: Set(Utc::now().naive_utc()),
        };

        let txn = self.db.begin().await?;

        let user = auser.insert(&txn).await.map_err(|e| {
            if is_unique_violation(&e) {
                ServiceError::already_exists("User with this email")
            } else {
                ServiceError::Database(e)
            }
        })?;

        set_user_tags(&txn, user.id, &clean_names(data.tags)).await?;
        txn.commit().await?;

        tracing::info!("Registered user {}", user.id);
        self.tokens.issue_pair(&user)
    }

    async fn login(&self, email: &str, password: &str) -> ServiceResult<TokenPair> {
        let user = find_user_by_email(self.db.as_ref(), email).await?;
        let hash = user.as_ref().map(|u| u.password.clone());

        let valid = check_password(password.to_string(), hash).await?;

        let user = match user {
            Some(user) if valid => user,
            _ => return Err(ServiceError::InvalidCredentials),
        };

        let mut auser: AUser = user.into();
        auser.last_login_at = Set(Some(Utc::now().naive_utc()));
        let user = auser.update(self.db.as_ref()).await?;

        self.tokens.issue_pair(&user)
    }

    async fn refresh(&self, refresh_token: &str) -> ServiceResult<TokenPair> {
        let claims = self.tokens.validate_refresh(refresh_token)?;

        let user = find_user_by_id(self.db.as_ref(), claims.sub)
            .await?
            .ok_or(ServiceError::UserNotFound)?;

        self.tokens.issue_pair(&user)
    }
}
