/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::parse_id;
use crate::authorization::clear_cookie;
use crate::error::{WebError, WebResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::Extension;
use shance_core::error::ServiceError;
use shance_core::token::Claims;
use shance_core::types::*;
use std::sync::Arc;

// A valid token whose subject was deleted is treated like a bad token.
fn subject_gone(err: ServiceError) -> WebError {
    match err {
        ServiceError::NotFound(_) => WebError::from(ServiceError::UserNotFound),
        err => WebError::from(err),
    }
}

pub async fn get_me(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
) -> WebResult<Json<UserProfile>> {
    let profile = state.users.get_by_id(claims.sub).await.map_err(subject_gone)?;
    Ok(Json(profile))
}

pub async fn patch_me(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
    body: Result<Json<UserUpdate>, JsonRejection>,
) -> WebResult<Json<UserProfile>> {
    let Json(body) = body?;
    let profile = state
        .users
        .update(claims.sub, body)
        .await
        .map_err(subject_gone)?;

    Ok(Json(profile))
}

pub async fn delete_me(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
) -> WebResult<(StatusCode, [(HeaderName, HeaderValue); 1])> {
    state.users.delete(claims.sub).await.map_err(subject_gone)?;

    let cookie = clear_cookie(&state)?;
    Ok((StatusCode::NO_CONTENT, [(SET_COOKIE, cookie)]))
}

pub async fn get_user(
    state: State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> WebResult<Json<UserProfile>> {
    let id = parse_id(&id, "User")?;
    Ok(Json(state.users.get_by_id(id).await?))
}

pub async fn get_user_projects(
    state: State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> WebResult<Json<Vec<ProjectDetails>>> {
    let id = parse_id(&id, "User")?;
    state.users.get_by_id(id).await?;

    Ok(Json(state.users.get_own_projects(id).await?))
}
