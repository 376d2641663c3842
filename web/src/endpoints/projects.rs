/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{SearchQuery, parse_id};
use crate::authorization::require_owner;
use crate::error::WebResult;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::Extension;
use serde::{Deserialize, Serialize};
use shance_core::consts::MEMBER_ROLE;
use shance_core::token::Claims;
use shance_core::types::*;
use std::sync::Arc;

fn default_role() -> String {
    MEMBER_ROLE.to_string()
}

#[derive(Serialize, Deserialize, Debug)]
pub struct InviteRequest {
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<ProjectDetails>>> {
    Ok(Json(state.projects.list().await?))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
    body: Result<Json<ProjectData>, JsonRejection>,
) -> WebResult<(StatusCode, Json<ProjectDetails>)> {
    let Json(body) = body?;
    let project = state.projects.create(body, claims.sub).await?;

    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn search(
    state: State<Arc<ServerState>>,
    Query(query): Query<SearchQuery>,
) -> WebResult<Json<Vec<ProjectDetails>>> {
    let term = query.term()?;
    Ok(Json(state.projects.search(term).await?))
}

pub async fn get_project(
    state: State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> WebResult<Json<ProjectDetails>> {
    let id = parse_id(&id, "Project")?;
    Ok(Json(state.projects.get_by_id(id).await?))
}

pub async fn put_project(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    body: Result<Json<ProjectData>, JsonRejection>,
) -> WebResult<Json<ProjectDetails>> {
    let id = parse_id(&id, "Project")?;
    let Json(body) = body?;
    require_owner(&state, id, claims.sub).await?;

    Ok(Json(state.projects.update(id, body).await?))
}

pub async fn delete_project(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> WebResult<StatusCode> {
    let id = parse_id(&id, "Project")?;
    require_owner(&state, id, claims.sub).await?;

    state.projects.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn post_invite(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    body: Result<Json<InviteRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<MemberInfo>)> {
    let id = parse_id(&id, "Project")?;
    let Json(body) = body?;
    require_owner(&state, id, claims.sub).await?;

    let member = state
        .projects
        .invite_member(id, &body.email, &body.role)
        .await?;

    Ok((StatusCode::CREATED, Json(member)))
}

pub async fn get_members(
    state: State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> WebResult<Json<Vec<MemberInfo>>> {
    let id = parse_id(&id, "Project")?;
    Ok(Json(state.projects.list_members(id).await?))
}
