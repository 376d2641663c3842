/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{SearchQuery, parse_id};
use crate::error::WebResult;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use shance_core::types::*;
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct TagRequest {
    pub name: String,
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<MTag>>> {
    Ok(Json(state.tags.list().await?))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<TagRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<MTag>)> {
    let Json(body) = body?;
    let tag = state.tags.create(&body.name).await?;

    Ok((StatusCode::CREATED, Json(tag)))
}

pub async fn search(
    state: State<Arc<ServerState>>,
    Query(query): Query<SearchQuery>,
) -> WebResult<Json<Vec<MTag>>> {
    let term = query.term()?;
    Ok(Json(state.tags.search(term).await?))
}

pub async fn get_tag(
    state: State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> WebResult<Json<MTag>> {
    let id = parse_id(&id, "Tag")?;
    Ok(Json(state.tags.get_by_id(id).await?))
}

pub async fn put_tag(
    state: State<Arc<ServerState>>,
    Path(id): Path<String>,
    body: Result<Json<TagRequest>, JsonRejection>,
) -> WebResult<Json<MTag>> {
    let id = parse_id(&id, "Tag")?;
    let Json(body) = body?;

    Ok(Json(state.tags.update(id, &body.name).await?))
}

pub async fn delete_tag(
    state: State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> WebResult<StatusCode> {
    let id = parse_id(&id, "Tag")?;
    state.tags.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
