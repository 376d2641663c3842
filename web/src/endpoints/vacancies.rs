/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::parse_id;
use crate::authorization::require_owner;
use crate::error::WebResult;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::Extension;
use serde::{Deserialize, Serialize};
use shance_core::token::Claims;
use shance_core::types::*;
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct TechnologyRequest {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RespondRequest {
    #[serde(default)]
    pub message: String,
}

pub async fn get_technologies(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<Vec<MTechnology>>> {
    Ok(Json(state.vacancies.list_technologies().await?))
}

pub async fn post_technology(
    state: State<Arc<ServerState>>,
    body: Result<Json<TechnologyRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<MTechnology>)> {
    let Json(body) = body?;
    let technology = state.vacancies.create_technology(&body.name).await?;

    Ok((StatusCode::CREATED, Json(technology)))
}

pub async fn post_vacancy(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    body: Result<Json<VacancyData>, JsonRejection>,
) -> WebResult<(StatusCode, Json<VacancyDetails>)> {
    let id = parse_id(&id, "Project")?;
    let Json(body) = body?;
    require_owner(&state, id, claims.sub).await?;

    let vacancy = state.vacancies.create_vacancy(id, body).await?;
    Ok((StatusCode::CREATED, Json(vacancy)))
}

pub async fn get_vacancies(
    state: State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> WebResult<Json<Vec<VacancyDetails>>> {
    let id = parse_id(&id, "Project")?;
    Ok(Json(state.vacancies.list_vacancies(id).await?))
}

pub async fn post_response(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    body: Result<Json<RespondRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<MVacancyResponse>)> {
    let id = parse_id(&id, "Vacancy")?;
    let Json(body) = body?;

    let response = state
        .vacancies
        .respond(id, claims.sub, &body.message)
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_responses(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> WebResult<Json<Vec<ResponseInfo>>> {
    let id = parse_id(&id, "Vacancy")?;
    let vacancy = state.vacancies.get_vacancy(id).await?;
    require_owner(&state, vacancy.project, claims.sub).await?;

    Ok(Json(state.vacancies.list_responses(id).await?))
}
