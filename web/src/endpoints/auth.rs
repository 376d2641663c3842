/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::{access_cookie, clear_cookie};
use crate::error::WebResult;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use shance_core::types::*;
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

type TokenResponse = ([(axum::http::HeaderName, HeaderValue); 1], Json<TokenPair>);

fn token_response(state: &ServerState, pair: TokenPair) -> WebResult<TokenResponse> {
    let cookie = access_cookie(state, &pair.access_token)?;
    Ok(([(SET_COOKIE, cookie)], Json(pair)))
}

pub async fn post_register(
    state: State<Arc<ServerState>>,
    body: Result<Json<RegisterData>, JsonRejection>,
) -> WebResult<(StatusCode, TokenResponse)> {
    let Json(body) = body?;
    let pair = state.auth.register(body).await?;

    Ok((StatusCode::CREATED, token_response(&state, pair)?))
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> WebResult<TokenResponse> {
    let Json(body) = body?;
    let pair = state.auth.login(&body.email, &body.password).await?;

    token_response(&state, pair)
}

pub async fn post_refresh(
    state: State<Arc<ServerState>>,
    body: Result<Json<RefreshRequest>, JsonRejection>,
) -> WebResult<TokenResponse> {
    let Json(body) = body?;
    let pair = state.auth.refresh(&body.refresh_token).await?;

    token_response(&state, pair)
}

pub async fn post_logout(
    state: State<Arc<ServerState>>,
) -> WebResult<(StatusCode, [(axum::http::HeaderName, HeaderValue); 1])> {
    let cookie = clear_cookie(&state)?;
    Ok((StatusCode::NO_CONTENT, [(SET_COOKIE, cookie)]))
}
