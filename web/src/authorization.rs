/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::{Request, State};
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use shance_core::consts::ACCESS_TOKEN_COOKIE;
use shance_core::error::ServiceError;
use shance_core::types::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// Validates the access token and stores its claims in the request extensions.
pub async fn authorize(
    State(state): State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> WebResult<Response> {
    let token = token_from_headers(req.headers()).ok_or_else(WebError::unauthorized)?;

    let claims = state.tokens.validate_access(&token).map_err(|e| {
        tracing::debug!("Rejected access token: {}", e);
        WebError::invalid_token()
    })?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Reads the access token from the `access_token` cookie, falling back to the
/// `Authorization` header. A leading `Bearer ` is stripped in both cases.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookie = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == ACCESS_TOKEN_COOKIE)
        .map(|(_, value)| value.to_string());

    let raw = cookie.or_else(|| {
        headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    })?;

    let raw = raw.trim();
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

fn cookie_header(value: &str, max_age: i64, secure: bool) -> WebResult<HeaderValue> {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        ACCESS_TOKEN_COOKIE, value, max_age
    );

    if secure {
        cookie.push_str("; Secure");
    }

    HeaderValue::from_str(&cookie).map_err(|e| {
        WebError::Service(ServiceError::Internal(format!(
            "Failed to build cookie: {}",
            e
        )))
    })
}

pub fn access_cookie(state: &ServerState, token: &str) -> WebResult<HeaderValue> {
    cookie_header(
        token,
        state.cli.access_token_ttl * 60,
        state.cli.secure_cookies,
    )
}

pub fn clear_cookie(state: &ServerState) -> WebResult<HeaderValue> {
    cookie_header("", 0, state.cli.secure_cookies)
}

/// Succeeds only for the owner of `project_id`. A missing project yields 404
/// instead of 403.
pub async fn require_owner(state: &ServerState, project_id: Uuid, user_id: Uuid) -> WebResult<()> {
    if state.projects.is_owner(project_id, user_id).await? {
        return Ok(());
    }

    state.projects.get_by_id(project_id).await?;
    Err(WebError::not_owner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; access_token=abc.def.ghi"),
        );

        assert_eq!(token_from_headers(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_token_from_cookie_with_bearer_prefix() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("access_token=Bearer abc"));

        assert_eq!(token_from_headers(&headers), Some("abc".to_string()));
    }

    #[test]
    fn test_token_from_authorization_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer xyz"));

        assert_eq!(token_from_headers(&headers), Some("xyz".to_string()));
    }

    #[test]
    fn test_cookie_takes_precedence() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("access_token=from-cookie"));
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));

        assert_eq!(token_from_headers(&headers), Some("from-cookie".to_string()));
    }

    #[test]
    fn test_missing_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(token_from_headers(&headers), None);

        headers.insert(COOKIE, HeaderValue::from_static("access_token="));
        assert_eq!(token_from_headers(&headers), None);
    }

    #[test]
    fn test_cookie_attributes() {
        let cookie = cookie_header("abc", 900, true).unwrap();
        let cookie = cookie.to_str().unwrap();

        assert!(cookie.starts_with("access_token=abc;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=900"));
        assert!(cookie.ends_with("; Secure"));
    }
}
