/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use shance_core::error::ServiceError;
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    JsonParsing(JsonRejection),
    Service(ServiceError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            WebError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            WebError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
            WebError::Service(err) => write!(f, "Service error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::JsonParsing(err) => Some(err),
            WebError::Service(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ServiceError> for WebError {
    fn from(err: ServiceError) -> Self {
        WebError::Service(err)
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Service(ServiceError::Database(err))
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

fn service_status(err: ServiceError) -> (StatusCode, String) {
    match err {
        ServiceError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        err @ ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        ServiceError::InvalidCredentials => {
            (StatusCode::UNAUTHORIZED, "invalid credentials".to_string())
        }
        ServiceError::Token(err) => {
            tracing::debug!("Token rejected: {}", err);
            (StatusCode::UNAUTHORIZED, "invalid token".to_string())
        }
        ServiceError::UserNotFound => {
            tracing::debug!("Token subject no longer exists");
            (StatusCode::UNAUTHORIZED, "invalid token".to_string())
        }
        ServiceError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        ServiceError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        ServiceError::Database(err) => {
            tracing::error!("Database error: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            )
        }
        ServiceError::Internal(msg) => {
            tracing::error!("Internal error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            WebError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            WebError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            WebError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            WebError::JsonParsing(err) => {
                (StatusCode::BAD_REQUEST, format!("Invalid JSON: {}", err))
            }
            WebError::Service(err) => service_status(err),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

// Helper functions for common error scenarios
impl WebError {
    pub fn invalid_id(resource: &str) -> Self {
        WebError::BadRequest(format!("Invalid {} ID", resource))
    }

    pub fn unauthorized() -> Self {
        WebError::Unauthorized("unauthorized".to_string())
    }

    pub fn invalid_token() -> Self {
        WebError::Unauthorized("invalid token".to_string())
    }

    pub fn not_owner() -> Self {
        WebError::Forbidden("Only the project owner can do this".to_string())
    }

    pub fn missing_query() -> Self {
        WebError::BadRequest("Search query is required".to_string())
    }
}
