/*
* SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
*
* SPDX-License-Identifier: AGPL-3.0-only
*/

pub mod auth;
pub mod projects;
pub mod tags;
pub mod user;
pub mod vacancies;

use crate::error::{WebError, WebResult};
use axum::extract::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    /// The trimmed query, or 400 when it is absent or blank.
    pub fn term(&self) -> WebResult<&str> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(WebError::missing_query)
    }
}

pub fn parse_id(id: &str, resource: &str) -> WebResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| WebError::invalid_id(resource))
}

pub async fn handle_404() -> WebError {
    WebError::NotFound("Not Found".to_string())
}

pub async fn get_health() -> WebResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "Project").unwrap(), id);
        assert!(matches!(
            parse_id("not-a-uuid", "Project"),
            Err(WebError::BadRequest(msg)) if msg == "Invalid Project ID"
        ));
    }

    #[test]
    fn test_search_term() {
        let query = SearchQuery {
            q: Some("  rust ".to_string()),
        };
        assert_eq!(query.term().unwrap(), "rust");

        assert!(SearchQuery { q: None }.term().is_err());
        assert!(SearchQuery { q: Some("   ".to_string()) }.term().is_err());
    }
}
