/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum_test::TestServer;
use axum::http::header::{AUTHORIZATION, COOKIE, SET_COOKIE};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use serde_json::{Value, json};
use shance_core::types::*;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test_jwt_secret";
pub const TEST_PASSWORD: &str = "secret123";

pub fn create_test_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        log_json: false,
        debug: true,
        ip: "127.0.0.1".to_string(),
        port: 3000,
        serve_url: "http://127.0.0.1:8000".to_string(),
        database_url: Some("sqlite::memory:".to_string()),
        database_url_file: None,
        jwt_secret_file: "test_jwt".to_string(),
        access_token_ttl: 15,
        refresh_token_ttl: 30,
        secure_cookies: false,
    }
}

pub async fn create_test_state() -> Arc<ServerState> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    Arc::new(ServerState::new(db, create_test_cli(), TEST_SECRET))
}

pub async fn create_test_server() -> TestServer {
    let state = create_test_state().await;
    TestServer::new(web::create_router(state)).unwrap()
}

pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    )
}

pub fn cookie(token: &str) -> (HeaderName, HeaderValue) {
    (
        COOKIE,
        HeaderValue::from_str(&format!("access_token={}", token)).unwrap(),
    )
}

/// Registers a user and returns the issued access token.
pub async fn register(server: &TestServer, email: &str, first_name: &str) -> String {
    let response = server
        .post("/api/v1/auth/register")
        .json(&json!({
            "email": email,
            "password": TEST_PASSWORD,
            "first_name": first_name,
            "last_name": "Tester",
            "phone": "+49 30 1234",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert!(response.headers().get(SET_COOKIE).is_some());

    let body: TokenPair = response.json();
    body.access_token
}

/// Creates a project owned by the holder of `token` and returns its id.
pub async fn create_project(server: &TestServer, token: &str, name: &str) -> String {
    let (name_header, value) = bearer(token);
    let response = server
        .post("/api/v1/projects")
        .add_header(name_header, value)
        .json(&json!({
            "name": name,
            "title": format!("{} title", name),
            "description": "A project for testing",
            "tags": ["rust", "web"],
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    body["id"].as_str().unwrap().to_string()
}
