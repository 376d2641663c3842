/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use shance_core::types::*;

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

/// In-memory SQLite database with every migration applied. A single pooled
/// connection keeps all queries on the same memory database.
pub async fn create_test_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub async fn create_test_state() -> ServerState {
    let db = create_test_db().await;
    ServerState::new(db, create_test_cli(), TEST_SECRET)
}

pub fn register_data(email: &str, first_name: &str) -> RegisterData {
    RegisterData {
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        phone: "+49 30 1234".to_string(),
        role: None,
        country: "Germany".to_string(),
        city: "Berlin".to_string(),
        tags: vec![],
    }
}

/// Registers a user and returns its id together with the issued pair.
pub async fn register_user(
    state: &ServerState,
    email: &str,
    first_name: &str,
) -> (uuid::Uuid, TokenPair) {
    let pair = state
        .auth
        .register(register_data(email, first_name))
        .await
        .unwrap();
    let claims = state.tokens.validate_access(&pair.access_token).unwrap();
    (claims.sub, pair)
}

pub fn project_data(name: &str, tags: &[&str]) -> ProjectData {
    ProjectData {
        name: name.to_string(),
        title: format!("{} title", name),
        subtitle: String::new(),
        description: format!("{} description", name),
        photos: vec![],
        status: None,
        start_date: None,
        end_date: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}
