/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for types and data structures

use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::{DatabaseBackend, MockDatabase};
use shance_core::types::*;
use uuid::Uuid;

fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        log_json: false,
        debug: false,
        ip: "127.0.0.1".to_string(),
        port: 3000,
        serve_url: "http://127.0.0.1:8000".to_string(),
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret_file: "test_jwt".to_string(),
        access_token_ttl: 15,
        refresh_token_ttl: 30,
        secure_cookies: false,
    }
}

fn create_user() -> MUser {
    let created_at = NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    MUser {
        id: Uuid::new_v4(),
        email: "alice@example.com".to_string(),
        password: "hash".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Doe".to_string(),
        phone: "+49 30 1234".to_string(),
        role: "user".to_string(),
        country: "Germany".to_string(),
        city: "Berlin".to_string(),
        last_login_at: None,
        created_at,
    }
}

#[test]
fn test_server_state_creation() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let state = ServerState::new(db, create_mock_cli(), "secret");

        assert_eq!(state.cli.port, 3000);
        assert_eq!(state.cli.access_token_ttl, 15);

        // One connection pool shared by the state and all five services.
        assert_eq!(std::sync::Arc::strong_count(&state.db), 6);
    });
}

#[test]
fn test_user_profile_hides_password() {
    let user = create_user();
    let profile = UserProfile::new(user.clone(), vec!["rust".to_string()]);

    assert_eq!(profile.id, user.id);
    assert_eq!(
        profile.created_at,
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    );

    let json = serde_json::to_string(&profile).unwrap();
    assert!(json.contains("alice@example.com"));
    assert!(!json.contains("password"));
}

#[test]
fn test_member_info_uses_user_id() {
    let user = create_user();
    let member = MProjectMember {
        id: Uuid::new_v4(),
        project: Uuid::new_v4(),
        user: user.id,
        role: "developer".to_string(),
        joined_at: user.created_at,
    };

    let info = MemberInfo::new(member, user.clone());
    assert_eq!(info.id, user.id);
    assert_eq!(info.role, "developer");
}

#[test]
fn test_project_data_defaults() {
    let data: ProjectData = serde_json::from_str(
        r#"{"name": "alpha", "photo": ["a.png"], "start_date": "2025-06-01T00:00:00Z"}"#,
    )
    .unwrap();

    assert_eq!(data.name, "alpha");
    assert_eq!(data.photos, vec!["a.png".to_string()]);
    assert!(data.status.is_none());
    assert!(data.tags.is_empty());
    assert_eq!(
        data.start_date,
        Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_register_data_optional_fields() {
    let data: RegisterData = serde_json::from_str(
        r#"{"email": "a@example.com", "password": "secret123", "first_name": "A", "last_name": "B"}"#,
    )
    .unwrap();

    assert!(data.phone.is_empty());
    assert!(data.role.is_none());
    assert!(data.tags.is_empty());

    let missing: Result<RegisterData, _> = serde_json::from_str(r#"{"email": "a@example.com"}"#);
    assert!(missing.is_err());
}

#[test]
fn test_user_update_is_partial() {
    let update: UserUpdate = serde_json::from_str(r#"{"city": "Hamburg"}"#).unwrap();

    assert_eq!(update.city.as_deref(), Some("Hamburg"));
    assert!(update.first_name.is_none());
    assert!(update.tags.is_none());
}
