/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for user entity

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

fn test_user(user_id: Uuid) -> user::Model {
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    user::Model {
        id: user_id,
        email: "test@example.com".to_owned(),
        password: "hashed_password".to_owned(),
        first_name: "Test".to_owned(),
        last_name: "User".to_owned(),
        phone: "+49 123 456".to_owned(),
        role: "user".to_owned(),
        country: "Germany".to_owned(),
        city: "Berlin".to_owned(),
        last_login_at: None,
        created_at: naive_date,
    }
}

#[tokio::test]
async fn test_user_entity_basic() -> Result<(), DbErr> {
    let user_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![test_user(user_id)]])
        .into_connection();

    let result = user::Entity::find_by_id(user_id).one(&db).await?;

    assert!(result.is_some());
    let user = result.unwrap();
    assert_eq!(user.email, "test@example.com");
    assert_eq!(user.first_name, "Test");
    assert!(user.last_login_at.is_none());

    Ok(())
}

#[test]
fn test_user_password_not_serialized() {
    let user = test_user(Uuid::new_v4());
    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("password").is_none());
    assert_eq!(json["email"], "test@example.com");
    assert_eq!(json["city"], "Berlin");
}

#[tokio::test]
async fn test_user_tags() -> Result<(), DbErr> {
    let user_id = Uuid::new_v4();
    let tag_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![tag::Model {
            id: tag_id,
            name: "rust".to_owned(),
        }]])
        .into_connection();

    let tags = tag::Entity::find()
        .inner_join(user_tag::Entity)
        .filter(user_tag::Column::User.eq(user_id))
        .all(&db)
        .await?;

    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "rust");

    Ok(())
}
