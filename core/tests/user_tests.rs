/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use common::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use shance_core::error::ServiceError;
use shance_core::types::*;
use uuid::Uuid;

#[tokio::test]
async fn test_get_user_profile() {
    let state = create_test_state().await;
    let (user_id, _) = register_user(&state, "alice@example.com", "Alice").await;

    let profile = state.users.get_by_id(user_id).await.unwrap();
    assert_eq!(profile.email, "alice@example.com");
    assert_eq!(profile.first_name, "Alice");
    assert_eq!(profile.city, "Berlin");
    assert_eq!(profile.role, "user");

    let json = serde_json::to_value(&profile).unwrap();
    assert!(json.get("password").is_none());

    assert!(matches!(
        state.users.get_by_id(Uuid::new_v4()).await,
        Err(ServiceError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_partial_update() {
    let state = create_test_state().await;
    let (user_id, _) = register_user(&state, "alice@example.com", "Alice").await;

    let updated = state
        .users
        .update(
            user_id,
            UserUpdate {
                city: Some("Hamburg".to_string()),
                tags: Some(vec!["design".to_string(), "rust".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.city, "Hamburg");
    assert_eq!(updated.first_name, "Alice");
    assert_eq!(updated.country, "Germany");
    assert_eq!(updated.tags, vec!["design", "rust"]);

    let updated = state
        .users
        .update(
            user_id,
            UserUpdate {
                first_name: Some("Alicia".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Alicia");
    assert_eq!(updated.tags, vec!["design", "rust"]);

    let updated = state
        .users
        .update(
            user_id,
            UserUpdate {
                tags: Some(vec![]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.tags.is_empty());

    let result = state
        .users
        .update(
            user_id,
            UserUpdate {
                last_name: Some(" ".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[tokio::test]
async fn test_delete_user_cascades() {
    let state = create_test_state().await;
    let (owner_id, _) = register_user(&state, "owner@example.com", "Owner").await;

    state
        .projects
        .create(project_data("Shance", &["web"]), owner_id)
        .await
        .unwrap();

    state.users.delete(owner_id).await.unwrap();

    assert_eq!(EUser::find().count(state.db.as_ref()).await.unwrap(), 0);
    assert_eq!(EProject::find().count(state.db.as_ref()).await.unwrap(), 0);
    assert_eq!(EProjectMember::find().count(state.db.as_ref()).await.unwrap(), 0);

    assert!(matches!(
        state.users.delete(owner_id).await,
        Err(ServiceError::NotFound(_))
    ));
}
