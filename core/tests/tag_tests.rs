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
async fn test_tag_crud() {
    let state = create_test_state().await;

    let tag = state.tags.create(" backend ").await.unwrap();
    assert_eq!(tag.name, "backend");

    assert_eq!(state.tags.get_by_id(tag.id).await.unwrap(), tag);

    let renamed = state.tags.update(tag.id, "server").await.unwrap();
    assert_eq!(renamed.id, tag.id);
    assert_eq!(renamed.name, "server");

    state.tags.delete(tag.id).await.unwrap();
    assert!(matches!(
        state.tags.get_by_id(tag.id).await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        state.tags.delete(tag.id).await,
        Err(ServiceError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_tag_conflicts() {
    let state = create_test_state().await;

    let rust = state.tags.create("rust").await.unwrap();
    state.tags.create("go").await.unwrap();

    assert!(matches!(
        state.tags.create("rust").await,
        Err(ServiceError::Conflict(_))
    ));
    assert!(matches!(
        state.tags.update(rust.id, "go").await,
        Err(ServiceError::Conflict(_))
    ));
    assert!(matches!(
        state.tags.update(Uuid::new_v4(), "python").await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        state.tags.create("   ").await,
        Err(ServiceError::Validation(_))
    ));

    // renaming to its own name is allowed
    assert!(state.tags.update(rust.id, "rust").await.is_ok());
}

#[tokio::test]
async fn test_tag_list_and_search() {
    let state = create_test_state().await;

    for name in ["Rust", "go", "rustls", "python"] {
        state.tags.create(name).await.unwrap();
    }

    let names: Vec<String> = state
        .tags
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["Rust", "go", "python", "rustls"]);

    let found: Vec<String> = state
        .tags
        .search("RUST")
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(found, vec!["Rust", "rustls"]);

    assert!(state.tags.search("java").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_tag_unlinks_projects() {
    let state = create_test_state().await;
    let (owner_id, _) = register_user(&state, "owner@example.com", "Owner").await;

    let project = state
        .projects
        .create(project_data("Shance", &["rust", "web"]), owner_id)
        .await
        .unwrap();

    let tags = state.tags.search("rust").await.unwrap();
    state.tags.delete(tags[0].id).await.unwrap();

    let project = state.projects.get_by_id(project.id).await.unwrap();
    assert_eq!(project.tags, vec!["web"]);
    assert_eq!(EProjectTag::find().count(state.db.as_ref()).await.unwrap(), 1);
}
