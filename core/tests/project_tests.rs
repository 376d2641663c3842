/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use shance_core::error::ServiceError;
use shance_core::types::*;
use uuid::Uuid;

#[tokio::test]
async fn test_create_project_makes_owner_member() {
    let state = create_test_state().await;
    let (owner_id, _) = register_user(&state, "owner@example.com", "Owner").await;

    let mut data = project_data("Shance", &["web", " rust ", "", "web"]);
    data.photos = vec!["https://cdn.example.com/cover.png".to_string()];
    data.start_date = Some(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap());

    let project = state.projects.create(data, owner_id).await.unwrap();

    assert_eq!(project.status, "active");
    assert_eq!(project.tags, vec!["rust", "web"]);
    assert_eq!(project.photos, vec!["https://cdn.example.com/cover.png"]);
    assert_eq!(
        project.start_date,
        Some(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap())
    );
    assert_eq!(project.created_by, owner_id);
    assert_eq!(project.owner.as_ref().unwrap().email, "owner@example.com");

    assert!(state.projects.is_owner(project.id, owner_id).await.unwrap());

    let members = state.projects.list_members(project.id).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, owner_id);
    assert_eq!(members[0].role, "owner");
}

#[tokio::test]
async fn test_create_project_requires_name() {
    let state = create_test_state().await;
    let (owner_id, _) = register_user(&state, "owner@example.com", "Owner").await;

    let result = state.projects.create(project_data("  ", &[]), owner_id).await;
    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[tokio::test]
async fn test_create_project_for_deleted_user() {
    let state = create_test_state().await;
    let (owner_id, _) = register_user(&state, "owner@example.com", "Owner").await;
    state.users.delete(owner_id).await.unwrap();

    let result = state.projects.create(project_data("Orphan", &["rust"]), owner_id).await;
    assert!(matches!(result, Err(ServiceError::UserNotFound)));
    assert_eq!(EProject::find().count(state.db.as_ref()).await.unwrap(), 0);
    assert_eq!(ETag::find().count(state.db.as_ref()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_get_missing_project() {
    let state = create_test_state().await;

    let result = state.projects.get_by_id(Uuid::new_v4()).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn test_update_overwrites_project() {
    let state = create_test_state().await;
    let (owner_id, _) = register_user(&state, "owner@example.com", "Owner").await;

    let mut data = project_data("Shance", &["web"]);
    data.photos = vec!["a.png".to_string()];
    let project = state.projects.create(data, owner_id).await.unwrap();

    let mut update = project_data("Shance 2", &["mobile"]);
    update.status = Some("archived".to_string());
    let updated = state.projects.update(project.id, update).await.unwrap();

    assert_eq!(updated.id, project.id);
    assert_eq!(updated.name, "Shance 2");
    assert_eq!(updated.status, "archived");
    assert_eq!(updated.tags, vec!["mobile"]);
    assert!(updated.photos.is_empty());
    assert!(state.projects.is_owner(project.id, owner_id).await.unwrap());

    let result = state
        .projects
        .update(Uuid::new_v4(), project_data("Missing", &[]))
        .await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_project_removes_dependents() {
    let state = create_test_state().await;
    let (owner_id, _) = register_user(&state, "owner@example.com", "Owner").await;
    let (member_id, _) = register_user(&state, "member@example.com", "Member").await;

    let project = state
        .projects
        .create(project_data("Shance", &["web"]), owner_id)
        .await
        .unwrap();
    state
        .projects
        .invite_member(project.id, "member@example.com", "member")
        .await
        .unwrap();

    let vacancy = state
        .vacancies
        .create_vacancy(
            project.id,
            VacancyData {
                title: "Backend".to_string(),
                description: "Rust".to_string(),
                technologies: vec![],
                questions: vec!["Why?".to_string()],
            },
        )
        .await
        .unwrap();
    state
        .vacancies
        .respond(vacancy.id, member_id, "Hello")
        .await
        .unwrap();

    state.projects.delete(project.id).await.unwrap();

    assert!(matches!(
        state.projects.get_by_id(project.id).await,
        Err(ServiceError::NotFound(_))
    ));
    assert_eq!(EProjectMember::find().count(state.db.as_ref()).await.unwrap(), 0);
    assert_eq!(EProjectTag::find().count(state.db.as_ref()).await.unwrap(), 0);
    assert_eq!(EProjectVacancy::find().count(state.db.as_ref()).await.unwrap(), 0);
    assert_eq!(EVacancyQuestion::find().count(state.db.as_ref()).await.unwrap(), 0);
    assert_eq!(EVacancyResponse::find().count(state.db.as_ref()).await.unwrap(), 0);

    // shared tags survive the project
    assert_eq!(ETag::find().count(state.db.as_ref()).await.unwrap(), 1);

    assert!(matches!(
        state.projects.delete(project.id).await,
        Err(ServiceError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let state = create_test_state().await;
    let (owner_id, _) = register_user(&state, "owner@example.com", "Owner").await;

    let mut alpha = project_data("Alpha", &[]);
    alpha.description = "A RUST backend".to_string();
    state.projects.create(alpha, owner_id).await.unwrap();

    let mut beta = project_data("Beta", &[]);
    beta.title = "Rustic furniture".to_string();
    state.projects.create(beta, owner_id).await.unwrap();

    state
        .projects
        .create(project_data("Gamma", &[]), owner_id)
        .await
        .unwrap();

    let mut names: Vec<String> = state
        .projects
        .search("rust")
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["Alpha", "Beta"]);

    assert!(state.projects.search("nothing here").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_matches_wildcards_literally() {
    let state = create_test_state().await;
    let (owner_id, _) = register_user(&state, "owner@example.com", "Owner").await;

    state
        .projects
        .create(project_data("100% coverage", &[]), owner_id)
        .await
        .unwrap();
    state
        .projects
        .create(project_data("1000 users", &[]), owner_id)
        .await
        .unwrap();

    let found = state.projects.search("0%").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "100% coverage");

    assert!(state.projects.search("_").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invite_member_twice() {
    let state = create_test_state().await;
    let (owner_id, _) = register_user(&state, "owner@example.com", "Owner").await;
    let (member_id, _) = register_user(&state, "member@example.com", "Member").await;

    let project = state
        .projects
        .create(project_data("Shance", &[]), owner_id)
        .await
        .unwrap();

    let member = state
        .projects
        .invite_member(project.id, "Member@Example.com", "member")
        .await
        .unwrap();
    assert_eq!(member.id, member_id);
    assert_eq!(member.role, "member");
    assert_eq!(member.first_name, "Member");

    let second = state
        .projects
        .invite_member(project.id, "member@example.com", "member")
        .await;
    assert!(matches!(second, Err(ServiceError::Conflict(_))));

    let rows = EProjectMember::find()
        .filter(CProjectMember::User.eq(member_id))
        .count(state.db.as_ref())
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn test_invite_member_errors() {
    let state = create_test_state().await;
    let (owner_id, _) = register_user(&state, "owner@example.com", "Owner").await;
    register_user(&state, "member@example.com", "Member").await;

    let project = state
        .projects
        .create(project_data("Shance", &[]), owner_id)
        .await
        .unwrap();

    assert!(matches!(
        state
            .projects
            .invite_member(Uuid::new_v4(), "member@example.com", "member")
            .await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        state
            .projects
            .invite_member(project.id, "ghost@example.com", "member")
            .await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        state
            .projects
            .invite_member(project.id, "member@example.com", "owner")
            .await,
        Err(ServiceError::Validation(_))
    ));
}

#[tokio::test]
async fn test_tags_are_shared_across_projects() {
    let state = create_test_state().await;
    let (owner_id, _) = register_user(&state, "owner@example.com", "Owner").await;

    state
        .projects
        .create(project_data("First", &["rust"]), owner_id)
        .await
        .unwrap();
    state
        .projects
        .create(project_data("Second", &["rust", "web"]), owner_id)
        .await
        .unwrap();

    let rust_tags = ETag::find()
        .filter(CTag::Name.eq("rust"))
        .all(state.db.as_ref())
        .await
        .unwrap();
    assert_eq!(rust_tags.len(), 1);

    let links = EProjectTag::find()
        .filter(CProjectTag::Tag.eq(rust_tags[0].id))
        .count(state.db.as_ref())
        .await
        .unwrap();
    assert_eq!(links, 2);
}

#[tokio::test]
async fn test_owner_and_member_projects() {
    let state = create_test_state().await;
    let (owner_id, _) = register_user(&state, "owner@example.com", "Owner").await;
    let (member_id, _) = register_user(&state, "member@example.com", "Member").await;

    let project = state
        .projects
        .create(project_data("Shance", &["web"]), owner_id)
        .await
        .unwrap();
    state
        .projects
        .invite_member(project.id, "member@example.com", "developer")
        .await
        .unwrap();

    assert!(state.projects.is_owner(project.id, owner_id).await.unwrap());
    assert!(!state.projects.is_owner(project.id, member_id).await.unwrap());

    let owner_projects = state.users.get_own_projects(owner_id).await.unwrap();
    let member_projects = state.users.get_own_projects(member_id).await.unwrap();
    assert_eq!(owner_projects.len(), 1);
    assert_eq!(member_projects.len(), 1);
    assert_eq!(member_projects[0].id, project.id);

    let members = state.projects.list_members(project.id).await.unwrap();
    let roles: Vec<(&str, &str)> = members
        .iter()
        .map(|m| (m.email.as_str(), m.role.as_str()))
        .collect();
    assert_eq!(
        roles,
        vec![
            ("owner@example.com", "owner"),
            ("member@example.com", "developer")
        ]
    );

    assert_eq!(state.projects.list().await.unwrap().len(), 1);
}
