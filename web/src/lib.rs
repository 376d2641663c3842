/*
 * SPDX-FileCopyrightText: 2024 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;

use axum::http::HeaderValue;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::routing::{get, post};
use axum::{Router, middleware};
use shance_core::types::{Cli, ServerState};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

fn cors_layer(cli: &Cli) -> CorsLayer {
    let mut origins = vec![cli.serve_url.clone()];
    if cli.debug {
        origins.push(format!("http://{}:8000", cli.ip));
    }

    let origins: Vec<HeaderValue> = origins
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {}: {}", origin, e);
                None
            }
        })
        .collect();

    let allow_origin = if !cli.debug && origins.len() == 1 {
        AllowOrigin::exact(origins[0].clone())
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers(vec![AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true)
}

pub fn create_router(state: Arc<ServerState>) -> Router {
    let protected = Router::new()
        .route(
            "/users/me",
            get(endpoints::user::get_me)
                .patch(endpoints::user::patch_me)
                .delete(endpoints::user::delete_me),
        )
        .route("/users/{id}", get(endpoints::user::get_user))
        .route("/users/{id}/projects", get(endpoints::user::get_user_projects))
        .route(
            "/projects",
            get(endpoints::projects::get).post(endpoints::projects::post),
        )
        .route("/projects/search", get(endpoints::projects::search))
        .route(
            "/projects/{id}",
            get(endpoints::projects::get_project)
                .put(endpoints::projects::put_project)
                .delete(endpoints::projects::delete_project),
        )
        .route("/projects/{id}/invite", post(endpoints::projects::post_invite))
        .route("/projects/{id}/members", get(endpoints::projects::get_members))
        .route("/projects/{id}/vacancy", post(endpoints::vacancies::post_vacancy))
        .route(
            "/projects/{id}/vacancies",
            get(endpoints::vacancies::get_vacancies),
        )
        .route("/vacancies/{id}", post(endpoints::vacancies::post_response))
        .route(
            "/vacancies/{id}/responses",
            get(endpoints::vacancies::get_responses),
        )
        .route(
            "/tags",
            get(endpoints::tags::get).post(endpoints::tags::post),
        )
        .route("/tags/search", get(endpoints::tags::search))
        .route(
            "/tags/{id}",
            get(endpoints::tags::get_tag)
                .put(endpoints::tags::put_tag)
                .delete(endpoints::tags::delete_tag),
        )
        .route(
            "/technologies",
            get(endpoints::vacancies::get_technologies).post(endpoints::vacancies::post_technology),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorization::authorize,
        ));

    let api = protected
        .route("/auth/register", post(endpoints::auth::post_register))
        .route("/auth/login", post(endpoints::auth::post_login))
        .route("/auth/refresh", post(endpoints::auth::post_refresh))
        .route("/auth/logout", post(endpoints::auth::post_logout))
        .route("/health", get(endpoints::get_health));

    Router::new()
        .nest("/api/v1", api)
        .fallback(endpoints::handle_404)
        .layer(cors_layer(&state.cli))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);
    axum::serve(listener, app).await
}
