//! TaskY backend: REST API for personal task management.
//!
//! The router is built here so integration tests can drive the exact
//! application the binary serves.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod state;
pub mod types;
pub mod utils;
pub mod validation;

pub use state::AppState;

/// Extra multipart framing headroom on top of the avatar size ceiling.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route(
            "/api/auth/forgot-password",
            post(handlers::auth::forgot_password),
        )
        .route(
            "/api/auth/reset-password",
            post(handlers::auth::reset_password),
        );

    let protected_routes = Router::new()
        .route("/api/auth/password", patch(handlers::auth::change_password))
        .route("/api/auth/avatar", patch(handlers::auth::upload_avatar))
        .route(
            "/api/user",
            get(handlers::users::get_profile).patch(handlers::users::update_profile),
        )
        .route(
            "/api/tasks",
            post(handlers::tasks::create_task).get(handlers::tasks::list_tasks),
        )
        .route(
            "/api/tasks/{id}",
            get(handlers::tasks::get_task)
                .patch(handlers::tasks::update_task)
                .delete(handlers::tasks::delete_task),
        )
        .route(
            "/api/tasks/restore/{id}",
            patch(handlers::tasks::restore_task),
        )
        .route(
            "/api/tasks/complete/{id}",
            patch(handlers::tasks::complete_task),
        )
        .route(
            "/api/tasks/incomplete/{id}",
            patch(handlers::tasks::incomplete_task),
        )
        .route(
            "/api/tasks/hard-delete/{id}",
            delete(handlers::tasks::hard_delete_task),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth,
        ));

    let body_limit = state.config.avatar_max_bytes + MULTIPART_OVERHEAD_BYTES;
    let cors = cors_layer(&state.config.cors_allow_origins);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .route("/health", get(health))
        .merge(
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", docs::ApiDoc::openapi()),
        )
        .nest_service("/uploads", ServeDir::new(&state.config.upload_dir))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}

fn cors_layer(allow_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(24 * 60 * 60));

    if allow_origins.iter().any(|origin| origin == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allow_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
