// Library crate for the Website Builder backend
// Exports modules for use by the server binary and tests

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_project, delete_project, generate_image, generate_logo, get_project, health_check,
    list_logos, list_projects, save_logo, update_project,
};
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        // Project routes
        .route("/api/projects", post(create_project))
        .route("/api/projects", get(list_projects))
        .route("/api/projects/{id}", get(get_project))
        .route("/api/projects/{id}", put(update_project))
        .route("/api/projects/{id}", delete(delete_project))
        // Generation routes
        .route("/api/generate-image", post(generate_image))
        .route("/api/generate-logo", post(generate_logo))
        // Logo routes
        .route("/api/logos", post(save_logo))
        .route("/api/logos", get(list_logos))
        .layer(TraceLayer::new_for_http())
        // The builder frontend is served from a different origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
