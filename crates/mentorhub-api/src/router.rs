//! Route definitions for the MentorHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    http::{HeaderName, Method},
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(mentor_routes())
        .merge(match_routes())
        .merge(image_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: signup, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(handlers::auth::signup))
        .route("/login", post(handlers::auth::login))
        .route("/me", get(handlers::auth::me))
}

/// Profile self-service
fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", put(handlers::profile::update_profile))
}

/// Mentor discovery (mentee-only, enforced in the service)
fn mentor_routes() -> Router<AppState> {
    Router::new().route("/mentors", get(handlers::mentor::list_mentors))
}

/// Match request lifecycle
fn match_routes() -> Router<AppState> {
    Router::new()
        .route("/match-requests", post(handlers::matching::create))
        .route(
            "/match-requests/incoming",
            get(handlers::matching::incoming),
        )
        .route(
            "/match-requests/outgoing",
            get(handlers::matching::outgoing),
        )
        .route(
            "/match-requests/{id}/accept",
            put(handlers::matching::accept),
        )
        .route(
            "/match-requests/{id}/reject",
            put(handlers::matching::reject),
        )
        .route("/match-requests/{id}", delete(handlers::matching::cancel))
}

/// Avatar images
fn image_routes() -> Router<AppState> {
    Router::new().route("/images/{role}/{id}", get(handlers::image::get_image))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<axum::http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = cors_config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors.max_age(std::time::Duration::from_secs(
        state.config.server.cors.max_age_seconds,
    ))
}
