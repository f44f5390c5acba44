//! Route definitions and router setup
//!
//! Configures all API routes and middleware. Public endpoints serve the
//! storefront; everything under /api/admin is session-gated.

mod auth;
mod contact;
mod dashboard;
mod gallery;
mod preferences;
mod pricing;
mod reviews;

use crate::auth::require_session;
use crate::config::Settings;
use crate::state::SharedState;
use axum::{
    http::{header, Method},
    middleware,
    routing::{get, patch, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::Level;

/// Create the application router with all routes and middleware
pub fn create_router(state: SharedState, settings: &Settings) -> Router {
    // Build CORS layer
    let cors = build_cors_layer(settings);

    // Build tracing/logging layer
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Build middleware stack
    let middleware_stack = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .layer(trace_layer)
        .layer(CompressionLayer::new())
        .layer(cors)
        .propagate_x_request_id();

    // Admin back-office routes, session-gated
    let admin = Router::new()
        .route("/dashboard", get(dashboard::overview))
        .route("/reviews", get(reviews::list_all))
        .route(
            "/reviews/{id}",
            patch(reviews::update).delete(reviews::delete),
        )
        .route("/pricing/{id}", patch(pricing::update))
        .route("/gallery", get(gallery::list_all).post(gallery::create))
        .route(
            "/gallery/{id}",
            patch(gallery::update).delete(gallery::delete),
        )
        .route("/contacts", get(contact::list_all))
        .route(
            "/contacts/{id}",
            patch(contact::update).delete(contact::delete),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    // Build the router
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Session gate
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/session", get(auth::session))
        // Public storefront data
        .route("/api/reviews", get(reviews::list_published).post(reviews::create))
        .route("/api/pricing", get(pricing::list))
        .route("/api/rates", get(pricing::rates))
        .route("/api/quote", post(pricing::quote))
        .route("/api/gallery", get(gallery::list_public))
        .route("/api/contact", post(contact::submit))
        // Site preferences
        .route(
            "/api/preferences",
            get(preferences::get_preferences).put(preferences::set_preferences),
        )
        // Admin back-office
        .nest("/api/admin", admin)
        // Apply middleware and state
        .layer(middleware_stack)
        .with_state(state)
}

/// Build CORS layer from settings
fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<_> = settings
        .cors
        .allowed_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    }
}

/// Health check endpoint
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "success": true,
        "message": "Server is running fine.",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
