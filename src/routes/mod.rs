/// Application routes configuration
use crate::handlers::{
    focus, get_analytics, get_latest_launch, get_launch, get_next_launch, get_payload,
    get_rocket, get_starlink, get_starlink_map, get_summary, health, list_launches,
    list_past_launches, list_payloads, list_rockets, list_starlinks, list_upcoming_launches,
    reconnect, refresh_resource, AppState,
};
use axum::{routing::get, Router};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Launch endpoints
        .route("/launches", get(list_launches))
        .route("/launches/upcoming", get(list_upcoming_launches))
        .route("/launches/past", get(list_past_launches))
        .route("/launches/latest", get(get_latest_launch))
        .route("/launches/next", get(get_next_launch))
        .route("/launches/:id", get(get_launch))
        // Rocket endpoints
        .route("/rockets", get(list_rockets))
        .route("/rockets/:id", get(get_rocket))
        // Payload endpoints
        .route("/payloads", get(list_payloads))
        .route("/payloads/:id", get(get_payload))
        // Starlink endpoints
        .route("/starlink", get(list_starlinks))
        .route("/starlink/map", get(get_starlink_map))
        .route("/starlink/:id", get(get_starlink))
        // Derived views
        .route("/analytics", get(get_analytics))
        .route("/summary", get(get_summary))
        // Cache control
        .route("/refresh/:resource", get(refresh_resource))
        .route("/focus", get(focus))
        .route("/reconnect", get(reconnect))
        .with_state(state)
}
