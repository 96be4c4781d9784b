//! HTTP routes for live-room endpoints.

use axum::{routing::post, Router};

use super::handlers::{issue_room_token, LiveHandlers};

/// Creates the live router, mounted at `/api/live`.
pub fn live_routes(handlers: LiveHandlers) -> Router {
    Router::new()
        .route("/token", post(issue_room_token))
        .with_state(handlers)
}
