//! HTTP routes for the calendar endpoint.

use axum::{routing::get, Router};

use super::handlers::{get_calendar, CalendarHandlers};

/// Creates the calendar router, mounted at `/api/calendar`.
pub fn calendar_routes(handlers: CalendarHandlers) -> Router {
    Router::new()
        .route("/", get(get_calendar))
        .with_state(handlers)
}
