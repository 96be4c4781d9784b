//! HTTP handlers for the calendar endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::classroom::handle_classroom_error;
use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::calendar::{
    CalendarWindow, GetCalendarHandler, GetCalendarQuery,
};
use crate::domain::foundation::Timestamp;
use crate::domain::schedule::CalendarView;

use super::dto::{CalendarQuery, CalendarResponse, NavigationResponse};

#[derive(Clone)]
pub struct CalendarHandlers {
    calendar_handler: Arc<GetCalendarHandler>,
}

impl CalendarHandlers {
    pub fn new(calendar_handler: Arc<GetCalendarHandler>) -> Self {
        Self { calendar_handler }
    }
}

/// GET /api/calendar - Expanded sessions visible to the caller
pub async fn get_calendar(
    State(handlers): State<CalendarHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<CalendarQuery>,
) -> Response {
    let (window, navigation) = match resolve_window(&params) {
        Ok(resolved) => resolved,
        Err(message) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message)))
                .into_response()
        }
    };

    let query = GetCalendarQuery {
        viewer: user,
        window,
    };

    match handlers.calendar_handler.handle(query).await {
        Ok(result) => {
            (StatusCode::OK, Json(CalendarResponse::new(result, navigation))).into_response()
        }
        Err(e) => handle_classroom_error(e),
    }
}

/// Explicit `from`/`to` wins; otherwise the view (default week) around the
/// anchor (default today, UTC).
fn resolve_window(
    params: &CalendarQuery,
) -> Result<(CalendarWindow, Option<NavigationResponse>), String> {
    if let (Some(from), Some(to)) = (params.from, params.to) {
        return Ok((CalendarWindow::Explicit { from, to }, None));
    }

    let view = match params.view.as_deref() {
        Some(raw) => raw.parse::<CalendarView>().map_err(|e| e.to_string())?,
        None => CalendarView::default(),
    };
    let anchor = params.anchor.unwrap_or_else(|| Timestamp::now().date());

    Ok((
        CalendarWindow::View { view, anchor },
        Some(NavigationResponse::new(view, anchor)),
    ))
}
