//! Router assembly for the HTTP API.
//!
//! [`app_router`] wires the application handlers over injected ports and
//! mounts every area under `/api`. [`with_http_layers`] adds tracing, CORS
//! and the request timeout from server configuration.

use std::sync::Arc;

use axum::{http::HeaderValue, middleware, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::{
    CreateClassroomHandler, GetCalendarHandler, GetClassroomHandler, IssueRoomTokenHandler,
    ListStudentClassroomsHandler, ListTeacherClassroomsHandler, LoginHandler, RegisterHandler,
};
use crate::config::ServerConfig;
use crate::ports::{
    ClassroomRepository, PasswordHasher, RoomTokenIssuer, SessionValidator, TokenIssuer,
    UserRepository,
};

use super::auth::{auth_routes, AuthHandlers, SessionCookie};
use super::calendar::{calendar_routes, CalendarHandlers};
use super::classroom::{classroom_routes, student_routes, ClassroomHandlers};
use super::live::{live_routes, LiveHandlers};
use super::middleware::{auth_middleware, AuthState};

/// Ports the HTTP API is built over.
#[derive(Clone)]
pub struct AppDependencies {
    pub users: Arc<dyn UserRepository>,
    pub classrooms: Arc<dyn ClassroomRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub session_validator: Arc<dyn SessionValidator>,
    /// `None` when live video is not configured.
    pub room_tokens: Option<Arc<dyn RoomTokenIssuer>>,
    pub cookie: SessionCookie,
}

/// Builds the API router with session middleware applied to every route.
pub fn app_router(deps: AppDependencies) -> Router {
    let auth_handlers = AuthHandlers::new(
        Arc::new(RegisterHandler::new(
            deps.users.clone(),
            deps.password_hasher.clone(),
            deps.token_issuer.clone(),
        )),
        Arc::new(LoginHandler::new(
            deps.users.clone(),
            deps.password_hasher.clone(),
            deps.token_issuer.clone(),
        )),
        deps.cookie.clone(),
    );

    let calendar_handlers =
        CalendarHandlers::new(Arc::new(GetCalendarHandler::new(deps.classrooms.clone())));

    let classroom_handlers = ClassroomHandlers::new(
        Arc::new(CreateClassroomHandler::new(
            deps.classrooms.clone(),
            deps.users.clone(),
        )),
        Arc::new(GetClassroomHandler::new(
            deps.classrooms.clone(),
            deps.users.clone(),
        )),
        Arc::new(ListTeacherClassroomsHandler::new(
            deps.classrooms.clone(),
            deps.users.clone(),
        )),
        Arc::new(ListStudentClassroomsHandler::new(
            deps.classrooms.clone(),
            deps.users.clone(),
        )),
    );

    let live_handlers = LiveHandlers::new(Arc::new(IssueRoomTokenHandler::new(deps.room_tokens)));

    let auth_state = AuthState::new(deps.session_validator, deps.cookie.name());

    let api = Router::new()
        .nest("/auth", auth_routes(auth_handlers))
        .nest("/calendar", calendar_routes(calendar_handlers))
        .nest("/classrooms", classroom_routes(classroom_handlers.clone()))
        .nest("/students", student_routes(classroom_handlers))
        .nest("/live", live_routes(live_handlers));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
}

/// Adds tracing, CORS and the request timeout.
///
/// With no configured origins CORS is permissive; otherwise only the listed
/// origins may send credentials.
pub fn with_http_layers(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ])
        .allow_credentials(true)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
