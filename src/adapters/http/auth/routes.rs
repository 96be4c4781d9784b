//! HTTP routes for auth endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{login, logout, me, register, AuthHandlers};

/// Creates the auth router, mounted at `/api/auth`.
pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
        .with_state(handlers)
}
