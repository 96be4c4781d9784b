//! HTTP handlers for auth endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::OptionalAuth;
use crate::application::handlers::auth::{
    LoginCommand, LoginHandler, RegisterCommand, RegisterHandler,
};
use crate::domain::foundation::AuthError;
use crate::domain::user::UserAccount;
use crate::ports::SessionToken;

use super::cookie::SessionCookie;
use super::dto::{
    AuthResponse, LoginRequest, MeResponse, OkResponse, RegisterRequest, UserResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AuthHandlers {
    register_handler: Arc<RegisterHandler>,
    login_handler: Arc<LoginHandler>,
    cookie: SessionCookie,
}

impl AuthHandlers {
    pub fn new(
        register_handler: Arc<RegisterHandler>,
        login_handler: Arc<LoginHandler>,
        cookie: SessionCookie,
    ) -> Self {
        Self {
            register_handler,
            login_handler,
            cookie,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/auth/register - Create an account and open a session
pub async fn register(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    let cmd = RegisterCommand {
        email: req.email,
        password: req.password,
        role: req.role,
        first_name: req.first_name,
        last_name: req.last_name,
    };

    match handlers.register_handler.handle(cmd).await {
        Ok(result) => session_response(
            &handlers.cookie,
            StatusCode::CREATED,
            &result.account,
            result.token,
        ),
        Err(e) => handle_auth_error(e),
    }
}

/// POST /api/auth/login - Exchange credentials for a session
pub async fn login(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let cmd = LoginCommand {
        email: req.email,
        password: req.password,
    };

    match handlers.login_handler.handle(cmd).await {
        Ok(result) => {
            session_response(&handlers.cookie, StatusCode::OK, &result.account, result.token)
        }
        Err(e) => handle_auth_error(e),
    }
}

/// POST /api/auth/logout - Clear the session cookie
pub async fn logout(State(handlers): State<AuthHandlers>) -> Response {
    (
        StatusCode::OK,
        [(header::SET_COOKIE, handlers.cookie.clear())],
        Json(OkResponse { ok: true }),
    )
        .into_response()
}

/// GET /api/auth/me - Current session claims, or null
pub async fn me(OptionalAuth(user): OptionalAuth) -> Response {
    let response = MeResponse {
        session: user.map(Into::into),
    };
    (StatusCode::OK, Json(response)).into_response()
}

fn session_response(
    cookie: &SessionCookie,
    status: StatusCode,
    account: &UserAccount,
    token: SessionToken,
) -> Response {
    let set_cookie = cookie.set(&token.value);
    let body = AuthResponse {
        user: UserResponse::from(account),
        token: token.value,
        expires_at: token.expires_at,
    };
    (status, [(header::SET_COOKIE, set_cookie)], Json(body)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

pub(crate) fn handle_auth_error(error: AuthError) -> Response {
    match error {
        AuthError::Validation(msg) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(msg))).into_response()
        }
        AuthError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::unauthorized("Invalid credentials")),
        )
            .into_response(),
        AuthError::InvalidToken | AuthError::TokenExpired => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::unauthorized("Authentication required")),
        )
            .into_response(),
        AuthError::EmailTaken => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict("Email already registered")),
        )
            .into_response(),
        AuthError::InsufficientPermissions => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::forbidden("Insufficient permissions")),
        )
            .into_response(),
        AuthError::ServiceUnavailable(msg) => {
            tracing::error!("Auth service unavailable: {}", msg);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::unavailable("Service unavailable")),
            )
                .into_response()
        }
    }
}
