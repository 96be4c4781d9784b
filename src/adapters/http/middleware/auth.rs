//! Authentication middleware and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that validates session tokens and injects the user into extensions
//! - `RequireAuth` - Extractor that requires any valid session
//! - `RequireTeacher` / `RequireStudent` - Extractors that additionally check the role
//! - `OptionalAuth` - Extractor for optional authentication
//!
//! # Architecture
//!
//! The middleware uses the `SessionValidator` port, so JWT details stay in
//! `adapters::auth`.
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! The token comes from `Authorization: Bearer <token>` if present, otherwise
//! from the session cookie. An invalid or expired token is treated like no
//! token at all: `OptionalAuth` sees `None` and guarded routes answer 401.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::{AuthError, AuthenticatedUser, Role};
use crate::ports::SessionValidator;

/// Auth middleware state - the session validator plus the cookie it reads.
#[derive(Clone)]
pub struct AuthState {
    validator: Arc<dyn SessionValidator>,
    cookie_name: String,
}

impl AuthState {
    pub fn new(validator: Arc<dyn SessionValidator>, cookie_name: impl Into<String>) -> Self {
        Self {
            validator,
            cookie_name: cookie_name.into(),
        }
    }
}

/// Authentication middleware that validates session tokens.
///
/// 1. Extracts the token from the Bearer header or the session cookie
/// 2. Validates it using the `SessionValidator` port
/// 3. On success, injects `AuthenticatedUser` into request extensions
/// 4. On a missing or rejected token, continues without a user
/// 5. If the validator itself is down, returns 503
pub async fn auth_middleware(
    State(auth): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = extract_token(request.headers(), &auth.cookie_name) else {
        return next.run(request).await;
    };

    match auth.validator.validate(&token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
        }
        Err(AuthError::ServiceUnavailable(msg)) => {
            tracing::error!("Auth service unavailable: {}", msg);
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::unavailable("Authentication service unavailable")),
            )
                .into_response();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session token rejected");
        }
    }

    next.run(request).await
}

/// Pulls the raw session token out of the request headers.
///
/// A Bearer header wins over the cookie.
pub fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == cookie_name && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

// ════════════════════════════════════════════════════════════════════════════
// Extractors
// ════════════════════════════════════════════════════════════════════════════

/// Extractor that requires authentication.
///
/// ```ignore
/// async fn my_handler(RequireAuth(user): RequireAuth) -> impl IntoResponse {
///     format!("Hello, {}!", user.email)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        authenticated(parts).map(RequireAuth)
    }
}

/// Extractor for teacher routes: TEACHER or ADMIN.
#[derive(Debug, Clone)]
pub struct RequireTeacher(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireTeacher
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        with_role(parts, &[Role::Teacher, Role::Admin]).map(RequireTeacher)
    }
}

/// Extractor for student routes: STUDENT or ADMIN.
#[derive(Debug, Clone)]
pub struct RequireStudent(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireStudent
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        with_role(parts, &[Role::Student, Role::Admin]).map(RequireStudent)
    }
}

/// Extractor for optional authentication.
///
/// Returns `None` if no valid token was provided.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(parts.extensions.get::<AuthenticatedUser>().cloned()))
    }
}

fn authenticated(parts: &Parts) -> Result<AuthenticatedUser, AuthRejection> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or(AuthRejection::Unauthenticated)
}

fn with_role(parts: &Parts, roles: &[Role]) -> Result<AuthenticatedUser, AuthRejection> {
    let user = authenticated(parts)?;
    if !user.has_any_role(roles) {
        tracing::warn!(user_id = %user.id, role = %user.role, "Role not permitted for route");
        return Err(AuthRejection::Forbidden);
    }
    Ok(user)
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRejection {
    /// No valid session token was provided.
    Unauthenticated,
    /// Valid session, wrong role.
    Forbidden,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::unauthorized("Authentication required")),
            )
                .into_response(),
            AuthRejection::Forbidden => (
                StatusCode::FORBIDDEN,
                Json(ErrorResponse::forbidden("Insufficient permissions")),
            )
                .into_response(),
        }
    }
}
