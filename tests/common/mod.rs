//! Shared harness for HTTP integration tests.
//!
//! Drives the real router in-process over in-memory repositories, real JWT
//! sessions and a plain-text password hasher.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use immagreat::adapters::auth::{JwtSessionManager, MockRoomTokenIssuer, PlainTextPasswordHasher};
use immagreat::adapters::http::auth::SessionCookie;
use immagreat::adapters::http::{app_router, AppDependencies};
use immagreat::adapters::memory::{InMemoryClassroomRepository, InMemoryUserRepository};
use immagreat::ports::RoomTokenIssuer;

pub const COOKIE_NAME: &str = "immagreat_session";
const SECRET: &[u8] = b"integration-test-secret-at-least-32-bytes";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(true)
    }

    pub fn without_live_video() -> Self {
        Self::build(false)
    }

    fn build(live_video: bool) -> Self {
        let sessions = Arc::new(JwtSessionManager::new(SECRET, 3600));
        let deps = AppDependencies {
            users: Arc::new(InMemoryUserRepository::new()),
            classrooms: Arc::new(InMemoryClassroomRepository::new()),
            password_hasher: Arc::new(PlainTextPasswordHasher),
            token_issuer: sessions.clone(),
            session_validator: sessions,
            room_tokens: if live_video {
                Some(Arc::new(MockRoomTokenIssuer) as Arc<dyn RoomTokenIssuer>)
            } else {
                None
            },
            cookie: SessionCookie::new(COOKIE_NAME, 3600, false),
        };
        Self {
            router: app_router(deps),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(build(Method::GET, uri, token, None)).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(build(Method::POST, uri, token, Some(body))).await
    }

    /// Registers an account and returns its session token.
    pub async fn register(&self, email: &str, role: &str) -> String {
        let response = self
            .post(
                "/api/auth/register",
                None,
                serde_json::json!({ "email": email, "password": "secret1", "role": role }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["token"].as_str().unwrap().to_string()
    }
}

fn build(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Value of the session cookie in a `Set-Cookie` header, if any.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::SET_COOKIE)?.to_str().ok()?;
    let (pair, _) = raw.split_once(';')?;
    let (name, value) = pair.split_once('=')?;
    (name == COOKIE_NAME).then(|| value.to_string())
}
