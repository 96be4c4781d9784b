//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - JWT sessions, Argon2 password hashing, test doubles
//! - `livekit` - Live video access tokens
//! - `memory` - In-memory repositories
//! - `postgres` - PostgreSQL repositories
//! - `http` - axum REST API

pub mod auth;
pub mod http;
pub mod livekit;
pub mod memory;
pub mod postgres;
