//! HTTP adapters - REST API implementations.
//!
//! Each area has its own `dto` / `handlers` / `routes` triple; [`app_router`]
//! mounts them under `/api` behind the session middleware.

pub mod auth;
pub mod calendar;
pub mod classroom;
pub mod error;
pub mod live;
pub mod middleware;
mod router;

pub use error::ErrorResponse;
pub use router::{app_router, with_http_layers, AppDependencies};
