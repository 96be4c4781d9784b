//! HTTP adapter for live-room access tokens.

mod dto;
mod handlers;
mod routes;

pub use dto::{RoomTokenRequest, RoomTokenResponse};
pub use handlers::LiveHandlers;
pub use routes::live_routes;
