//! HTTP adapter for registration, login and the session cookie.

mod cookie;
mod dto;
mod handlers;
mod routes;

pub use cookie::SessionCookie;
pub use dto::{
    AuthResponse, LoginRequest, MeResponse, OkResponse, RegisterRequest, SessionResponse,
    UserResponse,
};
pub use handlers::AuthHandlers;
pub(crate) use handlers::handle_auth_error;
pub use routes::auth_routes;
