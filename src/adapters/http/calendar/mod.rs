//! HTTP adapter for the calendar endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{CalendarQuery, CalendarResponse, DayResponse, NavigationResponse};
pub use handlers::CalendarHandlers;
pub use routes::calendar_routes;
