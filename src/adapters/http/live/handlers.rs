//! HTTP handlers for live-room endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::auth::handle_auth_error;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::live::{IssueRoomTokenCommand, IssueRoomTokenHandler};

use super::dto::{RoomTokenRequest, RoomTokenResponse};

#[derive(Clone)]
pub struct LiveHandlers {
    token_handler: Arc<IssueRoomTokenHandler>,
}

impl LiveHandlers {
    pub fn new(token_handler: Arc<IssueRoomTokenHandler>) -> Self {
        Self { token_handler }
    }
}

/// POST /api/live/token - Access token for a live room
pub async fn issue_room_token(
    State(handlers): State<LiveHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<RoomTokenRequest>,
) -> Response {
    let cmd = IssueRoomTokenCommand {
        user,
        room: req.room,
    };

    match handlers.token_handler.handle(cmd) {
        Ok(result) => {
            let response = RoomTokenResponse {
                token: result.token,
                room: result.grant.room.clone(),
                grant: result.grant,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_auth_error(e),
    }
}
