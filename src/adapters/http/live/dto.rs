//! HTTP DTOs for live-room endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::classroom::RoomGrant;

#[derive(Debug, Clone, Deserialize)]
pub struct RoomTokenRequest {
    #[serde(default)]
    pub room: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomTokenResponse {
    pub token: String,
    pub room: String,
    pub grant: RoomGrant,
}
