//! Permissions granted when joining a live room.

use serde::Serialize;

use crate::domain::foundation::{Role, ValidationError};

/// What a participant may do in a live video room.
///
/// Teachers and moderators publish audio/video; everyone subscribes; only
/// students are barred from the data channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomGrant {
    pub room: String,
    pub room_join: bool,
    pub can_publish: bool,
    pub can_subscribe: bool,
    pub can_publish_data: bool,
}

impl RoomGrant {
    /// Grant for `role` in `room`.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the room name is blank
    pub fn for_role(room: &str, role: Role) -> Result<Self, ValidationError> {
        let room = room.trim();
        if room.is_empty() {
            return Err(ValidationError::empty_field("room"));
        }
        Ok(Self {
            room: room.to_string(),
            room_join: true,
            can_publish: role.can_publish_media(),
            can_subscribe: true,
            can_publish_data: role != Role::Student,
        })
    }
}
