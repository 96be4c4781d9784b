//! Live-room handlers.

mod issue_room_token;

pub use issue_room_token::{IssueRoomTokenCommand, IssueRoomTokenHandler, IssueRoomTokenResult};
