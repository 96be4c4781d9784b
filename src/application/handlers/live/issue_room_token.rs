//! IssueRoomTokenHandler - Command handler for live-room access tokens.

use std::sync::Arc;

use crate::domain::classroom::RoomGrant;
use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::RoomTokenIssuer;

/// Command to join a live room.
#[derive(Debug, Clone)]
pub struct IssueRoomTokenCommand {
    pub user: AuthenticatedUser,
    pub room: String,
}

/// A signed token and the grant it carries.
#[derive(Debug, Clone)]
pub struct IssueRoomTokenResult {
    pub token: String,
    pub grant: RoomGrant,
}

/// Handler for live-room tokens.
///
/// Built without an issuer when the live video service is not configured;
/// every request then fails with `ServiceUnavailable`.
pub struct IssueRoomTokenHandler {
    issuer: Option<Arc<dyn RoomTokenIssuer>>,
}

impl IssueRoomTokenHandler {
    pub fn new(issuer: Option<Arc<dyn RoomTokenIssuer>>) -> Self {
        Self { issuer }
    }

    pub fn is_configured(&self) -> bool {
        self.issuer.is_some()
    }

    pub fn handle(&self, cmd: IssueRoomTokenCommand) -> Result<IssueRoomTokenResult, AuthError> {
        let grant = RoomGrant::for_role(&cmd.room, cmd.user.role)
            .map_err(|_| AuthError::validation("Room is required"))?;

        let issuer = self
            .issuer
            .as_ref()
            .ok_or_else(|| AuthError::service_unavailable("live video is not configured"))?;
        let token = issuer.issue(&cmd.user, &grant)?;

        tracing::info!(user_id = %cmd.user.id, room = %grant.room, "Live room token issued");
        Ok(IssueRoomTokenResult { token, grant })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockRoomTokenIssuer;
    use crate::domain::foundation::{Role, UserId};

    fn handler() -> IssueRoomTokenHandler {
        IssueRoomTokenHandler::new(Some(Arc::new(MockRoomTokenIssuer)))
    }

    fn cmd(role: Role, room: &str) -> IssueRoomTokenCommand {
        IssueRoomTokenCommand {
            user: AuthenticatedUser::new(UserId::new(), "u@example.com", role),
            room: room.to_string(),
        }
    }

    #[test]
    fn teacher_token_can_publish() {
        let result = handler().handle(cmd(Role::Teacher, "room-abc123")).unwrap();

        assert!(result.grant.can_publish);
        assert!(result.token.starts_with("room-token:room-abc123:"));
        assert!(result.token.ends_with("publish=true"));
    }

    #[test]
    fn student_token_only_subscribes() {
        let result = handler().handle(cmd(Role::Student, " room-abc123 ")).unwrap();

        assert_eq!(result.grant.room, "room-abc123");
        assert!(!result.grant.can_publish);
        assert!(result.token.ends_with("publish=false"));
    }

    #[test]
    fn empty_room_is_rejected() {
        let err = handler().handle(cmd(Role::Teacher, "  ")).unwrap_err();
        assert_eq!(err, AuthError::validation("Room is required"));
    }

    #[test]
    fn unconfigured_issuer_is_unavailable() {
        let handler = IssueRoomTokenHandler::new(None);

        let err = handler.handle(cmd(Role::Teacher, "room-abc123")).unwrap_err();

        assert!(!handler.is_configured());
        assert!(matches!(err, AuthError::ServiceUnavailable(_)));
    }
}
