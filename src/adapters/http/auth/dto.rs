//! HTTP DTOs for auth endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthenticatedUser, Role, Timestamp};
use crate::domain::user::UserAccount;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to register an account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Request to log in.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Public view of an account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl From<&UserAccount> for UserResponse {
    fn from(account: &UserAccount) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email.to_string(),
            role: account.role,
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
        }
    }
}

/// Response to register and login.
///
/// The token is also set as the session cookie; it is returned for clients
/// that prefer the `Authorization: Bearer` header.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
    pub expires_at: Timestamp,
}

/// Claims of the current session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub sub: String,
    pub email: String,
    pub role: Role,
}

impl From<AuthenticatedUser> for SessionResponse {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            sub: user.id.to_string(),
            email: user.email,
            role: user.role,
        }
    }
}

/// Response to `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub session: Option<SessionResponse>,
}

/// Response to `POST /api/auth/logout`.
#[derive(Debug, Clone, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::user::Email;

    #[test]
    fn user_response_omits_missing_names_and_hash() {
        let account = UserAccount::new(
            Email::parse("ana@example.com").unwrap(),
            "$argon2id$secret".to_string(),
            Role::Teacher,
        );

        let json = serde_json::to_value(UserResponse::from(&account)).unwrap();

        assert_eq!(json["email"], "ana@example.com");
        assert_eq!(json["role"], "TEACHER");
        assert!(json.get("firstName").is_none());
        assert!(!json.to_string().contains("argon2"));
    }

    #[test]
    fn me_response_serializes_null_session() {
        let json = serde_json::to_value(MeResponse { session: None }).unwrap();
        assert_eq!(json, serde_json::json!({ "session": null }));
    }

    #[test]
    fn session_response_uses_sub_claim() {
        let id = UserId::new();
        let user = AuthenticatedUser::new(id, "s@example.com", Role::Student);

        let json = serde_json::to_value(SessionResponse::from(user)).unwrap();

        assert_eq!(json["sub"], id.to_string());
        assert_eq!(json["role"], "STUDENT");
    }

    #[test]
    fn login_request_tolerates_missing_fields() {
        let req: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(req.email.is_empty());
        assert!(req.password.is_empty());
    }
}
