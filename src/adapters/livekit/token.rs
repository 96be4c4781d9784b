//! LiveKit access tokens.
//!
//! LiveKit accepts HS256 JWTs signed with the project's API secret, issued by
//! the API key, with the participant identity in `sub` and room permissions
//! in a `video` claim.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::LiveKitConfig;
use crate::domain::classroom::RoomGrant;
use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp};
use crate::ports::RoomTokenIssuer;

/// Room permissions in LiveKit's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    pub room: String,
    pub room_join: bool,
    pub can_publish: bool,
    pub can_subscribe: bool,
    pub can_publish_data: bool,
}

impl From<&RoomGrant> for VideoGrant {
    fn from(grant: &RoomGrant) -> Self {
        Self {
            room: grant.room.clone(),
            room_join: grant.room_join,
            can_publish: grant.can_publish,
            can_subscribe: grant.can_subscribe,
            can_publish_data: grant.can_publish_data,
        }
    }
}

/// Claims of a LiveKit access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveKitClaims {
    pub iss: String,
    pub sub: String,
    pub name: String,
    pub nbf: i64,
    pub exp: i64,
    pub video: VideoGrant,
}

/// Signs LiveKit access tokens with the configured API credentials.
pub struct LiveKitTokenIssuer {
    api_key: String,
    encoding_key: EncodingKey,
    ttl_secs: u64,
}

impl LiveKitTokenIssuer {
    pub fn new(api_key: impl Into<String>, api_secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            api_key: api_key.into(),
            encoding_key: EncodingKey::from_secret(api_secret),
            ttl_secs,
        }
    }

    pub fn from_config(config: &LiveKitConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            config.api_secret.expose_secret().as_bytes(),
            config.token_ttl_secs,
        )
    }

    fn claims(&self, user: &AuthenticatedUser, grant: &RoomGrant, now: Timestamp) -> LiveKitClaims {
        LiveKitClaims {
            iss: self.api_key.clone(),
            sub: user.id.to_string(),
            name: user.email.clone(),
            nbf: now.as_unix_secs(),
            exp: now.plus_secs(self.ttl_secs).as_unix_secs(),
            video: VideoGrant::from(grant),
        }
    }
}

impl RoomTokenIssuer for LiveKitTokenIssuer {
    fn issue(&self, user: &AuthenticatedUser, grant: &RoomGrant) -> Result<String, AuthError> {
        let claims = self.claims(user, grant, Timestamp::now());
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, room = %grant.room, "Failed to sign room token");
            AuthError::service_unavailable(format!("Failed to sign room token: {}", e))
        })
    }
}
