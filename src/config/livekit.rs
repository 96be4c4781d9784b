//! Live video (LiveKit) configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// LiveKit API credentials used to sign room access tokens.
///
/// Optional: without it the live token endpoint answers 503.
#[derive(Debug, Clone, Deserialize)]
pub struct LiveKitConfig {
    /// API key, sent as the token issuer
    pub api_key: String,

    /// API secret used as the HS256 signing key
    pub api_secret: SecretString,

    /// Room token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

impl LiveKitConfig {
    /// Validate LiveKit configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("LIVEKIT__API_KEY"));
        }
        if self.api_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("LIVEKIT__API_SECRET"));
        }
        if self.token_ttl_secs == 0 {
            return Err(ValidationError::InvalidLiveKitTtl);
        }
        Ok(())
    }
}

fn default_token_ttl() -> u64 {
    6 * 60 * 60
}
