//! Session authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum HS256 secret length accepted in production.
pub const MIN_PRODUCTION_SECRET_BYTES: usize = 32;

/// Session authentication configuration (HS256 session cookies)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret used to sign and verify session tokens
    pub jwt_secret: SecretString,

    /// Session lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// Name of the session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// Any non-empty secret is accepted outside production.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if *environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_BYTES {
            return Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_BYTES));
        }
        if self.session_ttl_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        let cookie_ok = !self.cookie_name.is_empty()
            && self
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !cookie_ok {
            return Err(ValidationError::InvalidCookieName);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::new(String::new()),
            session_ttl_secs: default_session_ttl(),
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_session_ttl() -> u64 {
    7 * 24 * 60 * 60
}

fn default_cookie_name() -> String {
    "immagreat_session".to_string()
}
