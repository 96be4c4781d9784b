//! HS256 session tokens.
//!
//! Implements both sides of the session contract with one shared secret:
//! `TokenIssuer` signs a token after login or registration, and
//! `SessionValidator` verifies it on every guarded request.
//!
//! # Claims
//!
//! - `sub` - user id (UUID)
//! - `email` - email at issue time
//! - `role` - role at issue time (`STUDENT`, `TEACHER`, `MODERATOR`, `ADMIN`)
//! - `iat` / `exp` - issue and expiry, Unix seconds

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, Role, Timestamp, UserId};
use crate::ports::{SessionToken, SessionValidator, TokenIssuer};

/// JWT claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and verifies HS256 session tokens.
pub struct JwtSessionManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: u64,
}

impl JwtSessionManager {
    pub fn new(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config.jwt_secret.expose_secret().as_bytes(),
            config.session_ttl_secs,
        )
    }

    /// Signs a token as if issued at `issued_at`.
    pub fn issue_at(
        &self,
        user: &AuthenticatedUser,
        issued_at: Timestamp,
    ) -> Result<SessionToken, AuthError> {
        let expires_at = issued_at.plus_secs(self.ttl_secs);
        let claims = SessionClaims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role,
            iat: issued_at.as_unix_secs(),
            exp: expires_at.as_unix_secs(),
        };

        let value = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| {
                tracing::error!(error = %e, "Failed to sign session token");
                AuthError::service_unavailable(format!("Failed to sign session token: {}", e))
            },
        )?;

        Ok(SessionToken { value, expires_at })
    }

    /// Verifies signature and expiry, returning the raw claims.
    pub fn decode_claims(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Session token expired");
                        AuthError::TokenExpired
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::warn!("Session token signature mismatch");
                        AuthError::InvalidToken
                    }
                    _ => {
                        tracing::debug!(error = %e, "Session token rejected");
                        AuthError::InvalidToken
                    }
                }
            })
    }
}

impl TokenIssuer for JwtSessionManager {
    fn issue(&self, user: &AuthenticatedUser) -> Result<SessionToken, AuthError> {
        self.issue_at(user, Timestamp::now())
    }

    fn session_ttl_secs(&self) -> u64 {
        self.ttl_secs
    }
}

#[async_trait]
impl SessionValidator for JwtSessionManager {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;
        let id: UserId = claims.sub.parse().map_err(|_| {
            tracing::warn!(sub = %claims.sub, "Session token subject is not a user id");
            AuthError::InvalidToken
        })?;
        Ok(AuthenticatedUser::new(id, claims.email, claims.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-that-is-long-enough-for-hs256";

    fn manager() -> JwtSessionManager {
        JwtSessionManager::new(SECRET, 3600)
    }

    fn user(role: Role) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(), "ana@example.com", role)
    }

    #[tokio::test]
    async fn issued_token_validates_back_to_user() {
        let manager = manager();
        let original = user(Role::Teacher);

        let token = manager.issue(&original).unwrap();
        let validated = manager.validate(&token.value).await.unwrap();

        assert_eq!(validated, original);
    }

    #[test]
    fn claims_carry_role_and_expiry() {
        let manager = manager();
        let issued_at = Timestamp::now();
        let token = manager.issue_at(&user(Role::Moderator), issued_at).unwrap();

        let claims = manager.decode_claims(&token.value).unwrap();

        assert_eq!(claims.role, Role::Moderator);
        assert_eq!(claims.iat, issued_at.as_unix_secs());
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(token.expires_at.as_unix_secs(), claims.exp);
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let manager = manager();
        let two_hours_ago = Timestamp::from_unix_secs(Timestamp::now().as_unix_secs() - 7200).unwrap();
        let token = manager.issue_at(&user(Role::Student), two_hours_ago).unwrap();

        assert_eq!(manager.decode_claims(&token.value), Err(AuthError::TokenExpired));
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_invalid() {
        let other = JwtSessionManager::new(b"a-completely-different-signing-secret", 3600);
        let token = other.issue(&user(Role::Admin)).unwrap();

        assert_eq!(manager().validate(&token.value).await, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn garbage_is_invalid() {
        assert_eq!(manager().validate("not.a.jwt").await, Err(AuthError::InvalidToken));
        assert_eq!(manager().validate("").await, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn non_uuid_subject_is_invalid() {
        let manager = manager();
        let now = Timestamp::now().as_unix_secs();
        let claims = SessionClaims {
            sub: "user-123".to_string(),
            email: "x@example.com".to_string(),
            role: Role::Student,
            iat: now,
            exp: now + 600,
        };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap();

        assert_eq!(manager.validate(&token).await, Err(AuthError::InvalidToken));
    }
}
