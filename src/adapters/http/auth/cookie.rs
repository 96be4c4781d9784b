//! Session cookie formatting.

use crate::config::AuthConfig;

/// How the session cookie is written.
///
/// Always `HttpOnly; SameSite=Lax; Path=/`, with `Secure` added in production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    name: String,
    max_age_secs: u64,
    secure: bool,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, max_age_secs: u64, secure: bool) -> Self {
        Self {
            name: name.into(),
            max_age_secs,
            secure,
        }
    }

    pub fn from_config(config: &AuthConfig, secure: bool) -> Self {
        Self::new(config.cookie_name.clone(), config.session_ttl_secs, secure)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `Set-Cookie` value carrying `token`.
    pub fn set(&self, token: &str) -> String {
        self.render(token, self.max_age_secs)
    }

    /// `Set-Cookie` value that expires the session immediately.
    pub fn clear(&self) -> String {
        self.render("", 0)
    }

    fn render(&self, value: &str, max_age: u64) -> String {
        let mut cookie = format!(
            "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
            self.name, value, max_age
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}
