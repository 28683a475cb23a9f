//! In-memory bearer token storage.
//!
//! A token lives exactly as long as the [`Session`] that holds it: nothing
//! is persisted, and there is no client-side expiry tracking.

use std::fmt;

/// Opaque bearer credential returned by the login endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` request header.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Holds at most one token. Written only by a successful login, read by
/// every chat send.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<SessionToken>,
}

impl Session {
    /// The current token, if logged in.
    #[must_use]
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// Whether a token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Store a freshly issued token, replacing any previous one.
    pub fn store(&mut self, token: SessionToken) {
        self.token = Some(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_the_token() {
        let token = SessionToken::new("eyJhbGciOi.secret");
        let printed = format!("{token:?}");
        assert!(!printed.contains("secret"));
    }

    #[test]
    fn bearer_header_format() {
        let token = SessionToken::new("abc");
        assert_eq!(token.bearer_header(), "Bearer abc");
    }

    #[test]
    fn store_replaces_previous_token() {
        let mut session = Session::default();
        assert!(!session.is_authenticated());
        session.store(SessionToken::new("one"));
        session.store(SessionToken::new("two"));
        assert_eq!(session.token().map(SessionToken::as_str), Some("two"));
    }
}
