//! Wire types for the login and chat endpoints, and the blocking transport
//! seam used by native hosts.
//!
//! ```text
//! POST /auth/login  {"username": .., "password": ..}
//!   -> {"status": "success", "access_token": .., "token_type": "bearer"}
//! POST /chat        Authorization: Bearer <token>
//!                   {"message": ..}
//!   -> {"reply": ..}
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ChatError;
use crate::session::SessionToken;

/// Body of the login request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account name.
    pub username: String,
    /// Plain-text password; sent once and not retained.
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of the login response. Every field is optional on the wire, and a
/// field that is not a string reads as absent, so any JSON object decodes.
/// A response only counts as a success when `status == "success"` and a
/// token is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    /// `"success"` or anything else.
    #[serde(deserialize_with = "text_field")]
    pub status: Option<String>,
    /// Bearer token on success.
    #[serde(deserialize_with = "text_field")]
    pub access_token: Option<String>,
    /// Token scheme; informational.
    #[serde(deserialize_with = "text_field")]
    pub token_type: Option<String>,
}

fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Some(text),
        _ => None,
    })
}

impl LoginResponse {
    /// The issued token, when the body reports success.
    #[must_use]
    pub fn accepted_token(&self) -> Option<SessionToken> {
        if self.status.as_deref() != Some("success") {
            return None;
        }
        self.access_token.as_deref().map(SessionToken::new)
    }
}

/// A decoded login response together with whether the HTTP status was 2xx.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginReply {
    /// `true` for a 2xx status.
    pub ok: bool,
    /// Decoded body.
    pub body: LoginResponse,
}

impl LoginReply {
    /// Token to store, if the login was accepted on both counts.
    #[must_use]
    pub fn accepted_token(&self) -> Option<SessionToken> {
        if !self.ok {
            return None;
        }
        self.body.accepted_token()
    }
}

/// Body of the chat request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Trimmed user message.
    pub message: String,
}

/// Body of the chat response. Rendered regardless of HTTP status: the
/// backend answers auth and validation failures with a `reply` as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Reply text, possibly containing markup.
    pub reply: String,
}

/// Blocking request/response seam between the controller and a backend.
///
/// Implementations return `Err` only when no decodable body was obtained;
/// HTTP error statuses with a JSON body are replies, not errors.
pub trait Transport {
    /// POST a login request.
    fn login(&self, request: &LoginRequest) -> Result<LoginReply, ChatError>;

    /// POST a chat message with the bearer token.
    fn chat(
        &self,
        token: &SessionToken,
        request: &ChatRequest,
    ) -> Result<ChatResponse, ChatError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(ok: bool, json: &str) -> LoginReply {
        LoginReply {
            ok,
            body: serde_json::from_str(json).unwrap(),
        }
    }

    #[test]
    fn success_requires_status_token_and_2xx() {
        let good =
            r#"{"status":"success","access_token":"t","token_type":"bearer"}"#;
        assert_eq!(
            reply(true, good).accepted_token(),
            Some(SessionToken::new("t"))
        );
        assert_eq!(reply(false, good).accepted_token(), None);
        assert_eq!(
            reply(true, r#"{"status":"fail"}"#).accepted_token(),
            None
        );
        assert_eq!(
            reply(true, r#"{"status":"success"}"#).accepted_token(),
            None
        );
        assert_eq!(reply(true, "{}").accepted_token(), None);
    }

    #[test]
    fn mistyped_login_fields_read_as_absent() {
        let body: LoginResponse =
            serde_json::from_str(r#"{"status":"fail","access_token":5}"#)
                .unwrap();
        assert_eq!(body.status.as_deref(), Some("fail"));
        assert_eq!(body.access_token, None);

        let body: LoginResponse =
            serde_json::from_str(r#"{"status":["success"],"token_type":null}"#)
                .unwrap();
        assert_eq!(body, LoginResponse::default());
        assert_eq!(reply(true, r#"{"status":7}"#).accepted_token(), None);
    }

    #[test]
    fn chat_response_without_reply_does_not_decode() {
        let body = r#"{"error":"x"}"#;
        assert!(serde_json::from_str::<ChatResponse>(body).is_err());
    }

    #[test]
    fn login_request_debug_hides_password() {
        let request = LoginRequest {
            username: "test1".into(),
            password: "hunter2".into(),
        };
        let printed = format!("{request:?}");
        assert!(printed.contains("test1"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn chat_request_wire_shape() {
        let body = serde_json::to_value(ChatRequest {
            message: "balance?".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "message": "balance?" }));
    }
}
