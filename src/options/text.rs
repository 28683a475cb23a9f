use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// User-visible status strings appended to the log.
pub struct TextOptions {
    /// Login accepted.
    pub login_success: String,
    /// Login answered but not accepted.
    pub login_failed: String,
    /// Login request failed outright.
    pub login_error: String,
    /// A message was sent without a session.
    pub login_required: String,
    /// A chat request failed outright.
    pub send_failed: String,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            login_success: "✅ Login successful! You can now proceed.".into(),
            login_failed: "❌ Login failed. Try again.".into(),
            login_error: "⚠️ An error occurred. Please try again.".into(),
            login_required: "🔒 Session expired. Please login again.".into(),
            send_failed: "⚠️ Could not send message.".into(),
        }
    }
}
