//! The append-only message log shown in the panel.

use serde::{Deserialize, Serialize};

/// Who a log entry is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Text the user typed.
    User,
    /// A reply from the chat endpoint.
    Bot,
    /// Status and error notices.
    System,
    /// Login confirmation.
    Success,
}

impl Role {
    /// Label used by [`MessageStyle::Labeled`].
    #[must_use]
    pub fn sender(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Bot => "Bot",
            Self::System | Self::Success => "System",
        }
    }

    /// Role-specific CSS class used by [`MessageStyle::Styled`].
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Bot => "bot-message",
            Self::System => "system-message",
            Self::Success => "success-message",
        }
    }
}

/// How entries are turned into markup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MessageStyle {
    /// Chat bubbles: role-specific class, bare text.
    #[default]
    Styled,
    /// Plain lines prefixed with a bold sender label.
    Labeled,
}

/// One displayed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Attribution.
    pub role: Role,
    /// Body, inserted into the page as markup verbatim.
    pub text: String,
}

/// Class list and inner markup for a rendered entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    /// CSS classes to put on the entry element.
    pub classes: Vec<&'static str>,
    /// Inner HTML of the entry element.
    pub markup: String,
}

impl Message {
    /// Render into classes and markup for the given style.
    #[must_use]
    pub fn render(&self, style: MessageStyle) -> RenderedMessage {
        match style {
            MessageStyle::Styled => RenderedMessage {
                classes: vec!["message", self.role.css_class()],
                markup: self.text.clone(),
            },
            MessageStyle::Labeled => RenderedMessage {
                classes: vec!["message"],
                markup: format!(
                    "<strong>{}:</strong> {}",
                    self.role.sender(),
                    self.text
                ),
            },
        }
    }
}

/// Arrival-ordered, append-only list of entries.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Vec<Message>,
}

impl MessageLog {
    /// Append an entry.
    pub fn push(&mut self, role: Role, text: impl Into<String>) {
        self.entries.push(Message {
            role,
            text: text.into(),
        });
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    /// Entries appended after the first `seen`, for incremental rendering.
    #[must_use]
    pub fn since(&self, seen: usize) -> &[Message] {
        self.entries.get(seen..).unwrap_or(&[])
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been logged yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The newest entry.
    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.entries.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_uses_role_class_and_bare_text() {
        let msg = Message {
            role: Role::Bot,
            text: "<em>hi</em>".into(),
        };
        let rendered = msg.render(MessageStyle::Styled);
        assert_eq!(rendered.classes, vec!["message", "bot-message"]);
        assert_eq!(rendered.markup, "<em>hi</em>");
    }

    #[test]
    fn labeled_prefixes_sender() {
        let msg = Message {
            role: Role::Success,
            text: "ok".into(),
        };
        let rendered = msg.render(MessageStyle::Labeled);
        assert_eq!(rendered.classes, vec!["message"]);
        assert_eq!(rendered.markup, "<strong>System:</strong> ok");
    }

    #[test]
    fn since_returns_only_new_entries() {
        let mut log = MessageLog::default();
        log.push(Role::User, "a");
        log.push(Role::Bot, "b");
        assert_eq!(log.since(1).len(), 1);
        assert_eq!(log.since(1)[0].text, "b");
        assert!(log.since(2).is_empty());
        assert!(log.since(10).is_empty());
    }
}
