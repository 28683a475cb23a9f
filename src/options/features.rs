use serde::{Deserialize, Serialize};

use crate::messages::MessageStyle;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
/// Optional behaviors of the panel.
pub struct FeatureOptions {
    /// Show an animated "typing" indicator while a chat request is in
    /// flight.
    pub typing_indicator: bool,
    /// Allow moving the panel by its header.
    pub draggable: bool,
    /// Allow resizing the panel from its edge handles.
    pub resizable: bool,
    /// Open the login form when the panel is shown without a session.
    /// When off, the form is shown from the start instead.
    pub prompt_login_on_open: bool,
    /// How log entries are rendered.
    pub message_style: MessageStyle,
}

impl Default for FeatureOptions {
    fn default() -> Self {
        Self {
            typing_indicator: true,
            draggable: true,
            resizable: true,
            prompt_login_on_open: true,
            message_style: MessageStyle::Styled,
        }
    }
}
