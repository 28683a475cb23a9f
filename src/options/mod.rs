//! Widget configuration with TOML file support.
//!
//! Every section uses `#[serde(default)]` so a partial file (e.g. only
//! overriding `[endpoints]`) works. The two historical flavors of the panel
//! are expressed as presets of the same options rather than separate code
//! paths: [`WidgetOptions::default`] is the full panel, and
//! [`WidgetOptions::classic`] the plain one.

mod endpoints;
mod features;
mod layout;
mod text;

use std::path::Path;

pub use endpoints::EndpointOptions;
pub use features::FeatureOptions;
pub use layout::LayoutOptions;
use serde::{Deserialize, Serialize};
pub use text::TextOptions;

use crate::error::ChatError;
use crate::messages::MessageStyle;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct WidgetOptions {
    /// Login and chat endpoint URLs.
    pub endpoints: EndpointOptions,
    /// Optional behaviors.
    pub features: FeatureOptions,
    /// Sizing constraints.
    pub layout: LayoutOptions,
    /// Status strings.
    pub text: TextOptions,
}

impl WidgetOptions {
    /// The plain panel: no typing indicator, fixed position and size, no
    /// login prompt on open, sender-labeled messages.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            features: FeatureOptions {
                typing_indicator: false,
                draggable: false,
                resizable: false,
                prompt_login_on_open: false,
                message_style: MessageStyle::Labeled,
            },
            text: TextOptions {
                login_required: "🔒 Please login to continue.".into(),
                ..TextOptions::default()
            },
            ..Self::default()
        }
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ChatError> {
        toml::from_str(content)
            .map_err(|e| ChatError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ChatError> {
        let content = std::fs::read_to_string(path).map_err(ChatError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ChatError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ChatError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ChatError::Io)?;
        }
        std::fs::write(path, content).map_err(ChatError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = WidgetOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = WidgetOptions::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[endpoints]
base_url = "http://localhost:3000"

[features]
message_style = "labeled"
"#;
        let opts = WidgetOptions::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.endpoints.base_url, "http://localhost:3000");
        assert_eq!(opts.endpoints.login_path, "/auth/login");
        assert_eq!(opts.features.message_style, MessageStyle::Labeled);
        assert!(opts.features.draggable);
        assert_eq!(opts.layout.min_size, 300.0);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = WidgetOptions::from_toml_str("[layout]\nmin_size = \"big\"")
            .unwrap_err();
        assert!(matches!(err, ChatError::OptionsParse(_)));
    }

    #[test]
    fn classic_preset_disables_panel_extras() {
        let classic = WidgetOptions::classic();
        assert!(!classic.features.typing_indicator);
        assert!(!classic.features.draggable);
        assert!(!classic.features.resizable);
        assert_eq!(classic.text.login_required, "🔒 Please login to continue.");
        assert_eq!(classic.endpoints, EndpointOptions::default());
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("chatpane-options-{}", std::process::id()));
        let path = dir.join("widget.toml");
        let opts = WidgetOptions::classic();
        opts.save(&path).unwrap();
        let loaded = WidgetOptions::load(&path).unwrap();
        assert_eq!(opts, loaded);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
