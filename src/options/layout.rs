use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Panel sizing constraints.
pub struct LayoutOptions {
    /// A resize only applies a width or height strictly greater than this.
    pub min_size: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { min_size: 300.0 }
    }
}
