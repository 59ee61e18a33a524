//! Editor settings.

use crate::error::Result;
use crate::types::DEFAULT_BACKGROUND;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for an [`Editor`](crate::Editor) session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Maximum number of undo steps kept. Zero disables undo.
    pub history_limit: usize,

    /// Background for slides added without a template.
    pub default_background: String,

    /// Whether newly added slides and elements become the selection.
    pub select_new_items: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: 100,
            default_background: DEFAULT_BACKGROUND.to_string(),
            select_new_items: true,
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn with_default_background(mut self, background: impl Into<String>) -> Self {
        self.default_background = background.into();
        self
    }

    pub fn with_select_new_items(mut self, select: bool) -> Self {
        self.select_new_items = select;
        self
    }

    /// Read settings from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        log::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }
}
