//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Initial framebuffer size and title handed to the windowing backend.
///
/// The camera derives its starting aspect ratio from `width / height`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Blue Marble".into(),
        }
    }
}
