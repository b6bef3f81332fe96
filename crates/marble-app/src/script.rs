//! Scripted input for headless runs.

use marble_common::MarbleError;
use marble_renderer::InputEvent;
use serde::Deserialize;
use std::path::Path;

/// An input event to inject before simulating `frame`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScriptedEvent {
    pub frame: u32,
    pub event: InputEvent,
}

/// Load a JSON array of scripted events, sorted by frame.
///
/// Events sharing a frame keep their file order.
pub fn load_script(path: &Path) -> marble_common::Result<Vec<ScriptedEvent>> {
    let content = std::fs::read_to_string(path)?;
    parse_script(&content)
        .map_err(|e| MarbleError::Other(format!("invalid input script {}: {e}", path.display())))
}

pub fn parse_script(content: &str) -> Result<Vec<ScriptedEvent>, serde_json::Error> {
    let mut events: Vec<ScriptedEvent> = serde_json::from_str(content)?;
    events.sort_by_key(|e| e.frame);
    Ok(events)
}
