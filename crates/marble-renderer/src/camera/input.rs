//! Backend-agnostic input events and the per-frame queue that buffers them.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Keys the camera controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    W,
    A,
    S,
    D,
    Escape,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// One captured input event. Cursor positions are window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    KeyPressed { key: Key },
    KeyReleased { key: Key },
    /// Button press along with the cursor position at the time of the press.
    MouseButtonPressed { button: MouseButton, x: f64, y: f64 },
    MouseButtonReleased { button: MouseButton },
    CursorMoved { x: f64, y: f64 },
    Resized { width: u32, height: u32 },
}

/// FIFO of events captured since the last frame.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Take every queued event in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Extend<InputEvent> for InputQueue {
    fn extend<I: IntoIterator<Item = InputEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}
