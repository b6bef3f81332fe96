//! Turns queued input events into camera movement and rotation.

use glam::DVec2;
use tracing::{debug, trace};

use super::fly::FlyCamera;
use super::input::{InputEvent, InputQueue, Key, MouseButton};

/// Which movement keys are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementState {
    /// `+1` forward, `-1` backward, `0` when neither or both are held.
    pub fn forward_axis(&self) -> f32 {
        axis(self.forward, self.backward)
    }

    /// `+1` right, `-1` left, `0` when neither or both are held.
    pub fn right_axis(&self) -> f32 {
        axis(self.right, self.left)
    }

    fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::W => self.forward = held,
            Key::S => self.backward = held,
            Key::A => self.left = held,
            Key::D => self.right = held,
            Key::Escape | Key::Other => {}
        }
    }
}

fn axis(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

/// Per-window input context for a [`FlyCamera`].
///
/// Holding the left mouse button enables mouse look; cursor motion while
/// it is held rotates the camera by the pixel delta.
#[derive(Debug, Default)]
pub struct CameraController {
    movement: MovementState,
    /// Last cursor position while mouse look is active.
    drag_anchor: Option<DVec2>,
    close_requested: bool,
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movement(&self) -> MovementState {
        self.movement
    }

    pub fn is_looking(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Set once Escape has been seen; the frame loop should exit.
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Apply a single event. Look and resize take effect immediately;
    /// key presses only change the held state used by [`Self::advance`].
    pub fn handle_event(&mut self, camera: &mut FlyCamera, event: InputEvent) {
        trace!(?event, "input event");
        match event {
            InputEvent::KeyPressed { key: Key::Escape }
            | InputEvent::KeyReleased { key: Key::Escape } => {
                self.close_requested = true;
            }
            InputEvent::KeyPressed { key } => self.movement.set(key, true),
            InputEvent::KeyReleased { key } => self.movement.set(key, false),
            InputEvent::MouseButtonPressed {
                button: MouseButton::Left,
                x,
                y,
            } => {
                self.drag_anchor = Some(DVec2::new(x, y));
            }
            InputEvent::MouseButtonReleased {
                button: MouseButton::Left,
            } => {
                self.drag_anchor = None;
            }
            InputEvent::MouseButtonPressed { .. } | InputEvent::MouseButtonReleased { .. } => {}
            InputEvent::CursorMoved { x, y } => {
                if let Some(previous) = self.drag_anchor {
                    let cursor = DVec2::new(x, y);
                    let delta = (cursor - previous).as_vec2();
                    // Screen Y grows downward; dragging right or down turns right or down.
                    camera.look(-delta.x, -delta.y);
                    self.drag_anchor = Some(cursor);
                }
            }
            InputEvent::Resized { width, height } => {
                camera.set_viewport(width, height);
                debug!(width, height, aspect = camera.aspect_ratio, "viewport resized");
            }
        }
    }

    /// Move the camera by the held keys for `delta_seconds` of frame time.
    pub fn advance(&self, camera: &mut FlyCamera, delta_seconds: f32) {
        let forward = self.movement.forward_axis();
        let right = self.movement.right_axis();
        if forward != 0.0 {
            camera.move_forward(forward * delta_seconds);
        }
        if right != 0.0 {
            camera.move_right(right * delta_seconds);
        }
    }

    /// Drain the frame's events in order, then advance by `delta_seconds`.
    pub fn update(&mut self, camera: &mut FlyCamera, queue: &mut InputQueue, delta_seconds: f32) {
        for event in queue.drain() {
            self.handle_event(camera, event);
        }
        self.advance(camera, delta_seconds);
    }
}

// =============================================================================
// Tests
// =============================================================================
