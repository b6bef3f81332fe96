//! Fly camera and the input plumbing that drives it.
//!
//! Input events are captured by the windowing layer, pushed onto an
//! [`InputQueue`], and drained once per frame by the [`CameraController`],
//! which owns the held-key and mouse-drag state and mutates the
//! [`FlyCamera`] it is handed.

mod controller;
mod fly;
mod input;

pub use controller::{CameraController, MovementState};
pub use fly::FlyCamera;
pub use input::{InputEvent, InputQueue, Key, MouseButton};
