//! Geometry and camera core for the Blue Marble demo.
//!
//! Everything here is plain CPU-side math: the sphere mesh and the frame
//! uniforms are `bytemuck::Pod` so a graphics backend can upload them as-is.

pub mod camera;
pub mod frame;
pub mod perf;
pub mod sphere;
pub mod transforms;

pub use camera::{CameraController, FlyCamera, InputEvent, InputQueue, Key, MouseButton};
pub use frame::{DirectionalLight, FrameUniforms};
pub use perf::FrameClock;
pub use sphere::{SphereMesh, SphereVertex, Triangle};
