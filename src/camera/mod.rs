//! Strategy camera for top-down and isometric scenes.
//!
//! Each frame [`CameraSystem::update`] moves the rig from keyboard axes and
//! pointer drags, clamps it so its look-at point stays inside the play
//! area, and steps the scroll zoom toward its target follow offset.

/// Bounds window and the per-frame position clamp.
pub mod bounds;
/// Debug wireframe shapes.
pub mod debug;
/// Keyboard and drag-pan displacement.
pub mod motion;
/// The rig abstraction and a plain-data implementation.
pub mod rig;
/// Per-frame orchestration of motion, clamp, and zoom.
pub mod system;
/// Discrete zoom steps and offset smoothing.
pub mod zoom;

pub use bounds::BoundsWindow;
pub use debug::DebugShape;
pub use motion::DragState;
pub use rig::{CameraRig, Rig};
pub use system::CameraSystem;
