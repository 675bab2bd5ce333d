// -- Lint policy ---------------------------------------------------------
// Crate-wide lints live in the workspace `[lints]` table in Cargo.toml.

//! Real-time camera controller for top-down and isometric strategy scenes.
//!
//! Vantage turns per-frame player input (keyboard axes, pointer drags,
//! scroll wheel) into smooth camera motion and zoom, while keeping the
//! camera's look-at anchor inside a bounded play area.
//!
//! # Key entry points
//!
//! - [`camera::CameraSystem`] - the per-frame controller
//! - [`camera::CameraRig`] - the seam to the host's virtual camera
//! - [`input::InputCollector`] - folds window events into
//!   [`input::FrameInput`] snapshots
//! - [`options::Options`] - configuration with TOML presets
//! - [`replay::Replay`] - scripted, windowless frame driver
//!
//! # Frame order
//!
//! Each [`update`](camera::CameraSystem::update) runs motion, then the
//! bounds clamp, then the zoom step. The clamp therefore uses the follow
//! offset from the end of the previous frame.
//!
//! ```
//! use glam::Vec2;
//! use vantage::camera::{CameraSystem, Rig};
//! use vantage::input::FrameInput;
//! use vantage::options::Options;
//!
//! let mut rig = Rig::default();
//! let mut camera = CameraSystem::new(Options::default(), &rig);
//! let input = FrameInput {
//!     axes: Vec2::new(1.0, 0.0),
//!     ..FrameInput::default()
//! };
//! camera.update(&mut rig, &input, 1.0 / 60.0);
//! assert!(rig.position.x > 0.0);
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod replay;

pub use camera::{CameraRig, CameraSystem, Rig};
pub use error::VantageError;
pub use input::{FrameInput, InputCollector, InputEvent};
pub use options::Options;
