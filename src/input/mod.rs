//! Input handling: event types, the per-frame snapshot, and the collector
//! that turns raw window events into snapshots.

/// Folds events into per-frame snapshots.
pub mod collector;
/// Platform-agnostic input events.
pub mod event;
/// The per-frame input snapshot.
pub mod frame;

pub use collector::InputCollector;
pub use event::{InputEvent, MouseButton};
pub use frame::FrameInput;
