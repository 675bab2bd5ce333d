use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Everything the camera system reads from input in one frame.
///
/// Taken once at the start of the update and never re-read mid-frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameInput {
    /// Raw Horizontal (`x`) and Vertical (`y`) axes, each in `[-1, 1]`.
    pub axes: Vec2,
    /// Pointer position in screen space, `x` to the right and `y` up.
    pub pointer: Vec2,
    /// Primary button went down this frame.
    pub primary_pressed: bool,
    /// Primary button went up this frame.
    pub primary_released: bool,
    /// Vertical scroll delta; only the sign is used.
    pub scroll: f32,
}

impl FrameInput {
    /// A frame with no axes, edges, or scroll at `pointer`.
    #[must_use]
    pub fn idle(pointer: Vec2) -> Self {
        Self {
            pointer,
            ..Self::default()
        }
    }

    /// Whether the frame carries no axis, button edge, or scroll.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.axes == Vec2::ZERO
            && !self.primary_pressed
            && !self.primary_released
            && self.scroll == 0.0
    }
}
