use glam::Vec3;
use serde::Serialize;

use crate::options::{BoundsOptions, DebugOptions};

/// Rig marker color (green).
pub const RIG_MARKER_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
/// Bounds rectangle color (red).
pub const BOUNDS_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// Diagnostic primitive for a host's debug-draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DebugShape {
    /// Axis-aligned wireframe box.
    WireCube {
        /// Box center in world space.
        center: Vec3,
        /// Full edge lengths.
        size: Vec3,
        /// Linear RGB.
        color: [f32; 3],
    },
}

/// Shapes describing the rig position and the current clamp rectangle.
#[must_use]
pub fn debug_shapes(
    debug: &DebugOptions,
    bounds: &BoundsOptions,
    rig_position: Vec3,
    follow_offset: Vec3,
) -> Vec<DebugShape> {
    let mut shapes = Vec::with_capacity(2);
    if debug.show_rig_marker {
        shapes.push(DebugShape::WireCube {
            center: rig_position,
            size: Vec3::splat(debug.marker_size),
            color: RIG_MARKER_COLOR,
        });
    }
    if debug.show_bounds {
        // Offset on all three axes, unlike the clamp window.
        shapes.push(DebugShape::WireCube {
            center: bounds.origin - follow_offset / 2.0,
            size: Vec3::new(bounds.bound_x, 0.0, bounds.bound_z),
            color: BOUNDS_COLOR,
        });
    }
    shapes
}
