use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Declared range of both bound extents.
pub const BOUND_RANGE: (f32, f32) = (10.0, 1000.0);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera Bounds", inline)]
#[serde(default)]
/// Play-area rectangle the rig's look-at point is kept inside.
pub struct BoundsOptions {
    /// World-space center of the play area.
    #[schemars(skip)]
    pub origin: Vec3,
    /// Rectangle width along world X.
    #[schemars(
        title = "Bound X",
        range(min = 10.0, max = 1000.0),
        extend("step" = 10.0)
    )]
    pub bound_x: f32,
    /// Rectangle depth along world Z.
    #[schemars(
        title = "Bound Z",
        range(min = 10.0, max = 1000.0),
        extend("step" = 10.0)
    )]
    pub bound_z: f32,
}

impl Default for BoundsOptions {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            bound_x: 100.0,
            bound_z: 100.0,
        }
    }
}
