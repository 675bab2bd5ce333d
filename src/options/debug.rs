use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Debug visualization toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Draw a wire cube at the rig position.
    #[schemars(title = "Show Rig Marker")]
    pub show_rig_marker: bool,
    /// Draw the current clamp rectangle.
    #[schemars(title = "Show Bounds")]
    pub show_bounds: bool,
    /// Edge length of the rig marker cube.
    #[schemars(skip)]
    pub marker_size: f32,
}

impl Default for DebugOptions {
    fn default() -> Self {
        Self {
            show_rig_marker: true,
            show_bounds: true,
            marker_size: 5.0,
        }
    }
}
