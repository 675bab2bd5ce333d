use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Declared range of [`ZoomOptions::zoom_amount`].
pub const ZOOM_AMOUNT_RANGE: (f32, f32) = (1.0, 5.0);
/// Declared range of [`ZoomOptions::zoom_speed`].
pub const ZOOM_SPEED_RANGE: (f32, f32) = (10.0, 50.0);
/// Declared range of [`ZoomOptions::follow_offset_min_y`].
pub const FOLLOW_OFFSET_MIN_Y_RANGE: (f32, f32) = (10.0, 100.0);
/// Declared range of [`ZoomOptions::follow_offset_max_y`].
pub const FOLLOW_OFFSET_MAX_Y_RANGE: (f32, f32) = (10.0, 70.0);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom", inline)]
#[serde(default)]
/// Scroll-driven follow-offset zoom parameters.
pub struct ZoomOptions {
    /// Follow-offset Y change per scroll event.
    #[schemars(
        title = "Zoom Amount",
        range(min = 1.0, max = 5.0),
        extend("step" = 0.5)
    )]
    pub zoom_amount: f32,
    /// Interpolation rate of the live offset toward the target.
    #[schemars(
        title = "Zoom Speed",
        range(min = 10.0, max = 50.0),
        extend("step" = 1.0)
    )]
    pub zoom_speed: f32,
    /// Lowest follow-offset Y (closest zoom).
    #[schemars(
        title = "Min Offset Y",
        range(min = 10.0, max = 100.0),
        extend("step" = 1.0)
    )]
    pub follow_offset_min_y: f32,
    /// Highest follow-offset Y (farthest zoom).
    #[schemars(
        title = "Max Offset Y",
        range(min = 10.0, max = 70.0),
        extend("step" = 1.0)
    )]
    pub follow_offset_max_y: f32,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            zoom_amount: 3.0,
            zoom_speed: 10.0,
            follow_offset_min_y: 10.0,
            follow_offset_max_y: 70.0,
        }
    }
}
