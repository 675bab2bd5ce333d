use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Movement", inline)]
#[serde(default)]
/// Keyboard and drag-pan movement parameters.
pub struct MovementOptions {
    /// Translate the rig from the Horizontal/Vertical axes.
    #[schemars(title = "Keyboard Movement")]
    pub enable_keyboard_movement: bool,
    /// Translate the rig while the primary pointer button is dragged.
    #[schemars(title = "Drag Panning")]
    pub enable_drag_panning: bool,
    /// World units per second applied to every displacement.
    #[schemars(title = "Move Speed", range(min = 0.0), extend("step" = 1.0))]
    pub move_speed: f32,
    /// Multiplier from pointer pixels to displacement.
    #[schemars(
        title = "Drag Pan Speed",
        range(min = 0.0),
        extend("step" = 0.1)
    )]
    pub drag_pan_speed: f32,
}

impl Default for MovementOptions {
    fn default() -> Self {
        Self {
            enable_keyboard_movement: true,
            enable_drag_panning: true,
            move_speed: 100.0,
            drag_pan_speed: 1.0,
        }
    }
}
