//! Camera configuration with TOML preset support.
//!
//! All tweakable settings (movement, zoom, bounds, debug drawing) are
//! consolidated here. Options serialize to/from TOML so a scene can ship
//! its camera tuning as a preset file. Declared ranges live in the JSON
//! schema so a host UI can enforce them; [`Options::sanitized`] enforces
//! them on load.

mod bounds;
mod debug;
mod movement;
mod zoom;

use std::path::Path;

pub use bounds::{BoundsOptions, BOUND_RANGE};
pub use debug::DebugOptions;
pub use movement::MovementOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use zoom::{
    ZoomOptions, FOLLOW_OFFSET_MAX_Y_RANGE, FOLLOW_OFFSET_MIN_Y_RANGE,
    ZOOM_AMOUNT_RANGE, ZOOM_SPEED_RANGE,
};

use crate::error::VantageError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[zoom]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Keyboard and drag-pan movement.
    pub movement: MovementOptions,
    /// Scroll zoom and follow-offset limits.
    pub zoom: ZoomOptions,
    /// Play-area bounds.
    pub bounds: BoundsOptions,
    /// Debug visualization toggles.
    pub debug: DebugOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults; the
    /// result is sanitized.
    pub fn from_toml_str(content: &str) -> Result<Self, VantageError> {
        let opts: Self = toml::from_str(content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        Ok(opts.sanitized())
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Clamp every ranged field into its declared range.
    ///
    /// Non-finite values fall back to the field default. An inverted
    /// follow-offset range (min above max) is swapped and then clamped
    /// again, so both limits stay inside their declared ranges and the zoom
    /// clamp always has a well-formed interval. Each correction is logged
    /// at warn level.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let zoom_defaults = ZoomOptions::default();
        let zoom = &mut self.zoom;
        zoom.zoom_amount = sanitize_field(
            "zoom.zoom_amount",
            zoom.zoom_amount,
            ZOOM_AMOUNT_RANGE,
            zoom_defaults.zoom_amount,
        );
        zoom.zoom_speed = sanitize_field(
            "zoom.zoom_speed",
            zoom.zoom_speed,
            ZOOM_SPEED_RANGE,
            zoom_defaults.zoom_speed,
        );
        zoom.follow_offset_min_y = sanitize_field(
            "zoom.follow_offset_min_y",
            zoom.follow_offset_min_y,
            FOLLOW_OFFSET_MIN_Y_RANGE,
            zoom_defaults.follow_offset_min_y,
        );
        zoom.follow_offset_max_y = sanitize_field(
            "zoom.follow_offset_max_y",
            zoom.follow_offset_max_y,
            FOLLOW_OFFSET_MAX_Y_RANGE,
            zoom_defaults.follow_offset_max_y,
        );
        if zoom.follow_offset_min_y > zoom.follow_offset_max_y {
            log::warn!(
                "zoom.follow_offset_min_y ({}) exceeds follow_offset_max_y \
                 ({}); swapping",
                zoom.follow_offset_min_y,
                zoom.follow_offset_max_y
            );
            std::mem::swap(
                &mut zoom.follow_offset_min_y,
                &mut zoom.follow_offset_max_y,
            );
            // The swapped-in max may sit above its own range.
            zoom.follow_offset_max_y = sanitize_field(
                "zoom.follow_offset_max_y",
                zoom.follow_offset_max_y,
                FOLLOW_OFFSET_MAX_Y_RANGE,
                zoom_defaults.follow_offset_max_y,
            );
        }

        let bounds_defaults = BoundsOptions::default();
        let bounds = &mut self.bounds;
        bounds.bound_x = sanitize_field(
            "bounds.bound_x",
            bounds.bound_x,
            BOUND_RANGE,
            bounds_defaults.bound_x,
        );
        bounds.bound_z = sanitize_field(
            "bounds.bound_z",
            bounds.bound_z,
            BOUND_RANGE,
            bounds_defaults.bound_z,
        );

        let movement = &mut self.movement;
        movement.move_speed = movement.move_speed.max(0.0);
        movement.drag_pan_speed = movement.drag_pan_speed.max(0.0);

        self
    }
}

fn sanitize_field(
    name: &str,
    value: f32,
    (min, max): (f32, f32),
    default: f32,
) -> f32 {
    if !value.is_finite() {
        log::warn!("{name} = {value} is not finite; using {default}");
        return default;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::warn!("{name} = {value} outside [{min}, {max}]; using {clamped}");
    }
    clamped
}
