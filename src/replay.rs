//! Scripted frame driver.
//!
//! Replays a TOML script of input frames through a [`CameraSystem`] at a
//! fixed delta time and records the rig after every frame. Used by the
//! `vantage replay` command and handy for reproducing camera feel issues
//! without a window.
//!
//! ```toml
//! delta_time = 0.016
//!
//! [rig]
//! position = [0.0, 0.0, 0.0]
//! follow_offset = [0.0, 30.0, -40.0]
//!
//! [[frames]]
//! repeat = 60
//! axes = [1.0, 0.0]
//!
//! [[frames]]
//! scroll = -1.0
//! ```

use std::path::Path;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::{CameraSystem, Rig};
use crate::error::VantageError;
use crate::input::FrameInput;
use crate::options::Options;

fn default_delta_time() -> f32 {
    1.0 / 60.0
}

fn default_repeat() -> u32 {
    1
}

/// One script entry, replayed `repeat` times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptFrame {
    /// How many consecutive frames this entry covers.
    #[serde(default = "default_repeat")]
    pub repeat: u32,
    /// Horizontal/Vertical axes.
    #[serde(default)]
    pub axes: Vec2,
    /// Pointer position.
    #[serde(default)]
    pub pointer: Vec2,
    /// Primary button pressed on the first repetition.
    #[serde(default)]
    pub press: bool,
    /// Primary button released on the first repetition.
    #[serde(default)]
    pub release: bool,
    /// Scroll delta, repeated every repetition.
    #[serde(default)]
    pub scroll: f32,
}

impl ScriptFrame {
    /// Input for the `index`-th repetition of this entry.
    fn input(&self, index: u32) -> FrameInput {
        let first = index == 0;
        FrameInput {
            axes: self.axes,
            pointer: self.pointer,
            primary_pressed: first && self.press,
            primary_released: first && self.release,
            scroll: self.scroll,
        }
    }
}

/// A complete replay script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    /// Fixed frame time in seconds.
    #[serde(default = "default_delta_time")]
    pub delta_time: f32,
    /// Starting rig.
    #[serde(default)]
    pub rig: Rig,
    /// Frame entries in order.
    #[serde(default)]
    pub frames: Vec<ScriptFrame>,
}

/// Rig and zoom state after one replayed frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameRecord {
    /// Zero-based frame number.
    pub frame: u64,
    /// Rig position after the frame.
    pub position: Vec3,
    /// Live follow offset after the frame.
    pub follow_offset: Vec3,
    /// Zoom target after the frame.
    pub target_offset: Vec3,
    /// Whether a drag was active after the frame.
    pub dragging: bool,
}

/// Result of running a replay.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trace {
    /// One record per frame.
    pub records: Vec<FrameRecord>,
}

impl Trace {
    /// Last record, if any frames ran.
    #[must_use]
    pub fn last(&self) -> Option<&FrameRecord> {
        self.records.last()
    }

    /// Write the trace as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<(), VantageError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| VantageError::Script(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }
}

impl Replay {
    /// Parse a script from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, VantageError> {
        let replay: Self = toml::from_str(content)
            .map_err(|e| VantageError::Script(e.to_string()))?;
        if replay.delta_time.is_nan() || replay.delta_time <= 0.0 {
            return Err(VantageError::Script(format!(
                "delta_time must be positive, got {}",
                replay.delta_time
            )));
        }
        Ok(replay)
    }

    /// Load a script from a TOML file.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Total frames the script expands to.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.repeat)).sum()
    }

    /// Run every frame through a fresh camera system.
    #[must_use]
    pub fn run(&self, options: &Options) -> Trace {
        let mut rig = self.rig;
        let mut system = CameraSystem::new(options.clone(), &rig);
        let mut records = Vec::new();
        let mut frame = 0_u64;

        for entry in &self.frames {
            for index in 0..entry.repeat {
                system.update(&mut rig, &entry.input(index), self.delta_time);
                records.push(FrameRecord {
                    frame,
                    position: rig.position,
                    follow_offset: rig.follow_offset,
                    target_offset: system.target_offset(),
                    dragging: system.is_dragging(),
                });
                frame += 1;
            }
        }

        log::debug!("replayed {frame} frames");
        Trace { records }
    }
}
