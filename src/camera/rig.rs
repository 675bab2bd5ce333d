use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The object the player steers, as seen by the camera system.
///
/// The renderer's virtual camera sits at `position + follow_offset` and
/// looks back toward `position`. Implementors are passive data holders;
/// the camera system is the only writer during a frame.
pub trait CameraRig {
    /// World-space rig position.
    fn position(&self) -> Vec3;

    /// Overwrite the rig position.
    fn set_position(&mut self, position: Vec3);

    /// Unit view direction of the virtual camera.
    fn forward(&self) -> Vec3;

    /// Unit right vector of the virtual camera.
    fn right(&self) -> Vec3;

    /// Live displacement from the rig to the render viewpoint.
    fn follow_offset(&self) -> Vec3;

    /// Overwrite the live follow offset.
    fn set_follow_offset(&mut self, offset: Vec3);
}

/// Plain-data rig with a yaw/pitch orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rig {
    /// World-space position of the look-at anchor.
    pub position: Vec3,
    /// Rotation about world Y in radians (0 looks down -Z).
    pub yaw: f32,
    /// Elevation in radians (negative looks down).
    pub pitch: f32,
    /// Live follow offset applied by the virtual camera.
    pub follow_offset: Vec3,
}

impl Default for Rig {
    fn default() -> Self {
        Self::looking_down(-std::f32::consts::FRAC_PI_4)
    }
}

impl Rig {
    /// A rig at the origin facing -Z, tilted by `pitch`, with the follow
    /// offset the view direction implies for a 40-unit pull-back.
    #[must_use]
    pub fn looking_down(pitch: f32) -> Self {
        let mut rig = Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch,
            follow_offset: Vec3::ZERO,
        };
        rig.follow_offset = -rig.forward() * 40.0;
        rig
    }

    /// Builder-style follow offset override.
    #[must_use]
    pub fn with_follow_offset(mut self, offset: Vec3) -> Self {
        self.follow_offset = offset;
        self
    }

    /// Builder-style position override.
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }
}

impl CameraRig for Rig {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn forward(&self) -> Vec3 {
        Vec3::new(
            -self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    fn follow_offset(&self) -> Vec3 {
        self.follow_offset
    }

    fn set_follow_offset(&mut self, offset: Vec3) {
        self.follow_offset = offset;
    }
}
