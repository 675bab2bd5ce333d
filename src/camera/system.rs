use glam::Vec3;

use super::bounds::{clamp_position, BoundsWindow};
use super::debug::{debug_shapes, DebugShape};
use super::motion::{frame_displacement, DragState};
use super::rig::CameraRig;
use super::zoom::{smooth_offset, step_target_y};
use crate::input::FrameInput;
use crate::options::Options;

/// Strategy camera controller.
///
/// Owns the configuration, drag state, and zoom target; the rig (and its
/// live follow offset) stays with the caller and is borrowed for each
/// [`update`](Self::update).
#[derive(Debug, Clone)]
pub struct CameraSystem {
    options: Options,
    drag: DragState,
    target_offset: Vec3,
}

impl CameraSystem {
    /// Create a system, adopting the rig's current follow offset as the
    /// zoom target. Options are sanitized first.
    #[must_use]
    pub fn new(options: Options, rig: &impl CameraRig) -> Self {
        let options = options.sanitized();
        let target_offset = rig.follow_offset();
        log::debug!(
            "camera system initialized: offset {target_offset}, bounds {} x {}",
            options.bounds.bound_x,
            options.bounds.bound_z
        );
        Self {
            options,
            drag: DragState::default(),
            target_offset,
        }
    }

    /// Re-adopt the rig's follow offset as the target and drop any drag.
    pub fn reset(&mut self, rig: &impl CameraRig) {
        self.target_offset = rig.follow_offset();
        self.drag = DragState::default();
    }

    /// Active configuration.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Follow offset the zoom is converging toward.
    #[must_use]
    pub fn target_offset(&self) -> Vec3 {
        self.target_offset
    }

    /// Whether a drag pan is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    /// Clamp window for the rig's current follow offset.
    #[must_use]
    pub fn bounds_window(&self, rig: &impl CameraRig) -> BoundsWindow {
        BoundsWindow::new(&self.options.bounds, rig.follow_offset())
    }

    /// Advance one frame: move, clamp, then zoom.
    ///
    /// The clamp runs before this frame's zoom step and therefore sees the
    /// follow offset as it stood at the end of the previous frame.
    pub fn update(
        &mut self,
        rig: &mut impl CameraRig,
        input: &FrameInput,
        delta_time: f32,
    ) {
        let displacement = frame_displacement(
            &self.options.movement,
            &mut self.drag,
            input,
            rig.right(),
            rig.forward(),
            delta_time,
        );
        let moved = rig.position() + displacement;
        rig.set_position(clamp_position(
            moved,
            rig.follow_offset(),
            &self.options.bounds,
        ));

        let zoom = &self.options.zoom;
        self.target_offset.y =
            step_target_y(self.target_offset.y, input.scroll, zoom);
        rig.set_follow_offset(smooth_offset(
            rig.follow_offset(),
            self.target_offset,
            zoom.zoom_speed,
            delta_time,
        ));

        log::trace!(
            "frame: position {} offset {} target {}",
            rig.position(),
            rig.follow_offset(),
            self.target_offset
        );
    }

    /// Diagnostic shapes for the rig marker and clamp rectangle.
    #[must_use]
    pub fn render_debug(&self, rig: &impl CameraRig) -> Vec<DebugShape> {
        debug_shapes(
            &self.options.debug,
            &self.options.bounds,
            rig.position(),
            rig.follow_offset(),
        )
    }
}
