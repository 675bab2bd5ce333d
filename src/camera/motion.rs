use glam::{Vec2, Vec3};

use crate::input::FrameInput;
use crate::options::MovementOptions;

/// Pointer-drag tracking for drag panning.
///
/// Alive from primary press to primary release; while active, each frame
/// consumes the pointer delta since the last recorded position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Whether the primary button is held since a press this system saw.
    pub is_dragging: bool,
    /// Pointer position recorded on press and after every drag step.
    pub last_pointer: Vec2,
}

impl DragState {
    /// Enter dragging and capture the start position.
    pub fn begin(&mut self, pointer: Vec2) {
        self.is_dragging = true;
        self.last_pointer = pointer;
        log::debug!("drag pan started at {pointer}");
    }

    /// Leave dragging; later frames produce no drag displacement.
    pub fn end(&mut self) {
        if self.is_dragging {
            log::debug!("drag pan released at {}", self.last_pointer);
        }
        self.is_dragging = false;
    }

    /// Pointer movement since the last step, advancing the recorded
    /// position. `None` when not dragging.
    pub fn step(&mut self, pointer: Vec2) -> Option<Vec2> {
        if !self.is_dragging {
            return None;
        }
        let delta = pointer - self.last_pointer;
        self.last_pointer = pointer;
        Some(delta)
    }
}

/// Unit planar direction from the Horizontal/Vertical axes.
///
/// The combined direction is normalized before its Y is dropped, so a
/// pitched `forward` yields a shorter planar vector. Zero axes give zero.
#[must_use]
pub fn keyboard_direction(axes: Vec2, right: Vec3, forward: Vec3) -> Vec3 {
    let mut direction = (axes.x * right + axes.y * forward).normalize_or_zero();
    direction.y = 0.0;
    direction
}

/// Displacement direction for a pointer delta; inverted so dragging
/// pushes the world rather than the camera.
#[must_use]
pub fn drag_direction(
    delta: Vec2,
    pan_speed: f32,
    right: Vec3,
    forward: Vec3,
) -> Vec3 {
    let mut direction =
        delta.x * -pan_speed * right + delta.y * -pan_speed * forward;
    direction.y = 0.0;
    direction
}

/// Motion Controller: world-space planar displacement for this frame.
///
/// Keyboard and drag each contribute their own translation, scaled by
/// `move_speed * delta_time`; the two are applied in sequence and so add
/// up when both are enabled.
#[must_use]
pub fn frame_displacement(
    options: &MovementOptions,
    drag: &mut DragState,
    input: &FrameInput,
    right: Vec3,
    forward: Vec3,
    delta_time: f32,
) -> Vec3 {
    let scale = options.move_speed * delta_time;
    let mut displacement = Vec3::ZERO;

    if options.enable_keyboard_movement {
        displacement += keyboard_direction(input.axes, right, forward) * scale;
    }

    if options.enable_drag_panning {
        if input.primary_pressed {
            drag.begin(input.pointer);
        }
        if input.primary_released {
            drag.end();
        }
        if let Some(delta) = drag.step(input.pointer) {
            displacement +=
                drag_direction(delta, options.drag_pan_speed, right, forward)
                    * scale;
        }
    }

    displacement
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIGHT: Vec3 = Vec3::X;
    const FORWARD: Vec3 = Vec3::NEG_Z;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    fn keyboard_only() -> MovementOptions {
        MovementOptions {
            enable_drag_panning: false,
            ..MovementOptions::default()
        }
    }

    fn drag_only() -> MovementOptions {
        MovementOptions {
            enable_keyboard_movement: false,
            ..MovementOptions::default()
        }
    }

    #[test]
    fn zero_axes_give_zero_direction() {
        let dir = keyboard_direction(Vec2::ZERO, RIGHT, FORWARD);
        assert_eq!(dir, Vec3::ZERO);
        assert!(!dir.is_nan());
    }

    #[test]
    fn diagonal_axes_are_normalized() {
        let dir = keyboard_direction(Vec2::ONE, RIGHT, FORWARD);
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert!(approx(dir, Vec3::new(1.0, 0.0, -1.0).normalize()));
    }

    #[test]
    fn pitched_forward_loses_its_vertical_part() {
        let forward = Vec3::new(0.0, -0.6, -0.8);
        let dir = keyboard_direction(Vec2::new(0.0, 1.0), RIGHT, forward);
        assert_eq!(dir.y, 0.0);
        assert!(approx(dir, Vec3::new(0.0, 0.0, -0.8)));
    }

    #[test]
    fn drag_pushes_the_world() {
        let dir = drag_direction(Vec2::new(10.0, 0.0), 1.0, RIGHT, FORWARD);
        assert!(approx(dir, Vec3::new(-10.0, 0.0, 0.0)));

        let dir = drag_direction(Vec2::new(0.0, 4.0), 0.5, RIGHT, FORWARD);
        assert!(approx(dir, Vec3::new(0.0, 0.0, 2.0)));
    }

    #[test]
    fn keyboard_displacement_scales_by_speed_and_dt() {
        let mut drag = DragState::default();
        let input = FrameInput {
            axes: Vec2::new(1.0, 0.0),
            ..FrameInput::default()
        };
        let d = frame_displacement(
            &keyboard_only(),
            &mut drag,
            &input,
            RIGHT,
            FORWARD,
            0.1,
        );
        assert!(approx(d, Vec3::new(10.0, 0.0, 0.0)));
    }

    #[test]
    fn disabled_keyboard_ignores_axes() {
        let mut drag = DragState::default();
        let input = FrameInput {
            axes: Vec2::ONE,
            ..FrameInput::default()
        };
        let d = frame_displacement(
            &drag_only(),
            &mut drag,
            &input,
            RIGHT,
            FORWARD,
            0.1,
        );
        assert_eq!(d, Vec3::ZERO);
    }

    #[test]
    fn press_frame_records_start_without_moving() {
        let mut drag = DragState::default();
        let input = FrameInput {
            pointer: Vec2::new(100.0, 100.0),
            primary_pressed: true,
            ..FrameInput::default()
        };
        let d = frame_displacement(
            &drag_only(),
            &mut drag,
            &input,
            RIGHT,
            FORWARD,
            0.1,
        );
        assert_eq!(d, Vec3::ZERO);
        assert!(drag.is_dragging);
        assert_eq!(drag.last_pointer, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn held_drag_moves_by_pointer_delta() {
        let mut drag = DragState::default();
        drag.begin(Vec2::new(100.0, 100.0));
        let input = FrameInput {
            pointer: Vec2::new(103.0, 100.0),
            ..FrameInput::default()
        };
        let d = frame_displacement(
            &drag_only(),
            &mut drag,
            &input,
            RIGHT,
            FORWARD,
            0.01,
        );
        // delta.x = 3, pan speed 1, move speed 100, dt 0.01
        assert!(approx(d, Vec3::new(-3.0, 0.0, 0.0)));
        assert_eq!(drag.last_pointer, Vec2::new(103.0, 100.0));
    }

    #[test]
    fn release_stops_drag_displacement() {
        let mut drag = DragState::default();
        drag.begin(Vec2::ZERO);
        let input = FrameInput {
            pointer: Vec2::new(50.0, 50.0),
            primary_released: true,
            ..FrameInput::default()
        };
        let d = frame_displacement(
            &drag_only(),
            &mut drag,
            &input,
            RIGHT,
            FORWARD,
            0.1,
        );
        assert_eq!(d, Vec3::ZERO);
        assert!(!drag.is_dragging);
    }

    #[test]
    fn keyboard_and_drag_add_up() {
        let mut drag = DragState::default();
        drag.begin(Vec2::ZERO);
        let input = FrameInput {
            axes: Vec2::new(0.0, 1.0),
            pointer: Vec2::new(-1.0, 0.0),
            ..FrameInput::default()
        };
        let d = frame_displacement(
            &MovementOptions::default(),
            &mut drag,
            &input,
            RIGHT,
            FORWARD,
            0.1,
        );
        assert!(approx(d, Vec3::new(10.0, 0.0, -10.0)));
    }

    #[test]
    fn step_without_drag_is_none() {
        let mut drag = DragState::default();
        assert_eq!(drag.step(Vec2::ONE), None);
    }
}
