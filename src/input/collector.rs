//! Folds raw platform events into per-frame snapshots.
//!
//! The `InputCollector` owns all transient between-frame input state
//! (held keys, pointer position, button edges, scroll accumulation). It is
//! the only thing that sits between raw window events and
//! [`CameraSystem::update`](crate::camera::CameraSystem::update).
//!
//! Window events report the cursor with `y` pointing down; the collector
//! flips it so [`FrameInput::pointer`] is `y`-up, which is what drag panning
//! expects.

use std::collections::HashSet;

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::frame::FrameInput;

/// Raw axis direction of a physical key, or `None` for unrelated keys.
///
/// Horizontal is A/D and Left/Right, Vertical is S/W and Down/Up.
fn axis_contribution(code: &str) -> Option<Vec2> {
    match code {
        "KeyA" | "ArrowLeft" => Some(Vec2::NEG_X),
        "KeyD" | "ArrowRight" => Some(Vec2::X),
        "KeyS" | "ArrowDown" => Some(Vec2::NEG_Y),
        "KeyW" | "ArrowUp" => Some(Vec2::Y),
        _ => None,
    }
}

/// Accumulates input events between frames.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(event) = InputEvent::from_window_event(&window_event) {
///     collector.handle_event(&event);
/// }
///
/// // Once per redraw:
/// let input = collector.take_frame();
/// camera.update(&mut rig, &input, dt);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    /// Axis keys currently held.
    held_keys: HashSet<String>,
    /// Last cursor position seen, `y`-up.
    pointer: Vec2,
    /// Primary button went down since the last frame.
    primary_pressed: bool,
    /// Primary button went up since the last frame.
    primary_released: bool,
    /// Scroll summed since the last frame.
    scroll: f32,
}

impl InputCollector {
    /// Create a collector with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cursor position in physical pixels, `y`-up.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Record one event.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.pointer = Vec2::new(*x, -*y);
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                if *pressed {
                    self.primary_pressed = true;
                } else {
                    self.primary_released = true;
                }
            }
            InputEvent::MouseButton { .. } => {}
            InputEvent::Scroll { delta } => self.scroll += delta,
            InputEvent::Key { code, pressed } => {
                if axis_contribution(code).is_none() {
                    return;
                }
                if *pressed {
                    let _ = self.held_keys.insert(code.clone());
                } else {
                    let _ = self.held_keys.remove(code);
                }
            }
        }
    }

    /// Current raw axes from held keys; opposite keys cancel.
    #[must_use]
    pub fn axes(&self) -> Vec2 {
        let sum: Vec2 = self
            .held_keys
            .iter()
            .filter_map(|code| axis_contribution(code))
            .sum();
        sum.clamp(Vec2::NEG_ONE, Vec2::ONE)
    }

    /// Snapshot this frame's input and reset the per-frame parts
    /// (button edges, scroll). Held keys and pointer persist.
    pub fn take_frame(&mut self) -> FrameInput {
        let frame = FrameInput {
            axes: self.axes(),
            pointer: self.pointer,
            primary_pressed: self.primary_pressed,
            primary_released: self.primary_released,
            scroll: self.scroll,
        };
        self.primary_pressed = false;
        self.primary_released = false;
        self.scroll = 0.0;
        frame
    }

    /// Drop all held keys and pending edges (e.g. on focus loss).
    pub fn clear(&mut self) {
        let pointer = self.pointer;
        *self = Self {
            pointer,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::{CameraSystem, Rig};
    use crate::options::{MovementOptions, Options};

    fn key(code: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            code: code.into(),
            pressed,
        }
    }

    #[test]
    fn held_keys_map_to_axes() {
        let mut collector = InputCollector::new();
        collector.handle_event(&key("KeyD", true));
        collector.handle_event(&key("ArrowUp", true));
        assert_eq!(collector.take_frame().axes, Vec2::new(1.0, 1.0));
        // Still held next frame
        assert_eq!(collector.take_frame().axes, Vec2::new(1.0, 1.0));

        collector.handle_event(&key("KeyD", false));
        assert_eq!(collector.take_frame().axes, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut collector = InputCollector::new();
        collector.handle_event(&key("KeyA", true));
        collector.handle_event(&key("KeyD", true));
        assert_eq!(collector.axes(), Vec2::ZERO);
    }

    #[test]
    fn aliased_keys_do_not_exceed_unit_axis() {
        let mut collector = InputCollector::new();
        collector.handle_event(&key("KeyW", true));
        collector.handle_event(&key("ArrowUp", true));
        assert_eq!(collector.axes(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut collector = InputCollector::new();
        collector.handle_event(&key("Escape", true));
        assert_eq!(collector.take_frame(), FrameInput::default());
    }

    #[test]
    fn button_edges_last_one_frame() {
        let mut collector = InputCollector::new();
        collector.handle_event(&InputEvent::CursorMoved { x: 4.0, y: 8.0 });
        collector.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });

        let frame = collector.take_frame();
        assert!(frame.primary_pressed);
        assert_eq!(frame.pointer, Vec2::new(4.0, -8.0));

        let frame = collector.take_frame();
        assert!(!frame.primary_pressed);
        assert_eq!(frame.pointer, Vec2::new(4.0, -8.0));
    }

    #[test]
    fn secondary_buttons_do_not_drag() {
        let mut collector = InputCollector::new();
        collector.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert!(!collector.take_frame().primary_pressed);
    }

    #[test]
    fn scroll_accumulates_within_a_frame() {
        let mut collector = InputCollector::new();
        collector.handle_event(&InputEvent::Scroll { delta: 1.0 });
        collector.handle_event(&InputEvent::Scroll { delta: 0.5 });
        assert_eq!(collector.take_frame().scroll, 1.5);
        assert_eq!(collector.take_frame().scroll, 0.0);
    }

    #[test]
    fn clear_keeps_pointer_only() {
        let mut collector = InputCollector::new();
        collector.handle_event(&InputEvent::CursorMoved { x: 1.0, y: 2.0 });
        collector.handle_event(&key("KeyW", true));
        collector.handle_event(&InputEvent::Scroll { delta: -1.0 });
        collector.clear();

        let frame = collector.take_frame();
        assert!(frame.is_idle());
        assert_eq!(frame.pointer, Vec2::new(1.0, -2.0));
    }

    #[test]
    fn cursor_y_is_flipped_to_point_up() {
        let mut collector = InputCollector::new();
        collector.handle_event(&InputEvent::CursorMoved { x: 10.0, y: 30.0 });
        assert_eq!(collector.pointer(), Vec2::new(10.0, -30.0));
    }

    /// Drive one drag gesture from window-style cursor events through a
    /// camera system and return the rig position afterwards.
    fn drag_rig(from: Vec2, to: Vec2) -> Vec3 {
        let mut rig = Rig::looking_down(0.0);
        let options = Options {
            movement: MovementOptions {
                enable_keyboard_movement: false,
                ..MovementOptions::default()
            },
            ..Options::default()
        };
        let mut camera = CameraSystem::new(options, &rig);
        let mut collector = InputCollector::new();

        collector.handle_event(&InputEvent::CursorMoved {
            x: from.x,
            y: from.y,
        });
        collector.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        camera.update(&mut rig, &collector.take_frame(), 0.01);

        collector.handle_event(&InputEvent::CursorMoved { x: to.x, y: to.y });
        camera.update(&mut rig, &collector.take_frame(), 0.01);
        rig.position
    }

    #[test]
    fn dragging_cursor_right_pushes_rig_left() {
        let position =
            drag_rig(Vec2::new(100.0, 100.0), Vec2::new(110.0, 100.0));
        // right is +X: rig moves along -right
        assert!((position - Vec3::new(-10.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn dragging_cursor_up_pushes_rig_back() {
        // Window y shrinks as the cursor moves up the screen
        let position =
            drag_rig(Vec2::new(100.0, 100.0), Vec2::new(100.0, 90.0));
        // forward is -Z at zero yaw and pitch: rig moves along -forward
        assert!((position - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-4);
    }
}
