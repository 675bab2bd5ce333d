/// Platform-agnostic input events.
///
/// These are fed into an [`InputCollector`](super::InputCollector) which
/// folds one frame's worth of them into a [`FrameInput`](super::FrameInput).
///
/// # Example
///
/// ```
/// # use vantage::input::{InputCollector, InputEvent};
/// let mut collector = InputCollector::new();
/// collector.handle_event(&InputEvent::Key {
///     code: "KeyW".into(),
///     pressed: true,
/// });
/// let frame = collector.take_frame();
/// assert_eq!(frame.axes.y, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// Physical key pressed or released.
    Key {
        /// Key name in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"ArrowLeft"`, ...).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "winit")]
impl InputEvent {
    /// Translate a winit window event, if it carries camera input.
    #[must_use]
    pub fn from_window_event(
        event: &winit::event::WindowEvent,
    ) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseInput { button, state, .. } => {
                Some(Self::MouseButton {
                    button: (*button).into(),
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return None;
                }
                match event.physical_key {
                    PhysicalKey::Code(code) => Some(Self::Key {
                        code: format!("{code:?}"),
                        pressed: event.state == ElementState::Pressed,
                    }),
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            _ => None,
        }
    }
}
