use serde::{Deserialize, Serialize};

/// Pointer button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    MouseLeft,
    MouseMiddle,
    MouseRight,
}

/// Controller - reports pointer button states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons, in press order
    fn pressed_buttons(&self) -> &[Button];
}

#[cfg(feature = "winit")]
impl Button {
    /// Map a winit mouse button; back/forward/other buttons have no camera role
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        use winit::event::MouseButton;

        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Middle => Some(Button::MouseMiddle),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}
