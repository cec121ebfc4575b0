use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::traits::{Button, Camera, Controller};

/// Window-system independent pointer event, in window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    ButtonPressed { button: Button, x: f32, y: f32 },
    ButtonReleased { button: Button, x: f32, y: f32 },
    CursorMoved { x: f32, y: f32 },
}

#[cfg(feature = "winit")]
impl InputEvent {
    /// Translate a winit window event. Button events carry `cursor`, the last
    /// known pointer position, since winit reports it separately.
    pub fn from_winit(event: &winit::event::WindowEvent, cursor: (f32, f32)) -> Option<Self> {
        use winit::event::{ElementState, WindowEvent};

        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                let button = Button::from_winit(*button)?;
                let (x, y) = cursor;
                Some(match state {
                    ElementState::Pressed => InputEvent::ButtonPressed { button, x, y },
                    ElementState::Released => InputEvent::ButtonReleased { button, x, y },
                })
            }
            WindowEvent::CursorMoved { position, .. } => Some(InputEvent::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            _ => None,
        }
    }
}

/// Restricts drags to a single screen axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseLock {
    #[default]
    NotLocked,
    OnlyX,
    OnlyY,
}

impl MouseLock {
    pub fn next(self) -> Self {
        match self {
            MouseLock::NotLocked => MouseLock::OnlyX,
            MouseLock::OnlyX => MouseLock::OnlyY,
            MouseLock::OnlyY => MouseLock::NotLocked,
        }
    }
}

/// What a cursor move did to the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAction {
    None,
    Orbit,
    Pan,
    Zoom,
}

/// Adapter that turns pointer events into camera operations.
///
/// Left drag rotates, right drag pans and left+right drag zooms. Each move
/// hands the camera the current and previous coordinate of the same axis.
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Same buttons in press order (for pressed_buttons)
    pressed_vec: Vec<Button>,
    /// Cursor position at the previous event
    last_position: (f32, f32),
    lock: MouseLock,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> MouseLock {
        self.lock
    }

    pub fn set_lock(&mut self, lock: MouseLock) {
        self.lock = lock;
    }

    pub fn cycle_lock(&mut self) -> MouseLock {
        self.lock = self.lock.next();
        self.lock
    }

    pub fn last_position(&self) -> (f32, f32) {
        self.last_position
    }

    /// Which camera operation the current button combination maps to
    pub fn drag_action(&self) -> DragAction {
        let left = self.is_down(Button::MouseLeft);
        let middle = self.is_down(Button::MouseMiddle);
        let right = self.is_down(Button::MouseRight);

        match (left, middle, right) {
            (true, false, false) => DragAction::Orbit,
            (false, false, true) => DragAction::Pan,
            (true, false, true) => DragAction::Zoom,
            _ => DragAction::None,
        }
    }

    /// Update button state and drive `camera` from cursor moves
    pub fn process_event(&mut self, event: &InputEvent, camera: &mut dyn Camera) -> DragAction {
        match *event {
            InputEvent::ButtonPressed { button, x, y } => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                }
                self.last_position = (x, y);
                DragAction::None
            }
            InputEvent::ButtonReleased { button, x, y } => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
                self.last_position = (x, y);
                DragAction::None
            }
            InputEvent::CursorMoved { x, y } => self.drag(x, y, camera),
        }
    }

    fn drag(&mut self, x: f32, y: f32, camera: &mut dyn Camera) -> DragAction {
        let (mut last_x, mut last_y) = self.last_position;
        match self.lock {
            MouseLock::OnlyX => last_y = y,
            MouseLock::OnlyY => last_x = x,
            MouseLock::NotLocked => {}
        }

        let action = self.drag_action();
        match action {
            DragAction::Orbit => {
                camera.rotate_x(y, last_y);
                camera.rotate_y(x, last_x);
            }
            DragAction::Pan => {
                camera.translate_x(x, last_x);
                camera.translate_y(y, last_y);
            }
            DragAction::Zoom => camera.zoom(y, last_y),
            DragAction::None => {}
        }

        self.last_position = (x, y);
        action
    }
}

impl Controller for PointerInput {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn pressed_buttons(&self) -> &[Button] {
        &self.pressed_vec
    }
}
