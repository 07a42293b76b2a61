//! Keyboard and mouse input mapping.
//!
//! Key presses become [`Action`]s, which the [`CameraController`] applies to a
//! [`Camera`]. Cursor motion feeds [`Camera::mouse_look`] directly.

use winit::{
    event::{ElementState, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::camera::Camera;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl Action {
    /// `Q` quits, the arrow keys move in the horizontal plane of the view,
    /// `A` and `Z` move straight up and down.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyQ => Some(Self::Quit),
            KeyCode::ArrowUp => Some(Self::Forward),
            KeyCode::ArrowDown => Some(Self::Backward),
            KeyCode::ArrowLeft => Some(Self::Left),
            KeyCode::ArrowRight => Some(Self::Right),
            KeyCode::KeyA => Some(Self::Up),
            KeyCode::KeyZ => Some(Self::Down),
            _ => None,
        }
    }
}

/// What the frame loop has to do after an input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    Ignored,
    CameraMoved,
    Quit,
}

#[derive(Clone, Debug)]
pub struct CameraController {
    speed: f32,
}

impl CameraController {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Move the camera for a movement action. `Quit` is left to the caller.
    pub fn apply(&self, action: Action, camera: &mut Camera) -> InputOutcome {
        match action {
            Action::Quit => return InputOutcome::Quit,
            Action::Forward => camera.move_forward(self.speed),
            Action::Backward => camera.move_backward(self.speed),
            Action::Left => camera.move_left(self.speed),
            Action::Right => camera.move_right(self.speed),
            Action::Up => camera.move_up(self.speed),
            Action::Down => camera.move_down(self.speed),
        }
        InputOutcome::CameraMoved
    }

    /// Handle the window events that concern the camera: key presses
    /// (including key repeats) and cursor motion.
    pub fn handle_window_events(&self, event: &WindowEvent, camera: &mut Camera) -> InputOutcome {
        match event {
            WindowEvent::CloseRequested => InputOutcome::Quit,
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.physical_key {
                    PhysicalKey::Code(key) => match Action::from_key(key) {
                        Some(action) => self.apply(action, camera),
                        None => InputOutcome::Ignored,
                    },
                    PhysicalKey::Unidentified(_) => InputOutcome::Ignored,
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                camera.mouse_look(position.x as f32, position.y as f32);
                InputOutcome::CameraMoved
            }
            _ => InputOutcome::Ignored,
        }
    }
}
