//! Host-independent input events fed to the modal tools.

use glam::Vec2;

/// Pointer button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Keyboard key as seen by the modal tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// One input sample. Positions are viewport pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved { pos: Vec2 },
    ButtonPressed { button: PointerButton, pos: Vec2 },
    ButtonReleased { button: PointerButton, pos: Vec2 },
    KeyPressed(Key),
}

impl InputEvent {
    /// Pointer position carried by the event, if any
    pub fn pos(&self) -> Option<Vec2> {
        match self {
            InputEvent::PointerMoved { pos }
            | InputEvent::ButtonPressed { pos, .. }
            | InputEvent::ButtonReleased { pos, .. } => Some(*pos),
            InputEvent::KeyPressed(_) => None,
        }
    }

    /// Secondary button press or Escape
    pub fn is_cancel(&self) -> bool {
        matches!(
            self,
            InputEvent::ButtonPressed {
                button: PointerButton::Secondary,
                ..
            } | InputEvent::KeyPressed(Key::Escape)
        )
    }
}

/// What a modal tool tells its host after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalResult {
    RunningModal,
    Finished,
    Cancelled,
}

impl ModalResult {
    pub fn is_done(&self) -> bool {
        !matches!(self, ModalResult::RunningModal)
    }
}
