//! Converts raw platform events into showroom commands.
//!
//! The `InputProcessor` owns all transient input state (mouse tracking,
//! drag detection, modifier keys) and the key-binding map. It is the only
//! thing that sits between raw window events and the showroom's
//! [`execute`](crate::Showroom::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use super::mouse::{ClickResult, InputState};
use crate::options::KeybindingOptions;
use crate::showroom::ShowroomCommand;

impl KeyAction {
    /// The command this action triggers.
    #[must_use]
    pub fn to_command(self) -> ShowroomCommand {
        match self {
            Self::ResetView => ShowroomCommand::ResetView,
            Self::CycleFocus => ShowroomCommand::CycleFocus,
            Self::ClearFocus => ShowroomCommand::ClearFocus,
        }
    }
}

/// Converts raw window events into [`ShowroomCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     showroom.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyR") {
///     showroom.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Mouse tracking and click/drag state machine.
    state: InputState,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            state: InputState::new(),
            shift_pressed: false,
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        self.state.mouse_pos
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.state.is_pressed()
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Replace the key bindings.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ShowroomCommand> {
        self.key_bindings.lookup(key).map(KeyAction::to_command)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ShowroomCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => Some(ShowroomCommand::Zoom { delta }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }

    /// Cursor moved: compute delta, possibly produce a camera command.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ShowroomCommand> {
        let (delta_x, delta_y) = self.state.handle_mouse_position(x, y);

        if !self.state.is_pressed() {
            return None;
        }
        let delta = Vec2::new(delta_x, delta_y);
        if self.shift_pressed {
            Some(ShowroomCommand::PanCamera { delta })
        } else {
            Some(ShowroomCommand::RotateCamera { delta })
        }
    }

    /// Mouse button press/release. A release without drag is a click.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<ShowroomCommand> {
        if button != MouseButton::Left {
            return None;
        }

        if pressed {
            self.state.handle_mouse_down();
            return None;
        }

        match self.state.process_mouse_up() {
            ClickResult::NoAction => None,
            ClickResult::Click { x, y } => Some(ShowroomCommand::Click { x, y }),
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
