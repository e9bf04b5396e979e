//! Input handling: event types, the click/drag state machine, and the input
//! processor that converts raw window events into showroom commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Click-versus-drag state machine and mouse position tracking.
pub(crate) mod mouse;
/// Converts raw events into showroom commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
