//! The showroom's complete interactive vocabulary.
//!
//! Every user-facing operation is represented as a `ShowroomCommand`, no
//! matter whether a key press, a mouse gesture or a direct call caused it.
//! Consumers construct commands and pass them to
//! [`Showroom::execute`](super::Showroom::execute).

use glam::Vec2;

/// A discrete or parameterized operation the showroom can perform.
///
/// ```ignore
/// showroom.execute(ShowroomCommand::Click { x: 400.0, y: 300.0 });
/// showroom.execute(ShowroomCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ShowroomCommand {
    /// Pick at a pixel and deliver the click to whatever is there.
    Click {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },

    /// Orbit the camera by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the camera by `delta` pixels of mouse movement.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    /// Animate back to the initial camera pose.
    ResetView,

    /// Focus the next clickable model, in scene order.
    CycleFocus,

    /// Forget the current focus target. The camera stays where it is.
    ClearFocus,
}
