//! Camera system for 3D scene viewing.
//!
//! Provides a perspective camera, orbit controls with polar and distance
//! limits, and the viewport that exposes both to the animation system.

/// Orbit controls: rotate, pan, zoom and the `update` step.
pub mod controller;
/// Core camera struct and projection math.
pub mod core;
/// Camera + controls + surface size, animatable by the rig.
pub mod viewport;

pub use self::core::Camera;
pub use controller::OrbitControls;
pub use viewport::Viewport;
