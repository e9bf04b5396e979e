//! Animation system: field tweens and the camera rig that drives them.

pub mod rig;
pub mod tween;

pub use rig::{CameraRig, RigChannel, RigPhase};
pub use tween::{Animatable, TweenId, TweenScheduler, TweenSpec};
