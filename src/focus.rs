//! Focus targets: where the camera should stand and what it should look at.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A camera destination ("tripod") and a look-at destination ("focus").
///
/// Values are plain data. Each click produces a new value, and handing the
/// rig a value equal to the previous one still restarts the move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FocusTarget {
    /// Where the camera eye ends up.
    #[schemars(with = "[f32; 3]")]
    pub camera: Vec3,
    /// Where the orbit controls' target ends up.
    #[schemars(with = "[f32; 3]")]
    pub look_at: Vec3,
}

impl FocusTarget {
    /// Target from the six scalar components.
    #[must_use]
    pub const fn new(
        x: f32,
        y: f32,
        z: f32,
        look_x: f32,
        look_y: f32,
        look_z: f32,
    ) -> Self {
        Self {
            camera: Vec3::new(x, y, z),
            look_at: Vec3::new(look_x, look_y, look_z),
        }
    }

    /// Target from camera and look-at points.
    #[must_use]
    pub const fn from_points(camera: Vec3, look_at: Vec3) -> Self {
        Self { camera, look_at }
    }

    /// Whether every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.camera.is_finite() && self.look_at.is_finite()
    }
}
