use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit Controls", inline)]
#[serde(default)]
/// Orbit controller limits and gesture sensitivity.
pub struct ControlsOptions {
    /// Initial orbit target.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Smallest angle from straight up, radians.
    #[schemars(skip)]
    pub min_polar_angle: f32,
    /// Largest angle from straight up, radians. Keeps the camera above the
    /// floor.
    #[schemars(title = "Max Polar Angle", range(min = 0.1, max = 3.14), extend("step" = 0.01))]
    pub max_polar_angle: f32,
    /// Closest eye-to-target distance.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest eye-to-target distance.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Radians per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Pan distance per pixel, as a fraction of orbit distance.
    #[schemars(title = "Pan Speed", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub pan_speed: f32,
    /// Fractional distance change per scroll unit.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
}

impl Default for ControlsOptions {
    fn default() -> Self {
        Self {
            target: [0.0, 0.0, 0.0],
            min_polar_angle: 0.0,
            max_polar_angle: PI / 1.75,
            min_distance: 0.0,
            max_distance: 100.0,
            rotate_speed: 0.005,
            pan_speed: 0.002,
            zoom_speed: 0.1,
        }
    }
}
