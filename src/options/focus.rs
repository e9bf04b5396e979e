use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Focus Animation", inline)]
#[serde(default)]
/// Timing of click-to-focus camera moves.
pub struct FocusOptions {
    /// Length of a focus move in seconds.
    #[schemars(title = "Duration", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub duration_secs: f32,
    /// Progress curve, by name (e.g. `"power3.inOut"`).
    #[schemars(title = "Easing", with = "String")]
    pub easing: EasingFunction,
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self {
            duration_secs: 1.5,
            easing: EasingFunction::CubicInOut,
        }
    }
}
