use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::focus::FocusTarget;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Lights, environment, shadow plane and models of the showroom.
pub struct SceneOptions {
    /// Canvas clear color as a CSS hex string.
    #[schemars(skip)]
    pub background: String,
    /// Whether the renderer casts shadows.
    #[schemars(title = "Shadows")]
    pub shadows: bool,
    /// Ambient light intensity.
    #[schemars(title = "Ambient", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub ambient_intensity: f32,
    /// Point light position.
    #[schemars(skip)]
    pub point_light_position: [f32; 3],
    /// Point light intensity.
    #[schemars(title = "Point Light", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub point_light_intensity: f32,
    /// Environment lighting preset name.
    #[schemars(skip)]
    pub environment_preset: String,
    /// Ground shadow plane.
    pub contact_shadows: ContactShadowOptions,
    /// Models, in scene order.
    #[schemars(skip)]
    pub models: Vec<ModelOptions>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Contact Shadows", inline)]
#[serde(default)]
/// Soft ground shadow parameters.
pub struct ContactShadowOptions {
    /// Shadow opacity.
    #[schemars(title = "Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub opacity: f32,
    /// Plane extent.
    #[schemars(skip)]
    pub scale: f32,
    /// Blur amount.
    #[schemars(title = "Blur", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub blur: f32,
    /// Maximum caster height.
    #[schemars(skip)]
    pub far: f32,
}

impl Default for ContactShadowOptions {
    fn default() -> Self {
        Self {
            opacity: 0.4,
            scale: 10.0,
            blur: 2.0,
            far: 4.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One model instance.
pub struct ModelOptions {
    /// Unique node name.
    pub name: String,
    /// Asset path handed to the loader.
    pub asset: PathBuf,
    /// Placement.
    #[serde(default)]
    pub position: [f32; 3],
    /// Uniform scale.
    #[serde(default = "unit_scale")]
    pub scale: f32,
    /// Local-space pick sphere center.
    #[serde(default)]
    pub bounds_center: [f32; 3],
    /// Local-space pick sphere radius.
    #[serde(default = "unit_scale")]
    pub bounds_radius: f32,
    /// Where clicking this model sends the camera. Models without one
    /// ignore clicks.
    #[serde(default)]
    pub focus: Option<FocusTarget>,
}

fn unit_scale() -> f32 {
    1.0
}

impl ModelOptions {
    /// The room shell.
    #[must_use]
    pub fn room() -> Self {
        Self {
            name: "room".into(),
            asset: PathBuf::from("/sixthfloor.glb"),
            position: [0.0, 0.0, 0.0],
            scale: 1.0,
            bounds_center: [0.0, 0.0, 0.0],
            bounds_radius: 6.0,
            focus: None,
        }
    }

    /// The clickable motorcycle and its tripod/look-at pair.
    #[must_use]
    pub fn motorcycle() -> Self {
        Self {
            name: "motorcycle".into(),
            asset: PathBuf::from("/motorcycle.glb"),
            position: [-0.1023, -1.80999, -0.45],
            scale: 1.2,
            bounds_center: [0.0, 0.45, 0.0],
            bounds_radius: 0.8,
            focus: Some(FocusTarget::new(
                -3.32653, 4.0, 3.3205, 0.1023, -1.80999, -0.45,
            )),
        }
    }
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            background: "#f0f0f0".into(),
            shadows: true,
            ambient_intensity: 0.7,
            point_light_position: [10.0, 10.0, 10.0],
            point_light_intensity: 1.0,
            environment_preset: "city".into(),
            contact_shadows: ContactShadowOptions::default(),
            models: vec![ModelOptions::room(), ModelOptions::motorcycle()],
        }
    }
}
