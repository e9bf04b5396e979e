//! Builds the showroom scene from options.

use glam::Vec3;

use super::{Bounds, LoadState, NodeKind, Scene, SceneNode};
use crate::error::VantageError;
use crate::options::{ModelOptions, Options};
use crate::picking::ClickBehavior;

/// Name of the group holding all model nodes.
pub const MODELS_GROUP: &str = "models";

/// Build the scene tree: canvas settings, camera, orbit controls, lights,
/// environment, shadow plane, and one node per configured model under
/// [`MODELS_GROUP`]. Models start [`LoadState::Pending`].
///
/// Models with a focus target become clickable; their click stops
/// propagation and publishes that target.
pub fn compose(options: &Options) -> Result<Scene, VantageError> {
    let mut scene = Scene::new();
    let root = scene.root();
    let scene_opts = &options.scene;

    let _ = scene.add(
        root,
        SceneNode::new(
            "canvas",
            NodeKind::Canvas {
                background: scene_opts.background.clone(),
                shadows: scene_opts.shadows,
            },
        ),
    )?;
    let _ = scene.add(
        root,
        SceneNode::new(
            "camera",
            NodeKind::Camera {
                fov: options.camera.fovy,
            },
        )
        .at(Vec3::from_array(options.camera.position)),
    )?;
    let _ = scene.add(
        root,
        SceneNode::new(
            "controls",
            NodeKind::OrbitControls {
                min_polar: options.controls.min_polar_angle,
                max_polar: options.controls.max_polar_angle,
            },
        )
        .at(Vec3::from_array(options.controls.target)),
    )?;
    let _ = scene.add(
        root,
        SceneNode::new(
            "ambient_light",
            NodeKind::AmbientLight {
                intensity: scene_opts.ambient_intensity,
            },
        ),
    )?;
    let _ = scene.add(
        root,
        SceneNode::new(
            "point_light",
            NodeKind::PointLight {
                intensity: scene_opts.point_light_intensity,
            },
        )
        .at(Vec3::from_array(scene_opts.point_light_position)),
    )?;

    let models = scene.add(root, SceneNode::new(MODELS_GROUP, NodeKind::Group))?;
    for model in &scene_opts.models {
        let _ = scene.add(models, model_node(model))?;
    }

    let _ = scene.add(
        root,
        SceneNode::new(
            "environment",
            NodeKind::Environment {
                preset: scene_opts.environment_preset.clone(),
            },
        ),
    )?;
    let shadows = &scene_opts.contact_shadows;
    let _ = scene.add(
        root,
        SceneNode::new(
            "contact_shadows",
            NodeKind::ContactShadows {
                opacity: shadows.opacity,
                scale: shadows.scale,
                blur: shadows.blur,
                far: shadows.far,
            },
        ),
    )?;

    log::debug!(
        "composed scene: {} nodes, {} models",
        scene.len(),
        scene_opts.models.len()
    );
    Ok(scene)
}

fn model_node(model: &ModelOptions) -> SceneNode {
    let node = SceneNode::new(
        model.name.clone(),
        NodeKind::Model {
            asset: model.asset.clone(),
            bounds: Bounds::new(Vec3::from_array(model.bounds_center), model.bounds_radius),
            load: LoadState::Pending,
        },
    )
    .at(Vec3::from_array(model.position))
    .scaled(model.scale);

    match model.focus {
        Some(target) => node.on_click(ClickBehavior::focus_on(target)),
        None => node,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::FocusTarget;

    #[test]
    fn default_scene_layout() {
        let scene = compose(&Options::default()).unwrap();

        let camera = scene.require("camera").unwrap();
        assert_eq!(scene.node(camera).unwrap().position, Vec3::splat(3.0));

        let moto = scene.node(scene.require("motorcycle").unwrap()).unwrap();
        assert_eq!(moto.position, Vec3::new(-0.1023, -1.80999, -0.45));
        assert_eq!(moto.scale, Vec3::splat(1.2));
        let click = moto.click.unwrap();
        assert!(click.stop_propagation);
        assert_eq!(
            click.focus,
            Some(FocusTarget::new(-3.32653, 4.0, 3.3205, 0.1023, -1.80999, -0.45))
        );

        let room = scene.node(scene.require("room").unwrap()).unwrap();
        assert_eq!(room.position, Vec3::ZERO);
        assert!(room.click.is_none());

        let canvas = scene.node(scene.require("canvas").unwrap()).unwrap();
        assert_eq!(
            canvas.kind,
            NodeKind::Canvas {
                background: "#f0f0f0".into(),
                shadows: true,
            }
        );

        for name in ["controls", "ambient_light", "point_light", "environment", "contact_shadows"] {
            assert!(scene.find(name).is_some(), "missing {name}");
        }
        assert!(!scene.is_ready());
    }

    #[test]
    fn models_live_under_models_group() {
        let scene = compose(&Options::default()).unwrap();
        let group = scene.require(MODELS_GROUP).unwrap();
        let children = scene.node(group).unwrap().children();
        assert_eq!(children.len(), 2);
        assert_eq!(scene.node(children[0]).unwrap().name, "room");
        assert_eq!(scene.node(children[1]).unwrap().name, "motorcycle");
    }

    #[test]
    fn duplicate_model_names_fail() {
        let mut options = Options::default();
        let dup = options.scene.models[0].clone();
        options.scene.models.push(dup);
        assert!(compose(&options).is_err());
    }

    #[test]
    fn reserved_names_clash_with_models() {
        let mut options = Options::default();
        options.scene.models[0].name = "camera".into();
        assert!(matches!(
            compose(&options),
            Err(VantageError::DuplicateNode(name)) if name == "camera"
        ));
    }
}
