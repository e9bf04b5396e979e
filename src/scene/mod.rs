//! Scene description: a tree of typed node descriptors.
//!
//! The scene is built once (see [`composer`]) and afterwards mutated through
//! direct field writes. It carries no rendering state; renderers and asset
//! decoders read it from outside.

pub mod assets;
pub mod composer;

use std::path::PathBuf;

use glam::Vec3;
use rustc_hash::FxHashMap;

pub use assets::{AssetLoader, Bounds, LoadState, LoadedAsset};
pub use composer::compose;

use crate::error::VantageError;
use crate::picking::{dispatch_click, ClickBehavior, ClickOutcome, Hit, Ray};

/// Index of a node within its [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// What a node is.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Grouping node with no content of its own.
    Group,
    /// Render surface settings.
    Canvas {
        /// Clear color, CSS hex.
        background: String,
        /// Whether shadows are enabled.
        shadows: bool,
    },
    /// Perspective camera placement.
    Camera {
        /// Vertical field of view, degrees.
        fov: f32,
    },
    /// Orbit controller limits.
    OrbitControls {
        /// Smallest polar angle, radians.
        min_polar: f32,
        /// Largest polar angle, radians.
        max_polar: f32,
    },
    /// Uniform ambient light.
    AmbientLight {
        /// Light intensity.
        intensity: f32,
    },
    /// Omnidirectional light at the node position.
    PointLight {
        /// Light intensity.
        intensity: f32,
    },
    /// Image-based environment lighting preset.
    Environment {
        /// Preset name.
        preset: String,
    },
    /// Soft ground shadow plane.
    ContactShadows {
        /// Shadow opacity.
        opacity: f32,
        /// Plane extent.
        scale: f32,
        /// Blur amount.
        blur: f32,
        /// Maximum caster height.
        far: f32,
    },
    /// Model loaded from an external asset.
    Model {
        /// Asset path.
        asset: PathBuf,
        /// Local-space bounding sphere used for picking.
        bounds: Bounds,
        /// Asset load state.
        load: LoadState,
    },
}

/// One node of the scene tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Unique name.
    pub name: String,
    /// Node type and type-specific data.
    pub kind: NodeKind,
    /// Translation relative to the parent.
    pub position: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
    /// Click response, if the node is clickable.
    pub click: Option<ClickBehavior>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    /// Node named `name` at the origin with unit scale.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            click: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Set the position.
    #[must_use]
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set a uniform scale.
    #[must_use]
    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Make the node clickable.
    #[must_use]
    pub fn on_click(mut self, behavior: ClickBehavior) -> Self {
        self.click = Some(behavior);
        self
    }

    /// Parent node, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// The scene tree.
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    by_name: FxHashMap<String, NodeId>,
}

impl Scene {
    /// Name of the root group.
    pub const ROOT_NAME: &'static str = "root";

    /// Scene containing only the root group.
    #[must_use]
    pub fn new() -> Self {
        let mut by_name = FxHashMap::default();
        let _ = by_name.insert(Self::ROOT_NAME.to_owned(), NodeId(0));
        Self {
            nodes: vec![SceneNode::new(Self::ROOT_NAME, NodeKind::Group)],
            by_name,
        }
    }

    /// The root group.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Attach `node` under `parent`. Fails if `parent` does not exist or the
    /// name is already taken.
    pub fn add(&mut self, parent: NodeId, mut node: SceneNode) -> Result<NodeId, VantageError> {
        if self.node(parent).is_none() {
            return Err(VantageError::UnknownNode(format!("#{}", parent.0)));
        }
        if self.by_name.contains_key(&node.name) {
            return Err(VantageError::DuplicateNode(node.name));
        }
        let id = NodeId(self.nodes.len() as u32);
        node.parent = Some(parent);
        node.children.clear();
        let _ = self.by_name.insert(node.name.clone(), id);
        self.nodes.push(node);
        self.nodes[parent.0 as usize].children.push(id);
        Ok(id)
    }

    /// Node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0 as usize)
    }

    /// Mutable node by id.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Node id by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Node id by name, as an error when absent.
    pub fn require(&self, name: &str) -> Result<NodeId, VantageError> {
        self.find(name)
            .ok_or_else(|| VantageError::UnknownNode(name.to_owned()))
    }

    /// All nodes with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    /// Number of nodes including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Replace the click behavior of the node named `name`.
    pub fn set_click(
        &mut self,
        name: &str,
        behavior: Option<ClickBehavior>,
    ) -> Result<(), VantageError> {
        let id = self.require(name)?;
        if let Some(node) = self.node_mut(id) {
            node.click = behavior;
        }
        Ok(())
    }

    /// Position in world space. Groups translate their children; scale does
    /// not propagate.
    #[must_use]
    pub fn world_position(&self, id: NodeId) -> Vec3 {
        let mut position = Vec3::ZERO;
        let mut current = Some(id);
        while let Some(node) = current.and_then(|id| self.node(id)) {
            position += node.position;
            current = node.parent;
        }
        position
    }

    /// World-space bounding sphere of a model node.
    #[must_use]
    pub fn world_bounds(&self, id: NodeId) -> Option<(Vec3, f32)> {
        let node = self.node(id)?;
        let NodeKind::Model { bounds, .. } = &node.kind else {
            return None;
        };
        let center = self.world_position(id) + bounds.center * node.scale;
        Some((center, bounds.radius * node.scale.abs().max_element()))
    }

    /// Intersect `ray` with every loaded model. Hits are sorted nearest
    /// first.
    #[must_use]
    pub fn raycast(&self, ray: &Ray) -> Vec<Hit> {
        let mut hits: Vec<Hit> = self
            .iter()
            .filter(|(_, node)| {
                matches!(&node.kind, NodeKind::Model { load, .. } if load.is_ready())
            })
            .filter_map(|(id, _)| {
                let (center, radius) = self.world_bounds(id)?;
                let distance = ray.intersect_sphere(center, radius)?;
                Some(Hit {
                    node: id,
                    distance,
                    point: ray.at(distance),
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    /// Deliver a click to `hits` using each node's click behavior.
    #[must_use]
    pub fn dispatch_click(&self, hits: &[Hit]) -> ClickOutcome {
        dispatch_click(hits, |id| self.node(id).and_then(|node| node.click.as_ref()))
    }

    /// Resolve every pending model through `loader`. Failures are logged and
    /// recorded on the node; they never abort resolution of other models.
    /// Returns the number of models that failed.
    pub fn resolve_assets(&mut self, loader: &dyn AssetLoader) -> usize {
        let mut failures = 0;
        for node in &mut self.nodes {
            let NodeKind::Model { asset, bounds, load } = &mut node.kind else {
                continue;
            };
            if *load != LoadState::Pending {
                continue;
            }
            match loader.load(asset.as_path()) {
                Ok(loaded) => {
                    if let Some(measured) = loaded.bounds {
                        *bounds = measured;
                    }
                    *load = LoadState::Ready;
                    log::info!("loaded {} ({})", node.name, asset.display());
                }
                Err(e) => {
                    log::warn!("{}: {e}", node.name);
                    *load = LoadState::Failed(e.to_string());
                    failures += 1;
                }
            }
        }
        failures
    }

    /// Whether every model has finished loading successfully.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.nodes.iter().all(|node| match &node.kind {
            NodeKind::Model { load, .. } => load.is_ready(),
            _ => true,
        })
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
