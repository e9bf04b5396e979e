//! Asset loading seam.
//!
//! Decoding model files is someone else's job. The scene only records, per
//! model node, whether its asset is still pending, loaded, or failed, and
//! models that are not loaded take no part in picking.

use std::path::Path;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VantageError;

/// Bounding sphere in a model's local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Bounds {
    /// Sphere center, local space.
    #[schemars(with = "[f32; 3]")]
    pub center: Vec3,
    /// Sphere radius, local units.
    pub radius: f32,
}

impl Bounds {
    /// Sphere at `center` with `radius`.
    #[must_use]
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// What a loader hands back for a model file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedAsset {
    /// Measured bounds, when the loader computes them. Replaces the bounds
    /// declared on the node.
    pub bounds: Option<Bounds>,
}

/// Load state of a model node's asset.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// Not yet resolved; the node is suspended.
    #[default]
    Pending,
    /// Loaded and pickable.
    Ready,
    /// The loader failed; the node stays out of picking.
    Failed(String),
}

impl LoadState {
    /// Whether the asset is usable.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Produces loaded models from asset paths.
pub trait AssetLoader {
    /// Load the asset at `path`.
    fn load(&self, path: &Path) -> Result<LoadedAsset, VantageError>;
}

/// Loader that accepts every path without reading anything, keeping the
/// bounds declared on the scene nodes. Used when geometry lives elsewhere
/// (for example in a browser-side renderer).
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredBoundsLoader;

impl AssetLoader for DeclaredBoundsLoader {
    fn load(&self, _path: &Path) -> Result<LoadedAsset, VantageError> {
        Ok(LoadedAsset { bounds: None })
    }
}

/// Loader that checks the asset exists under a root directory. Leading
/// slashes in asset paths are treated as relative to `root`, the way a
/// web server resolves `/motorcycle.glb`.
#[derive(Debug, Clone)]
pub struct FileCheckLoader {
    root: std::path::PathBuf,
}

impl FileCheckLoader {
    /// Loader rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetLoader for FileCheckLoader {
    fn load(&self, path: &Path) -> Result<LoadedAsset, VantageError> {
        let relative = path.strip_prefix("/").unwrap_or(path);
        let full = self.root.join(relative);
        match std::fs::metadata(&full) {
            Ok(meta) if meta.is_file() => Ok(LoadedAsset { bounds: None }),
            Ok(_) => Err(VantageError::AssetLoad {
                path: path.to_path_buf(),
                reason: format!("{} is not a file", full.display()),
            }),
            Err(e) => Err(VantageError::AssetLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }
}
