//! Crate-level error types.

use std::fmt;
use std::path::PathBuf;

/// Errors produced by the vantage crate.
#[derive(Debug)]
pub enum VantageError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// An asset loader could not produce a model.
    AssetLoad {
        /// Asset path as declared on the scene node.
        path: PathBuf,
        /// Loader-provided reason.
        reason: String,
    },
    /// No scene node carries the requested name.
    UnknownNode(String),
    /// A scene node with this name already exists.
    DuplicateNode(String),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::AssetLoad { path, reason } => {
                write!(f, "failed to load asset {}: {reason}", path.display())
            }
            Self::UnknownNode(name) => write!(f, "unknown scene node: {name}"),
            Self::DuplicateNode(name) => {
                write!(f, "duplicate scene node name: {name}")
            }
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
