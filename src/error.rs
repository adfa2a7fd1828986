//! Error types for the catalog pipeline.
//!
//! Every variant is fatal: the runtime logs it once and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// Manifest missing, undecodable, or structurally invalid.
    #[error("manifest {}: {reason}", path.display())]
    Manifest { path: PathBuf, reason: String },

    /// A sidecar exists but could not be read or decoded.
    #[error("metadata {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    /// Flat mode: a track declares a section the manifest does not list.
    #[error("{}: unknown section {key:?}", file.display())]
    UnknownSection { file: PathBuf, key: String },

    #[error("filesystem {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template could not be loaded or failed to execute.
    #[error("render {}: {reason}", template.display())]
    Render { template: PathBuf, reason: String },

    #[error("serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl CatalogError {
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

impl From<walkdir::Error> for CatalogError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
        Self::Filesystem { path, source }
    }
}
