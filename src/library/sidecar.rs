use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{CatalogError, Result};

use super::model::SidecarMetadata;

pub const SIDECAR_EXTENSION: &str = "toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SidecarFile {
    title: String,
    #[serde(alias = "desc")]
    description: String,
    #[serde(alias = "section")]
    section_key: Option<String>,
}

/// The sidecar sits next to the audio file and shares its stem.
pub fn sidecar_path(audio: &Path) -> PathBuf {
    audio.with_extension(SIDECAR_EXTENSION)
}

/// Read the sidecar for `audio`. A missing sidecar yields empty metadata.
pub fn resolve_sidecar(audio: &Path) -> Result<SidecarMetadata> {
    let path = sidecar_path(audio);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SidecarMetadata::default()),
        Err(e) => {
            return Err(CatalogError::Metadata {
                path,
                source: e.into(),
            });
        }
    };

    debug!(sidecar = %path.display(), "found metadata");
    let file: SidecarFile = toml::from_str(&text).map_err(|e| CatalogError::Metadata {
        path: path.clone(),
        source: e.into(),
    })?;

    Ok(SidecarMetadata {
        title: file.title,
        description: file.description,
        section_key: file
            .section_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty()),
    })
}
