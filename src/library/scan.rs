use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::ScanSettings;
use crate::error::{CatalogError, Result};

use super::model::FileStamp;

fn is_audio_file(path: &Path, settings: &ScanSettings) -> bool {
    let want = settings
        .extension
        .trim()
        .trim_start_matches('.')
        .to_ascii_lowercase();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.to_ascii_lowercase() == want)
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// List the audio files directly inside `dir`, sorted by file name.
///
/// A directory that does not exist has no audio files in it.
pub fn discover(dir: &Path, settings: &ScanSettings) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        debug!(dir = %dir.display(), "section directory missing, nothing to scan");
        return Ok(Vec::new());
    }

    let walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file()
            && (settings.include_hidden || !is_hidden(path))
            && is_audio_file(path, settings)
        {
            debug!(file = %path.display(), "looking at audio file");
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Read creation time, modification time and size with one stat call.
pub fn stamp(path: &Path) -> Result<FileStamp> {
    let meta = fs::metadata(path).map_err(|e| CatalogError::filesystem(path, e))?;
    let modified = meta
        .modified()
        .map_err(|e| CatalogError::filesystem(path, e))?;
    let created = match meta.created() {
        Ok(t) => Some(t),
        Err(e) if e.kind() == ErrorKind::Unsupported => None,
        Err(e) => return Err(CatalogError::filesystem(path, e)),
    };

    Ok(FileStamp {
        created,
        modified,
        size: meta.len(),
    })
}
