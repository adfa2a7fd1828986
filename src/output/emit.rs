use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use minijinja::{AutoEscape, Environment, context};
use serde::Serialize;
use tracing::debug;

use crate::config::CatalogSettings;
use crate::error::{CatalogError, Result};
use crate::library::{Section, Track};

use super::model::OutputModel;

/// Write `model` to its fixed file under `root`, replacing any previous output.
///
/// The document is produced in memory first, so a serialization or render
/// failure never touches the existing file.
pub fn emit(model: &OutputModel, root: &Path, settings: &CatalogSettings) -> Result<PathBuf> {
    let bytes = match model {
        OutputModel::Tracks(tracks) => {
            let entries: Vec<JsonTrack<'_>> = tracks.iter().map(JsonTrack::from).collect();
            let mut buf = serde_json::to_vec_pretty(&entries)?;
            buf.push(b'\n');
            buf
        }
        OutputModel::Sections(sections) => {
            let template = root.join(&settings.template);
            render_page(&template, sections)?.into_bytes()
        }
    };

    let out = root.join(settings.output_file());
    write_output(&out, &bytes)?;
    Ok(out)
}

/// The fields a `tracks.json` entry carries, in document order.
#[derive(Serialize)]
struct JsonTrack<'a> {
    file: &'a str,
    title: &'a str,
    description: &'a str,
    created_at: &'a str,
    tags: &'a [String],
}

impl<'a> From<&'a Track> for JsonTrack<'a> {
    fn from(track: &'a Track) -> Self {
        Self {
            file: &track.file,
            title: &track.title,
            description: &track.description,
            created_at: &track.created_at,
            tags: &track.tags,
        }
    }
}

fn render_page(template: &Path, sections: &[Section]) -> Result<String> {
    let render_err = |reason: String| CatalogError::Render {
        template: template.to_path_buf(),
        reason,
    };

    let source = fs::read_to_string(template).map_err(|e| render_err(e.to_string()))?;
    debug!(template = %template.display(), "rendering page");

    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.render_str(&source, context! { sections => sections })
        .map_err(|e| render_err(e.to_string()))
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = File::create(path).map_err(|e| CatalogError::filesystem(path, e))?;
    let mut out = BufWriter::new(file);
    out.write_all(bytes)
        .and_then(|()| out.flush())
        .map_err(|e| CatalogError::filesystem(path, e))
}
