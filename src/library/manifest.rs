use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::config::SectionAssociation;
use crate::error::{CatalogError, Result};

use super::model::SectionDescriptor;

#[derive(Debug, Default, Deserialize)]
struct ManifestFile {
    #[serde(default, rename = "section")]
    sections: Vec<SectionEntry>,
}

#[derive(Debug, Deserialize)]
struct SectionEntry {
    #[serde(default)]
    dir: String,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default, alias = "description")]
    desc: String,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

/// Load the section manifest at `path`, in on-disk order.
pub fn load_manifest(path: &Path, association: SectionAssociation) -> Result<Vec<SectionDescriptor>> {
    let invalid = |reason: String| CatalogError::Manifest {
        path: path.to_path_buf(),
        reason,
    };

    let text = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    parse_manifest(&text, association).map_err(invalid)
}

fn parse_manifest(
    text: &str,
    association: SectionAssociation,
) -> std::result::Result<Vec<SectionDescriptor>, String> {
    let file: ManifestFile = toml::from_str(text).map_err(|e| e.to_string())?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut descriptors = Vec::with_capacity(file.sections.len());

    for (i, entry) in file.sections.into_iter().enumerate() {
        if entry.title.is_empty() {
            return Err(format!("section #{} has no title", i + 1));
        }

        let (key, directory) = match association {
            SectionAssociation::Directory => (entry.dir.clone(), Some(entry.dir)),
            SectionAssociation::Key => {
                let key = entry
                    .key
                    .map(|k| k.trim().to_string())
                    .filter(|k| !k.is_empty())
                    .ok_or_else(|| format!("section {:?} has no key", entry.title))?;
                (key, None)
            }
        };

        if !seen.insert(key.clone()) {
            return Err(format!("duplicate section key {key:?}"));
        }

        debug!(key = %key, title = %entry.title, "loaded section");
        descriptors.push(SectionDescriptor {
            key,
            directory,
            title: entry.title,
            description: entry.desc,
            tags: entry.tags.filter(|t| !t.is_empty()),
        });
    }

    Ok(descriptors)
}
