use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::config::{SectionAssociation, Settings};
use crate::error::{CatalogError, Result};

use super::build::build_track;
use super::model::{Catalog, Section, SectionDescriptor, Track};
use super::scan::{discover, stamp};
use super::sidecar::resolve_sidecar;

/// Scan every section under `root` and return the finished catalog.
pub fn aggregate(root: &Path, descriptors: &[SectionDescriptor], settings: &Settings) -> Result<Catalog> {
    let mut sections: Vec<Section> = descriptors.iter().map(empty_section).collect();

    match settings.catalog.association {
        SectionAssociation::Directory => {
            for (descriptor, section) in descriptors.iter().zip(sections.iter_mut()) {
                let dir = root.join(descriptor.directory.as_deref().unwrap_or_default());
                for audio in discover(&dir, &settings.scan)? {
                    let sidecar = resolve_sidecar(&audio)?;
                    let stamp = stamp(&audio)?;
                    section
                        .tracks
                        .push(build_track(&audio, sidecar, descriptor, &stamp, &settings.catalog));
                }
            }
        }
        SectionAssociation::Key => {
            let index: HashMap<&str, usize> = descriptors
                .iter()
                .enumerate()
                .map(|(i, d)| (d.key.as_str(), i))
                .collect();

            for audio in discover(root, &settings.scan)? {
                let sidecar = resolve_sidecar(&audio)?;
                let key = sidecar.section_key.clone().unwrap_or_default();
                let Some(&i) = index.get(key.as_str()) else {
                    return Err(CatalogError::UnknownSection { file: audio, key });
                };
                let stamp = stamp(&audio)?;
                sections[i]
                    .tracks
                    .push(build_track(&audio, sidecar, &descriptors[i], &stamp, &settings.catalog));
            }
        }
    }

    for section in &mut sections {
        sort_newest_first(&mut section.tracks);
        debug!(section = %section.title, tracks = section.tracks.len(), "section ready");
    }

    let catalog = Catalog::new(sections);
    info!(
        sections = catalog.sections.len(),
        tracks = catalog.totals.track_count,
        "aggregated catalog"
    );
    Ok(catalog)
}

fn empty_section(descriptor: &SectionDescriptor) -> Section {
    Section {
        title: descriptor.title.clone(),
        description: descriptor.description.clone(),
        directory: descriptor.directory.clone(),
        tracks: Vec::new(),
    }
}

/// Stable: equal timestamps keep discovery order.
pub fn sort_newest_first(tracks: &mut [Track]) {
    tracks.sort_by(|a, b| b.ordered_at.cmp(&a.ordered_at));
}
