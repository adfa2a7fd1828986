use std::time::SystemTime;

use serde::Serialize;

/// One manifest entry, resolved for the configured association mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDescriptor {
    /// Identifier tracks are associated by: the directory name, or the
    /// explicit short name in flat mode.
    pub key: String,
    /// Directory relative to the scan root. `None` in flat mode.
    pub directory: Option<String>,
    pub title: String,
    pub description: String,
    /// Manifest override for the tags given to every track in the section.
    pub tags: Option<Vec<String>>,
}

/// Per-file metadata override read from the sidecar next to an audio file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidecarMetadata {
    pub title: String,
    pub description: String,
    pub section_key: Option<String>,
}

/// Filesystem facts about one audio file.
#[derive(Debug, Clone, Copy)]
pub struct FileStamp {
    /// `None` where the platform does not record creation time.
    pub created: Option<SystemTime>,
    pub modified: SystemTime,
    pub size: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Track {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub tags: Vec<String>,
    #[serde(skip)]
    pub ordered_at: SystemTime,
    #[serde(skip)]
    pub size: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: String,
    pub description: String,
    pub directory: Option<String>,
    pub tracks: Vec<Track>,
}

/// Run totals, for logging only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub track_count: usize,
    pub total_bytes: u64,
}

impl Totals {
    pub fn of(sections: &[Section]) -> Self {
        sections
            .iter()
            .flat_map(|s| s.tracks.iter())
            .fold(Self::default(), |acc, t| Self {
                track_count: acc.track_count + 1,
                total_bytes: acc.total_bytes + t.size,
            })
    }

    pub fn megabytes(&self) -> u64 {
        self.total_bytes / 1024 / 1024
    }
}

/// Finished sections in manifest order, plus their totals.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub sections: Vec<Section>,
    pub totals: Totals,
}

impl Catalog {
    pub fn new(sections: Vec<Section>) -> Self {
        let totals = Totals::of(&sections);
        Self { sections, totals }
    }
}
