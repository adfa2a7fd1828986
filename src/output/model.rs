use crate::config::OutputTarget;
use crate::library::{Section, Track};

/// What the emitter receives.
#[derive(Debug, Clone)]
pub enum OutputModel {
    /// JSON: every track, section after section.
    Tracks(Vec<Track>),
    /// HTML: the section structure, empty sections included.
    Sections(Vec<Section>),
}

pub fn assemble(sections: Vec<Section>, target: OutputTarget) -> OutputModel {
    match target {
        OutputTarget::Json => OutputModel::Tracks(
            sections
                .into_iter()
                .flat_map(|s| s.tracks)
                .map(|track| Track { link: None, ..track })
                .collect(),
        ),
        OutputTarget::Html => OutputModel::Sections(sections),
    }
}
