use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tracklist/config.toml` or `~/.config/tracklist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub scan: ScanSettings,
}

/// Pipeline policy: how tracks find their section, which timestamp orders
/// them, and what gets written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub association: SectionAssociation,
    pub timestamp: TimestampSource,
    pub output: OutputTarget,
    /// Template used for HTML output. Relative paths resolve against the scan root.
    pub template: PathBuf,
    /// Manifest file name inside the scan root.
    pub manifest: String,
    pub json_file: String,
    pub html_file: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            association: SectionAssociation::Directory,
            timestamp: TimestampSource::Modified,
            output: OutputTarget::Json,
            template: PathBuf::from("index.html.j2"),
            manifest: "sections.toml".to_string(),
            json_file: "tracks.json".to_string(),
            html_file: "index.html".to_string(),
        }
    }
}

impl CatalogSettings {
    /// File name the emitter writes for the configured output target.
    pub fn output_file(&self) -> &str {
        match self.output {
            OutputTarget::Json => &self.json_file,
            OutputTarget::Html => &self.html_file,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionAssociation {
    /// Each section owns the audio files inside its `dir`.
    #[serde(alias = "dir")]
    Directory,
    /// Flat mode: every track names its section in its sidecar.
    #[serde(alias = "flat", alias = "keyed")]
    Key,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimestampSource {
    #[serde(alias = "creation", alias = "birth")]
    Created,
    #[serde(alias = "modification", alias = "mtime")]
    Modified,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputTarget {
    Json,
    #[serde(alias = "page")]
    Html,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Audio file extension (case-insensitive, without dot).
    pub extension: String,
    /// Whether to follow symlinks when listing section directories.
    pub follow_links: bool,
    /// Whether to include hidden files (dotfiles).
    pub include_hidden: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            extension: "mp3".to_string(),
            follow_links: true,
            include_hidden: true,
        }
    }
}
