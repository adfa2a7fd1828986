use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use tracing::debug;

use crate::config::{CatalogSettings, OutputTarget, TimestampSource};

use super::model::{FileStamp, SectionDescriptor, SidecarMetadata, Track};

/// Merge one audio file with its sidecar, stamp and owning section.
pub fn build_track(
    audio: &Path,
    sidecar: SidecarMetadata,
    section: &SectionDescriptor,
    stamp: &FileStamp,
    settings: &CatalogSettings,
) -> Track {
    let file = audio
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let title = if sidecar.title.is_empty() {
        file_stem_title(audio)
    } else {
        sidecar.title
    };

    let ordered_at = ordering_timestamp(stamp, settings.timestamp);
    let created_at = display_timestamp(&DateTime::<Local>::from(ordered_at), settings.output);

    let link = match settings.output {
        OutputTarget::Html => Some(link_for(section.directory.as_deref(), &file)),
        OutputTarget::Json => None,
    };

    debug!("Adding {} to {}", title, section.title);

    Track {
        file,
        link,
        title,
        description: sidecar.description,
        created_at,
        tags: section_tags(section),
        ordered_at,
        size: stamp.size,
    }
}

fn file_stem_title(audio: &Path) -> String {
    audio
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "UNKNOWN".to_string())
}

/// Manifest tags when the section sets them, otherwise the section key alone.
pub fn section_tags(section: &SectionDescriptor) -> Vec<String> {
    match &section.tags {
        Some(tags) => tags.clone(),
        None if section.key.is_empty() => Vec::new(),
        None => vec![section.key.clone()],
    }
}

fn ordering_timestamp(stamp: &FileStamp, source: TimestampSource) -> SystemTime {
    match source {
        TimestampSource::Modified => stamp.modified,
        TimestampSource::Created => stamp.created.unwrap_or_else(|| {
            debug!("creation time unavailable, using modification time");
            stamp.modified
        }),
    }
}

/// RFC 3339 for machine output, `Month Day, Year` for pages.
pub fn display_timestamp<Tz: TimeZone>(at: &DateTime<Tz>, target: OutputTarget) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match target {
        OutputTarget::Json => at.to_rfc3339_opts(SecondsFormat::Secs, false),
        OutputTarget::Html => at.format("%B %-d, %Y").to_string(),
    }
}

fn link_for(directory: Option<&str>, file: &str) -> String {
    match directory.map(|d| d.trim_matches('/')).filter(|d| !d.is_empty()) {
        Some(dir) => format!("{dir}/{file}"),
        None => file.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::time::Duration;

    fn section(key: &str, tags: Option<Vec<&str>>) -> SectionDescriptor {
        SectionDescriptor {
            key: key.to_string(),
            directory: Some(key.to_string()),
            title: key.to_uppercase(),
            description: String::new(),
            tags: tags.map(|t| t.into_iter().map(String::from).collect()),
        }
    }

    fn stamp_at(created: Option<u64>, modified: u64) -> FileStamp {
        FileStamp {
            created: created.map(|s| SystemTime::UNIX_EPOCH + Duration::from_secs(s)),
            modified: SystemTime::UNIX_EPOCH + Duration::from_secs(modified),
            size: 42,
        }
    }

    #[test]
    fn title_falls_back_to_file_stem() {
        let track = build_track(
            Path::new("/m/ambient/a.mp3"),
            SidecarMetadata::default(),
            &section("ambient", None),
            &stamp_at(None, 10),
            &CatalogSettings::default(),
        );
        assert_eq!(track.file, "a.mp3");
        assert_eq!(track.title, "a");
        assert_eq!(track.size, 42);
        assert_eq!(track.link, None);
    }

    #[test]
    fn sidecar_title_wins_exactly() {
        let sidecar = SidecarMetadata {
            title: "Night ".to_string(),
            description: "late".to_string(),
            section_key: None,
        };
        let track = build_track(
            Path::new("/m/ambient/b.mp3"),
            sidecar,
            &section("ambient", None),
            &stamp_at(None, 10),
            &CatalogSettings::default(),
        );
        assert_eq!(track.title, "Night ");
        assert_eq!(track.description, "late");
    }

    #[test]
    fn whitespace_sidecar_title_is_not_replaced() {
        let sidecar = SidecarMetadata {
            title: "   ".to_string(),
            ..SidecarMetadata::default()
        };
        let track = build_track(
            Path::new("/m/ambient/a.mp3"),
            sidecar,
            &section("ambient", None),
            &stamp_at(None, 10),
            &CatalogSettings::default(),
        );
        assert_eq!(track.title, "   ");
    }

    #[test]
    fn tags_default_to_key_unless_overridden() {
        assert_eq!(section_tags(&section("ambient", None)), vec!["ambient"]);
        assert_eq!(
            section_tags(&section("drone", Some(vec!["noise", "dark"]))),
            vec!["noise", "dark"]
        );
        assert!(section_tags(&section("", None)).is_empty());
    }

    #[test]
    fn timestamp_source_selects_created_or_modified() {
        let stamp = stamp_at(Some(5), 10);
        assert_eq!(
            ordering_timestamp(&stamp, TimestampSource::Created),
            SystemTime::UNIX_EPOCH + Duration::from_secs(5)
        );
        assert_eq!(
            ordering_timestamp(&stamp, TimestampSource::Modified),
            SystemTime::UNIX_EPOCH + Duration::from_secs(10)
        );
        assert_eq!(
            ordering_timestamp(&stamp_at(None, 10), TimestampSource::Created),
            SystemTime::UNIX_EPOCH + Duration::from_secs(10)
        );
    }

    #[test]
    fn display_timestamp_formats_per_target() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        assert_eq!(
            display_timestamp(&at, OutputTarget::Json),
            "2024-03-05T10:00:00+00:00"
        );
        assert_eq!(display_timestamp(&at, OutputTarget::Html), "March 5, 2024");
    }

    #[test]
    fn html_tracks_carry_a_link_relative_to_the_root() {
        let settings = CatalogSettings {
            output: OutputTarget::Html,
            ..CatalogSettings::default()
        };
        let track = build_track(
            Path::new("/m/ambient/a.mp3"),
            SidecarMetadata::default(),
            &section("ambient", None),
            &stamp_at(None, 10),
            &settings,
        );
        assert_eq!(track.link.as_deref(), Some("ambient/a.mp3"));
        assert_eq!(link_for(None, "a.mp3"), "a.mp3");
        assert_eq!(link_for(Some(""), "a.mp3"), "a.mp3");
    }
}
