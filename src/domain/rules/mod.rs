// Domain rules - Business logic and policies

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::model::*;

/// Side data type names that carry a display matrix
const DISPLAY_MATRIX_TYPES: [&str; 2] = ["Display Matrix", "displaymatrix"];

/// Rules for which files count as videos
pub struct VideoFileFilter;

impl VideoFileFilter {
    /// Check the extension against the allow-list, ignoring case
    pub fn has_video_extension(path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false)
    }
}

/// Rules for turning probe results into a rotation
pub struct RotationRules;

impl RotationRules {
    /// Interpret a `rotate` stream tag.
    ///
    /// Only 90, 180 and 270 are accepted; anything else, including 0 and
    /// unparseable text, yields `None` so the caller falls back to side data.
    pub fn from_stream_tag(tag: &str) -> Option<Rotation> {
        let degrees = tag.trim().parse::<i64>().ok()?;
        Rotation::from_degrees(degrees).filter(Rotation::is_rotated)
    }

    /// Scan side data for a display matrix with a usable rotation
    pub fn from_side_data(entries: &[SideDataEntry]) -> Option<Rotation> {
        entries
            .iter()
            .filter(|entry| Self::is_display_matrix(entry))
            .filter_map(|entry| entry.rotation)
            .find_map(Self::map_display_matrix)
    }

    pub fn is_display_matrix(entry: &SideDataEntry) -> bool {
        entry
            .side_data_type
            .as_deref()
            .map(|kind| DISPLAY_MATRIX_TYPES.contains(&kind))
            .unwrap_or(false)
    }

    /// Display matrix angles are counter-clockwise, so -90 means a 90 turn
    pub fn map_display_matrix(rotation: f64) -> Option<Rotation> {
        if rotation == -90.0 {
            Some(Rotation::Deg90)
        } else if rotation == 90.0 {
            Some(Rotation::Deg270)
        } else if rotation == 180.0 {
            Some(Rotation::Deg180)
        } else {
            None
        }
    }
}

/// Rules for naming transcode outputs
pub struct OutputNaming;

impl OutputNaming {
    /// `<stem><suffix><.ext>` next to the input
    pub fn transcode_output_path(input: &Path, suffix: &str) -> PathBuf {
        let mut name = OsString::new();
        if let Some(stem) = input.file_stem() {
            name.push(stem);
        }
        name.push(suffix);
        if let Some(ext) = input.extension() {
            name.push(".");
            name.push(ext);
        }
        input.with_file_name(name)
    }
}
