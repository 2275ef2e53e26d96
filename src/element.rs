// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! External tools that probe and convert music files.

mod common;
mod ffmpeg;
mod ffprobe;

use std::path::{Path, PathBuf};

use log::debug;

use crate::{
    conversion_error::ConversionError,
    metadata::{StreamInfo, TrackTags},
};

/// Reads metadata of music files.
///
/// Probing never fails. Absent or unreadable metadata is returned as the default value.
#[cfg_attr(test, mockall::automock)]
pub trait Prober {
    fn probe_tags(&self, file: &Path) -> TrackTags;

    fn probe_stream(&self, file: &Path) -> StreamInfo;
}

/// Encodes music files to ALAC.
#[cfg_attr(test, mockall::automock)]
pub trait AlacEncoder {
    fn encode(&self, source_file: &Path, destination_file: &Path) -> Result<(), ConversionError>;
}

/// The located ffprobe and ffmpeg commands.
#[derive(Debug, Clone)]
pub struct Elements {
    ffprobe: PathBuf,
    ffmpeg: PathBuf,
}

impl Elements {
    /// Locates ffprobe and ffmpeg.
    ///
    /// Each command is searched in `PATH` unless its path is given.
    pub fn locate(
        ffprobe_path: Option<&Path>,
        ffmpeg_path: Option<&Path>,
    ) -> Result<Self, ConversionError> {
        Ok(Elements {
            ffprobe: common::locate_command(ffprobe::COMMAND_NAME, ffprobe_path)?,
            ffmpeg: common::locate_command(ffmpeg::COMMAND_NAME, ffmpeg_path)?,
        })
    }

    fn probe_tag(&self, file: &Path, tag: &str) -> Option<String> {
        ffprobe::read_tag(&self.ffprobe, file, tag).unwrap_or_else(|error| {
            debug!("The {tag} tag of {file:?} cannot be probed: {error}");

            None
        })
    }
}

impl Prober for Elements {
    fn probe_tags(&self, file: &Path) -> TrackTags {
        TrackTags {
            artist: self.probe_tag(file, "artist"),
            album: self.probe_tag(file, "album"),
        }
    }

    fn probe_stream(&self, file: &Path) -> StreamInfo {
        ffprobe::read_stream_info(&self.ffprobe, file).unwrap_or_else(|error| {
            debug!("The audio stream of {file:?} cannot be probed: {error}");

            StreamInfo::default()
        })
    }
}

impl AlacEncoder for Elements {
    fn encode(&self, source_file: &Path, destination_file: &Path) -> Result<(), ConversionError> {
        ffmpeg::convert_to_alac(&self.ffmpeg, source_file, destination_file)
    }
}
