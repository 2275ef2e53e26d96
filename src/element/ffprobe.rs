// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! A module for ffprobe.

use std::{path::Path, process::Command};

use crate::{
    conversion_error::ConversionError,
    element::common,
    metadata::{self, StreamInfo},
};

pub const COMMAND_NAME: &str = "ffprobe";

/// Reads a tag in the container of `file`.
///
/// `Ok(None)` is returned when the tag is absent or empty.
pub fn read_tag(
    ffprobe: &Path,
    file: &Path,
    tag: &str,
) -> Result<Option<String>, ConversionError> {
    let mut ffprobe = Command::new(ffprobe);
    let command = ffprobe
        .arg("-v")
        .arg("quiet")
        .arg("-show_entries")
        .arg(format!("format_tags={tag}"))
        .arg("-of")
        .arg("default=nw=1:nk=1")
        .arg(file);

    let output = common::read_command_output(command, COMMAND_NAME)?;

    Ok(metadata::parse_tag_value(&output))
}

/// Reads the codec and the sample rate of the first audio stream of `file`.
pub fn read_stream_info(ffprobe: &Path, file: &Path) -> Result<StreamInfo, ConversionError> {
    let mut ffprobe = Command::new(ffprobe);
    let command = ffprobe
        .arg("-v")
        .arg("quiet")
        .arg("-select_streams")
        .arg("a:0")
        .arg("-show_entries")
        .arg("stream=codec_name,sample_rate")
        .arg("-of")
        .arg("json")
        .arg(file);

    let output = common::read_command_output(command, COMMAND_NAME)?;

    metadata::parse_stream_info(&output).map_err(|error| ConversionError::UnparsableOutput {
        command: COMMAND_NAME.to_string(),
        cause: format!("{error:#}"),
    })
}
