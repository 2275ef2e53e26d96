// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! A module for FFmpeg.

use std::{path::Path, process::Command};

use crate::{
    conversion_error::ConversionError,
    element::common,
    music_converter::{TARGET_CODEC, TARGET_SAMPLE_RATE},
};

pub const COMMAND_NAME: &str = "ffmpeg";

/// 16-bit planar samples.
const TARGET_SAMPLE_FORMAT: &str = "s16p";

/// Converts a source music file to an ALAC file.
///
/// `source_file` is converted to `destination_file` at 44.1 kHz with 16-bit samples.
/// An existing `destination_file` is never overwritten.
pub fn convert_to_alac(
    ffmpeg: &Path,
    source_file: &Path,
    destination_file: &Path,
) -> Result<(), ConversionError> {
    let mut ffmpeg = Command::new(ffmpeg);
    let command = ffmpeg
        .arg("-loglevel")
        .arg("error")
        .arg("-n")
        .arg("-i")
        .arg(source_file)
        .arg("-c:a")
        .arg(TARGET_CODEC)
        .arg("-ar")
        .arg(TARGET_SAMPLE_RATE.to_string())
        .arg("-sample_fmt")
        .arg(TARGET_SAMPLE_FORMAT)
        .arg(destination_file);

    common::run_command(command, COMMAND_NAME)
}
