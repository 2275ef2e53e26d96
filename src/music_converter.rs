// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Conversion of music files to ALAC, one file after another.

use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    conversion_error::ConversionError,
    element::{AlacEncoder, Prober},
    job_result::JobResult,
    metadata::StreamInfo,
    output_path,
};

/// The codec of converted files, as named by FFmpeg.
pub const TARGET_CODEC: &str = "alac";

/// The sample rate of converted files.
pub const TARGET_SAMPLE_RATE: u32 = 44_100;

/// How a music file is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The file is already ALAC at the target sample rate.
    AlreadyTarget,

    /// The file is ALAC at another sample rate.
    Resample,

    Transcode,
}

/// Why a music file is not converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyTarget,

    DestinationExists(PathBuf),
}

/// What is going to be done for a music file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Skip(SkipReason),

    Encode { destination: PathBuf, route: Route },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Converted { destination: PathBuf, route: Route },

    Skipped(SkipReason),

    Failed(String),
}

/// A music file and its plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub source: PathBuf,

    pub plan: Result<Plan, String>,
}

pub fn classify(stream_info: &StreamInfo) -> Route {
    let is_target_codec = stream_info
        .codec_name
        .as_deref()
        .is_some_and(|codec_name| codec_name.eq_ignore_ascii_case(TARGET_CODEC));

    if !is_target_codec {
        Route::Transcode
    } else if stream_info.sample_rate == Some(TARGET_SAMPLE_RATE) {
        Route::AlreadyTarget
    } else {
        Route::Resample
    }
}

/// Decides what to do for `source_file` without converting it.
///
/// Tags are probed only when the file is going to be encoded.
pub fn plan(
    source_file: &Path,
    output_root: &Path,
    prober: &dyn Prober,
) -> Result<Plan, ConversionError> {
    let stream_info = prober.probe_stream(source_file);
    let route = classify(&stream_info);

    debug!(
        "{source_file:?}: codec {}, sample rate {:?}, route {route:?}",
        stream_info.codec_name_or_default(),
        stream_info.sample_rate
    );

    if route == Route::AlreadyTarget {
        return Ok(Plan::Skip(SkipReason::AlreadyTarget));
    }

    let tags = prober.probe_tags(source_file);
    let destination = output_path::output_target(output_root, source_file, &tags)?;

    if destination.exists() {
        return Ok(Plan::Skip(SkipReason::DestinationExists(destination)));
    }

    Ok(Plan::Encode { destination, route })
}

fn encode(
    source_file: &Path,
    destination: &Path,
    encoder: &dyn AlacEncoder,
) -> Result<(), ConversionError> {
    if let Some(directory) = destination.parent() {
        create_dir_all(directory).map_err(|error| ConversionError::DirectoryCannotBeCreated {
            path: directory.to_path_buf(),
            error,
        })?;
    }

    encoder.encode(source_file, destination)
}

/// Converts a music file to ALAC under `output_root`.
///
/// Errors are returned as [`FileOutcome::Failed`].
pub fn convert_file(
    source_file: &Path,
    output_root: &Path,
    prober: &dyn Prober,
    encoder: &dyn AlacEncoder,
) -> FileOutcome {
    let result = plan(source_file, output_root, prober).and_then(|plan| match plan {
        Plan::Skip(reason) => Ok(FileOutcome::Skipped(reason)),
        Plan::Encode { destination, route } => {
            encode(source_file, &destination, encoder)
                .map(|_| FileOutcome::Converted { destination, route })
        }
    });

    result.unwrap_or_else(|error| FileOutcome::Failed(error.to_string()))
}

/// Converts music files one by one.
///
/// A failed file does not stop the conversion of the following files.
pub fn convert_all<P: AsRef<Path>>(
    source_files: &[P],
    output_root: &Path,
    prober: &dyn Prober,
    encoder: &dyn AlacEncoder,
) -> JobResult {
    let mut job_result = JobResult::new();

    for source_file in source_files {
        let source_file = source_file.as_ref();
        let outcome = convert_file(source_file, output_root, prober, encoder);

        job_result.record(source_file, &outcome);
    }

    job_result
}

/// Plans music files one by one.
pub fn plan_all<P: AsRef<Path>>(
    source_files: &[P],
    output_root: &Path,
    prober: &dyn Prober,
) -> Vec<PlannedFile> {
    source_files
        .iter()
        .map(|source_file| {
            let source_file = source_file.as_ref();

            PlannedFile {
                source: source_file.to_path_buf(),
                plan: plan(source_file, output_root, prober).map_err(|error| error.to_string()),
            }
        })
        .collect()
}
