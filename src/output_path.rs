// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Locations of converted files.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use sanitize_filename::Options;

use crate::{
    conversion_error::ConversionError,
    metadata::{TrackTags, UNKNOWN_ALBUM, UNKNOWN_ARTIST},
};

/// The name used for an absent or empty value.
pub const UNKNOWN: &str = "Unknown";

/// The extension of converted files.
pub const OUTPUT_EXTENSION: &str = "m4a";

/// Makes a directory name from a tag value.
///
/// `< > : " / \ | ? *` and control characters are replaced with `_`.
/// An absent or empty value becomes [`UNKNOWN`].
pub fn sanitize(name: Option<&str>) -> String {
    sanitize_or(name, UNKNOWN)
}

/// Same as [`sanitize`] but an absent or empty value becomes `default`.
pub fn sanitize_or(name: Option<&str>, default: &str) -> String {
    let name = name.filter(|name| !name.is_empty()).unwrap_or(default);

    sanitize_filename::sanitize_with_options(
        name,
        Options {
            windows: false,
            truncate: true,
            replacement: "_",
        },
    )
}

/// Returns `output_root/artist/album/<file stem of source_file>.m4a`.
pub fn output_target(
    output_root: &Path,
    source_file: &Path,
    tags: &TrackTags,
) -> Result<PathBuf, ConversionError> {
    let Some(file_stem) = source_file.file_stem() else {
        return Err(ConversionError::NoFileName {
            path: source_file.to_path_buf(),
        });
    };

    let filename = {
        let mut filename = OsString::from(file_stem);

        filename.push(".");
        filename.push(OUTPUT_EXTENSION);

        filename
    };

    let mut path = output_root.to_path_buf();

    path.push(sanitize_or(tags.artist.as_deref(), UNKNOWN_ARTIST));
    path.push(sanitize_or(tags.album.as_deref(), UNKNOWN_ALBUM));
    path.push(filename);

    Ok(path)
}
