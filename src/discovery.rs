// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Discovery of music files in selected files and folders.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::selection::InputSelection;

/// Extensions of music files that can be converted.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["flac", "wav", "m4a"];

/// Prefix of AppleDouble resource fork files.
const RESOURCE_FORK_PREFIX: &str = "._";

/// Whether the extension of `path` is one of [`ACCEPTED_EXTENSIONS`], ignoring case.
pub fn is_accepted_audio_file<P: AsRef<Path>>(path: P) -> bool {
    match path.as_ref().extension() {
        Some(extension) => ACCEPTED_EXTENSIONS
            .iter()
            .any(|accepted| extension.eq_ignore_ascii_case(accepted)),
        None => false,
    }
}

fn is_resource_fork(path: &Path) -> bool {
    path.file_name().is_some_and(|filename| {
        filename
            .as_encoded_bytes()
            .starts_with(RESOURCE_FORK_PREFIX.as_bytes())
    })
}

fn walk_directory(directory: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    WalkDir::new(directory)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                warn!("An entry in {directory:?} cannot be read: {error}");

                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| is_accepted_audio_file(path) && !is_resource_fork(path))
}

/// Lists music files in the selection.
///
/// A selected file is listed if its extension is accepted. A selected folder is walked
/// recursively and every accepted file in it is listed, except resource fork files.
/// A file found more than once is listed only at its first occurrence.
pub fn discover(selection: &InputSelection) -> Vec<PathBuf> {
    let mut found = HashSet::new();
    let mut music_files = Vec::new();

    let mut push = |path: PathBuf| {
        if found.insert(path.clone()) {
            music_files.push(path);
        }
    };

    for path in selection.paths() {
        if path.is_file() {
            if is_accepted_audio_file(path) {
                push(path.to_path_buf());
            } else {
                debug!("{path:?} is not a supported music file.");
            }
        } else if path.is_dir() {
            walk_directory(path).for_each(&mut push);
        } else {
            warn!("{path:?} is neither a file nor a directory.");
        }
    }

    music_files
}
