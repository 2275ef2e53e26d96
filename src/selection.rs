// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Files and folders chosen by the user.

use std::{
    fmt,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    File,
    Folder,
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionKind::File => write!(f, "file"),
            SelectionKind::Folder => write!(f, "folder"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub path: PathBuf,

    pub kind: SelectionKind,
}

/// Ordered set of selected paths.
///
/// A path that is already selected is not added again, whatever its kind.
#[derive(Debug, Clone, Default)]
pub struct InputSelection {
    selections: Vec<Selection>,
}

impl InputSelection {
    pub fn new() -> Self {
        InputSelection::default()
    }

    /// Adds a file. Returns `false` if the path is already selected.
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P) -> bool {
        self.push(path.as_ref(), SelectionKind::File)
    }

    /// Adds a folder. Returns `false` if the path is already selected.
    pub fn add_folder<P: AsRef<Path>>(&mut self, path: P) -> bool {
        self.push(path.as_ref(), SelectionKind::Folder)
    }

    /// Adds a path as a folder if it is a directory, otherwise as a file.
    pub fn add<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let path = path.as_ref();

        if path.is_dir() {
            self.add_folder(path)
        } else {
            self.add_file(path)
        }
    }

    /// Removes the selection whose path is exactly `path`.
    pub fn remove<P: AsRef<Path>>(&mut self, path: P) -> Option<Selection> {
        let path = path.as_ref();
        let index = self
            .selections
            .iter()
            .position(|selection| selection.path == path)?;

        Some(self.selections.remove(index))
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.selections
            .iter()
            .map(|selection| selection.path.as_path())
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    fn contains(&self, path: &Path) -> bool {
        self.selections
            .iter()
            .any(|selection| selection.path == path)
    }

    fn push(&mut self, path: &Path, kind: SelectionKind) -> bool {
        if self.contains(path) {
            return false;
        }

        self.selections.push(Selection {
            path: path.to_path_buf(),
            kind,
        });

        true
    }
}

#[cfg(test)]
mod tests {
    use tempfile::{tempdir, NamedTempFile};

    use super::*;

    #[test]
    fn duplicated_path_is_suppressed() {
        let mut selection = InputSelection::new();

        assert!(selection.add_file("a.flac"));
        assert!(!selection.add_file("a.flac"));
        assert!(!selection.add_folder("a.flac"));

        assert_eq!(1, selection.len());
        assert_eq!(SelectionKind::File, selection.selections()[0].kind);
    }

    #[test]
    fn order_is_kept() {
        let mut selection = InputSelection::new();

        selection.add_folder("b");
        selection.add_file("a.flac");
        selection.add_file("c.wav");

        let paths: Vec<_> = selection.paths().collect();

        assert_eq!(
            vec![Path::new("b"), Path::new("a.flac"), Path::new("c.wav")],
            paths
        );
    }

    #[test]
    fn remove_by_exact_path() {
        let mut selection = InputSelection::new();

        selection.add_file("music/a.flac");
        selection.add_folder("music");

        assert!(selection.remove("a.flac").is_none());

        let removed = selection.remove("music").unwrap();

        assert_eq!(SelectionKind::Folder, removed.kind);
        assert_eq!(1, selection.len());
        assert_eq!(Path::new("music/a.flac"), selection.selections()[0].path);

        selection.remove("music/a.flac");

        assert!(selection.is_empty());
    }

    #[test]
    fn kind_is_inferred_from_filesystem() {
        let directory = tempdir().unwrap();
        let file = NamedTempFile::new_in(&directory).unwrap();

        let mut selection = InputSelection::new();

        selection.add(directory.path());
        selection.add(file.path());

        assert_eq!(SelectionKind::Folder, selection.selections()[0].kind);
        assert_eq!(SelectionKind::File, selection.selections()[1].kind);
    }
}
