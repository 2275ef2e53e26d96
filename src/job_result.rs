// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Result of a batch conversion.

use std::{fmt, path::Path};

use log::{error, info};

use crate::music_converter::{FileOutcome, Route, SkipReason};

/// Counters and transcript of a batch conversion.
///
/// Skipped files are counted neither as converted nor as failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobResult {
    pub succeeded: usize,

    pub skipped: usize,

    pub failed: usize,

    /// A line for each processed file.
    pub transcript: Vec<String>,
}

impl JobResult {
    pub fn new() -> Self {
        JobResult::default()
    }

    /// Counts the outcome of `source_file` and appends a line to the transcript.
    pub fn record(&mut self, source_file: &Path, outcome: &FileOutcome) {
        let line = match outcome {
            FileOutcome::Converted { destination, route } => {
                self.succeeded += 1;

                let verb = match route {
                    Route::Resample => "Resampled",
                    _ => "Converted",
                };

                format!("{verb}: {} -> {}", source_file.display(), destination.display())
            }
            FileOutcome::Skipped(SkipReason::AlreadyTarget) => {
                self.skipped += 1;

                format!("Skipping already ALAC file: {}", source_file.display())
            }
            FileOutcome::Skipped(SkipReason::DestinationExists(destination)) => {
                self.skipped += 1;

                format!(
                    "Skipping already converted file: {}",
                    destination.display()
                )
            }
            FileOutcome::Failed(cause) => {
                self.failed += 1;

                format!("Failed to convert: {} ({cause})", source_file.display())
            }
        };

        if matches!(outcome, FileOutcome::Failed(_)) {
            error!("{line}");
        } else {
            info!("{line}");
        }

        self.transcript.push(line);
    }

    /// Number of files processed.
    pub fn total(&self) -> usize {
        self.succeeded + self.skipped + self.failed
    }

    pub fn has_failure(&self) -> bool {
        self.failed > 0
    }
}

impl fmt::Display for JobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conversion finished:")?;
        writeln!(f, "Converted files: {}", self.succeeded)?;
        writeln!(f, "Skipped files: {}", self.skipped)?;
        write!(f, "Failed conversions: {}", self.failed)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn record_each_outcome() {
        let mut job_result = JobResult::new();

        job_result.record(
            Path::new("a.flac"),
            &FileOutcome::Converted {
                destination: PathBuf::from("out/a.m4a"),
                route: Route::Transcode,
            },
        );
        job_result.record(
            Path::new("b.m4a"),
            &FileOutcome::Converted {
                destination: PathBuf::from("out/b.m4a"),
                route: Route::Resample,
            },
        );
        job_result.record(
            Path::new("c.m4a"),
            &FileOutcome::Skipped(SkipReason::AlreadyTarget),
        );
        job_result.record(
            Path::new("d.flac"),
            &FileOutcome::Skipped(SkipReason::DestinationExists(PathBuf::from("out/d.m4a"))),
        );
        job_result.record(Path::new("e.wav"), &FileOutcome::Failed("broken".to_owned()));

        assert_eq!(2, job_result.succeeded);
        assert_eq!(2, job_result.skipped);
        assert_eq!(1, job_result.failed);
        assert_eq!(5, job_result.total());
        assert!(job_result.has_failure());

        assert_eq!(
            vec![
                "Converted: a.flac -> out/a.m4a",
                "Resampled: b.m4a -> out/b.m4a",
                "Skipping already ALAC file: c.m4a",
                "Skipping already converted file: out/d.m4a",
                "Failed to convert: e.wav (broken)",
            ],
            job_result.transcript
        );
    }

    #[test]
    fn summary() {
        let job_result = JobResult {
            succeeded: 3,
            skipped: 1,
            failed: 2,
            transcript: Vec::new(),
        };

        assert_eq!(
            "Conversion finished:\nConverted files: 3\nSkipped files: 1\nFailed conversions: 2",
            job_result.to_string()
        );
    }
}
