// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! This module has the function that called by the main function.

use std::{
    fs::create_dir_all,
    io,
    path::{Path, PathBuf},
};

use clap::Parser;
use log::{debug, info, warn};
use thiserror::Error;

use crate::{
    conversion_error::ConversionError,
    discovery,
    element::Elements,
    job_result::JobResult,
    music_converter::{self, Plan, PlannedFile, Route, SkipReason},
    selection::InputSelection,
};

/// The struct for setting.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Convert lossless music files to ALAC and organize them into Artist/Album folders."
)]
pub struct Setting {
    #[arg(
        short,
        long = "output",
        required = true,
        value_name = "DIRECTORY",
        value_parser = is_output_directory_or_not_found,
        help = "A directory that Artist/Album folders of converted files are created in."
    )]
    output_directory: PathBuf,

    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Removes a path from the selected inputs. Can be repeated."
    )]
    exclude: Vec<PathBuf>,

    #[arg(
        long,
        help = "Lists the selected inputs and planned outputs without converting."
    )]
    dry_run: bool,

    #[arg(long, value_name = "PATH", help = "The ffprobe command to use.")]
    ffprobe: Option<PathBuf>,

    #[arg(long, value_name = "PATH", help = "The ffmpeg command to use.")]
    ffmpeg: Option<PathBuf>,

    #[arg(
        required = true,
        value_name = "INPUT",
        value_parser = is_input_available,
        help = "FLAC, WAV or ALAC files, or folders containing them."
    )]
    inputs: Vec<PathBuf>,
}

/// Result of organize_to_alac.
#[derive(Debug)]
pub enum OrganizeOutput {
    /// Music files and what would be done for them on a dry run.
    Planned(Vec<PlannedFile>),

    Completed(JobResult),
}

/// Error of organize_to_alac.
#[derive(Error, Debug)]
pub enum OrganizeError {
    #[error("No input file or folder is selected.")]
    NoInputSelected,

    #[error("A required command is unavailable: {0}")]
    ToolUnavailable(ConversionError),

    #[error("The directory `{0}` cannot be created: {1}")]
    DirectoryCannotBeCreated(PathBuf, io::Error),
}

#[cfg_attr(test, mockall::automock)]
trait OrganizeRunner {
    fn create_output_directory(&self, path: &Path) -> io::Result<()>;

    fn discover(&self, selection: &InputSelection) -> Vec<PathBuf>;

    fn plan_all(&self, source_files: &[PathBuf], output_directory: &Path) -> Vec<PlannedFile>;

    fn convert_all(&self, source_files: &[PathBuf], output_directory: &Path) -> JobResult;
}

struct Organizer {
    elements: Elements,
}

impl OrganizeRunner for Organizer {
    fn create_output_directory(&self, path: &Path) -> io::Result<()> {
        create_dir_all(path)
    }

    fn discover(&self, selection: &InputSelection) -> Vec<PathBuf> {
        discovery::discover(selection)
    }

    fn plan_all(&self, source_files: &[PathBuf], output_directory: &Path) -> Vec<PlannedFile> {
        music_converter::plan_all(source_files, output_directory, &self.elements)
    }

    fn convert_all(&self, source_files: &[PathBuf], output_directory: &Path) -> JobResult {
        music_converter::convert_all(
            source_files,
            output_directory,
            &self.elements,
            &self.elements,
        )
    }
}

fn is_output_directory_or_not_found(argument: &str) -> Result<PathBuf, String> {
    let path = Path::new(argument);

    if path.is_dir() || !path.exists() {
        Ok(path.to_path_buf())
    } else {
        Err(format!(
            r#"The output "{argument}" exists and is not a directory."#
        ))
    }
}

fn is_input_available(argument: &str) -> Result<PathBuf, String> {
    let path = Path::new(argument);

    if path.exists() {
        Ok(path.to_path_buf())
    } else {
        Err(format!(r#"The input "{argument}" is not found."#))
    }
}

/// Builds the selection from the inputs and the exclusions of `setting`.
fn select_inputs(setting: &Setting) -> Result<InputSelection, OrganizeError> {
    let mut selection = InputSelection::new();

    for input in &setting.inputs {
        if !selection.add(input) {
            debug!("{input:?} is selected twice.");
        }
    }

    for excluded in &setting.exclude {
        if selection.remove(excluded).is_none() {
            warn!("{excluded:?} is not selected and cannot be excluded.");
        }
    }

    if selection.is_empty() {
        return Err(OrganizeError::NoInputSelected);
    }

    Ok(selection)
}

fn log_about_starting(setting: &Setting) {
    if setting.dry_run {
        info!("Plans conversion of music files.");
    } else {
        info!("Converts music files to ALAC.");
    }
}

fn log_selections(selection: &InputSelection, dry_run: bool) {
    for selected in selection.selections() {
        if dry_run {
            info!("Selected {}: {}", selected.kind, selected.path.display());
        } else {
            debug!("Selected {}: {}", selected.kind, selected.path.display());
        }
    }
}

fn log_planned_files(planned_files: &[PlannedFile]) {
    for planned_file in planned_files {
        let source = planned_file.source.display();

        match &planned_file.plan {
            Ok(Plan::Encode { destination, route }) => {
                let verb = if *route == Route::Resample {
                    "resampled"
                } else {
                    "converted"
                };

                info!("{source} would be {verb} to {}", destination.display());
            }
            Ok(Plan::Skip(SkipReason::AlreadyTarget)) => {
                info!("{source} would be skipped because it is already ALAC.");
            }
            Ok(Plan::Skip(SkipReason::DestinationExists(destination))) => {
                info!(
                    "{source} would be skipped because {} exists.",
                    destination.display()
                );
            }
            Err(cause) => warn!("{source} cannot be planned: {cause}"),
        }
    }
}

fn organize_on_runner<T: OrganizeRunner>(
    setting: &Setting,
    selection: &InputSelection,
    runner: T,
) -> Result<OrganizeOutput, OrganizeError> {
    log_about_starting(setting);

    debug!(
        "Output directory for converted files: {:?}",
        &setting.output_directory
    );

    if !setting.dry_run {
        runner
            .create_output_directory(&setting.output_directory)
            .map_err(|error| {
                OrganizeError::DirectoryCannotBeCreated(setting.output_directory.clone(), error)
            })?;
    }

    log_selections(selection, setting.dry_run);

    let source_files = runner.discover(selection);

    info!("{} music files are found.", source_files.len());

    if setting.dry_run {
        let planned_files = runner.plan_all(&source_files, &setting.output_directory);

        log_planned_files(&planned_files);

        return Ok(OrganizeOutput::Planned(planned_files));
    }

    let job_result = runner.convert_all(&source_files, &setting.output_directory);

    info!("Completed.");

    Ok(OrganizeOutput::Completed(job_result))
}

/// Converts music files to ALAC.
///
/// Music files in the selected files and folders are converted to ALAC files and placed in
/// `Artist/Album` folders under the output directory. Nothing is converted on a dry run.
pub fn organize_to_alac(setting: &Setting) -> Result<OrganizeOutput, OrganizeError> {
    let selection = select_inputs(setting)?;
    let elements = Elements::locate(setting.ffprobe.as_deref(), setting.ffmpeg.as_deref())
        .map_err(OrganizeError::ToolUnavailable)?;

    organize_on_runner(setting, &selection, Organizer { elements })
}
