// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

use std::process::exit;

use clap::Parser;

use alac_organizer::organize_to_alac::{
    organize_to_alac, OrganizeError, OrganizeOutput, Setting,
};
use env_logger::Env;
use log::{error, info};

fn initialize_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_target(false)
        .format_timestamp(None)
        .init();
}

fn main() {
    initialize_logging();

    match organize_to_alac(&Setting::parse()) {
        Ok(OrganizeOutput::Completed(job_result)) => {
            info!("{job_result}");

            if job_result.has_failure() {
                exit(1);
            }
        }
        Ok(OrganizeOutput::Planned(planned_files)) => {
            info!("{} music files are planned.", planned_files.len());
        }
        Err(OrganizeError::NoInputSelected) => {
            error!("No files or folders are selected.");

            exit(1);
        }
        Err(OrganizeError::ToolUnavailable(error)) => {
            error!("FFmpeg is required. Detail: {error}");

            exit(1);
        }
        Err(OrganizeError::DirectoryCannotBeCreated(directory, error)) => {
            error!("{directory:?} cannot be created. Detail: {error}");

            exit(1);
        }
    }
}
