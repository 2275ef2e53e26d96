use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use log::debug;
use which::which;

use crate::conversion_error::ConversionError;

/// Locates a command.
///
/// `command_path` overrides the lookup of `command` in `PATH`.
pub fn locate_command(
    command: &str,
    command_path: Option<&Path>,
) -> Result<PathBuf, ConversionError> {
    let target: &OsStr = command_path.map_or(OsStr::new(command), Path::as_os_str);

    match which(target) {
        Ok(path) => {
            debug!("{command} is located at {path:?}");

            Ok(path)
        }
        Err(error) => Err(ConversionError::CommandNotFound {
            command: command.to_string(),
            error,
        }),
    }
}

pub fn run_command(command: &mut Command, command_name: &str) -> Result<(), ConversionError> {
    let result = command.stdin(Stdio::null()).status();

    match result {
        Ok(exit_status) => {
            if exit_status.success() {
                Ok(())
            } else {
                Err(ConversionError::CommandFailed {
                    command: command_name.to_string(),
                    status: exit_status,
                })
            }
        }
        Err(error) => Err(ConversionError::CommandCannotExecuted {
            command: command_name.to_string(),
            error,
        }),
    }
}

/// Runs a command and returns its standard output.
pub fn read_command_output(
    command: &mut Command,
    command_name: &str,
) -> Result<String, ConversionError> {
    let output = command
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(|error| ConversionError::CommandCannotExecuted {
            command: command_name.to_string(),
            error,
        })?;

    if !output.status.success() {
        return Err(ConversionError::CommandFailed {
            command: command_name.to_string(),
            status: output.status,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Creates an executable shell script that stands in for a command.
///
/// The script records its arguments for [`recorded_arguments`] and then runs `body`.
#[cfg(all(test, unix))]
pub fn create_stub_command(directory: &Path, name: &str, body: &str) -> PathBuf {
    use std::{fs, os::unix::fs::PermissionsExt};

    let path = directory.join(name);

    fs::write(
        &path,
        format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$0.arguments\"\n{body}\n"),
    )
    .unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

    path
}

/// Arguments that the last run of a stub command was given.
#[cfg(all(test, unix))]
pub fn recorded_arguments(stub_command: &Path) -> Vec<String> {
    let mut path = stub_command.as_os_str().to_os_string();

    path.push(".arguments");

    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}
