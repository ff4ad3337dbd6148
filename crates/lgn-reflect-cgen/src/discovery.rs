//! Input discovery and the up-to-date check run before generation.

use std::{
    path::{Path, PathBuf},
    time::SystemTime,
};

use log::{debug, trace};
use walkdir::WalkDir;

use crate::{
    config::GeneratorConfig,
    errors::{Error, Result},
};

/// Lists the headers of every source directory.
///
/// Directories are not recursed into. Files are sorted by name within a
/// directory and directories keep the order they were given in.
///
/// # Errors
///
/// If a directory does not exist or cannot be listed.
pub fn discover_inputs<P: AsRef<Path>>(
    source_dirs: &[P],
    config: &GeneratorConfig,
) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();

    for source_dir in source_dirs {
        let source_dir = source_dir.as_ref();
        if !source_dir.is_dir() {
            return Err(Error::MissingSourceDir(source_dir.to_path_buf()));
        }

        for entry in WalkDir::new(source_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if entry.file_type().is_file() && config.has_header_extension(entry.path()) {
                trace!("discovered {}", entry.path().display());
                inputs.push(entry.into_path());
            }
        }
    }

    debug!("discovered {} input files", inputs.len());
    Ok(inputs)
}

/// Tells whether the outputs must be generated again.
///
/// That is the case when an output is missing, or when the newest input is
/// more recent than the oldest output.
///
/// # Errors
///
/// If the metadata of an existing file cannot be read.
pub fn needs_regeneration<I: AsRef<Path>, O: AsRef<Path>>(
    inputs: &[I],
    outputs: &[O],
) -> Result<bool> {
    let mut oldest_output: Option<SystemTime> = None;
    for output in outputs {
        let output = output.as_ref();
        if !output.exists() {
            debug!("{} is missing", output.display());
            return Ok(true);
        }
        let modified = modified_time(output)?;
        oldest_output = Some(oldest_output.map_or(modified, |oldest| oldest.min(modified)));
    }

    let mut newest_input: Option<SystemTime> = None;
    for input in inputs {
        let modified = modified_time(input.as_ref())?;
        newest_input = Some(newest_input.map_or(modified, |newest| newest.max(modified)));
    }

    Ok(match (newest_input, oldest_output) {
        (Some(newest_input), Some(oldest_output)) => newest_input > oldest_output,
        (_, None) => true,
        (None, Some(_)) => false,
    })
}

fn modified_time(path: &Path) -> Result<SystemTime> {
    std::fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .map_err(|err| Error::io(path, err))
}
