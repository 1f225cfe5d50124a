//! Output file naming and writing.
//!
//! Stripped copies are written next to their input as `name.stripped.ext`.
//! Taken names move on to `.stripped1`, `.stripped2`, ... and every
//! candidate is created with `create_new`, so a file that appears between
//! the name check and the write is never clobbered.

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Suffix inserted before the extension of stripped copies.
pub const SUFFIX: &str = ".stripped";

/// Candidate output path for `input` on collision attempt `attempt`.
///
/// Attempt 0 is `photo.stripped.jpg`, attempt 1 is `photo.stripped1.jpg`.
pub fn candidate_path(input: &Path, attempt: u32) -> PathBuf {
    let mut suffix = OsString::from(SUFFIX);
    if attempt > 0 {
        suffix.push(attempt.to_string());
    }

    let file_name = input.file_name().unwrap_or_default();
    let mut name = match (input.file_stem(), input.extension()) {
        (Some(stem), Some(_)) => stem.to_os_string(),
        _ => file_name.to_os_string(),
    };
    name.push(&suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }

    input.with_file_name(name)
}

/// Write `data` for `input` and return the path written.
///
/// With `overwrite`, the input itself is replaced through a temporary file
/// and a rename. Otherwise a new, previously non-existent file is created.
pub fn write_stripped(input: &Path, data: &[u8], overwrite: bool) -> Result<PathBuf> {
    if overwrite {
        replace(input, data)?;
        return Ok(input.to_path_buf());
    }

    for attempt in 0.. {
        let path = candidate_path(input, attempt);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                if let Err(e) = file.write_all(data).and_then(|()| file.flush()) {
                    drop(file);
                    let _ = fs::remove_file(&path);
                    return Err(Error::io_with_path(e, &path));
                }
                return Ok(path);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                log::debug!("{} exists, trying next name", path.display());
            }
            Err(e) => return Err(Error::io_with_path(e, &path)),
        }
    }

    unreachable!("u32 attempts exhausted")
}

/// Replace `path` with `data` atomically, keeping its permissions.
///
/// The data goes to a uniquely named temporary file in the same directory,
/// which is then renamed over `path`.
fn replace(path: &Path, data: &[u8]) -> Result<()> {
    let permissions = fs::metadata(path)
        .map_err(|e| Error::io_with_path(e, path))?
        .permissions();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".stripjpg-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| Error::io_with_path(e, dir))?;
    temp.write_all(data)
        .and_then(|()| temp.as_file().set_permissions(permissions))
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| Error::io_with_path(e, path))?;
    temp.persist(path)
        .map_err(|e| Error::io_with_path(e.error, path))?;

    Ok(())
}
