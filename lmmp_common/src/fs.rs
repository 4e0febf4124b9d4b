/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use crate::io_error;

type Result<T> = std::result::Result<T, io::Error>;

pub fn path_to_lossy_string (path: impl AsRef<Path>) -> String {
    path.as_ref().to_string_lossy().to_string()
}

/// lower case extension of the filename part of `path`, if there is a non-empty one
pub fn lowercase_extension (path: impl AsRef<Path>) -> Option<String> {
    path.as_ref().extension()
        .and_then( |ostr| ostr.to_str())
        .filter( |ext| !ext.is_empty())
        .map( |ext| ext.to_ascii_lowercase())
}

/// the directory a new file at `path` would be created in. Bare filenames resolve to "."
pub fn parent_dir (path: impl AsRef<Path>) -> PathBuf {
    match path.as_ref().parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from(".")
    }
}

/// check that the parent directory of `path` exists and is not marked read-only (no write permission
/// bits at all). Whether the current user may write there is only known when the file is created.
/// This does not create missing directories
pub fn writable_parent_dir (path: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = parent_dir( &path);
    if !dir.is_dir() {
        return Err( io_error!(ErrorKind::NotFound, "output directory {:?} does not exist", dir))
    }

    let md = fs::metadata(&dir)?;
    if md.permissions().readonly() {
        Err( io_error!(ErrorKind::PermissionDenied, "output directory {:?} is read-only", dir))
    } else {
        Ok(dir)
    }
}

/// remove file if it exists, returning true if something was removed
pub fn remove_file_if_exists (path: impl AsRef<Path>) -> Result<bool> {
    match fs::remove_file( path.as_ref()) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e)
    }
}

/// remove `path` and all sibling files that are named `<path>.<suffix>` for the given suffixes
/// (e.g. "aux.xml" sidecars). Returns the number of removed files
pub fn remove_file_with_sidecars (path: impl AsRef<Path>, sidecar_suffixes: &[&str]) -> Result<usize> {
    let path = path.as_ref();
    let mut n_removed = 0;

    if remove_file_if_exists( path)? { n_removed += 1 }

    for suffix in sidecar_suffixes {
        let mut sidecar = path.as_os_str().to_owned();
        sidecar.push(".");
        sidecar.push(suffix);
        if remove_file_if_exists( PathBuf::from(sidecar))? { n_removed += 1 }
    }

    Ok(n_removed)
}
