// Copyright 2026 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! Writes the generated file.

use std::{
    fs::File,
    io::{self, Write},
    path::Path,
};

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Permissions given to the generated file on unix platforms.
pub const OUTPUT_MODE: u32 = 0o644;

/// Replace the content of `path` with `contents`.
///
/// The data is written to a temporary file next to `path` and then moved into
/// place, so `path` is either left untouched or fully replaced.
pub fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    let output_error = |source: io::Error| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(output_error)?;
    file.write_all(contents).map_err(output_error)?;
    file.flush().map_err(output_error)?;
    set_output_permissions(file.as_file()).map_err(output_error)?;

    file.persist(path).map_err(|e| output_error(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn set_output_permissions(file: &File) -> io::Result<()> {
    use std::{fs::Permissions, os::unix::fs::PermissionsExt};

    file.set_permissions(Permissions::from_mode(OUTPUT_MODE))
}

#[cfg(not(unix))]
fn set_output_permissions(_file: &File) -> io::Result<()> {
    Ok(())
}
