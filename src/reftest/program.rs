//! Executable lookup
//!
//! A name with a directory part (`./headless.py`, `/usr/bin/firefox`) is used
//! as given and left for the OS to reject if missing. A bare name is searched
//! on PATH.

use std::path::{Path, PathBuf};

use crate::common::{Error, Result};

/// Resolve a program name to the path that will be executed
pub fn resolve(name: &str) -> Result<PathBuf> {
    let path = Path::new(name);
    if path.is_absolute() || path.components().count() > 1 {
        return Ok(path.to_path_buf());
    }

    which::which(name).map_err(|e| {
        tracing::debug!("PATH lookup for '{}' failed: {}", name, e);
        Error::ProgramNotFound {
            name: name.to_string(),
        }
    })
}
