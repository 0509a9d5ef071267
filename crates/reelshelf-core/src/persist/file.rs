//! File operations for the persistence file.
//!
//! Writes are atomic:
//! 1. Write to a temp file in the destination directory
//! 2. fsync to ensure data reaches disk
//! 3. Optional backup of the previous file
//! 4. Atomic rename to target path

use crate::config::PersistenceConfig;
use crate::{CatalogError, Result};
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Open the persistence file for line reading.
///
/// Returns `None` if the file doesn't exist.
pub fn open_for_read(path: &Path) -> Result<Option<BufReader<File>>> {
    match File::open(path) {
        Ok(file) => Ok(Some(BufReader::new(file))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CatalogError::Io {
            message: format!("Failed to open {}", path.display()),
            path: Some(path.to_path_buf()),
            source: Some(e),
        }),
    }
}

/// Path of the backup kept next to `path`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(PersistenceConfig::BACKUP_EXTENSION);
    path.with_file_name(name)
}

/// Replace `path` with `contents` atomically.
pub fn atomic_write(path: &Path, contents: &[u8], keep_backup: bool) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    if !parent.exists() {
        fs::create_dir_all(&parent).map_err(|e| CatalogError::Io {
            message: format!("Failed to create directory {}", parent.display()),
            path: Some(parent.clone()),
            source: Some(e),
        })?;
    }

    let mut temp = NamedTempFile::new_in(&parent).map_err(|e| CatalogError::Io {
        message: format!("Failed to create temp file in {}", parent.display()),
        path: Some(parent.clone()),
        source: Some(e),
    })?;

    temp.write_all(contents).map_err(|e| CatalogError::Io {
        message: format!("Failed to write temp file {}", temp.path().display()),
        path: Some(temp.path().to_path_buf()),
        source: Some(e),
    })?;

    temp.flush().map_err(|e| CatalogError::Io {
        message: format!("Failed to flush temp file {}", temp.path().display()),
        path: Some(temp.path().to_path_buf()),
        source: Some(e),
    })?;

    temp.as_file().sync_all().map_err(|e| CatalogError::Io {
        message: format!("Failed to sync temp file {}", temp.path().display()),
        path: Some(temp.path().to_path_buf()),
        source: Some(e),
    })?;

    if keep_backup && path.is_file() {
        let backup = backup_path(path);
        if let Err(e) = fs::copy(path, &backup) {
            warn!("Failed to create backup {}: {}", backup.display(), e);
        } else {
            debug!("Created backup: {}", backup.display());
        }
    }

    // Dropping the temp file on error removes it.
    temp.persist(path).map_err(|e| CatalogError::Io {
        message: format!("Failed to replace {}", path.display()),
        path: Some(path.to_path_buf()),
        source: Some(e.error),
    })?;

    debug!("Atomically wrote {}", path.display());
    Ok(())
}
