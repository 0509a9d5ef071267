//! Builder for configuring MovieOrganizer initialization.

use std::path::PathBuf;
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::PersistenceConfig;
use crate::error::{CatalogError, Result};
use crate::MovieOrganizer;

/// Builder for configuring MovieOrganizer initialization.
///
/// # Example
///
/// ```rust,no_run
/// use reelshelf_core::MovieOrganizer;
///
/// let organizer = MovieOrganizer::builder("./my-movies")
///     .auto_create_dirs(true)
///     .load_on_build(false)
///     .build()?;
/// # Ok::<(), reelshelf_core::CatalogError>(())
/// ```
pub struct MovieOrganizerBuilder {
    data_dir: PathBuf,
    file_name: String,
    auto_create_dirs: bool,
    keep_backup: bool,
    load_on_build: bool,
}

impl MovieOrganizerBuilder {
    /// Create a new builder with the data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            file_name: PersistenceConfig::DEFAULT_FILE_NAME.to_string(),
            auto_create_dirs: false,
            keep_backup: false,
            load_on_build: true,
        }
    }

    /// Name of the persistence file inside the data directory.
    ///
    /// Default: `movies.txt`
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Create the data directory if it doesn't exist.
    ///
    /// Default: `false` (directory must exist)
    pub fn auto_create_dirs(mut self, enable: bool) -> Self {
        self.auto_create_dirs = enable;
        self
    }

    /// Keep the previous persistence file as `<name>.bak` on every save.
    ///
    /// Default: `false`
    pub fn keep_backup(mut self, enable: bool) -> Self {
        self.keep_backup = enable;
        self
    }

    /// Load the persistence file while building.
    ///
    /// Default: `true`
    pub fn load_on_build(mut self, enable: bool) -> Self {
        self.load_on_build = enable;
        self
    }

    /// Build the MovieOrganizer instance.
    pub fn build(self) -> Result<MovieOrganizer> {
        if self.file_name.trim().is_empty() {
            return Err(CatalogError::Config {
                message: "Persistence file name is empty".to_string(),
            });
        }

        if !self.data_dir.exists() {
            if !self.auto_create_dirs {
                return Err(CatalogError::Config {
                    message: format!("Data directory does not exist: {}", self.data_dir.display()),
                });
            }
            std::fs::create_dir_all(&self.data_dir).map_err(|e| CatalogError::Io {
                message: format!("Failed to create data directory: {}", self.data_dir.display()),
                path: Some(self.data_dir.clone()),
                source: Some(e),
            })?;
            debug!("Created data directory {}", self.data_dir.display());
        } else if !self.data_dir.is_dir() {
            return Err(CatalogError::Config {
                message: format!("Data path is not a directory: {}", self.data_dir.display()),
            });
        }

        let data_file = self.data_dir.join(&self.file_name);
        let mut organizer = MovieOrganizer {
            data_dir: self.data_dir,
            data_file,
            keep_backup: self.keep_backup,
            catalog: Catalog::new(),
        };

        if self.load_on_build {
            organizer.load_from_default_location()?;
        }

        Ok(organizer)
    }
}
