//! Reelshelf Core - headless movie catalog.
//!
//! Movies are recorded with a title, one or more categories from a fixed
//! list and a 1-5 rating. The catalog groups them by category, searches
//! titles, and persists everything to a flat text file.
//!
//! [`Catalog`] is the store itself. [`MovieOrganizer`] wraps a catalog
//! together with its persistence file and is what a front end talks to.
//!
//! # Example
//!
//! ```rust,no_run
//! use reelshelf_core::MovieOrganizer;
//!
//! fn main() -> reelshelf_core::Result<()> {
//!     let mut organizer = MovieOrganizer::builder("./my-movies")
//!         .auto_create_dirs(true)
//!         .build()?;
//!
//!     organizer.add_movie("Inception", &["Sci-Fi", "Action"], 5)?;
//!     for movie in organizer.search_by_title("incep") {
//!         println!("{}", movie);
//!     }
//!
//!     organizer.save_to_default_location()?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod persist;

mod api;

pub use catalog::{Catalog, MISSING_INPUT_MESSAGE};
pub use config::{Category, PersistenceConfig, RatingConfig};
pub use error::{CatalogError, Result};
pub use models::{CatalogStats, CategoryCount, LoadReport, Movie, MovieId, Rating};

pub use api::MovieOrganizerBuilder;

use std::path::{Path, PathBuf};

/// A catalog bound to its persistence file.
///
/// Owns the in-memory [`Catalog`]; nothing is written until
/// [`MovieOrganizer::save_to_default_location`] is called.
pub struct MovieOrganizer {
    /// Directory holding the persistence file
    data_dir: PathBuf,
    /// Full path of the persistence file
    data_file: PathBuf,
    /// Keep `<file>.bak` when saving
    keep_backup: bool,
    catalog: Catalog,
}

impl MovieOrganizer {
    /// Create a builder for MovieOrganizer.
    ///
    /// ```rust,no_run
    /// use reelshelf_core::MovieOrganizer;
    ///
    /// let organizer = MovieOrganizer::builder("./my-movies")
    ///     .file_name("watched.txt")
    ///     .keep_backup(true)
    ///     .build()?;
    /// # Ok::<(), reelshelf_core::CatalogError>(())
    /// ```
    pub fn builder(data_dir: impl Into<PathBuf>) -> MovieOrganizerBuilder {
        MovieOrganizerBuilder::new(data_dir)
    }

    /// Open the catalog in `data_dir` with default options.
    ///
    /// The directory must exist. The persistence file is loaded if present.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        MovieOrganizerBuilder::new(data_dir).build()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
