//! Catalog methods on MovieOrganizer.

use tracing::info;

use crate::config::Category;
use crate::error::Result;
use crate::models::{CatalogStats, LoadReport, Movie};
use crate::MovieOrganizer;

impl MovieOrganizer {
    // ========================================
    // Catalog Methods
    // ========================================

    /// Add a movie from a title, the selected category names and a rating.
    ///
    /// Returns a validation error, leaving the catalog unchanged, when the
    /// title is blank or no known category is selected.
    pub fn add_movie<S: AsRef<str>>(
        &mut self,
        title: &str,
        category_selections: &[S],
        rating: u8,
    ) -> Result<Movie> {
        let movie = self.catalog.add(title, category_selections, rating)?;
        Ok(movie.clone())
    }

    /// Case-insensitive title search. An empty query returns nothing.
    pub fn search_by_title(&self, substring: &str) -> Vec<Movie> {
        self.catalog.search(substring).into_iter().cloned().collect()
    }

    pub fn list_by_category(&self, category: Category) -> Vec<Movie> {
        self.catalog
            .list_by_category(category)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Every movie, each once, in catalog scan order.
    pub fn list_all(&self) -> Vec<Movie> {
        self.catalog.movies().into_iter().cloned().collect()
    }

    /// The fixed category list, for populating selection controls.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    pub fn stats(&self) -> CatalogStats {
        self.catalog.stats()
    }

    // ========================================
    // Persistence Methods
    // ========================================

    /// Replace the in-memory catalog with the contents of the data file.
    pub fn load_from_default_location(&mut self) -> Result<LoadReport> {
        self.catalog.clear();
        self.catalog.load(&self.data_file)
    }

    /// Write the catalog to the data file, replacing it.
    pub fn save_to_default_location(&self) -> Result<usize> {
        let count = if self.keep_backup {
            self.catalog.save_with_backup(&self.data_file)?
        } else {
            self.catalog.save(&self.data_file)?
        };
        info!("Catalog saved ({} movies)", count);
        Ok(count)
    }
}
