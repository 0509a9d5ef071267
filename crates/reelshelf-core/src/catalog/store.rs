//! In-memory movie catalog indexed by category.

use crate::catalog::validation::{parse_categories, validate_categories, validate_title};
use crate::config::Category;
use crate::error::{CatalogError, Result};
use crate::models::{CatalogStats, CategoryCount, LoadReport, Movie, MovieId, Rating};
use crate::persist::{self, format_record, parse_record};
use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Movies grouped into one bucket per category.
///
/// A movie sits in the bucket of every category it declares and nowhere
/// else. Whole-catalog scans visit buckets in [`Category::ALL`] order and each
/// bucket in insertion order, keeping the first sighting of each movie.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Indexed by `MovieId`.
    movies: Vec<Movie>,
    buckets: [Vec<MovieId>; Category::ALL.len()],
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a movie from raw user input.
    ///
    /// Unknown category names are ignored. Fails without touching the catalog
    /// when the title is blank, no known category remains, or the rating is
    /// outside 1-5.
    pub fn add<S: AsRef<str>>(&mut self, title: &str, categories: &[S], rating: u8) -> Result<&Movie> {
        let title = validate_title(title)?;
        let categories = validate_categories(&parse_categories(categories))?;
        let rating = Rating::new(rating)?;
        Ok(self.insert(title, categories, rating))
    }

    /// Add a movie from already-parsed categories.
    pub fn add_movie(&mut self, title: &str, categories: &[Category], rating: Rating) -> Result<&Movie> {
        let title = validate_title(title)?;
        let categories = validate_categories(categories)?;
        Ok(self.insert(title, categories, rating))
    }

    fn insert(&mut self, title: String, categories: Vec<Category>, rating: Rating) -> &Movie {
        let id = MovieId(self.movies.len() as u64);
        for category in &categories {
            self.buckets[category.index()].push(id);
        }
        debug!("Added {} {:?} to {:?}", id, title, categories);
        self.movies.push(Movie::new(id, title, categories, rating));
        &self.movies[self.movies.len() - 1]
    }

    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        usize::try_from(id.get())
            .ok()
            .and_then(|i| self.movies.get(i))
    }

    /// Case-insensitive title substring search.
    ///
    /// An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Movie> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.scan()
            .filter(|movie| movie.title_contains(&needle))
            .collect()
    }

    /// One category's bucket in insertion order.
    pub fn list_by_category(&self, category: Category) -> Vec<&Movie> {
        self.buckets[category.index()]
            .iter()
            .filter_map(|id| self.get(*id))
            .collect()
    }

    /// Like [`Catalog::list_by_category`]; unknown names give an empty list.
    pub fn list_by_category_name(&self, name: &str) -> Vec<&Movie> {
        Category::from_str(name)
            .map(|category| self.list_by_category(category))
            .unwrap_or_default()
    }

    /// Every distinct movie in scan order.
    pub fn movies(&self) -> Vec<&Movie> {
        self.scan().collect()
    }

    /// Number of distinct movies.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Drop every movie.
    pub fn clear(&mut self) {
        self.movies.clear();
        for bucket in &mut self.buckets {
            bucket.clear();
        }
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            total_movies: self.len(),
            categories: Category::ALL
                .iter()
                .map(|&category| CategoryCount {
                    category,
                    count: self.buckets[category.index()].len(),
                })
                .collect(),
        }
    }

    fn scan(&self) -> impl Iterator<Item = &Movie> + '_ {
        let mut seen = HashSet::with_capacity(self.movies.len());
        self.buckets
            .iter()
            .flatten()
            .filter(move |id| seen.insert(**id))
            .filter_map(|id| self.get(*id))
    }

    /// Load records from the file at `path` into this catalog.
    ///
    /// A missing file loads nothing and is not an error. Malformed lines are
    /// skipped. Only an I/O failure is reported; records read before it
    /// stay in the catalog.
    ///
    /// Unknown category names on a line are dropped from the loaded movie, so
    /// saving afterwards writes the line without them.
    pub fn load(&mut self, path: &Path) -> Result<LoadReport> {
        let Some(reader) = persist::open_for_read(path)? else {
            debug!("No catalog file at {}, starting empty", path.display());
            return Ok(LoadReport::default());
        };
        let report = self.load_from_reader(reader).map_err(|e| match e {
            CatalogError::Io {
                message,
                path: None,
                source,
            } => CatalogError::Io {
                message,
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        })?;
        info!(
            "Loaded {} movies from {} ({} skipped)",
            report.loaded,
            path.display(),
            report.skipped
        );
        Ok(report)
    }

    /// Load records line by line from any buffered reader.
    ///
    /// A line that is not valid UTF-8 counts as malformed.
    pub fn load_from_reader<R: BufRead>(&mut self, mut reader: R) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        let mut buf = Vec::new();
        let mut line_number = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            let Ok(text) = std::str::from_utf8(&buf) else {
                debug!("Skipping line {}: not valid UTF-8", line_number);
                report.skipped += 1;
                continue;
            };
            let line = text.strip_suffix('\n').unwrap_or(text);
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.trim().is_empty() {
                continue;
            }
            match parse_record(line) {
                Ok(record) => {
                    self.insert(record.title, record.categories, record.rating);
                    report.loaded += 1;
                }
                Err(e) => {
                    debug!("Skipping line {}: {}", line_number, e);
                    report.skipped += 1;
                }
            }
        }
        if report.skipped > 0 {
            warn!("Skipped {} malformed catalog lines", report.skipped);
        }
        Ok(report)
    }

    /// Write every distinct movie to `writer`, one record per line.
    ///
    /// Returns the number of records written.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<usize> {
        let mut count = 0;
        for movie in self.scan() {
            writeln!(writer, "{}", format_record(movie))?;
            count += 1;
        }
        writer.flush()?;
        Ok(count)
    }

    /// Replace the file at `path` with the current catalog.
    pub fn save(&self, path: &Path) -> Result<usize> {
        self.save_inner(path, false)
    }

    /// Like [`Catalog::save`], keeping the previous file as `<name>.bak`.
    pub fn save_with_backup(&self, path: &Path) -> Result<usize> {
        self.save_inner(path, true)
    }

    fn save_inner(&self, path: &Path, keep_backup: bool) -> Result<usize> {
        let mut buffer = Vec::new();
        let count = self.write_to(&mut buffer)?;
        persist::atomic_write(path, &buffer, keep_backup)?;
        info!("Saved {} movies to {}", count, path.display());
        Ok(count)
    }
}
