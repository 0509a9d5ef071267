//! Summary types returned by catalog operations.

use crate::config::Category;
use serde::Serialize;

/// Outcome of loading a persistence file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReport {
    /// Records turned into movies.
    pub loaded: usize,
    /// Non-blank lines dropped as malformed.
    pub skipped: usize,
}

/// Number of movies filed under one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Catalog size overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    /// Distinct movies, regardless of how many categories each one is in.
    pub total_movies: usize,
    /// One entry per category in declared order, including empty ones.
    pub categories: Vec<CategoryCount>,
}
