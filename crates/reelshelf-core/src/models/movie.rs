//! Movie value type.

use crate::config::{Category, RatingConfig};
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

/// Identity of a movie within one catalog.
///
/// Assigned in insertion order. Two movies with the same title, categories
/// and rating added separately get different ids and are kept as two entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MovieId(pub(crate) u64);

impl MovieId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Star rating from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const DEFAULT: Rating = Rating(RatingConfig::DEFAULT);

    /// Validate a rating in `RatingConfig::MIN..=RatingConfig::MAX`.
    pub fn new(value: u8) -> Result<Self> {
        if (RatingConfig::MIN..=RatingConfig::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(CatalogError::validation(
                "rating",
                format!(
                    "Rating must be between {} and {}, got {}.",
                    RatingConfig::MIN,
                    RatingConfig::MAX,
                    value
                ),
            ))
        }
    }

    /// Saturate any integer into range, the way a spinner control would.
    pub fn clamped(value: i64) -> Self {
        let min = i64::from(RatingConfig::MIN);
        let max = i64::from(RatingConfig::MAX);
        Rating(value.clamp(min, max) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating::DEFAULT
    }
}

impl TryFrom<u8> for Rating {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, RatingConfig::MAX)
    }
}

/// One cataloged movie. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    id: MovieId,
    title: String,
    categories: Vec<Category>,
    rating: Rating,
}

impl Movie {
    /// Inputs are expected to be validated by the catalog: `title` trimmed and
    /// non-empty, `categories` non-empty and duplicate-free.
    pub(crate) fn new(id: MovieId, title: String, categories: Vec<Category>, rating: Rating) -> Self {
        debug_assert!(!title.trim().is_empty());
        debug_assert!(!categories.is_empty());
        Self {
            id,
            title,
            categories,
            rating,
        }
    }

    pub fn id(&self) -> MovieId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Categories in the order they were declared.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn in_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Case-insensitive substring match on the title.
    ///
    /// `needle_lower` must already be lowercased.
    pub(crate) fn title_contains(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.categories.iter().map(Category::as_str).collect();
        write!(f, "{} ({}) - {}", self.title, names.join(", "), self.rating)
    }
}
