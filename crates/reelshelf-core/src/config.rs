//! Centralized configuration for the movie catalog.
//!
//! Constants for the persistence format and rating bounds, and the closed
//! list of categories a movie can be filed under.

use serde::Serialize;

/// Persistence file defaults and record format.
pub struct PersistenceConfig;

impl PersistenceConfig {
    pub const DEFAULT_FILE_NAME: &'static str = "movies.txt";
    pub const BACKUP_EXTENSION: &'static str = "bak";
    pub const FIELD_SEPARATOR: char = '|';
    pub const CATEGORY_SEPARATOR: char = ',';
    pub const ESCAPE: char = '\\';
    pub const FIELD_COUNT: usize = 3;
}

/// Rating bounds.
pub struct RatingConfig;

impl RatingConfig {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const DEFAULT: u8 = 3;
}

/// Fixed set of categories, in display order.
///
/// The declared order is significant: catalog scans (search, listing every
/// movie, save) visit categories in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Action,
    Romance,
    Horror,
    Comedy,
    Kids,
    Drama,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Fantasy,
    Documentary,
}

impl Category {
    /// Every category in declared order.
    pub const ALL: [Category; 9] = [
        Category::Action,
        Category::Romance,
        Category::Horror,
        Category::Comedy,
        Category::Kids,
        Category::Drama,
        Category::SciFi,
        Category::Fantasy,
        Category::Documentary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Action => "Action",
            Category::Romance => "Romance",
            Category::Horror => "Horror",
            Category::Comedy => "Comedy",
            Category::Kids => "Kids",
            Category::Drama => "Drama",
            Category::SciFi => "Sci-Fi",
            Category::Fantasy => "Fantasy",
            Category::Documentary => "Documentary",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a category name.
    ///
    /// Exact display names match first; otherwise the comparison ignores
    /// case and surrounding whitespace, so `"sci-fi"` is `Sci-Fi`.
    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(exact) = Self::ALL.iter().find(|c| c.as_str() == s) {
            return Some(*exact);
        }
        let wanted = s.trim();
        Self::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .copied()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
