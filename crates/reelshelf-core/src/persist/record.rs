//! Line codec for the persistence file.
//!
//! One movie per line:
//!
//! ```text
//! <title>|<category>,<category>,...|<rating>
//! ```
//!
//! A backslash escapes the next character, so titles may contain `|` or `,`.
//! Files without any backslashes read the same as the plain format.

use crate::catalog::validation::parse_categories;
use crate::config::{Category, PersistenceConfig};
use crate::models::{Movie, Rating};
use thiserror::Error;

const FIELD_SEP: char = PersistenceConfig::FIELD_SEPARATOR;
const CATEGORY_SEP: char = PersistenceConfig::CATEGORY_SEPARATOR;
const ESCAPE: char = PersistenceConfig::ESCAPE;

/// Why a line was skipped during load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("rating is not an integer: {0:?}")]
    InvalidRating(String),

    #[error("rating out of range: {0}")]
    RatingOutOfRange(i64),

    #[error("title is empty")]
    EmptyTitle,

    #[error("no known category in {0:?}")]
    NoKnownCategory(String),

    #[error("line ends with an unfinished escape")]
    DanglingEscape,
}

/// Fields of one parsed line, ready to become a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub title: String,
    pub categories: Vec<Category>,
    pub rating: Rating,
}

/// Parse one line of the persistence file.
pub fn parse_record(line: &str) -> Result<Record, RecordError> {
    let fields = split_unescaped(line, FIELD_SEP);
    if fields.len() != PersistenceConfig::FIELD_COUNT {
        return Err(RecordError::FieldCount {
            expected: PersistenceConfig::FIELD_COUNT,
            found: fields.len(),
        });
    }

    let title = unescape(fields[0])?;
    let title = title.trim();
    if title.is_empty() {
        return Err(RecordError::EmptyTitle);
    }

    let names = split_unescaped(fields[1], CATEGORY_SEP)
        .into_iter()
        .map(unescape)
        .collect::<Result<Vec<_>, _>>()?;
    let categories = parse_categories(&names);
    if categories.is_empty() {
        return Err(RecordError::NoKnownCategory(fields[1].to_string()));
    }

    let raw_rating = fields[2].trim();
    let value: i64 = raw_rating
        .parse()
        .map_err(|_| RecordError::InvalidRating(raw_rating.to_string()))?;
    let rating = u8::try_from(value)
        .ok()
        .and_then(|v| Rating::new(v).ok())
        .ok_or(RecordError::RatingOutOfRange(value))?;

    Ok(Record {
        title: title.to_string(),
        categories,
        rating,
    })
}

/// Render a movie as one line, without the trailing newline.
pub fn format_record(movie: &Movie) -> String {
    let categories: Vec<String> = movie
        .categories()
        .iter()
        .map(|c| escape(c.as_str()))
        .collect();
    let category_sep = CATEGORY_SEP.to_string();
    format!(
        "{}{FIELD_SEP}{}{FIELD_SEP}{}",
        escape(movie.title()),
        categories.join(category_sep.as_str()),
        movie.rating().value()
    )
}

/// Escape separators, backslashes and line breaks.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            ESCAPE | FIELD_SEP | CATEGORY_SEP => {
                out.push(ESCAPE);
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Reverse of [`escape`].
pub fn unescape(raw: &str) -> Result<String, RecordError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != ESCAPE {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => return Err(RecordError::DanglingEscape),
        }
    }
    Ok(out)
}

/// Split on `sep` where it is not preceded by an escape. Escapes are kept.
fn split_unescaped(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in text.char_indices() {
        if escaped {
            escaped = false;
        } else if c == ESCAPE {
            escaped = true;
        } else if c == sep {
            parts.push(&text[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&text[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieId;

    fn movie(title: &str, categories: &[Category], rating: u8) -> Movie {
        Movie::new(
            MovieId(0),
            title.to_string(),
            categories.to_vec(),
            Rating::new(rating).unwrap(),
        )
    }

    #[test]
    fn test_parse_plain_line() {
        let record = parse_record("The Matrix|Action,Sci-Fi|5").unwrap();
        assert_eq!(record.title, "The Matrix");
        assert_eq!(record.categories, vec![Category::Action, Category::SciFi]);
        assert_eq!(record.rating.value(), 5);
    }

    #[test]
    fn test_format_plain_movie() {
        let m = movie("Heat", &[Category::Action, Category::Drama], 4);
        assert_eq!(format_record(&m), "Heat|Action,Drama|4");
    }

    #[test]
    fn test_wrong_field_count() {
        assert_eq!(
            parse_record("Only|Two"),
            Err(RecordError::FieldCount {
                expected: 3,
                found: 2
            })
        );
        assert!(matches!(
            parse_record("a|Action|3|extra"),
            Err(RecordError::FieldCount { found: 4, .. })
        ));
    }

    #[test]
    fn test_non_integer_rating() {
        assert_eq!(
            parse_record("Heat|Action|four"),
            Err(RecordError::InvalidRating("four".to_string()))
        );
        assert!(matches!(
            parse_record("Heat|Action|"),
            Err(RecordError::InvalidRating(_))
        ));
    }

    #[test]
    fn test_rating_out_of_range() {
        assert_eq!(
            parse_record("Heat|Action|9"),
            Err(RecordError::RatingOutOfRange(9))
        );
        assert_eq!(
            parse_record("Heat|Action|-1"),
            Err(RecordError::RatingOutOfRange(-1))
        );
    }

    #[test]
    fn test_unknown_categories_are_ignored() {
        let record = parse_record("Shane|Western,Drama|4").unwrap();
        assert_eq!(record.categories, vec![Category::Drama]);

        assert!(matches!(
            parse_record("Shane|Western|4"),
            Err(RecordError::NoKnownCategory(_))
        ));
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(parse_record("  |Action|3"), Err(RecordError::EmptyTitle));
    }

    #[test]
    fn test_separators_in_title_survive() {
        let m = movie("Crouching Tiger, Hidden Dragon | Director's Cut", &[Category::Action], 5);
        let line = format_record(&m);
        assert_eq!(
            line,
            "Crouching Tiger\\, Hidden Dragon \\| Director's Cut|Action|5"
        );
        let record = parse_record(&line).unwrap();
        assert_eq!(record.title, m.title());
    }

    #[test]
    fn test_escape_unescape() {
        let text = "a\\b|c,d\ne\rf";
        let escaped = escape(text);
        assert!(!escaped.contains('\n'));
        assert_eq!(unescape(&escaped).unwrap(), text);
    }

    #[test]
    fn test_dangling_escape() {
        assert_eq!(parse_record("Heat\\"), Err(RecordError::FieldCount { expected: 3, found: 1 }));
        assert_eq!(unescape("abc\\"), Err(RecordError::DanglingEscape));
    }

    #[test]
    fn test_rating_whitespace_tolerated() {
        assert_eq!(parse_record("Up|Kids| 4 ").unwrap().rating.value(), 4);
    }
}
