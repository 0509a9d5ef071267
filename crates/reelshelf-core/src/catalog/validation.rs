//! Input checks applied before a movie is created.

use crate::config::Category;
use crate::error::{CatalogError, Result};
use tracing::debug;

/// Shown when the title or the category selection is missing.
pub const MISSING_INPUT_MESSAGE: &str = "Please type a title and choose at least one category.";

/// Trim a title and reject it when nothing is left.
pub fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::validation("title", MISSING_INPUT_MESSAGE));
    }
    Ok(trimmed.to_string())
}

/// Resolve category names against the fixed list.
///
/// Unknown names are dropped. The result keeps first-occurrence order and
/// contains no duplicates.
pub fn parse_categories<S: AsRef<str>>(names: &[S]) -> Vec<Category> {
    let mut categories = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        match Category::from_str(name) {
            Some(category) => categories.push(category),
            None => debug!("Ignoring unknown category {:?}", name),
        }
    }
    dedupe_categories(&categories)
}

/// Reject an empty category selection, collapsing duplicates.
pub fn validate_categories(categories: &[Category]) -> Result<Vec<Category>> {
    let categories = dedupe_categories(categories);
    if categories.is_empty() {
        return Err(CatalogError::validation("categories", MISSING_INPUT_MESSAGE));
    }
    Ok(categories)
}

fn dedupe_categories(categories: &[Category]) -> Vec<Category> {
    let mut seen = [false; Category::ALL.len()];
    let mut result = Vec::with_capacity(categories.len());
    for &category in categories {
        if !std::mem::replace(&mut seen[category.index()], true) {
            result.push(category);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title_trims() {
        assert_eq!(validate_title("  Heat ").unwrap(), "Heat");
    }

    #[test]
    fn test_validate_title_rejects_blank() {
        for title in ["", "   ", "\t\n"] {
            let err = validate_title(title).unwrap_err();
            match err {
                CatalogError::Validation { field, message } => {
                    assert_eq!(field, "title");
                    assert_eq!(message, MISSING_INPUT_MESSAGE);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_categories_drops_unknown_and_duplicates() {
        let parsed = parse_categories(&["Drama", "Western", "drama", "Kids", ""]);
        assert_eq!(parsed, vec![Category::Drama, Category::Kids]);
    }

    #[test]
    fn test_validate_categories_rejects_empty() {
        let err = validate_categories(&[]).unwrap_err();
        assert!(matches!(err, CatalogError::Validation { ref field, .. } if field == "categories"));
    }

    #[test]
    fn test_validate_categories_keeps_declared_order() {
        let categories =
            validate_categories(&[Category::Fantasy, Category::Action, Category::Fantasy]).unwrap();
        assert_eq!(categories, vec![Category::Fantasy, Category::Action]);
    }
}
