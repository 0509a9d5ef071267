//! Integration tests for the MovieOrganizer public interface.
//!
//! These tests go through the same calls a front end makes: open the
//! catalog, add and search movies, save and reopen.

use reelshelf_core::{Category, CatalogError, MovieOrganizer, MISSING_INPUT_MESSAGE};
use std::collections::BTreeSet;
use tempfile::TempDir;

/// Create a test environment with an empty data directory.
fn create_test_env() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

fn triples(organizer: &MovieOrganizer) -> BTreeSet<(String, Vec<Category>, u8)> {
    organizer
        .list_all()
        .iter()
        .map(|m| (m.title().to_string(), m.categories().to_vec(), m.rating().value()))
        .collect()
}

#[test]
fn test_organizer_creation_succeeds() {
    let temp_dir = create_test_env();
    let organizer = MovieOrganizer::new(temp_dir.path()).unwrap();
    assert!(organizer.catalog().is_empty());
    assert!(organizer.data_file().ends_with("movies.txt"));
    assert_eq!(organizer.data_dir(), temp_dir.path());
}

#[test]
fn test_organizer_creation_fails_for_nonexistent_path() {
    let result = MovieOrganizer::new("/nonexistent/path/that/does/not/exist");
    assert!(matches!(result, Err(CatalogError::Config { .. })));
}

#[test]
fn test_added_movie_appears_once_in_each_category() {
    let temp_dir = create_test_env();
    let mut organizer = MovieOrganizer::new(temp_dir.path()).unwrap();

    let movie = organizer
        .add_movie("Spirited Away", &["Kids", "Fantasy", "Drama"], 5)
        .unwrap();

    for category in movie.categories() {
        let bucket = organizer.list_by_category(*category);
        assert_eq!(bucket.iter().filter(|m| m.id() == movie.id()).count(), 1);
    }
    assert!(organizer.list_by_category(Category::Horror).is_empty());
}

#[test]
fn test_invalid_add_leaves_catalog_unchanged() {
    let temp_dir = create_test_env();
    let mut organizer = MovieOrganizer::new(temp_dir.path()).unwrap();
    organizer.add_movie("Heat", &["Action"], 4).unwrap();

    let err = organizer.add_movie("", &["Action"], 3).unwrap_err();
    assert_eq!(err.to_string(), MISSING_INPUT_MESSAGE);

    let none: Vec<String> = Vec::new();
    let err = organizer.add_movie("Heat 2", &none, 3).unwrap_err();
    assert_eq!(err.to_string(), MISSING_INPUT_MESSAGE);

    assert_eq!(organizer.list_all().len(), 1);
    assert_eq!(organizer.stats().total_movies, 1);
}

#[test]
fn test_search_by_title() {
    let temp_dir = create_test_env();
    let mut organizer = MovieOrganizer::new(temp_dir.path()).unwrap();
    organizer.add_movie("Inception", &["Sci-Fi"], 5).unwrap();
    organizer.add_movie("Interstellar", &["Sci-Fi", "Drama"], 5).unwrap();

    let found = organizer.search_by_title("incep");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title(), "Inception");

    assert_eq!(organizer.search_by_title("IN").len(), 2);
    assert!(organizer.search_by_title("zzz").is_empty());
    assert!(organizer.search_by_title("").is_empty());
}

#[test]
fn test_save_and_reopen_round_trip() {
    let temp_dir = create_test_env();
    let mut organizer = MovieOrganizer::new(temp_dir.path()).unwrap();
    organizer.add_movie("Amélie", &["Romance", "Comedy"], 5).unwrap();
    organizer.add_movie("The Thing", &["Horror", "Sci-Fi"], 4).unwrap();
    organizer.add_movie("Paddington 2", &["Kids", "Comedy"], 5).unwrap();
    organizer.add_movie("Up", &["Kids"], 4).unwrap();
    assert_eq!(organizer.save_to_default_location().unwrap(), 4);

    let reopened = MovieOrganizer::new(temp_dir.path()).unwrap();
    assert_eq!(triples(&organizer), triples(&reopened));
}

#[test]
fn test_multi_category_movie_saved_once() {
    let temp_dir = create_test_env();
    let mut organizer = MovieOrganizer::new(temp_dir.path()).unwrap();
    organizer
        .add_movie("Shrek", &["Kids", "Comedy", "Fantasy"], 5)
        .unwrap();
    organizer.save_to_default_location().unwrap();

    let contents = std::fs::read_to_string(organizer.data_file()).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert_eq!(organizer.search_by_title("shrek").len(), 1);
}

#[test]
fn test_malformed_line_is_ignored_on_load() {
    let temp_dir = create_test_env();
    std::fs::write(
        temp_dir.path().join("movies.txt"),
        "Heat|Action|4\nMissing Rating|Drama\n",
    )
    .unwrap();

    let organizer = MovieOrganizer::new(temp_dir.path()).unwrap();
    let all = organizer.list_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title(), "Heat");
}

#[test]
fn test_non_utf8_line_does_not_block_startup() {
    let temp_dir = create_test_env();
    std::fs::write(
        temp_dir.path().join("movies.txt"),
        b"Heat|Action|4\nAm\xe9lie|Romance|5\nUp|Kids|5\n",
    )
    .unwrap();

    let mut organizer = MovieOrganizer::new(temp_dir.path()).unwrap();
    assert_eq!(organizer.list_all().len(), 2);
    assert!(organizer.list_by_category(Category::Romance).is_empty());

    let report = organizer.load_from_default_location().unwrap();
    assert_eq!((report.loaded, report.skipped), (2, 1));
    organizer.add_movie("Amélie", &["Romance"], 5).unwrap();
}

#[test]
fn test_plain_format_file_loads() {
    let temp_dir = create_test_env();
    std::fs::write(
        temp_dir.path().join("movies.txt"),
        "Alien|Horror,Sci-Fi|5\nToy Story|Kids,Comedy|4\nNosferatu|Horror,Silent|3\n",
    )
    .unwrap();

    let organizer = MovieOrganizer::new(temp_dir.path()).unwrap();
    assert_eq!(organizer.list_by_category(Category::Horror).len(), 2);
    assert_eq!(organizer.list_by_category(Category::Comedy).len(), 1);
    let nosferatu = &organizer.search_by_title("nosferatu")[0];
    assert_eq!(nosferatu.categories(), &[Category::Horror]);
}

#[test]
fn test_titles_with_separators_round_trip() {
    let temp_dir = create_test_env();
    let mut organizer = MovieOrganizer::new(temp_dir.path()).unwrap();
    organizer
        .add_movie("Sex, Lies, and Videotape", &["Drama"], 4)
        .unwrap();
    organizer.add_movie("Either|Or", &["Documentary"], 2).unwrap();
    organizer.save_to_default_location().unwrap();

    let reopened = MovieOrganizer::new(temp_dir.path()).unwrap();
    assert_eq!(triples(&organizer), triples(&reopened));
}

#[test]
fn test_backup_option() {
    let temp_dir = create_test_env();
    let mut organizer = MovieOrganizer::builder(temp_dir.path())
        .keep_backup(true)
        .build()
        .unwrap();
    organizer.add_movie("Heat", &["Action"], 4).unwrap();
    organizer.save_to_default_location().unwrap();
    organizer.add_movie("Up", &["Kids"], 4).unwrap();
    organizer.save_to_default_location().unwrap();

    let backup = temp_dir.path().join("movies.txt.bak");
    assert_eq!(std::fs::read_to_string(backup).unwrap(), "Heat|Action|4\n");
}
