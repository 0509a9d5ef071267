//! Command handlers.

use anyhow::Result;
use reelshelf_core::{Category, Movie, MovieOrganizer};
use serde::Serialize;
use tracing::warn;

/// How results are printed.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    fn print<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            let text = text();
            if !text.is_empty() {
                println!("{}", text);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddResponse<'a> {
    success: bool,
    movie: &'a Movie,
    saved_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MovieList<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
    count: usize,
    movies: &'a [Movie],
}

fn lines(movies: &[Movie]) -> String {
    movies
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn add(
    organizer: &mut MovieOrganizer,
    title: &str,
    categories: &[String],
    rating: u8,
    output: Output,
) -> Result<()> {
    let movie = organizer.add_movie(title, categories, rating)?;
    let saved_count = organizer.save_to_default_location()?;

    let response = AddResponse {
        success: true,
        movie: &movie,
        saved_count,
    };
    output.print(&response, || format!("Your movie was added!\n{}", movie))
}

pub fn search(organizer: &MovieOrganizer, query: &str, output: Output) -> Result<()> {
    let movies = organizer.search_by_title(query);
    let list = MovieList {
        query: Some(query),
        category: None,
        count: movies.len(),
        movies: &movies,
    };
    output.print(&list, || lines(&movies))
}

pub fn list(organizer: &MovieOrganizer, category: Option<&str>, output: Output) -> Result<()> {
    let (category, movies) = match category {
        None => (None, organizer.list_all()),
        Some(name) => match Category::from_str(name) {
            Some(category) => (Some(category), organizer.list_by_category(category)),
            None => {
                warn!("Unknown category {:?}", name);
                (None, Vec::new())
            }
        },
    };
    let list = MovieList {
        query: None,
        category,
        count: movies.len(),
        movies: &movies,
    };
    output.print(&list, || lines(&movies))
}

pub fn categories(organizer: &MovieOrganizer, output: Output) -> Result<()> {
    let categories = organizer.categories();
    output.print(&categories, || {
        categories
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    })
}

pub fn stats(organizer: &MovieOrganizer, output: Output) -> Result<()> {
    let stats = organizer.stats();
    output.print(&stats, || {
        let mut text = format!("Movies: {}", stats.total_movies);
        for entry in &stats.categories {
            text.push_str(&format!("\n  {:<12} {}", entry.category.as_str(), entry.count));
        }
        text
    })
}
