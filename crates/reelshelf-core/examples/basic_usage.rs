//! Basic usage example - open a catalog, add a movie, search, save

use reelshelf_core::{MovieOrganizer, Result};

fn main() -> Result<()> {
    // Get path and query from args
    let args: Vec<String> = std::env::args().collect();
    let path = args.get(1).map(|s| s.as_str()).unwrap_or("./example-movies");
    let query = args.get(2).map(|s| s.as_str()).unwrap_or("incep");

    println!("Opening catalog in: {}", path);

    let mut organizer = MovieOrganizer::builder(path)
        .auto_create_dirs(true)
        .build()?;

    if organizer.search_by_title("Inception").is_empty() {
        let movie = organizer.add_movie("Inception", &["Sci-Fi", "Action"], 5)?;
        println!("Added {}", movie);
    }

    println!("Searching for '{}'...", query);
    for movie in organizer.search_by_title(query) {
        println!("  - {}", movie);
    }

    let saved = organizer.save_to_default_location()?;
    println!("Saved {} movies to {}", saved, organizer.data_file().display());

    Ok(())
}
