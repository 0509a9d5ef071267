//! Reelshelf - command-line front end for the movie catalog.
//!
//! Loads the catalog file at startup, runs one command, and writes the file
//! back after any command that changed the catalog.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use reelshelf_core::{CatalogError, MovieOrganizer, PersistenceConfig, RatingConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "reelshelf")]
#[command(about = "Catalog movies by title, category and rating")]
struct Args {
    /// Directory holding the catalog file
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Catalog file name inside the data directory
    #[arg(long, default_value = PersistenceConfig::DEFAULT_FILE_NAME)]
    file: String,

    /// Keep the previous catalog file as <file>.bak when saving
    #[arg(long)]
    backup: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a movie and save the catalog
    Add {
        /// Movie title
        title: String,

        /// Category, repeat for several (e.g. -c Action -c Sci-Fi)
        #[arg(short, long = "category")]
        categories: Vec<String>,

        /// Rating from 1 to 5
        #[arg(short, long, default_value_t = RatingConfig::DEFAULT)]
        rating: u8,
    },

    /// Find movies whose title contains the query (case-insensitive)
    Search {
        query: String,
    },

    /// List one category, or every movie when no category is given
    List {
        category: Option<String>,
    },

    /// Show the available categories
    Categories,

    /// Show how many movies each category holds
    Stats,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<CatalogError>()
                .map(CatalogError::exit_code)
                .unwrap_or(1);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(args: Args) -> Result<()> {
    debug!("Data directory: {}", args.data_dir.display());

    let mut organizer = MovieOrganizer::builder(&args.data_dir)
        .file_name(&args.file)
        .keep_backup(args.backup)
        .build()?;

    let output = commands::Output { json: args.json };

    match args.command {
        Command::Add {
            title,
            categories,
            rating,
        } => commands::add(&mut organizer, &title, &categories, rating, output),
        Command::Search { query } => commands::search(&organizer, &query, output),
        Command::List { category } => commands::list(&organizer, category.as_deref(), output),
        Command::Categories => commands::categories(&organizer, output),
        Command::Stats => commands::stats(&organizer, output),
    }
}
