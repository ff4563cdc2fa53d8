use chrono::Datelike;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use book_nook_catalog::{Book, LibraryStore, parse_year_loose};

use crate::CliError;

use super::load_library;

pub(crate) fn run_add(
    store: &LibraryStore,
    title: String,
    author: String,
    year: Option<String>,
    genre: String,
    read: bool,
) -> Result<(), CliError> {
    // The original form pre-filled the current year; an explicit value is
    // coerced, never rejected.
    let year = match year {
        Some(raw) => parse_year_loose(&raw),
        None => chrono::Local::now().year(),
    };

    let mut library = load_library(store);
    library.add(Book {
        title: title.clone(),
        author,
        year,
        genre,
        read,
    });
    store.save(&library)?;

    log::info!(
        "{} {}",
        "Added".if_supports_color(Stdout, |t| t.green()),
        title.if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}
