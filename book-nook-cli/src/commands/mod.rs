pub(crate) mod add;
pub(crate) mod config;
pub(crate) mod export;
pub(crate) mod info;
pub(crate) mod list;
pub(crate) mod remove;
pub(crate) mod search;
pub(crate) mod stats;

use book_nook_catalog::{Book, Library, LibraryStore};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Load the library, treating a missing or unreadable file as empty.
///
/// The store reports the cause; the CLI's policy is to start fresh and keep
/// the reason at debug level.
pub(crate) fn load_library(store: &LibraryStore) -> Library {
    match store.load() {
        Ok(library) => library,
        Err(e) => {
            log::debug!("Starting with an empty library: {e}");
            Library::new()
        }
    }
}

/// Truncate a string to a maximum width, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let cut: String = s.chars().take(max - 3).collect();
        format!("{}...", cut)
    } else {
        s.chars().take(max).collect()
    }
}

/// Print book records as an aligned table with a bold header row.
pub(crate) fn print_book_table(books: &[&Book]) {
    let header = format!(
        "{:<32} {:<24} {:>6}  {:<16} {:<5}",
        "Title", "Author", "Year", "Genre", "Read",
    );
    log::info!("{}", header.if_supports_color(Stdout, |t| t.bold()));

    for book in books {
        log::info!(
            "{:<32} {:<24} {:>6}  {:<16} {:<5}",
            truncate_str(&book.title, 32),
            truncate_str(&book.author, 24),
            book.year,
            truncate_str(&book.genre, 16),
            if book.read { "Yes" } else { "No" },
        );
    }
}
