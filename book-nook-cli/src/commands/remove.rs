use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use book_nook_catalog::LibraryStore;

use crate::CliError;

use super::load_library;

pub(crate) fn run_remove(store: &LibraryStore, title: &str) -> Result<(), CliError> {
    let mut library = load_library(store);

    // Only the first exact title match goes; a miss is a no-op, not an error.
    match library.remove_first(title) {
        Some(removed) => {
            store.save(&library)?;
            log::info!(
                "{} {} ({})",
                "Removed".if_supports_color(Stdout, |t| t.green()),
                removed.title.if_supports_color(Stdout, |t| t.bold()),
                removed.author,
            );
        }
        None => {
            log::info!(
                "No book titled {} found.",
                title.if_supports_color(Stdout, |t| t.bold()),
            );
        }
    }
    Ok(())
}
