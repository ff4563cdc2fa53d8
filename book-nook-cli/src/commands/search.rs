use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use book_nook_catalog::{LibraryStore, SearchField};

use crate::CliError;

use super::{load_library, print_book_table};

pub(crate) fn run_search(
    store: &LibraryStore,
    field: SearchField,
    query: &str,
) -> Result<(), CliError> {
    let library = load_library(store);
    let results: Vec<_> = library.search(field, query).collect();

    if results.is_empty() {
        log::info!(
            "No matching books found ({} contains \"{}\").",
            field.as_str(),
            query,
        );
        return Ok(());
    }

    log::info!(
        "{} {} matching {} \"{}\":",
        results.len(),
        if results.len() == 1 { "book" } else { "books" },
        field.as_str(),
        query.if_supports_color(Stdout, |t| t.cyan()),
    );
    crate::log_blank();
    print_book_table(&results);
    Ok(())
}
