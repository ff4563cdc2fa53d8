use book_nook_catalog::LibraryStore;

use crate::CliError;

use super::{load_library, print_book_table};

pub(crate) fn run_list(store: &LibraryStore) -> Result<(), CliError> {
    let library = load_library(store);

    if library.is_empty() {
        log::info!("Your library is empty.");
        return Ok(());
    }

    let books: Vec<_> = library.books().iter().collect();
    print_book_table(&books);
    crate::log_blank();
    log::info!("{} books.", library.len());
    Ok(())
}
