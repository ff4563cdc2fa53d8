use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn run_info() -> Result<(), CliError> {
    log::info!(
        "{}",
        "book-nook: your personal book library".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();
    log::info!("Track the books you own, search them, and see how much you've read.");
    crate::log_blank();
    log::info!("  add      Add a book (title, author, year, genre, read flag)");
    log::info!("  remove   Remove a book by exact title (first match)");
    log::info!("  search   Find books by title or author substring");
    log::info!("  list     Show the whole library as a table");
    log::info!("  stats    Totals and percentage read");
    log::info!("  export   Write the library to a CSV spreadsheet");
    log::info!("  config   Show where the library file lives");
    crate::log_blank();
    log::info!("The library is one JSON file; pick it with --file, $BOOK_NOOK_LIBRARY,");
    log::info!("or the config file. Run 'book-nook config show' to see what's in effect.");
    Ok(())
}
