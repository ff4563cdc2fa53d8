use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use book_nook_catalog::LibraryStore;

use crate::CliError;

use super::load_library;

pub(crate) fn run_stats(store: &LibraryStore) -> Result<(), CliError> {
    let library = load_library(store);
    let summary = library.summary();

    log::info!(
        "{}",
        "Library Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Library file: {}", store.path().display());
    crate::log_blank();
    log::info!("  Total books:     {:>6}", summary.total);
    log::info!("  Books read:      {:>6}", summary.read_count);
    log::info!("  Percentage read: {:>9.2}%", summary.percent_read);
    Ok(())
}
