use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use book_nook_catalog::LibraryStore;
use book_nook_export::{CsvExporter, Exporter};

use crate::CliError;

use super::load_library;

pub(crate) fn run_export(store: &LibraryStore, output: Option<PathBuf>) -> Result<(), CliError> {
    let library = load_library(store);

    if library.is_empty() {
        log::info!("Your library is empty; nothing to export.");
        return Ok(());
    }

    let exporter = CsvExporter::new();
    let output =
        output.unwrap_or_else(|| store.path().with_extension(exporter.file_extension()));

    exporter.write_catalog(library.books(), &output)?;

    log::info!(
        "{} {} books to {} ({})",
        "Exported".if_supports_color(Stdout, |t| t.green()),
        library.len(),
        output.display().if_supports_color(Stdout, |t| t.cyan()),
        exporter.name(),
    );
    Ok(())
}
