//! CSV export: one header row, then one row per book in catalog order.

use std::fs;
use std::path::Path;

use book_nook_catalog::Book;

use crate::{Exporter, ExportError};

/// Column headers, in the record field order.
const HEADERS: [&str; 5] = ["Title", "Author", "Year", "Genre", "Read"];

/// Comma-separated values exporter.
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for CsvExporter {
    fn name(&self) -> &'static str {
        "CSV"
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }

    fn write_catalog(&self, books: &[Book], output: &Path) -> Result<(), ExportError> {
        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(output)?;
        writer.write_record(HEADERS)?;

        for book in books {
            let year = book.year.to_string();
            writer.write_record([
                book.title.as_str(),
                book.author.as_str(),
                year.as_str(),
                book.genre.as_str(),
                if book.read { "Yes" } else { "No" },
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}
