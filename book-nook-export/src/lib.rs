//! Tabular export of the book library.
//!
//! Exporters consume the ordered record list from `book-nook-catalog` and
//! write it to a file on disk. CSV is the only format currently implemented.

pub mod csv_export;
pub mod error;

pub use csv_export::CsvExporter;
pub use error::ExportError;

use std::path::Path;

use book_nook_catalog::Book;

/// Trait for tabular library exporters.
pub trait Exporter {
    fn name(&self) -> &'static str;

    /// File extension (without dot) for this format's output.
    fn file_extension(&self) -> &'static str;

    /// Write the library, one row per record in catalog order.
    fn write_catalog(&self, books: &[Book], output: &Path) -> Result<(), ExportError>;
}
