//! Book library data model and flat-file persistence.
//!
//! This crate defines the persistent data model for a personal book library
//! without any UI dependencies. Consumers can use these types directly for
//! display, searching, or passing to `book-nook-export` for tabular output.

pub mod library;
pub mod store;
pub mod types;

pub use library::{Library, LibrarySummary};
pub use store::{LibraryStore, StoreError};
pub use types::{Book, SearchField, parse_year_loose};
