//! The in-memory library: an ordered sequence of book records.
//!
//! All operations are whole-value transforms over a small list; persistence
//! is the caller's concern (see [`crate::store::LibraryStore`]).

use serde::{Deserialize, Serialize};

use crate::types::{Book, SearchField};

/// An ordered collection of [`Book`] records, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library {
    books: Vec<Book>,
}

/// Summary statistics over a [`Library`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LibrarySummary {
    pub total: usize,
    pub read_count: usize,
    /// `read_count / total * 100`, or 0.0 for an empty library.
    pub percent_read: f64,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library from records already in order.
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// The full ordered sequence, for display or export.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Append a record at the end. Duplicate titles are allowed; no field
    /// validation happens here.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Remove the first record whose title equals `title` exactly.
    ///
    /// Returns the removed record, or `None` (library unchanged) when no
    /// title matches. Relative order of the remaining records is preserved.
    pub fn remove_first(&mut self, title: &str) -> Option<Book> {
        let idx = self.books.iter().position(|b| b.title == title)?;
        Some(self.books.remove(idx))
    }

    /// Lazily yield records whose `field` contains `query` as a
    /// case-insensitive substring. An empty query matches every record.
    pub fn search<'a>(
        &'a self,
        field: SearchField,
        query: &str,
    ) -> impl Iterator<Item = &'a Book> {
        let query = query.to_lowercase();
        self.books.iter().filter(move |book| {
            let haystack = match field {
                SearchField::Title => &book.title,
                SearchField::Author => &book.author,
            };
            haystack.to_lowercase().contains(&query)
        })
    }

    /// Count totals and the percentage of books marked read.
    pub fn summary(&self) -> LibrarySummary {
        let total = self.books.len();
        let read_count = self.books.iter().filter(|b| b.read).count();
        let percent_read = if total > 0 {
            read_count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        LibrarySummary {
            total,
            read_count,
            percent_read,
        }
    }
}
