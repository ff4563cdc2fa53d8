//! Data model types for the book library.
//!
//! These types represent the persisted library schema: book records and the
//! fields they can be searched by.

use serde::{Deserialize, Serialize};

// ── Book ────────────────────────────────────────────────────────────────────

/// One book record, loaded from and saved to the library file.
///
/// There is no identifier field; records are identified by position, and
/// removal matches on `title` (first match wins, duplicates are allowed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Publication year. `0` when the user's input wasn't numeric.
    pub year: i32,
    pub genre: String,
    /// Whether the user has read this book.
    pub read: bool,
}

// ── Search ──────────────────────────────────────────────────────────────────

/// A field of [`Book`] that the library can be searched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
        }
    }

    pub fn from_str_loose(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "author" => Self::Author,
            _ => Self::Title,
        }
    }
}

// ── Year parsing ────────────────────────────────────────────────────────────

/// Parse a user-supplied publication year, coercing anything non-numeric to 0.
///
/// Leading/trailing whitespace is forgiven; nothing is ever rejected.
pub fn parse_year_loose(s: &str) -> i32 {
    s.trim().parse().unwrap_or(0)
}
