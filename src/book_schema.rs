//! A file containing all the structs and enums that build the GraphQL schema
use async_graphql::{ComplexObject, Enum, SimpleObject};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Needed for fetching ---
/// The representation of a book
// The title is what every lookup keys on; the id only marks record identity.
#[derive(SimpleObject, Clone, Debug, Serialize, Deserialize)]
#[graphql(complex)]
pub struct Book {
    /// The identity of the record. Assigned once at insert, never reused.
    pub id: Uuid,
    /// The title of the book. Lookups match it exactly, casing included.
    pub title: String,
    /// The people who authored the book.
    pub author: String,
    /// The publication year, if one was recorded.
    pub year: Option<i32>,
    /// The edition of the book.
    pub edition: String,
}

/// The derived views, computed from the stored fields on every read.
#[ComplexObject]
impl Book {
    /// The edition/year pair of the book.
    async fn addition(&self) -> Addition {
        self.into()
    }

    /// The edition and year joined into a single display string.
    async fn editorial(&self) -> Editorial {
        self.into()
    }
}

/// A book's edition and year, viewed together. Never stored.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Addition {
    /// The edition of the book.
    pub edition: String,
    /// The publication year, if one was recorded.
    pub year: Option<i32>,
}

impl From<&Book> for Addition {
    fn from(book: &Book) -> Self {
        Self {
            edition: book.edition.clone(),
            year: book.year,
        }
    }
}

/// A book's edition and year as one display string. Never stored.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Editorial {
    /// The edition and year separated by a space. A book without a recorded
    /// year gets the marker `unknown` in place of the number.
    pub complete: String,
}

impl From<&Book> for Editorial {
    fn from(book: &Book) -> Self {
        let complete = match book.year {
            Some(year) => format!("{} {year}", book.edition),
            None => format!("{} unknown", book.edition),
        };
        Self { complete }
    }
}

/// Whether a listed book needs to have a publication year on record.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum YearFilter {
    /// Only books with a recorded year.
    Present,
    /// Only books without one.
    Absent,
}

// --- Needed for mutating ---
/// The fields of a book to insert, before an id exists for it.
#[derive(Clone, Debug)]
pub struct NewBook {
    /// The title of the book. Must not be on the shelf already.
    pub title: String,
    /// The people who authored the book.
    pub author: String,
    /// The publication year.
    pub year: i32,
    /// The edition of the book.
    pub edition: String,
}

/// A full replacement for a stored book. The book to replace is named
/// separately, by its current title; the title in here is the new one.
#[derive(Clone, Debug)]
pub struct BookUpdate {
    /// The title the book will be filed under from now on.
    pub title: String,
    /// The people who authored the book.
    pub author: String,
    /// The publication year.
    pub year: i32,
    /// The edition of the book.
    pub edition: String,
}
