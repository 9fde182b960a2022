//! The query and mutation roots the GraphQL schema is built from.
//!
//! The resolvers stay thin: they bundle their arguments into the typed
//! structs from [`book_schema`](crate::book_schema) and let the store do the
//! work. Missing books resolve to null; only a title collision is an actual
//! GraphQL error.
use crate::book_schema::{Book, BookUpdate, NewBook, YearFilter};
use crate::errors::StoreError;
use crate::store::BookStore;
use async_graphql::{ErrorExtensions, Object, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// The read side of the schema.
pub struct Query {
    /// The shared shelf.
    pub store: Arc<BookStore>,
}

#[Object]
impl Query {
    /// All books on the shelf, oldest first. Pass `year` to keep only the
    /// books with (or without) a recorded publication year.
    async fn all_books(&self, year: Option<YearFilter>) -> Vec<Book> {
        self.store.all(year)
    }

    /// How many books are on the shelf.
    async fn book_count(&self) -> usize {
        self.store.count()
    }

    /// The book filed under exactly this title, if any. Matching is
    /// case-sensitive.
    async fn find_book(&self, title: String) -> Option<Book> {
        let found = self.store.find_by_title(&title);
        debug!(%title, found = found.is_some(), "looked up book");
        found
    }
}

/// The write side of the schema.
pub struct Mutation {
    /// The shared shelf.
    pub store: Arc<BookStore>,
}

#[Object]
impl Mutation {
    /// Adds a book to the shelf. Fails with a `BAD_USER_INPUT` error when
    /// the title is already taken.
    async fn add_book(
        &self,
        title: String,
        author: String,
        year: i32,
        edition: String,
    ) -> Result<Book> {
        let new = NewBook {
            title,
            author,
            year,
            edition,
        };
        let book = self.store.insert(new).map_err(graphql_error)?;
        info!(id = %book.id, title = %book.title, "added book");
        Ok(book)
    }

    /// Records a publication year on the book with this exact title.
    /// Resolves to null when no book matches.
    async fn edit_year(&self, title: String, year: i32) -> Option<Book> {
        self.store.edit_year(&title, year)
    }

    /// Replaces the book currently filed under `title`. The record keeps its
    /// id but takes every other field, its title included, from the
    /// arguments; from then on it is looked up as `newTitle`. Resolves to
    /// null when no book matches, and fails with a `BAD_USER_INPUT` error
    /// when `newTitle` belongs to another book.
    async fn update_book(
        &self,
        title: String,
        new_title: String,
        author: String,
        year: i32,
        edition: String,
    ) -> Result<Option<Book>> {
        let update = BookUpdate {
            title: new_title,
            author,
            year,
            edition,
        };
        let updated = self.store.update(&title, update).map_err(graphql_error)?;
        if let Some(book) = &updated {
            info!(id = %book.id, title = %book.title, "replaced book");
        }
        Ok(updated)
    }
}

/// Maps a store error onto the wire, extensions included.
fn graphql_error(err: StoreError) -> async_graphql::Error {
    debug!(%err, "rejected mutation");
    err.extend()
}
