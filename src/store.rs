//! A file containing the in-memory store the resolvers run against
use crate::book_schema::{Book, BookUpdate, NewBook, YearFilter};
use crate::errors::StoreError;
use parking_lot::RwLock;
use uuid::Uuid;

/// The shelf of books, shared by every request for the process lifetime.
///
/// Built once at startup and handed to the query and mutation roots behind
/// an [`Arc`](std::sync::Arc). Mutations hold the write lock across their
/// whole lookup-then-replace sequence, so two requests cannot race a lookup
/// against a replacement.
#[derive(Debug, Default)]
pub struct BookStore {
    /// The records, oldest insert first. Insertion order is the only order.
    books: RwLock<Vec<Book>>,
}

impl BookStore {
    /// An empty shelf.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shelf every server starts with.
    ///
    /// The inconsistent casing between the two hunger games records and the
    /// missing year on the second of them are part of the dataset: titles
    /// match exactly or not at all, and a year is genuinely optional.
    #[must_use]
    pub fn seeded() -> Self {
        let books = vec![
            Book {
                id: Uuid::new_v4(),
                title: "The Awakening".to_owned(),
                author: "Kate Chopin".to_owned(),
                year: Some(1986),
                edition: "second".to_owned(),
            },
            Book {
                id: Uuid::new_v4(),
                title: "City of Glass".to_owned(),
                author: "Paul Auster".to_owned(),
                year: Some(1953),
                edition: "first".to_owned(),
            },
            Book {
                id: Uuid::new_v4(),
                title: "the Hunger games".to_owned(),
                author: "Suzanne Collins".to_owned(),
                year: Some(2020),
                edition: "third".to_owned(),
            },
            Book {
                id: Uuid::new_v4(),
                title: "the hunger games catching fire".to_owned(),
                author: "Suzanne Collins".to_owned(),
                year: None,
                edition: "third".to_owned(),
            },
        ];

        Self {
            books: RwLock::new(books),
        }
    }

    /// Returns all books in insertion order, optionally keeping only those
    /// with (or without) a recorded year. The two filtered listings split
    /// the shelf between them with nothing left over.
    #[must_use]
    pub fn all(&self, filter: Option<YearFilter>) -> Vec<Book> {
        let books = self.books.read();
        match filter {
            None => books.clone(),
            Some(YearFilter::Present) => {
                books.iter().filter(|b| b.year.is_some()).cloned().collect()
            }
            Some(YearFilter::Absent) => {
                books.iter().filter(|b| b.year.is_none()).cloned().collect()
            }
        }
    }

    /// The number of books currently on the shelf.
    #[must_use]
    pub fn count(&self) -> usize {
        self.books.read().len()
    }

    /// Returns the book whose title matches the argument. Note that:
    /// - Titles are unique, so there's a maximum of one matching record.
    /// - Matching is syntax-sensitive, meaning the title needs to be spelled
    ///   the EXACT same way it is on the shelf.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<Book> {
        self.books.read().iter().find(|b| b.title == title).cloned()
    }

    /// Adds a book to the end of the shelf and returns it with its fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateTitle`] if a book with the same title
    /// is already on the shelf.
    pub fn insert(&self, new: NewBook) -> Result<Book, StoreError> {
        let mut books = self.books.write();
        if books.iter().any(|b| b.title == new.title) {
            return Err(StoreError::DuplicateTitle {
                title: new.title,
                argument: "title",
            });
        }

        let book = Book {
            id: Uuid::new_v4(),
            title: new.title,
            author: new.author,
            year: Some(new.year),
            edition: new.edition,
        };
        books.push(book.clone());
        Ok(book)
    }

    /// Records a publication year on the book with the given title and
    /// returns the updated record. Returns `None`, leaving the shelf
    /// untouched, if no title matches. Every other field, the id included,
    /// stays as it was.
    pub fn edit_year(&self, title: &str, year: i32) -> Option<Book> {
        let mut books = self.books.write();
        let book = books.iter_mut().find(|b| b.title == title)?;
        book.year = Some(year);
        Some(book.clone())
    }

    /// Replaces every stored field of the book currently filed under
    /// `title`, keeping its id and its place on the shelf. Returns
    /// `Ok(None)` if no title matches.
    ///
    /// The replacement is built field by field rather than merged, so what
    /// is kept from the old record (the id, nothing else) is spelled out
    /// right here.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateTitle`] if the new title is already
    /// taken by a DIFFERENT book; renaming a book to its current title is
    /// allowed.
    pub fn update(&self, title: &str, update: BookUpdate) -> Result<Option<Book>, StoreError> {
        let mut books = self.books.write();
        let Some(index) = books.iter().position(|b| b.title == title) else {
            return Ok(None);
        };

        if books
            .iter()
            .enumerate()
            .any(|(i, b)| i != index && b.title == update.title)
        {
            return Err(StoreError::DuplicateTitle {
                title: update.title,
                argument: "newTitle",
            });
        }

        let book = Book {
            id: books[index].id,
            title: update.title,
            author: update.author,
            year: Some(update.year),
            edition: update.edition,
        };
        books[index] = book.clone();
        Ok(Some(book))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> NewBook {
        NewBook {
            title: "Dune".to_owned(),
            author: "Frank Herbert".to_owned(),
            year: 1965,
            edition: "first".to_owned(),
        }
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn seeded_shelf_holds_four_books_in_seed_order() {
        let store = BookStore::seeded();
        assert_eq!(store.count(), 4);
        assert_eq!(
            titles(&store.all(None)),
            [
                "The Awakening",
                "City of Glass",
                "the Hunger games",
                "the hunger games catching fire",
            ]
        );
    }

    #[test]
    fn find_is_case_sensitive() {
        let store = BookStore::seeded();
        let book = store.find_by_title("City of Glass").unwrap();
        assert_eq!(book.author, "Paul Auster");
        assert_eq!(book.year, Some(1953));

        assert!(store.find_by_title("city of glass").is_none());
        // The seed data itself relies on exact matching to keep these apart.
        assert!(store.find_by_title("the Hunger games").is_some());
        assert!(store.find_by_title("The Hunger Games").is_none());
    }

    #[test]
    fn insert_appends_and_assigns_fresh_ids() {
        let store = BookStore::seeded();
        let book = store.insert(dune()).unwrap();
        assert_eq!(store.count(), 5);
        assert_eq!(store.all(None).last().unwrap().id, book.id);

        let other = store
            .insert(NewBook {
                title: "Dune Messiah".to_owned(),
                ..dune()
            })
            .unwrap();
        assert_ne!(book.id, other.id);
        assert_eq!(
            titles(&store.all(None))[4..],
            ["Dune", "Dune Messiah"]
        );
    }

    #[test]
    fn insert_rejects_a_taken_title() {
        let store = BookStore::seeded();
        store.insert(dune()).unwrap();

        let err = store.insert(dune()).unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateTitle {
                title: "Dune".to_owned(),
                argument: "title",
            }
        );
        // The failed insert must not have touched the shelf.
        assert_eq!(store.count(), 5);
    }

    #[test]
    fn year_filters_partition_the_shelf() {
        let store = BookStore::seeded();
        let present = store.all(Some(YearFilter::Present));
        let absent = store.all(Some(YearFilter::Absent));

        assert!(present.iter().all(|b| b.year.is_some()));
        assert_eq!(
            titles(&absent),
            ["the hunger games catching fire"]
        );
        assert_eq!(present.len() + absent.len(), store.count());
    }

    #[test]
    fn count_tracks_the_listing() {
        let store = BookStore::seeded();
        assert_eq!(store.count(), store.all(None).len());
        store.insert(dune()).unwrap();
        assert_eq!(store.count(), store.all(None).len());
    }

    #[test]
    fn edit_year_keeps_id_and_position() {
        let store = BookStore::seeded();
        let before = store.find_by_title("the hunger games catching fire").unwrap();

        let after = store
            .edit_year("the hunger games catching fire", 2009)
            .unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.year, Some(2009));
        assert_eq!(after.author, before.author);
        assert_eq!(after.edition, before.edition);

        // Still in fourth place, and no longer in the year-less listing.
        assert_eq!(titles(&store.all(None))[3], "the hunger games catching fire");
        assert!(store.all(Some(YearFilter::Absent)).is_empty());
    }

    #[test]
    fn edit_year_on_a_missing_title_changes_nothing() {
        let store = BookStore::seeded();
        let before = store.all(None);

        assert!(store.edit_year("nonexistent-title", 2000).is_none());

        let after = store.all(None);
        assert_eq!(titles(&before), titles(&after));
        assert_eq!(
            before.iter().map(|b| b.year).collect::<Vec<_>>(),
            after.iter().map(|b| b.year).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn update_replaces_fields_but_keeps_the_id() {
        let store = BookStore::seeded();
        let before = store.find_by_title("The Awakening").unwrap();

        let after = store
            .update(
                "The Awakening",
                BookUpdate {
                    title: "The Awakening and Selected Stories".to_owned(),
                    author: "Kate Chopin".to_owned(),
                    year: 1984,
                    edition: "anthology".to_owned(),
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(after.id, before.id);
        assert_eq!(after.edition, "anthology");
        // The rename moved the lookup key with it.
        assert!(store.find_by_title("The Awakening").is_none());
        assert!(
            store
                .find_by_title("The Awakening and Selected Stories")
                .is_some()
        );
        // Same place on the shelf as before.
        assert_eq!(
            titles(&store.all(None))[0],
            "The Awakening and Selected Stories"
        );
    }

    #[test]
    fn update_on_a_missing_title_is_ok_none() {
        let store = BookStore::seeded();
        let result = store.update(
            "nonexistent-title",
            BookUpdate {
                title: "whatever".to_owned(),
                author: "nobody".to_owned(),
                year: 2000,
                edition: "first".to_owned(),
            },
        );
        assert!(result.unwrap().is_none());
        assert_eq!(store.count(), 4);
    }

    #[test]
    fn update_rejects_renaming_onto_another_book() {
        let store = BookStore::seeded();
        let err = store
            .update(
                "The Awakening",
                BookUpdate {
                    title: "City of Glass".to_owned(),
                    author: "Kate Chopin".to_owned(),
                    year: 1986,
                    edition: "second".to_owned(),
                },
            )
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::DuplicateTitle {
                title: "City of Glass".to_owned(),
                argument: "newTitle",
            }
        );
        // Both originals untouched.
        assert!(store.find_by_title("The Awakening").is_some());
        assert_eq!(store.find_by_title("City of Glass").unwrap().year, Some(1953));
    }

    #[test]
    fn update_allows_keeping_the_same_title() {
        let store = BookStore::seeded();
        let after = store
            .update(
                "City of Glass",
                BookUpdate {
                    title: "City of Glass".to_owned(),
                    author: "Paul Auster".to_owned(),
                    year: 1985,
                    edition: "second".to_owned(),
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(after.year, Some(1985));
        assert_eq!(after.edition, "second");
    }
}
