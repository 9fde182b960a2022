//! A small GraphQL api over an in-memory shelf of books.
//!
//! The shelf only lives as long as the process; it starts out seeded with a
//! handful of records and grows through mutations. Titles double as the
//! lookup key for every operation, so they are kept unique. The actual
//! server lives in the binary; everything here can be driven directly from
//! tests by building a [`Schema`](async_graphql::Schema) from the two roots
//! in [`queries`].

pub mod book_schema;

pub mod errors;

pub mod queries;

pub mod store;
