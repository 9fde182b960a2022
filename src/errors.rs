//! Error types used by the book store.

use async_graphql::{Error as GraphqlError, ErrorExtensions};
use thiserror::Error;

/// Errors that may occur when mutating the book store. Lookups that simply
/// find nothing are not errors; they come back as `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    /// A book with this title is already on the shelf. Titles are the lookup
    /// key, so two records may never share one.
    #[error("a book titled {title:?} already exists")]
    DuplicateTitle {
        /// The title that collided.
        title: String,
        /// The name of the GraphQL argument that carried it, for the caller
        /// to report back.
        argument: &'static str,
    },
}

impl ErrorExtensions for StoreError {
    fn extend(&self) -> GraphqlError {
        GraphqlError::new(self.to_string()).extend_with(|_, extensions| match self {
            Self::DuplicateTitle { argument, .. } => {
                extensions.set("code", "BAD_USER_INPUT");
                extensions.set("argumentName", *argument);
            }
        })
    }
}
