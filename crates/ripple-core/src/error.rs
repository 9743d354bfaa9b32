//! Domain-level error types.

use thiserror::Error;

use crate::ports::StoreError;

/// Domain errors - user-facing rejections of an attempted action.
///
/// An unknown post id is deliberately not represented here: operations on a
/// post that has vanished (deleted by another writer, stale view) are silent
/// no-ops rather than failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("email must not be empty")]
    EmptyEmail,

    #[error("text must not be empty")]
    EmptyText,

    #[error("only the author can change this post")]
    NotAuthor,

    #[error(transparent)]
    Store(#[from] StoreError),
}
