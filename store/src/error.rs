//! Error types for store operations.
//!
//! # Design
//! Two kinds only: validation (`EmptyText`) and lookup (`NotFound`).
//! `NotFound` carries the id so the HTTP layer can echo it back in the
//! error body. Delete is idempotent and never produces either.

use thiserror::Error;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The supplied todo text was empty or whitespace-only.
    #[error("todo text must not be empty")]
    EmptyText,

    /// No todo with the given id exists.
    #[error("no todo with id {0}")]
    NotFound(u64),
}
