//! In-memory todo store for the todo service.
//!
//! # Overview
//! Owns the ordered todo list and the monotonic id counter. All operations
//! are synchronous and touch no I/O, making the store fully deterministic
//! and testable without a runtime.
//!
//! # Design
//! - `TodoStore` is the single owner of the records; callers get clones or
//!   shared slices, never handles they could mutate.
//! - Ids come from a counter that only ever increments, so they stay unique
//!   and strictly increasing even across deletions.
//! - Failure cases are plain lookup/validation errors (`StoreError`); the
//!   store never retries or recovers.
//! - DTOs live here so the server and its tests share one schema.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::TodoStore;
pub use types::{CreateTodo, Todo};
