//! HTTP presentation layer for the todo service.
//!
//! # Overview
//! Exposes the in-memory `TodoStore` two ways: a JSON API under `/todos`
//! and a server-rendered page at `/` whose add form posts back to the same
//! create endpoint. Static assets for the page are served under `/static`.
//!
//! # Design
//! - The store is shared as `Arc<RwLock<TodoStore>>`; mutations take the
//!   write lock, so the store's id invariants hold even though the runtime
//!   handles requests concurrently. Reads never see a half-applied change.
//! - `app()` builds a fresh router with its own empty store, which is also
//!   what the in-process tests drive via `tower::ServiceExt`.
//! - All routing, extraction, and response encoding is axum's; the crate
//!   adds only the handlers and the error-to-response mapping.

pub mod api;
pub mod error;
pub mod pages;

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use todo_store::TodoStore;
use tower_http::services::ServeDir;

pub use error::AppError;

/// Shared handle to the store; the write lock serializes all mutations.
pub type SharedStore = Arc<RwLock<TodoStore>>;

/// Build the application router with a fresh, empty store.
pub fn app() -> Router {
    let store: SharedStore = Arc::new(RwLock::new(TodoStore::new()));
    // Anchored to the crate dir so the assets resolve regardless of CWD.
    let static_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
    Router::new()
        .route("/", get(pages::index))
        .route("/todos", get(api::list_todos).post(api::create_todo))
        .route(
            "/todos/{id}",
            put(api::toggle_todo)
                .patch(api::toggle_todo)
                .delete(api::delete_todo),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(store)
}

/// Serve the application on an already-bound listener until shutdown.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
