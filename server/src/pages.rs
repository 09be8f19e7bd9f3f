//! Server-rendered todo page.
//!
//! The template is compiled in by askama; the handler only snapshots the
//! list under the read lock and fills in the context. Toggle and delete on
//! the page go through `/static/app.js`, which calls the JSON API and
//! reloads.

use askama::Template;
use axum::{extract::State, response::Html};
use todo_store::Todo;

use crate::{AppError, SharedStore};

#[derive(Template)]
#[template(path = "todos.html")]
pub struct TodosPage {
    title: &'static str,
    todos: Vec<Todo>,
}

pub async fn index(State(store): State<SharedStore>) -> Result<Html<String>, AppError> {
    let todos = store.read().await.list().to_vec();
    let page = TodosPage {
        title: "My todo list",
        todos,
    };
    Ok(Html(page.render()?))
}
