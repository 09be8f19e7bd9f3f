//! JSON API handlers for the `/todos` resource.
//!
//! # Design
//! `POST /todos` serves both presentation modes: the SSR page submits an
//! urlencoded form and expects a redirect back to `/`, while API clients
//! send JSON and get the created record with a 201. The handler dispatches
//! on the request `Content-Type` and extracts the matching body format.
//! Toggle answers to both PUT and PATCH; delete is idempotent and reports
//! the remaining count instead of erroring on absent ids.

use axum::{
    extract::{Path, Request, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form, Json, RequestExt,
};
use serde::{Deserialize, Serialize};
use todo_store::{CreateTodo, Todo};
use tracing::{debug, info};

use crate::{AppError, SharedStore};

/// Response body of `DELETE /todos/{id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Remaining {
    pub remaining: usize,
}

pub async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    let store = store.read().await;
    Json(store.list().to_vec())
}

/// Create a todo from either a JSON body or an urlencoded form submission.
pub async fn create_todo(
    State(store): State<SharedStore>,
    req: Request,
) -> Result<Response, AppError> {
    if is_form(req.headers()) {
        let Form(input) = req.extract::<Form<CreateTodo>, _>().await?;
        let todo = store.write().await.add(&input.text)?;
        info!(id = todo.id, "todo created via form");
        Ok(Redirect::to("/").into_response())
    } else {
        let Json(input) = req.extract::<Json<CreateTodo>, _>().await?;
        let todo = store.write().await.add(&input.text)?;
        info!(id = todo.id, "todo created");
        Ok((StatusCode::CREATED, Json(todo)).into_response())
    }
}

pub async fn toggle_todo(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, AppError> {
    let todo = store.write().await.toggle(id)?;
    debug!(id, done = todo.done, "todo toggled");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> Json<Remaining> {
    let remaining = store.write().await.delete(id);
    debug!(id, remaining, "todo deleted");
    Json(Remaining { remaining })
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}
