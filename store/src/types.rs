//! Domain types and wire DTOs for the todo service.
//!
//! # Design
//! `Todo` doubles as the in-memory record and the JSON resource
//! representation; the two have never diverged and a separate view type
//! would only add copying. `CreateTodo` derives `Deserialize` so the same
//! struct covers both the JSON body and the urlencoded form field.

use serde::{Deserialize, Serialize};

/// A single todo record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    /// Store-assigned id; unique and strictly increasing, never reused.
    pub id: u64,
    pub text: String,
    pub done: bool,
}

/// Request payload for creating a new todo.
///
/// Accepted as `{"text": ...}` JSON or as a `text=...` form field.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 1,
            text: "Test".to_string(),
            done: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["text"], "Test");
        assert_eq!(json["done"], false);
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: 42,
            text: "Roundtrip".to_string(),
            done: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn create_todo_from_json() {
        let input: CreateTodo = serde_json::from_str(r#"{"text":"buy milk"}"#).unwrap();
        assert_eq!(input.text, "buy milk");
    }

    #[test]
    fn create_todo_rejects_missing_text() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"done":true}"#);
        assert!(result.is_err());
    }
}
