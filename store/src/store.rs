//! The in-memory store owning the todo list and id counter.
//!
//! # Design
//! A `Vec` keeps insertion order, which is the list order the API promises.
//! The counter starts at 1 and only increments, so an id identifies at most
//! one record for the lifetime of the store; toggle therefore touches the
//! first match and stops. The store is single-threaded by itself — callers
//! that handle requests concurrently must serialize mutations externally
//! (the server wraps it in an `RwLock`).

use crate::error::StoreError;
use crate::types::Todo;

/// Owner of the todo sequence and the monotonic id counter.
#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// An empty store whose first assigned id will be 1.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// All current records in insertion order.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    /// Append a new todo with the next id and `done = false`.
    ///
    /// The text is trimmed first; blank input is rejected with
    /// `StoreError::EmptyText`.
    pub fn add(&mut self, text: &str) -> Result<Todo, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        let todo = Todo {
            id: self.next_id,
            text: text.to_string(),
            done: false,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Flip the `done` flag of the todo with the given id and return the
    /// updated record.
    pub fn toggle(&mut self, id: u64) -> Result<Todo, StoreError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        todo.done = !todo.done;
        Ok(todo.clone())
    }

    /// Remove the todo with the given id, if present, and return how many
    /// records remain. Absent ids are a no-op, so repeated deletes of the
    /// same id yield the same count.
    pub fn delete(&mut self, id: u64) -> usize {
        self.todos.retain(|t| t.id != id);
        self.todos.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_strictly_increasing() {
        let mut store = TodoStore::new();
        let ids: Vec<u64> = (0..5)
            .map(|i| store.add(&format!("task {i}")).unwrap().id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = TodoStore::new();
        let first = store.add("one").unwrap();
        store.delete(first.id);
        let second = store.add("two").unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = TodoStore::new();
        store.add("a").unwrap();
        store.add("b").unwrap();
        store.add("c").unwrap();
        let texts: Vec<&str> = store.list().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn add_starts_not_done() {
        let mut store = TodoStore::new();
        let todo = store.add("fresh").unwrap();
        assert!(!todo.done);
    }

    #[test]
    fn add_rejects_empty_text() {
        let mut store = TodoStore::new();
        assert_eq!(store.add(""), Err(StoreError::EmptyText));
        assert!(store.list().is_empty());
    }

    #[test]
    fn add_rejects_whitespace_only_text() {
        let mut store = TodoStore::new();
        assert_eq!(store.add("   "), Err(StoreError::EmptyText));
    }

    #[test]
    fn add_trims_surrounding_whitespace() {
        let mut store = TodoStore::new();
        let todo = store.add("  buy milk  ").unwrap();
        assert_eq!(todo.text, "buy milk");
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut store = TodoStore::new();
        let id = store.add("flip me").unwrap().id;
        assert!(store.toggle(id).unwrap().done);
        assert!(!store.toggle(id).unwrap().done);
    }

    #[test]
    fn toggle_unknown_id_fails() {
        let mut store = TodoStore::new();
        assert_eq!(store.toggle(99), Err(StoreError::NotFound(99)));
    }

    #[test]
    fn toggle_updates_the_stored_record() {
        let mut store = TodoStore::new();
        let id = store.add("persist").unwrap().id;
        store.toggle(id).unwrap();
        assert!(store.list()[0].done);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = TodoStore::new();
        let id = store.add("gone").unwrap().id;
        store.add("stays").unwrap();
        assert_eq!(store.delete(id), 1);
        assert_eq!(store.delete(id), 1);
    }

    #[test]
    fn delete_absent_id_is_a_noop() {
        let mut store = TodoStore::new();
        store.add("only").unwrap();
        assert_eq!(store.delete(999), 1);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn crud_scenario() {
        let mut store = TodoStore::new();

        let milk = store.add("buy milk").unwrap();
        assert_eq!((milk.id, milk.done), (1, false));

        let dog = store.add("walk dog").unwrap();
        assert_eq!(dog.id, 2);

        let toggled = store.toggle(1).unwrap();
        assert_eq!((toggled.id, toggled.done), (1, true));

        assert_eq!(store.delete(2), 1);

        let remaining = store.list();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 1);
        assert_eq!(remaining[0].text, "buy milk");
        assert!(remaining[0].done);
    }
}
