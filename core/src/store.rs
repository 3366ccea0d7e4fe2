//! In-memory mirror of the open to-do list.
//!
//! Owned by the UI root and passed into every operation; there is no
//! process-wide list. Order is the order items were returned or appended.

use crate::types::{TodoId, TodoItem};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoStore {
    items: Vec<TodoItem>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<TodoItem>) -> Self {
        let mut store = Self::new();
        store.replace_all(items);
        store
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.find(id).is_some()
    }

    /// Replace the whole mirror. Later duplicates of an id are dropped.
    pub fn replace_all(&mut self, items: Vec<TodoItem>) {
        self.items.clear();
        for item in items {
            self.append(item);
        }
    }

    /// Append a canonical item. Returns false if the id is already present.
    pub fn append(&mut self, item: TodoItem) -> bool {
        if self.contains(item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Set the done flag in place. Returns whether an item matched.
    pub fn set_done(&mut self, id: TodoId, done: bool) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.done = done;
                true
            }
            None => false,
        }
    }

    /// Remove the item with `id`, keeping the others in order.
    pub fn remove(&mut self, id: TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }
}
