//! Domain DTOs for the to-do service.
//!
//! # Design
//! These types mirror the service's JSON schema but are defined independently
//! of the mock-server crate. Integration tests catch any schema drift between
//! the two crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Server-assigned identifier of a to-do item.
pub type TodoId = Uuid;

/// A single to-do item as returned by the service.
///
/// Items held in the mirror are always the service's canonical copy; the
/// client never fabricates an `id` locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub done: bool,
}

/// Request body for both create and update. The service expects the full
/// item body on update, not a partial patch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoDraft {
    pub text: String,
    pub done: bool,
}

impl TodoDraft {
    /// Draft for a freshly submitted item: not done yet.
    pub fn open(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}
