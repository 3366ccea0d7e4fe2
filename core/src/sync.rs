//! Planning and settling of the four list operations.
//!
//! # Design
//! `plan` is a pure function of (mirror, action): it checks local
//! preconditions and describes the request to send, or returns `None` for a
//! silent no-op. `Pending::settle` applies the service's response to the
//! mirror. Nothing here performs I/O, so a host may hold several `Pending`
//! values at once; settlement always re-resolves items by id, never by a
//! position captured at planning time.

use tracing::debug;

use crate::api::TodoApi;
use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};
use crate::store::TodoStore;
use crate::types::{TodoDraft, TodoId, TodoItem};

/// A user intent against the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Load,
    Add { text: String },
    Update { id: TodoId, done: bool },
    Delete { id: TodoId },
}

/// What the response of a pending request will be applied as.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Completion {
    Load,
    Add,
    Update { id: TodoId, done: bool },
    Delete { id: TodoId },
}

/// A planned request waiting for its response.
#[derive(Debug, Clone)]
pub struct Pending {
    request: HttpRequest,
    completion: Completion,
    api: TodoApi,
}

/// The effect a settled request had on the mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    Loaded(usize),
    /// `appended` is false when the mirror already held an item with the
    /// returned id.
    Added { item: TodoItem, appended: bool },
    /// `applied` is false when the item vanished from the mirror while the
    /// request was in flight.
    Updated { id: TodoId, done: bool, applied: bool },
    Deleted { id: TodoId, removed: bool },
}

/// Describe the request for `action`, or `None` when a local precondition
/// makes the action a silent no-op.
pub fn plan(store: &TodoStore, api: &TodoApi, action: Action) -> Result<Option<Pending>> {
    let (request, completion) = match action {
        Action::Load => (api.build_list_open(), Completion::Load),
        Action::Add { text } => {
            if text.is_empty() {
                debug!("add skipped: empty text");
                return Ok(None);
            }
            (api.build_create(&TodoDraft::open(text))?, Completion::Add)
        }
        Action::Update { id, done } => {
            let Some(text) = store
                .find(id)
                .map(|item| item.text.clone())
                .filter(|text| !text.is_empty())
            else {
                debug!(%id, "update skipped: no item with text");
                return Ok(None);
            };
            let request = api.build_update(id, &TodoDraft { text, done })?;
            (request, Completion::Update { id, done })
        }
        Action::Delete { id } => (api.build_delete(id), Completion::Delete { id }),
    };
    Ok(Some(Pending {
        request,
        completion,
        api: api.clone(),
    }))
}

impl Pending {
    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    /// Apply `response` to `store`. On error the store is left untouched.
    pub fn settle(self, store: &mut TodoStore, response: HttpResponse) -> Result<Settled> {
        let settled = match self.completion {
            Completion::Load => {
                let items = self.api.parse_list(response)?;
                store.replace_all(items);
                Settled::Loaded(store.len())
            }
            Completion::Add => {
                let item = self.api.parse_create(response)?;
                let appended = store.append(item.clone());
                Settled::Added { item, appended }
            }
            Completion::Update { id, done } => {
                self.api.parse_update(response)?;
                let applied = store.set_done(id, done);
                Settled::Updated { id, done, applied }
            }
            Completion::Delete { id } => {
                self.api.parse_delete(response)?;
                let removed = store.remove(id);
                Settled::Deleted { id, removed }
            }
        };
        debug!(?settled, "request settled");
        Ok(settled)
    }
}
