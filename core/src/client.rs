//! The to-do list client: keeps the mirror in step with the service and
//! re-renders the table after every change.
//!
//! # Design
//! Each operation plans a request against the mirror, hands it to the
//! host's `Transport`, settles the response into the mirror and then renders
//! the full list into the `View`. Failures are logged, shown through the
//! view, and returned; an input disabled for an add is always re-enabled.
//! A render failure after a settled change is shown but not returned.
//!
//! Updates schedule a reconciliation reload (see `ClientConfig`). The host
//! drives those by calling `tick` from its loop.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::api::TodoApi;
use crate::config::{ClientConfig, DEFAULT_RELOAD_DELAY_MS};
use crate::error::Result;
use crate::host::{Transport, View};
use crate::render::Renderer;
use crate::schedule::ReloadSchedule;
use crate::store::TodoStore;
use crate::sync::{self, Action, Pending, Settled};
use crate::types::{TodoId, TodoItem};

const DEFAULT_RETRY: Duration = Duration::from_millis(DEFAULT_RELOAD_DELAY_MS);

pub struct TodoClient<T, R, V> {
    api: TodoApi,
    store: TodoStore,
    reloads: ReloadSchedule,
    transport: T,
    renderer: R,
    view: V,
    config: ClientConfig,
}

impl<T: Transport, R: Renderer, V: View> TodoClient<T, R, V> {
    pub fn new(config: ClientConfig, transport: T, renderer: R, view: V) -> Self {
        Self {
            api: TodoApi::new(&config.origin),
            store: TodoStore::new(),
            reloads: ReloadSchedule::new(),
            transport,
            renderer,
            view,
            config,
        }
    }

    pub fn todos(&self) -> &[TodoItem] {
        self.store.items()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Earliest pending reconciliation reload, if any.
    pub fn next_reload(&self) -> Option<Instant> {
        self.reloads.next_due()
    }

    pub fn is_reload_scheduled(&self, id: TodoId) -> bool {
        self.reloads.is_scheduled(id)
    }

    /// Replace the mirror with the service's open items.
    pub fn load(&mut self) -> Result<()> {
        if let Some(Settled::Loaded(count)) = self.run(Action::Load)? {
            let store = &self.store;
            self.reloads.retain(|id| store.contains(id));
            info!(count, "loaded open todos");
        }
        Ok(())
    }

    /// Create an item from `raw_text`. Empty text is a silent no-op and
    /// returns `Ok(None)`, as does a created item whose id is already
    /// mirrored.
    pub fn add(&mut self, raw_text: &str) -> Result<Option<TodoItem>> {
        if raw_text.is_empty() {
            debug!("add skipped: empty text");
            return Ok(None);
        }

        let guard_input = self.config.disable_input_during_add;
        if guard_input {
            self.view.set_input_enabled(false);
        }
        let result = self.run(Action::Add {
            text: raw_text.to_string(),
        });
        if guard_input {
            if result.is_ok() {
                self.view.clear_input();
            }
            self.view.set_input_enabled(true);
        }

        match result? {
            Some(Settled::Added {
                item,
                appended: true,
            }) => Ok(Some(item)),
            _ => Ok(None),
        }
    }

    /// Set the done flag of a mirrored item. Returns `Ok(false)` without
    /// sending anything when no item with text has that id.
    pub fn update(&mut self, id: TodoId, done: bool) -> Result<bool> {
        let Some(settled) = self.run(Action::Update { id, done })? else {
            return Ok(false);
        };
        if let (Settled::Updated { applied: true, .. }, Some(delay)) =
            (settled, self.config.reload_delay())
        {
            self.reloads.schedule(id, Instant::now() + delay);
        }
        Ok(true)
    }

    /// Delete an item. Returns whether it was present in the mirror.
    pub fn delete(&mut self, id: TodoId) -> Result<bool> {
        match self.run(Action::Delete { id })? {
            Some(Settled::Deleted { removed, .. }) => {
                self.reloads.cancel(id);
                Ok(removed)
            }
            _ => Ok(false),
        }
    }

    /// Run one reload if any scheduled reload is due at `now`. Several due
    /// reloads collapse into a single load. When the load fails the rows
    /// stay scheduled and are retried one reload delay later.
    pub fn tick(&mut self, now: Instant) -> Result<bool> {
        let due = self.reloads.take_due(now);
        if due.is_empty() {
            return Ok(false);
        }
        debug!(rows = due.len(), "reconciliation reload due");
        if let Err(error) = self.load() {
            let retry_at = now + self.config.reload_delay().unwrap_or(DEFAULT_RETRY);
            for id in due.into_iter().filter(|id| self.store.contains(*id)) {
                self.reloads.schedule(id, retry_at);
            }
            return Err(error);
        }
        Ok(true)
    }

    /// Render the current mirror into the view.
    pub fn render(&mut self) -> Result<()> {
        let markup = self.renderer.render(self.store.items())?;
        self.view.replace_table(markup)
    }

    fn run(&mut self, action: Action) -> Result<Option<Settled>> {
        let settled = match self.perform(action) {
            Ok(Some(settled)) => settled,
            Ok(None) => return Ok(None),
            Err(error) => {
                warn!(%error, "todo operation failed");
                self.view.show_error(&error);
                return Err(error);
            }
        };
        self.view.clear_error();
        // The change already happened on the service and in the mirror, so a
        // failed render is shown but does not fail the operation.
        if let Err(error) = self.render() {
            warn!(%error, "table render failed");
            self.view.show_error(&error);
        }
        Ok(Some(settled))
    }

    fn perform(&mut self, action: Action) -> Result<Option<Settled>> {
        let Some(pending) = sync::plan(&self.store, &self.api, action)? else {
            return Ok(None);
        };
        self.dispatch(pending).map(Some)
    }

    fn dispatch(&mut self, pending: Pending) -> Result<Settled> {
        let request = pending.request().clone();
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "response received");
        pending.settle(&mut self.store, response)
    }
}
