//! Client core for a to-do table backed by a REST service.
//!
//! # Overview
//! Keeps an in-memory mirror of the open to-do items in step with the
//! service and re-renders a table after every change. The core builds
//! `HttpRequest` values and parses `HttpResponse` values without touching
//! the network (host-does-IO pattern); the host supplies a `Transport` and a
//! `View`.
//!
//! # Design
//! - `TodoApi` is stateless: it holds only the service origin.
//! - `sync::plan` / `Pending::settle` are pure functions over `TodoStore`,
//!   so the mirror is an explicit value owned by the UI root.
//! - `TodoClient` ties planning, transport, rendering and the
//!   reconciliation `ReloadSchedule` together.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod host;
pub mod http;
pub mod link;
pub mod render;
pub mod schedule;
pub mod store;
pub mod sync;
pub mod types;

pub use api::TodoApi;
pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use host::{Transport, View};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use link::{try_link, Linked};
pub use render::{Renderer, TableRenderer};
pub use schedule::ReloadSchedule;
pub use store::TodoStore;
pub use sync::{Action, Pending, Settled};
pub use types::{TodoDraft, TodoId, TodoItem};
