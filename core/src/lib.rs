//! A single todo item kept in sync with a remote todo API.
//!
//! # Overview
//! [`TodoItem`] renders one todo and owns its edit state. User interactions
//! produce [`ItemAction`]s; [`SyncAdapter`] sends each as exactly one HTTP
//! request and, only on a 2xx response, reconciles the list held by a
//! [`TodoStore`].
//!
//! # Design
//! - `TodoClient` is stateless and I/O free: `build_*` produces requests,
//!   `parse_*` consumes responses.
//! - The item never sees the whole list; it goes through the `TodoStore`
//!   capability (`list`, `replace`, `remove`).
//! - Failures come back as `ApiError` values. Nothing is retried or rolled
//!   back, and a failed round-trip never mutates the store.

pub mod action;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod item;
pub mod store;
pub mod sync;
pub mod types;

pub use action::{ItemAction, Outcome};
pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use item::{EditMode, ItemView, TitleView, TodoItem};
pub use store::{MemoryStore, TodoStore};
pub use sync::{SyncAdapter, Transport, UreqTransport};
pub use types::{EditTodo, Todo, TodoId};
