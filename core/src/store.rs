//! The todo list as a narrow capability.
//!
//! # Design
//! The item never sees the whole list or a raw setter. It depends on
//! [`TodoStore`], which exposes a snapshot plus the two mutations the sync
//! adapter performs. [`MemoryStore`] keeps the list in a `watch` channel so
//! every published list reaches all subscribers, the way a shared
//! data-fetching cache would.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::trace;

use crate::types::{Todo, TodoId};

/// Owner of the canonical todo list.
pub trait TodoStore {
    /// Current list, in display order.
    fn list(&self) -> Vec<Todo>;

    /// Swap the item with `id` for `updated`. Returns `false` and leaves the
    /// list untouched when no item matches.
    fn replace(&self, id: TodoId, updated: Todo) -> bool;

    /// Drop the item with `id`. Returns `false` when no item matches.
    fn remove(&self, id: TodoId) -> bool;
}

impl<S: TodoStore + ?Sized> TodoStore for Arc<S> {
    fn list(&self) -> Vec<Todo> {
        (**self).list()
    }

    fn replace(&self, id: TodoId, updated: Todo) -> bool {
        (**self).replace(id, updated)
    }

    fn remove(&self, id: TodoId) -> bool {
        (**self).remove(id)
    }
}

/// In-memory store that publishes each replacement list.
///
/// Clones share the same list.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    tx: Arc<watch::Sender<Vec<Todo>>>,
}

impl MemoryStore {
    pub fn new(todos: Vec<Todo>) -> Self {
        let (tx, _rx) = watch::channel(todos);
        Self { tx: Arc::new(tx) }
    }

    /// Receiver that observes every list published from now on.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Todo>> {
        self.tx.subscribe()
    }

    /// Replace the whole list, e.g. after loading it from the server.
    pub fn reset(&self, todos: Vec<Todo>) {
        trace!(len = todos.len(), "store reset");
        self.tx.send_replace(todos);
    }

    pub fn get(&self, id: TodoId) -> Option<Todo> {
        self.tx.borrow().iter().find(|todo| todo.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TodoStore for MemoryStore {
    fn list(&self) -> Vec<Todo> {
        self.tx.borrow().clone()
    }

    fn replace(&self, id: TodoId, updated: Todo) -> bool {
        self.tx.send_if_modified(|todos| match todos.iter_mut().find(|todo| todo.id == id) {
            Some(slot) => {
                trace!(id, "store replace");
                *slot = updated;
                true
            }
            None => false,
        })
    }

    fn remove(&self, id: TodoId) -> bool {
        self.tx.send_if_modified(|todos| {
            let before = todos.len();
            todos.retain(|todo| todo.id != id);
            let removed = todos.len() != before;
            if removed {
                trace!(id, "store remove");
            }
            removed
        })
    }
}
