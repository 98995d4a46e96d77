//! Remote actions an item can emit, and what their success means.
//!
//! An [`ItemAction`] becomes exactly one request. Its response becomes an
//! [`Outcome`], and only an outcome ever mutates the store.

use tracing::debug;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::store::TodoStore;
use crate::types::{EditTodo, Todo, TodoId};

/// A request-worthy user interaction on one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    /// Second press of the edit button.
    SaveTitle { id: TodoId, title: String },
    /// Checkbox change; `is_completed` is the value being requested.
    ToggleCompletion { id: TodoId, is_completed: bool },
    /// Delete button press.
    Delete { id: TodoId },
}

impl ItemAction {
    pub fn id(&self) -> TodoId {
        match self {
            ItemAction::SaveTitle { id, .. }
            | ItemAction::ToggleCompletion { id, .. }
            | ItemAction::Delete { id } => *id,
        }
    }

    pub fn request(&self, client: &TodoClient) -> Result<HttpRequest, ApiError> {
        match self {
            ItemAction::SaveTitle { id, title } => client.build_edit_todo(*id, &EditTodo::title(title.clone())),
            ItemAction::ToggleCompletion { id, is_completed } => {
                client.build_edit_todo(*id, &EditTodo::completion(*is_completed))
            }
            ItemAction::Delete { id } => Ok(client.build_delete_todo(*id)),
        }
    }

    /// Interpret the response to the request this action built.
    pub fn complete(&self, client: &TodoClient, response: HttpResponse) -> Result<Outcome, ApiError> {
        let outcome = match self {
            ItemAction::SaveTitle { .. } => Outcome::TitleSaved(client.parse_edit_todo(response)?),
            ItemAction::ToggleCompletion { .. } => Outcome::CompletionToggled(client.parse_edit_todo(response)?),
            ItemAction::Delete { id } => {
                client.parse_delete_todo(response)?;
                Outcome::Deleted(*id)
            }
        };
        debug!(?outcome, "action confirmed");
        Ok(outcome)
    }
}

/// A server-confirmed result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    TitleSaved(Todo),
    CompletionToggled(Todo),
    Deleted(TodoId),
}

impl Outcome {
    /// Id of the todo this outcome is about. For edits that is the id the
    /// server returned.
    pub fn id(&self) -> TodoId {
        match self {
            Outcome::TitleSaved(todo) | Outcome::CompletionToggled(todo) => todo.id,
            Outcome::Deleted(id) => *id,
        }
    }

    /// Reconcile the store. Returns whether the list changed.
    pub fn apply_to<S: TodoStore + ?Sized>(&self, store: &S) -> bool {
        match self {
            Outcome::TitleSaved(todo) | Outcome::CompletionToggled(todo) => store.replace(todo.id, todo.clone()),
            Outcome::Deleted(id) => store.remove(*id),
        }
    }
}
