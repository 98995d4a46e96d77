//! Domain DTOs for the todo API.
//!
//! # Design
//! Field names follow the API's camelCase JSON (`isCompleted`). These types
//! mirror the mock-server's schema but are defined independently; the
//! integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier.
pub type TodoId = i64;

/// A single todo item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub is_completed: bool,
}

/// Request payload for `PUT /editTodo/{id}`. Only the fields present in the
/// JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EditTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl EditTodo {
    /// Edit that renames a todo.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            is_completed: None,
        }
    }

    /// Edit that sets the completion flag.
    pub fn completion(is_completed: bool) -> Self {
        Self {
            title: None,
            is_completed: Some(is_completed),
        }
    }
}
