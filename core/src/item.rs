//! One rendered todo: its snapshot, edit state, and view.
//!
//! # Design
//! The edit mode and draft live only as long as the `TodoItem`. Transitions
//! return the [`ItemAction`] that has to reach the server, if any; the item
//! itself does no I/O. The snapshot only changes through [`TodoItem::apply`]
//! (a confirmed outcome) or [`TodoItem::refresh`] (the list owner).

use tracing::debug;

use crate::action::{ItemAction, Outcome};
use crate::types::{Todo, TodoId};

/// Label on the edit button while viewing.
pub const EDIT_LABEL: &str = "✒︎";
/// Label on the edit button while editing.
pub const SAVE_LABEL: &str = "Save";
pub const DELETE_LABEL: &str = "×";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

/// What the title area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleView {
    Text { text: String, struck_through: bool },
    Input { value: String },
}

/// Render output for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: TodoId,
    pub checked: bool,
    pub title: TitleView,
    pub edit_label: &'static str,
    pub delete_label: &'static str,
}

#[derive(Debug, Clone)]
pub struct TodoItem {
    todo: Todo,
    mode: EditMode,
    draft: String,
    removed: bool,
}

impl TodoItem {
    pub fn new(todo: Todo) -> Self {
        Self {
            todo,
            mode: EditMode::Viewing,
            draft: String::new(),
            removed: false,
        }
    }

    pub fn id(&self) -> TodoId {
        self.todo.id
    }

    pub fn todo(&self) -> &Todo {
        &self.todo
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// True once a delete has been confirmed.
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub fn view(&self) -> ItemView {
        let (title, edit_label) = match self.mode {
            EditMode::Viewing => (
                TitleView::Text {
                    text: self.todo.title.clone(),
                    struck_through: self.todo.is_completed,
                },
                EDIT_LABEL,
            ),
            EditMode::Editing => (
                TitleView::Input {
                    value: self.draft.clone(),
                },
                SAVE_LABEL,
            ),
        };
        ItemView {
            id: self.todo.id,
            checked: self.todo.is_completed,
            title,
            edit_label,
            delete_label: DELETE_LABEL,
        }
    }

    /// Text input change. There is no input outside edit mode.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.mode == EditMode::Editing {
            self.draft = text.into();
        }
    }

    /// Edit/save button. Entering edit mode seeds an empty draft with the
    /// confirmed title and needs no request; leaving it asks for the draft
    /// to be saved. The mode flips whatever the save eventually returns.
    pub fn press_edit(&mut self) -> Option<ItemAction> {
        match self.mode {
            EditMode::Viewing => {
                self.mode = EditMode::Editing;
                // An unconfirmed draft from a failed save is kept.
                if self.draft.is_empty() {
                    self.draft = self.todo.title.clone();
                }
                debug!(id = self.todo.id, "editing");
                None
            }
            EditMode::Editing => {
                self.mode = EditMode::Viewing;
                debug!(id = self.todo.id, "saving title");
                Some(ItemAction::SaveTitle {
                    id: self.todo.id,
                    title: self.draft.clone(),
                })
            }
        }
    }

    /// Checkbox change. Requests the negation of the confirmed flag.
    pub fn toggle_completion(&self) -> ItemAction {
        ItemAction::ToggleCompletion {
            id: self.todo.id,
            is_completed: !self.todo.is_completed,
        }
    }

    /// Delete button. Leaves edit mode alone.
    pub fn press_delete(&self) -> ItemAction {
        ItemAction::Delete { id: self.todo.id }
    }

    /// Take in a confirmed outcome. Outcomes about other todos are ignored.
    pub fn apply(&mut self, outcome: &Outcome) {
        if outcome.id() != self.todo.id {
            return;
        }
        match outcome {
            Outcome::TitleSaved(todo) => {
                self.todo = todo.clone();
                self.draft.clear();
            }
            Outcome::CompletionToggled(todo) => self.todo = todo.clone(),
            Outcome::Deleted(_) => self.removed = true,
        }
    }

    /// Newer snapshot from the list owner. A snapshot for another id is
    /// ignored.
    pub fn refresh(&mut self, todo: Todo) {
        if todo.id == self.todo.id {
            self.todo = todo;
        }
    }
}
