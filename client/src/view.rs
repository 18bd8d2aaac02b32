//! View-model for the to-do list page.
//!
//! # Design
//! `TodoListView` holds the state a browser page renders from and mutates it
//! only through explicit transitions: `begin` when an operation is issued,
//! `*_done` when the server confirmed it, `fail` when it did not. Local
//! state therefore never runs ahead of the server — a created item appears
//! in the list only after the 201, a deleted one disappears only after the
//! 204 — so a failure needs no rollback. One error slot, overwritten at the
//! start of each operation; one active inline edit at a time.

use uuid::Uuid;

use crate::types::Todo;

/// The operation categories a page action maps to. Each category has its
/// own human-readable failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Message shown when an operation of this category fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Load => "Failed to load todos. Please try again.",
            Operation::Create => "Failed to create todo. Please try again.",
            Operation::Update => "Failed to update todo. Please try again.",
            Operation::Delete => "Failed to delete todo. Please try again.",
        }
    }
}

/// Render state of the to-do list page.
#[derive(Debug, Default)]
pub struct TodoListView {
    items: Vec<Todo>,
    editing: Option<Uuid>,
    loading: bool,
    error: Option<String>,
}

impl TodoListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in server order.
    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    /// Whether an operation is in flight (used to disable controls).
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The current error message, if the last operation failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Id of the item currently in inline-edit mode.
    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    /// An operation was issued: mark the page busy and clear the previous
    /// error. Called before every request, so errors never accumulate.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// The server confirmed a load: replace the whole list.
    pub fn load_done(&mut self, items: Vec<Todo>) {
        self.items = items;
        self.loading = false;
    }

    /// The server confirmed a create: append the stored snapshot.
    pub fn create_done(&mut self, item: Todo) {
        self.items.push(item);
        self.loading = false;
    }

    /// The server confirmed an update: replace the local copy and close the
    /// edit if it targeted this item.
    pub fn update_done(&mut self, item: Todo) {
        if self.editing == Some(item.id) {
            self.editing = None;
        }
        if let Some(existing) = self.items.iter_mut().find(|t| t.id == item.id) {
            *existing = item;
        }
        self.loading = false;
    }

    /// The server confirmed a delete: drop the local copy.
    pub fn delete_done(&mut self, id: Uuid) {
        if self.editing == Some(id) {
            self.editing = None;
        }
        self.items.retain(|t| t.id != id);
        self.loading = false;
    }

    /// An operation failed: surface its category message and leave the list
    /// exactly as it was.
    pub fn fail(&mut self, op: Operation) {
        self.error = Some(op.failure_message().to_string());
        self.loading = false;
    }

    /// Enter inline-edit mode for one item, replacing any previous edit.
    pub fn start_edit(&mut self, id: Uuid) {
        self.editing = Some(id);
    }

    /// Leave inline-edit mode without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }
}
