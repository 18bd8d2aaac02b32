//! Entity lifecycle orchestration.
//!
//! # Design
//! `TodoService` sits between the API layer and the store: it validates
//! titles before any mutation and emits a tracing event per operation.
//! "Not found" is an ordinary `None`/`false` outcome here, not an error —
//! only the API layer decides that it maps to a 404.

use tracing::{info, warn};
use uuid::Uuid;

use crate::model::TodoItem;
use crate::store::TodoStore;
use crate::validate::{normalize_title, InvalidTitle};

/// Validation and lifecycle rules above raw storage.
#[derive(Debug, Clone)]
pub struct TodoService {
    store: TodoStore,
}

impl TodoService {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    /// All items, ordered by creation time ascending.
    pub async fn list_all(&self) -> Vec<TodoItem> {
        self.store.list().await
    }

    /// A single item, or `None` if the id is unknown.
    pub async fn get_by_id(&self, id: Uuid) -> Option<TodoItem> {
        self.store.get(id).await
    }

    /// Validate a raw title and store a new item.
    ///
    /// On validation failure nothing is mutated. The stored item starts
    /// not-done with a freshly assigned id and creation timestamp.
    pub async fn add(&self, raw_title: Option<&str>) -> Result<TodoItem, InvalidTitle> {
        let title = match normalize_title(raw_title) {
            Ok(title) => title,
            Err(err) => {
                warn!(%err, "rejected new todo item");
                return Err(err);
            }
        };
        let item = self.store.insert(title).await;
        info!(id = %item.id, "added todo item");
        Ok(item)
    }

    /// Validate a raw title and replace an existing item's title/done flag.
    ///
    /// Validation runs before the store is touched. `Ok(false)` means the id
    /// is unknown; id and creation timestamp are preserved on success.
    pub async fn update(
        &self,
        id: Uuid,
        raw_title: Option<&str>,
        is_done: bool,
    ) -> Result<bool, InvalidTitle> {
        let title = match normalize_title(raw_title) {
            Ok(title) => title,
            Err(err) => {
                warn!(%id, %err, "rejected todo item update");
                return Err(err);
            }
        };
        let found = self.store.update(id, title, is_done).await;
        if found {
            info!(%id, "updated todo item");
        } else {
            warn!(%id, "update failed, todo item not found");
        }
        Ok(found)
    }

    /// Remove an item. Returns `false` if the id is unknown.
    pub async fn delete(&self, id: Uuid) -> bool {
        let found = self.store.delete(id).await;
        if found {
            info!(%id, "deleted todo item");
        } else {
            warn!(%id, "delete failed, todo item not found");
        }
        found
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &TodoStore {
        &self.store
    }
}
