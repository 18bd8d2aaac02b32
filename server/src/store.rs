//! In-memory to-do store.
//!
//! # Design
//! `TodoStore` is a cheap-to-clone handle over an `Arc<RwLock<..>>`, so every
//! request handler shares the same map for the lifetime of the process. Each
//! operation takes the lock exactly once: reads under the read lock, single-key
//! read-modify-writes under the write lock. There are no cross-key
//! transactions; two concurrent updates to the same id resolve by completion
//! order.
//!
//! The store owns entity birth: `insert` assigns the id and the creation
//! timestamp inside the write lock. Timestamps are strictly monotonic per
//! insertion — `created_at` is the default sort key, and bumping ties by a
//! microsecond keeps the list order total even when two inserts land in the
//! same clock tick.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::TodoItem;

#[derive(Debug, Default)]
struct Inner {
    items: HashMap<Uuid, TodoItem>,
    last_created_at: Option<DateTime<Utc>>,
}

/// Thread-safe in-memory mapping from id to [`TodoItem`].
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    inner: Arc<RwLock<Inner>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items, ordered by `created_at` ascending (oldest first).
    pub async fn list(&self) -> Vec<TodoItem> {
        let inner = self.inner.read().await;
        let mut items: Vec<TodoItem> = inner.items.values().cloned().collect();
        items.sort_by_key(|item| item.created_at);
        items
    }

    /// Snapshot of a single item, or `None` if the id is unknown.
    pub async fn get(&self, id: Uuid) -> Option<TodoItem> {
        self.inner.read().await.items.get(&id).cloned()
    }

    /// Store a new item with a fresh id and creation timestamp.
    ///
    /// The item starts not-done. Always succeeds and returns the stored
    /// snapshot.
    pub async fn insert(&self, title: String) -> TodoItem {
        let mut inner = self.inner.write().await;
        let created_at = inner.next_created_at();
        let item = TodoItem {
            id: Uuid::new_v4(),
            title,
            is_done: false,
            created_at,
        };
        inner.items.insert(item.id, item.clone());
        item
    }

    /// Replace the title and done flag of an existing item.
    ///
    /// Returns `false` if the id is unknown. `id` and `created_at` are never
    /// touched.
    pub async fn update(&self, id: Uuid, title: String, is_done: bool) -> bool {
        let mut inner = self.inner.write().await;
        match inner.items.get_mut(&id) {
            Some(item) => {
                item.title = title;
                item.is_done = is_done;
                true
            }
            None => false,
        }
    }

    /// Remove an item. Returns `false` if the id is unknown.
    pub async fn delete(&self, id: Uuid) -> bool {
        self.inner.write().await.items.remove(&id).is_some()
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Inner {
    /// Next creation timestamp: the wall clock, bumped past the previously
    /// assigned timestamp if the clock has not advanced.
    fn next_created_at(&mut self) -> DateTime<Utc> {
        let mut at = Utc::now();
        if let Some(last) = self.last_created_at {
            if at <= last {
                at = last + Duration::microseconds(1);
            }
        }
        self.last_created_at = Some(at);
        at
    }
}
