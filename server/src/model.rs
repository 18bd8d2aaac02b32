//! The to-do item entity.
//!
//! # Design
//! `TodoItem` is the single domain object of the system. Instances are only
//! ever created by the store (which assigns `id` and `created_at`); callers
//! receive cloned snapshots, so nothing outside the store can observe a
//! half-mutated item. Wire names are camelCase to match the JSON surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item.
///
/// `id` and `created_at` are assigned at insertion and never change
/// afterwards; `title` and `is_done` are replaced wholesale on update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: Uuid,
    pub title: String,
    pub is_done: bool,
    pub created_at: DateTime<Utc>,
}
