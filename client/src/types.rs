//! Wire DTOs for the to-do list API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently, so
//! the client crate stays usable without the server crate on the dependency
//! graph; the integration tests catch schema drift. Field names are
//! camelCase on the wire (`isDone`, `createdAt`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub is_done: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a new item. The server assigns everything
/// else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Request payload for replacing an item's title and done flag. PUT is a
/// full replace, so both fields are always serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    pub title: String,
    pub is_done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_deserializes_from_the_wire_shape() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001","title":"Test","isDone":false,"createdAt":"2026-01-05T09:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(todo.title, "Test");
        assert!(!todo.is_done);
        assert_eq!(todo.created_at.timestamp(), 1_767_605_400);
    }

    #[test]
    fn update_serializes_both_fields_in_camel_case() {
        let input = UpdateTodo {
            title: "x".to_string(),
            is_done: true,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["title"], "x");
        assert_eq!(json["isDone"], true);
    }
}
