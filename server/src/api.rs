//! HTTP surface: wire DTOs, handlers, and the router.
//!
//! # Design
//! Handlers translate requests into service calls and map the outcomes onto
//! status codes; nothing here touches the store directly. Body extraction
//! uses `Result<Json<_>, JsonRejection>` so malformed payloads become a 400
//! with an `{"error": ...}` body instead of the framework default 422.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header::{HeaderValue, LOCATION};
use axum::http::{HeaderName, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use crate::config::Config;
use crate::error::ApiError;
use crate::model::TodoItem;
use crate::service::TodoService;

/// Shared per-process state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    service: TodoService,
    config: Config,
}

impl AppState {
    pub fn new(service: TodoService, config: Config) -> Self {
        Self { service, config }
    }
}

/// Request payload for creating a new item.
///
/// `title` is optional at the wire level so that a missing title surfaces as
/// a validation message rather than a deserialization failure. An `isDone`
/// field is tolerated but ignored — created items always start not-done.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
}

/// Request payload for replacing an existing item's title and done flag.
/// `isDone` is required; omitting it is a malformed body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub is_done: bool,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/todolist", get(list_todos).post(create_todo))
        .route(
            "/api/todolist/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(state)
}

async fn list_todos(State(state): State<AppState>) -> Json<Vec<TodoItem>> {
    Json(state.service.list_all().await)
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TodoItem>, ApiError> {
    state
        .service
        .get_by_id(id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, HeaderValue); 1], Json<TodoItem>), ApiError> {
    let Json(input) = body?;
    let created = state.service.add(input.title.as_deref()).await?;
    let location = HeaderValue::from_str(&format!("/api/todolist/{}", created.id))
        .map_err(|err| ApiError::internal(err, state.config.dev_mode))?;
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(created)))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(input) = body?;
    let found = state
        .service
        .update(id, input.title.as_deref(), input.is_done)
        .await?;
    if found {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.service.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_title_is_optional() {
        let input: CreateTodoRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_none());
    }

    #[test]
    fn create_request_tolerates_a_done_flag() {
        let input: CreateTodoRequest =
            serde_json::from_str(r#"{"title":"Done already","isDone":true}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("Done already"));
    }

    #[test]
    fn update_request_requires_the_done_flag() {
        let result: Result<UpdateTodoRequest, _> = serde_json::from_str(r#"{"title":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_request_accepts_a_missing_title() {
        let input: UpdateTodoRequest = serde_json::from_str(r#"{"isDone":true}"#).unwrap();
        assert!(input.title.is_none());
        assert!(input.is_done);
    }

    #[test]
    fn update_request_uses_camel_case_for_the_done_flag() {
        let result: Result<UpdateTodoRequest, _> =
            serde_json::from_str(r#"{"title":"x","is_done":true}"#);
        assert!(result.is_err());
    }
}
