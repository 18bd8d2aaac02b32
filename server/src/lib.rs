//! REST backend for the to-do list manager.
//!
//! # Overview
//! CRUD over a single entity type (`TodoItem`), backed by an in-memory store
//! that lives for the process lifetime. Layers mirror the data flow: the API
//! layer translates HTTP to service calls, the service enforces validation
//! and lifecycle rules, the store owns the thread-safe map.
//!
//! # Design
//! - No global state: [`app`] constructs the store and service once and
//!   injects them into the router via `with_state`.
//! - Validation failures are values (`Result`), propagated with `?` up to
//!   the error-to-status mapping in [`error`].
//! - "Not found" is `None`/`false` inside the service boundary and becomes
//!   404 only at the API layer.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod store;
pub mod validate;

use axum::Router;
use tokio::net::TcpListener;

pub use config::Config;
pub use error::{ApiError, ErrorBody};
pub use model::TodoItem;
pub use service::TodoService;
pub use store::TodoStore;
pub use validate::{normalize_title, InvalidTitle, MAX_TITLE_LEN};

/// Build the application router with a fresh, empty store.
pub fn app(config: Config) -> Router {
    let service = TodoService::new(TodoStore::new());
    api::router(api::AppState::new(service, config))
}

/// Serve [`app`] on the given listener until the process exits.
pub async fn run(listener: TcpListener, config: Config) -> Result<(), std::io::Error> {
    axum::serve(listener, app(config)).await
}
