//! Client core for the to-do list service.
//!
//! # Overview
//! Models the single-page browser client as two pure layers: a stateless
//! request builder / response parser (host-does-IO pattern — the caller
//! executes the actual HTTP round-trip) and a [`view::TodoListView`]
//! view-model that applies server confirmations to the rendered list state.
//!
//! # Design
//! - `TodoListClient` is stateless — it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - The view-model mutates local state only on confirmed responses, keeps
//!   a single error slot, and tracks one active inline edit.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use client::TodoListClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Todo, UpdateTodo};
pub use view::{Operation, TodoListView};
