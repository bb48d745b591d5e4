//! # tuido
//!
//! A minimal terminal client for a todo-list REST backend.
//!
//! ## Features
//! - Full CRUD against the backend (list, create, update, delete)
//! - Form with title and description fields, prefilled when editing
//! - Server-first list: mutations invalidate the cached list and refetch it
//! - Loading and error screens, failure notices for mutations
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod cache;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use cache::ListCache;
pub use messages::{ApiCommand, ApiResponse, RenderState, UiEvent};
pub use models::{Draft, Todo};
pub use network::NetworkActor;
