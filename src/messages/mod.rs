//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the UI, App, and Network layers.

pub mod ui_events;
pub mod api;
pub mod render;

pub use ui_events::UiEvent;
pub use api::{ApiCommand, ApiResponse};
pub use render::RenderState;
