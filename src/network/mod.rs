//! Network layer - REST calls against the todo backend
//!
//! The Network actor receives API commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
