//! API messages - communication between App and Network layers

use crate::models::{Draft, Todo};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum ApiCommand {
    /// Fetch the full todo list
    FetchList {
        id: u64,
    },
    /// Create a new todo from a draft
    CreateTodo {
        id: u64,
        draft: Draft,
    },
    /// Replace the todo with the given server id
    UpdateTodo {
        id: u64,
        todo_id: i64,
        draft: Draft,
    },
    /// Delete the todo with the given server id
    DeleteTodo {
        id: u64,
        todo_id: i64,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum ApiResponse {
    /// Full list received
    ListFetched {
        id: u64,
        todos: Vec<Todo>,
    },
    /// Todo created on the server
    Created {
        id: u64,
        todo: Todo,
    },
    /// Todo updated on the server
    Updated {
        id: u64,
        todo: Todo,
    },
    /// Todo deleted on the server
    Deleted {
        id: u64,
    },
    /// Request failed
    Failed {
        id: u64,
        message: String,
    },
}

impl ApiResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            ApiResponse::ListFetched { id, .. } => *id,
            ApiResponse::Created { id, .. } => *id,
            ApiResponse::Updated { id, .. } => *id,
            ApiResponse::Deleted { id } => *id,
            ApiResponse::Failed { id, .. } => *id,
        }
    }
}
