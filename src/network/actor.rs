//! Network actor - runs REST API calls in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{ApiCommand, ApiResponse};
use crate::models::Draft;
use crate::network::client::{self, create_client};

/// Network actor that processes API commands
pub struct NetworkActor {
    client: reqwest::Client,
    base_url: String,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(base_url: impl Into<String>, response_tx: mpsc::UnboundedSender<ApiResponse>) -> Self {
        NetworkActor {
            client: create_client(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<ApiCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(ApiCommand::FetchList { id }) => self.spawn_fetch_list(id),
                        Some(ApiCommand::CreateTodo { id, draft }) => self.spawn_create(id, draft),
                        Some(ApiCommand::UpdateTodo { id, todo_id, draft }) => {
                            self.spawn_update(id, todo_id, draft)
                        }
                        Some(ApiCommand::DeleteTodo { id, todo_id }) => self.spawn_delete(id, todo_id),
                        Some(ApiCommand::Shutdown) => break,
                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {
                    // Task completed - nothing to track per request
                }
            }
        }
    }

    fn spawn_fetch_list(&mut self, id: u64) {
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let response_tx = self.response_tx.clone();

        self.active_requests.spawn(async move {
            tracing::info!(id, "Fetching todo list");
            let response = match client::list_todos(&client, &base_url).await {
                Ok(todos) => {
                    tracing::info!(id, count = todos.len(), "List fetched");
                    ApiResponse::ListFetched { id, todos }
                }
                Err(e) => {
                    tracing::warn!(id, error = %e, "List fetch failed");
                    ApiResponse::Failed {
                        id,
                        message: client::error_message(&e),
                    }
                }
            };
            let _ = response_tx.send(response);
        });
    }

    fn spawn_create(&mut self, id: u64, draft: Draft) {
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let response_tx = self.response_tx.clone();

        self.active_requests.spawn(async move {
            tracing::info!(id, title = %draft.title, "Creating todo");
            let response = match client::create_todo(&client, &base_url, &draft).await {
                Ok(todo) => {
                    tracing::info!(id, todo_id = todo.id, "Todo created");
                    ApiResponse::Created { id, todo }
                }
                Err(e) => {
                    tracing::warn!(id, error = %e, "Create failed");
                    ApiResponse::Failed {
                        id,
                        message: client::error_message(&e),
                    }
                }
            };
            let _ = response_tx.send(response);
        });
    }

    fn spawn_update(&mut self, id: u64, todo_id: i64, draft: Draft) {
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let response_tx = self.response_tx.clone();

        self.active_requests.spawn(async move {
            tracing::info!(id, todo_id, "Updating todo");
            let response = match client::update_todo(&client, &base_url, todo_id, &draft).await {
                Ok(todo) => {
                    tracing::info!(id, todo_id = todo.id, "Todo updated");
                    ApiResponse::Updated { id, todo }
                }
                Err(e) => {
                    tracing::warn!(id, todo_id, error = %e, "Update failed");
                    ApiResponse::Failed {
                        id,
                        message: client::error_message(&e),
                    }
                }
            };
            let _ = response_tx.send(response);
        });
    }

    fn spawn_delete(&mut self, id: u64, todo_id: i64) {
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let response_tx = self.response_tx.clone();

        self.active_requests.spawn(async move {
            tracing::info!(id, todo_id, "Deleting todo");
            let response = match client::delete_todo(&client, &base_url, todo_id).await {
                Ok(()) => {
                    tracing::info!(id, todo_id, "Todo deleted");
                    ApiResponse::Deleted { id }
                }
                Err(e) => {
                    tracing::warn!(id, todo_id, error = %e, "Delete failed");
                    ApiResponse::Failed {
                        id,
                        message: client::error_message(&e),
                    }
                }
            };
            let _ = response_tx.send(response);
        });
    }
}
