//! HTTP client for the todo REST API
//!
//! Thin typed wrappers over reqwest. Transport and status errors are left
//! as `reqwest::Error`; the actor turns them into user-facing messages.

use crate::models::{Draft, Todo};

/// Fetch every todo on the server
pub async fn list_todos(client: &reqwest::Client, base_url: &str) -> Result<Vec<Todo>, reqwest::Error> {
    client
        .get(format!("{}/todos", base_url))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

/// Fetch a single todo by id
pub async fn get_todo(client: &reqwest::Client, base_url: &str, id: i64) -> Result<Todo, reqwest::Error> {
    client
        .get(format!("{}/todos/{}", base_url, id))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

/// Create a todo from a draft, returning the server's copy with its id
pub async fn create_todo(
    client: &reqwest::Client,
    base_url: &str,
    draft: &Draft,
) -> Result<Todo, reqwest::Error> {
    client
        .post(format!("{}/todos", base_url))
        .json(draft)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

/// Replace the todo with the given id
pub async fn update_todo(
    client: &reqwest::Client,
    base_url: &str,
    id: i64,
    draft: &Draft,
) -> Result<Todo, reqwest::Error> {
    client
        .put(format!("{}/todos/{}", base_url, id))
        .json(draft)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

/// Delete the todo with the given id
pub async fn delete_todo(client: &reqwest::Client, base_url: &str, id: i64) -> Result<(), reqwest::Error> {
    client
        .delete(format!("{}/todos/{}", base_url, id))
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

/// Map a transport or status error to a line the UI can show
pub fn error_message(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        String::from("Request timed out")
    } else if err.is_connect() {
        format!("Connection failed: {}", err)
    } else if let Some(status) = err.status() {
        format!("Server returned {}", status)
    } else {
        format!("Request failed: {}", err)
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    reqwest::Client::new()
}
