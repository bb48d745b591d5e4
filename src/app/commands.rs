//! Command handlers - business logic for processing UI events

use crate::app::state::{AppState, MutationKind, PendingMutation};
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::{ApiCommand, ApiResponse};
use crate::models::Draft;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = self.active_panel.prev();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.cache.todos().len() {
            self.selected += 1;
        }
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.current_input().len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Move field focus between title and description while editing
    pub fn next_field(&mut self) {
        self.active_panel = match self.active_panel {
            Panel::Title => Panel::Description,
            _ => Panel::Title,
        };
        self.cursor_position = self.current_input().len();
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let input = self.current_input_mut();
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    // ========================
    // Form lifecycle
    // ========================

    /// Open an empty form for a new todo
    pub fn new_todo(&mut self) {
        self.draft.clear();
        self.editing = None;
        self.notice = None;
        self.active_panel = Panel::Title;
        self.input_mode = InputMode::Editing;
        self.cursor_position = 0;
    }

    /// Load the selected todo into the form for editing
    pub fn edit_selected(&mut self) {
        if let Some(todo) = self.selected_todo().cloned() {
            self.draft = Draft::from_todo(&todo);
            self.editing = Some(todo);
            self.notice = None;
            self.active_panel = Panel::Title;
            self.input_mode = InputMode::Editing;
            self.cursor_position = self.draft.title.len();
        }
    }

    /// Drop the form contents and the edit target
    pub fn cancel_edit(&mut self) {
        self.draft.clear();
        self.editing = None;
        self.cursor_position = 0;
    }

    // ========================
    // Mutations
    // ========================

    /// Turn the form contents into a create or update command.
    ///
    /// Returns None while another mutation is in flight or the title is
    /// blank. The form keeps its contents until the server acknowledges the
    /// mutation, so a failure loses nothing; the list itself only changes
    /// through the refetch that follows success.
    pub fn submit_draft(&mut self) -> Option<ApiCommand> {
        if self.pending_mutation.is_some() {
            return None;
        }
        if !self.draft.has_title() {
            self.notice = Some(String::from("Title is required"));
            return None;
        }

        let draft = self.draft.clone();
        let id = self.next_id();
        let command = match &self.editing {
            Some(todo) => {
                self.pending_mutation = Some(PendingMutation {
                    id,
                    kind: MutationKind::Update,
                });
                ApiCommand::UpdateTodo {
                    id,
                    todo_id: todo.id,
                    draft,
                }
            }
            None => {
                self.pending_mutation = Some(PendingMutation {
                    id,
                    kind: MutationKind::Create,
                });
                ApiCommand::CreateTodo { id, draft }
            }
        };

        self.notice = None;
        self.input_mode = InputMode::Normal;
        self.active_panel = Panel::List;

        Some(command)
    }

    /// Delete the todo under the list cursor
    pub fn delete_selected(&mut self) -> Option<ApiCommand> {
        if self.pending_mutation.is_some() {
            return None;
        }
        let todo_id = self.selected_todo()?.id;

        let id = self.next_id();
        self.pending_mutation = Some(PendingMutation {
            id,
            kind: MutationKind::Delete,
        });
        self.notice = None;

        Some(ApiCommand::DeleteTodo { id, todo_id })
    }

    // ========================
    // List fetching
    // ========================

    /// Start a fetch unless one is already running
    pub fn refresh_list(&mut self) -> Option<ApiCommand> {
        if self.cache.is_fetching() {
            return None;
        }
        let id = self.next_id();
        self.cache.begin_fetch(id);
        Some(ApiCommand::FetchList { id })
    }

    /// Invalidate the cache and fetch again, superseding any running fetch
    pub fn invalidate_and_refetch(&mut self) -> ApiCommand {
        self.cache.mark_stale();
        let id = self.next_id();
        self.cache.begin_fetch(id);
        ApiCommand::FetchList { id }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Response handling
    // ========================

    /// Apply a network response. A mutation acknowledgement yields the
    /// follow-up fetch command that brings the list back in sync.
    pub fn handle_response(&mut self, response: ApiResponse) -> Option<ApiCommand> {
        match response {
            ApiResponse::ListFetched { id, todos } => {
                if self.cache.complete(id, todos) {
                    self.loading = false;
                    self.error = None;
                    self.clamp_selection();
                }
                None
            }
            ApiResponse::Created { id, .. }
            | ApiResponse::Updated { id, .. }
            | ApiResponse::Deleted { id } => self.finalize_mutation(id),
            ApiResponse::Failed { id, message } => {
                if let Some(pending) = self.pending_mutation {
                    if pending.id == id {
                        self.pending_mutation = None;
                        self.notice =
                            Some(format!("Failed to {}: {}", pending.kind.label(), message));
                        return None;
                    }
                }
                if self.cache.fail(id) {
                    self.loading = false;
                    self.error = Some(message);
                }
                None
            }
        }
    }

    fn finalize_mutation(&mut self, id: u64) -> Option<ApiCommand> {
        match self.pending_mutation {
            Some(pending) if pending.id == id => {
                self.pending_mutation = None;
                // The form empties only once the server has accepted it
                if matches!(pending.kind, MutationKind::Create | MutationKind::Update) {
                    self.draft.clear();
                    self.editing = None;
                    self.cursor_position = 0;
                }
                Some(self.invalidate_and_refetch())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Todo;

    fn todo(id: i64, title: &str) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            description: format!("{} description", title),
            created_at: None,
        }
    }

    /// A state whose first fetch already completed with the given todos
    fn seeded(todos: Vec<Todo>) -> AppState {
        let mut state = AppState::new();
        let cmd = state.refresh_list();
        let id = match cmd {
            Some(ApiCommand::FetchList { id }) => id,
            other => panic!("expected FetchList, got {:?}", other),
        };
        state.handle_response(ApiResponse::ListFetched { id, todos });
        state
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.enter_char(c);
        }
    }

    #[test]
    fn test_initial_fetch_populates_list() {
        let state = seeded(vec![todo(1, "First"), todo(2, "Second")]);
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.cache.todos().len(), 2);
    }

    #[test]
    fn test_fetch_error_replaces_loading_with_error() {
        let mut state = AppState::new();
        assert!(state.loading);
        let id = match state.refresh_list() {
            Some(ApiCommand::FetchList { id }) => id,
            other => panic!("expected FetchList, got {:?}", other),
        };
        state.handle_response(ApiResponse::Failed {
            id,
            message: String::from("Network error: connection refused"),
        });
        assert!(!state.loading);
        assert!(state.error.is_some());
        assert!(state.cache.todos().is_empty());
    }

    #[test]
    fn test_successful_fetch_clears_previous_error() {
        let mut state = AppState::new();
        let id = match state.refresh_list() {
            Some(ApiCommand::FetchList { id }) => id,
            other => panic!("expected FetchList, got {:?}", other),
        };
        state.handle_response(ApiResponse::Failed {
            id,
            message: String::from("timed out"),
        });
        assert!(state.error.is_some());

        let id = match state.refresh_list() {
            Some(ApiCommand::FetchList { id }) => id,
            other => panic!("expected FetchList, got {:?}", other),
        };
        state.handle_response(ApiResponse::ListFetched {
            id,
            todos: vec![todo(1, "Back")],
        });
        assert!(state.error.is_none());
        assert_eq!(state.cache.todos().len(), 1);
    }

    #[test]
    fn test_create_submits_draft_and_refetches_on_success() {
        let mut state = seeded(vec![]);
        state.new_todo();
        type_str(&mut state, "Buy milk");
        state.next_field();
        type_str(&mut state, "Two liters");

        let cmd = state.submit_draft();
        let id = match cmd {
            Some(ApiCommand::CreateTodo { id, ref draft }) => {
                assert_eq!(draft.title, "Buy milk");
                assert_eq!(draft.description, "Two liters");
                id
            }
            other => panic!("expected CreateTodo, got {:?}", other),
        };
        // The form keeps its contents until the server confirms
        assert_eq!(state.draft.title, "Buy milk");
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.pending_mutation.is_some());

        let followup = state.handle_response(ApiResponse::Created {
            id,
            todo: todo(1, "Buy milk"),
        });
        let fetch_id = match followup {
            Some(ApiCommand::FetchList { id }) => id,
            other => panic!("expected follow-up FetchList, got {:?}", other),
        };
        assert!(state.pending_mutation.is_none());
        assert!(state.draft.title.is_empty());
        assert!(state.cache.is_stale());

        state.handle_response(ApiResponse::ListFetched {
            id: fetch_id,
            todos: vec![todo(1, "Buy milk")],
        });
        assert!(!state.cache.is_stale());
        assert_eq!(state.cache.todos().len(), 1);
    }

    #[test]
    fn test_submit_blocked_while_mutation_in_flight() {
        let mut state = seeded(vec![]);
        state.new_todo();
        type_str(&mut state, "One");
        assert!(state.submit_draft().is_some());

        state.new_todo();
        type_str(&mut state, "Two");
        assert!(state.submit_draft().is_none());
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let mut state = seeded(vec![]);
        state.new_todo();
        type_str(&mut state, "   ");
        assert!(state.submit_draft().is_none());
        assert_eq!(state.notice.as_deref(), Some("Title is required"));
        assert!(state.pending_mutation.is_none());
    }

    #[test]
    fn test_edit_prefills_draft_and_submits_update() {
        let mut state = seeded(vec![todo(7, "Old title")]);
        state.edit_selected();
        assert_eq!(state.draft.title, "Old title");
        assert_eq!(state.editing.as_ref().map(|t| t.id), Some(7));
        assert_eq!(state.input_mode, InputMode::Editing);
        assert_eq!(state.active_panel, Panel::Title);

        type_str(&mut state, " v2");
        let id = match state.submit_draft() {
            Some(ApiCommand::UpdateTodo { id, todo_id, draft }) => {
                assert_eq!(todo_id, 7);
                assert_eq!(draft.title, "Old title v2");
                id
            }
            other => panic!("expected UpdateTodo, got {:?}", other),
        };
        // Edit mode exits only once the server has accepted the update
        assert!(state.editing.is_some());
        state.handle_response(ApiResponse::Updated {
            id,
            todo: todo(7, "Old title v2"),
        });
        assert!(state.editing.is_none());
        assert!(state.draft.title.is_empty());
    }

    #[test]
    fn test_cancel_edit_drops_target_and_draft() {
        let mut state = seeded(vec![todo(7, "Old title")]);
        state.edit_selected();
        state.stop_editing();
        state.cancel_edit();
        assert!(state.editing.is_none());
        assert!(state.draft.title.is_empty());
    }

    #[test]
    fn test_delete_sends_command_then_refetches() {
        let mut state = seeded(vec![todo(3, "A"), todo(4, "B")]);
        state.select_next();

        let cmd = state.delete_selected();
        let id = match cmd {
            Some(ApiCommand::DeleteTodo { id, todo_id }) => {
                assert_eq!(todo_id, 4);
                id
            }
            other => panic!("expected DeleteTodo, got {:?}", other),
        };

        let followup = state.handle_response(ApiResponse::Deleted { id });
        assert!(matches!(followup, Some(ApiCommand::FetchList { .. })));
    }

    #[test]
    fn test_delete_on_empty_list_is_a_noop() {
        let mut state = seeded(vec![]);
        assert!(state.delete_selected().is_none());
        assert!(state.pending_mutation.is_none());
    }

    #[test]
    fn test_mutation_failure_sets_notice_and_unblocks() {
        let mut state = seeded(vec![]);
        state.new_todo();
        type_str(&mut state, "Doomed");
        let id = match state.submit_draft() {
            Some(ApiCommand::CreateTodo { id, .. }) => id,
            other => panic!("expected CreateTodo, got {:?}", other),
        };

        state.handle_response(ApiResponse::Failed {
            id,
            message: String::from("Server returned 500 Internal Server Error"),
        });
        let notice = state.notice.as_deref().unwrap_or_default();
        assert!(notice.starts_with("Failed to create"));
        // The list view itself is untouched by a mutation failure
        assert!(state.error.is_none());
        assert!(state.pending_mutation.is_none());

        // The draft survived, so submitting again retries the same create
        assert_eq!(state.draft.title, "Doomed");
        assert!(state.submit_draft().is_some());
    }

    #[test]
    fn test_update_failure_keeps_edit_mode() {
        let mut state = seeded(vec![todo(9, "Stubborn")]);
        state.edit_selected();
        let id = match state.submit_draft() {
            Some(ApiCommand::UpdateTodo { id, .. }) => id,
            other => panic!("expected UpdateTodo, got {:?}", other),
        };

        state.handle_response(ApiResponse::Failed {
            id,
            message: String::from("Connection failed"),
        });
        assert_eq!(state.editing.as_ref().map(|t| t.id), Some(9));
        assert_eq!(state.draft.title, "Stubborn");
        assert!(state.notice.as_deref().unwrap_or_default().starts_with("Failed to update"));
    }

    #[test]
    fn test_selection_clamped_when_list_shrinks() {
        let mut state = seeded(vec![todo(1, "A"), todo(2, "B"), todo(3, "C")]);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2);

        let fetch_id = match state.refresh_list() {
            Some(ApiCommand::FetchList { id }) => id,
            other => panic!("expected FetchList, got {:?}", other),
        };
        state.handle_response(ApiResponse::ListFetched {
            id: fetch_id,
            todos: vec![todo(1, "A")],
        });
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_superseded_fetch_result_is_ignored() {
        let mut state = seeded(vec![todo(1, "A")]);
        let first = match state.refresh_list() {
            Some(ApiCommand::FetchList { id }) => id,
            other => panic!("expected FetchList, got {:?}", other),
        };
        // A mutation acknowledgement refetches and supersedes the running fetch
        let second = match state.invalidate_and_refetch() {
            ApiCommand::FetchList { id } => id,
            other => panic!("expected FetchList, got {:?}", other),
        };
        assert_ne!(first, second);

        state.handle_response(ApiResponse::ListFetched {
            id: first,
            todos: vec![],
        });
        assert_eq!(state.cache.todos().len(), 1);

        state.handle_response(ApiResponse::ListFetched {
            id: second,
            todos: vec![todo(1, "A"), todo(2, "B")],
        });
        assert_eq!(state.cache.todos().len(), 2);
    }

    #[test]
    fn test_refresh_is_a_noop_while_fetch_runs() {
        let mut state = seeded(vec![]);
        assert!(state.refresh_list().is_some());
        assert!(state.refresh_list().is_none());
    }
}
