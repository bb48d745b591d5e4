//! App state - pure data structure with no I/O logic

use crate::cache::ListCache;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::RenderState;
use crate::models::{Draft, Todo};

/// Kind of mutation currently in flight
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    pub fn label(&self) -> &'static str {
        match self {
            MutationKind::Create => "create",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
        }
    }
}

/// A mutation that has been sent and not yet answered
#[derive(Clone, Copy, Debug)]
pub struct PendingMutation {
    pub id: u64,
    pub kind: MutationKind,
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Server data
    pub cache: ListCache,

    // Form
    pub draft: Draft,
    /// Todo being edited, None while the form composes a new one
    pub editing: Option<Todo>,
    pub cursor_position: usize,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub selected: usize,

    // Request state
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub next_request_id: u64,
    pub pending_mutation: Option<PendingMutation>,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            cache: ListCache::new(),
            draft: Draft::default(),
            editing: None,
            cursor_position: 0,
            active_panel: Panel::List,
            input_mode: InputMode::Normal,
            selected: 0,
            loading: true,
            error: None,
            notice: None,
            next_request_id: 1,
            pending_mutation: None,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        match self.active_panel {
            Panel::Title => &self.draft.title,
            Panel::Description => &self.draft.description,
            Panel::List => "",
        }
    }

    /// Get mutable reference to current input field
    pub fn current_input_mut(&mut self) -> &mut String {
        match self.active_panel {
            Panel::Title => &mut self.draft.title,
            Panel::Description => &mut self.draft.description,
            Panel::List => &mut self.draft.title, // fallback
        }
    }

    /// The todo the list cursor is on
    pub fn selected_todo(&self) -> Option<&Todo> {
        self.cache.todos().get(self.selected)
    }

    /// Keep the selection inside the list after it changes size
    pub fn clamp_selection(&mut self) {
        let len = self.cache.todos().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            todos: self.cache.todos().to_vec(),
            selected: self.selected,
            draft: self.draft.clone(),
            editing_id: self.editing.as_ref().map(|t| t.id),
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            is_loading: self.loading,
            is_fetching: self.cache.is_fetching(),
            is_mutating: self.pending_mutation.is_some(),
            error: self.error.clone(),
            notice: self.notice.clone(),
            show_help: self.show_help,
        }
    }
}
