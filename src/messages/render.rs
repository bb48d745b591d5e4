//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{InputMode, Panel};
use crate::models::{Draft, Todo};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Todo list
    pub todos: Vec<Todo>,
    pub selected: usize,

    // Form
    pub draft: Draft,
    /// Server id of the todo being edited, None while composing a new one
    pub editing_id: Option<i64>,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Request state
    pub is_loading: bool,
    pub is_fetching: bool,
    pub is_mutating: bool,
    pub error: Option<String>,
    pub notice: Option<String>,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            todos: Vec::new(),
            selected: 0,
            draft: Draft::default(),
            editing_id: None,
            active_panel: Panel::Title,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            is_loading: true,
            is_fetching: false,
            is_mutating: false,
            error: None,
            notice: None,
            show_help: false,
        }
    }
}
