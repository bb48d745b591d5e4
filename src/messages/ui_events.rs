//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Panel navigation
    NextPanel,
    PrevPanel,
    SelectPrev,
    SelectNext,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,
    NextField,

    // Todo actions
    Submit,
    NewTodo,
    EditSelected,
    DeleteSelected,
    CancelEdit,
    Refresh,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Active panel in the UI (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Panel {
    Title,
    Description,
    List,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Title => Panel::Description,
            Panel::Description => Panel::List,
            Panel::List => Panel::Title,
        }
    }

    pub fn prev(&self) -> Panel {
        match self {
            Panel::Title => Panel::List,
            Panel::Description => Panel::Title,
            Panel::List => Panel::Description,
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_panel: Panel,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // The help popup swallows every key
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Tab => Some(UiEvent::NextPanel),
            KeyCode::BackTab => Some(UiEvent::PrevPanel),
            KeyCode::Char('n') => Some(UiEvent::NewTodo),
            KeyCode::Char('r') => Some(UiEvent::Refresh),
            KeyCode::Esc => Some(UiEvent::CancelEdit),
            KeyCode::Char('e') | KeyCode::Enter => match active_panel {
                Panel::Title | Panel::Description => Some(UiEvent::StartEditing),
                Panel::List => Some(UiEvent::EditSelected),
            },
            KeyCode::Char('d') if active_panel == Panel::List => Some(UiEvent::DeleteSelected),
            KeyCode::Up if active_panel == Panel::List => Some(UiEvent::SelectPrev),
            KeyCode::Down if active_panel == Panel::List => Some(UiEvent::SelectNext),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Enter => Some(UiEvent::Submit),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}
