//! tuido - Actor-based terminal todo client
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async REST calls

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use tuido::app::AppActor;
use tuido::constants;
use tuido::messages::ui_events::{key_to_ui_event, InputMode, Panel};
use tuido::messages::{ApiCommand, ApiResponse, RenderState, UiEvent};
use tuido::network::NetworkActor;
use tuido::ui;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "tuido.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let base_url = std::env::var("TUIDO_API_URL")
        .unwrap_or_else(|_| constants::DEFAULT_API_URL.to_string());
    tracing::info!(%base_url, "Starting {}", constants::APP_NAME);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (api_cmd_tx, api_cmd_rx) = mpsc::unbounded_channel::<ApiCommand>();
    let (api_resp_tx, api_resp_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(base_url, api_resp_tx);
    tokio::spawn(network_actor.run(api_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(api_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, api_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_panel,
                    current_state.input_mode,
                    current_state.show_help,
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    // Loading and error replace the whole view
    if state.is_loading {
        draw_loading(f, area);
        return;
    }
    if state.error.is_some() {
        draw_error(f, state, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(3), // Title input
            Constraint::Length(3), // Description input
            Constraint::Min(5),    // Todo list
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_bar(f, chunks[0]);
    draw_form(f, state, chunks[1], chunks[2]);
    draw_list(f, state, chunks[3]);
    draw_status_bar(f, state, chunks[4]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} {} ", constants::APP_NAME, constants::APP_VERSION),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::raw(" "),
        Span::styled("?:help", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_form(f: &mut Frame, state: &RenderState, title_area: Rect, desc_area: Rect) {
    let is_editing = state.input_mode == InputMode::Editing;

    let title_label = match state.editing_id {
        Some(id) => format!(" Title (editing #{}) ", id),
        None => String::from(" Title (new) "),
    };
    let title_input = ui::render_input(
        &state.draft.title,
        &title_label,
        state.active_panel == Panel::Title,
        is_editing,
    );
    f.render_widget(title_input, title_area);

    let desc_input = ui::render_input(
        &state.draft.description,
        " Description ",
        state.active_panel == Panel::Description,
        is_editing,
    );
    f.render_widget(desc_input, desc_area);

    // Cursor inside the focused field
    if is_editing {
        let field_area = match state.active_panel {
            Panel::Title => Some(title_area),
            Panel::Description => Some(desc_area),
            Panel::List => None,
        };
        if let Some(area) = field_area {
            let max_x = area.x + area.width.saturating_sub(2);
            let cursor_x = (area.x + state.cursor_position as u16 + 1).min(max_x);
            f.set_cursor_position(Position::new(cursor_x, area.y + 1));
        }
    }
}

fn draw_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::List;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let syncing = if state.is_fetching { " [syncing]" } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" Todos ({}){} ", state.todos.len(), syncing));

    if state.todos.is_empty() {
        let placeholder = Paragraph::new("No todos yet.\n\nPress 'n' to create one.")
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = state.todos.iter().map(ui::todo_list_item).collect();

    let highlight_style = if is_focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default()
    };

    let list = List::new(items).block(block).highlight_style(highlight_style);

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let (text, color) = if let Some(notice) = &state.notice {
        (format!(" {} ", notice), Color::Yellow)
    } else if state.is_mutating {
        (String::from(" Saving... "), Color::Cyan)
    } else if state.input_mode == InputMode::Editing {
        (
            String::from(" ESC:stop editing | Tab:next field | Enter:submit "),
            Color::DarkGray,
        )
    } else {
        (
            String::from(" Tab:panel | n:new | e:edit | d:delete | r:refresh | ?:help | q:quit "),
            Color::DarkGray,
        )
    };

    let bar = Paragraph::new(text).style(Style::default().fg(color));
    f.render_widget(bar, area);
}

fn draw_loading(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", constants::APP_NAME));

    let text = Paragraph::new("\nLoading todos...")
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(text, area);
}

fn draw_error(f: &mut Frame, state: &RenderState, area: Rect) {
    let retrying = if state.is_fetching { "\n\nRetrying..." } else { "" };
    let message = format!(
        "\nFailed to load todos\n\n{}{}\n\nr:retry | q:quit",
        state.error.as_deref().unwrap_or("Unknown error"),
        retrying
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Error ");

    let text = Paragraph::new(message)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(text, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 TUIDO - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch panels
   Up / Down          Move through the list

 TODOS
   n                  New todo (opens the form)
   e / Enter          Edit the selected todo
   d                  Delete the selected todo
   r                  Refresh the list

 FORM
   Tab                Switch between title and description
   Enter              Submit
   Esc                Stop editing, Esc again to discard

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
