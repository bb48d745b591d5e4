use ratatui::{prelude::*, widgets::*};

use crate::models::Todo;

/// Renders a text input field
pub fn render_input<'a>(
    content: &'a str,
    title: &'a str,
    is_focused: bool,
    is_editing: bool,
) -> Paragraph<'a> {
    let border_style = if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// One list row for a todo
pub fn todo_list_item(todo: &Todo) -> ListItem<'_> {
    let mut spans = vec![
        Span::styled(format!("#{:<4}", todo.id), Style::default().fg(Color::DarkGray)),
        Span::raw(todo.title.as_str()),
    ];
    if !todo.description.is_empty() {
        spans.push(Span::styled(
            format!("  {}", todo.description),
            Style::default().fg(Color::Gray),
        ));
    }
    if let Some(created) = format_created(todo) {
        spans.push(Span::styled(
            format!("  {}", created),
            Style::default().fg(Color::DarkGray),
        ));
    }
    ListItem::new(Line::from(spans))
}

/// Short creation date for list rows
pub fn format_created(todo: &Todo) -> Option<String> {
    todo.created_at.map(|dt| dt.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_created_uses_short_date() {
        let todo = Todo {
            id: 1,
            title: String::from("A"),
            description: String::new(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 0).single(),
        };
        assert_eq!(format_created(&todo).as_deref(), Some("2024-03-09"));
    }

    #[test]
    fn test_format_created_empty_without_timestamp() {
        let todo = Todo {
            id: 1,
            title: String::from("A"),
            description: String::new(),
            created_at: None,
        };
        assert!(format_created(&todo).is_none());
    }
}
