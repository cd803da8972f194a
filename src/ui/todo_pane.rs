use crate::app::AppState;
use crate::domain::{Focus, Todo, WaypointSource};
use crate::persistence::KeyValueStore;
use crate::ui::styles::{
    border_style, default_style, done_style, focused_border_style, hint_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the todo list
pub fn render_todo_pane<S: KeyValueStore, R: WaypointSource>(f: &mut Frame, app: &AppState<S, R>, area: Rect) {
    let focused = app.focus == Focus::Todos;
    let title = format!(
        " Todos ({} open, {} done) ",
        app.todos.remaining_count(),
        app.todos.completed_count()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, title_style()))
        .border_style(if focused { focused_border_style() } else { border_style() });

    if app.todos.is_empty() {
        let empty = List::new(vec![ListItem::new(Line::styled(
            "  Nothing on the list. Press 'a' to add a todo.",
            border_style(),
        ))])
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .todos
        .todos()
        .iter()
        .map(|todo| ListItem::new(todo_line(todo, app.use_emoji)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(if focused { selected_style() } else { default_style() })
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_index.min(app.todos.len() - 1)));
    f.render_stateful_widget(list, area, &mut state);
}

/// One row: checkbox, text (crossed out when done) and the time it was added
pub fn todo_line(todo: &Todo, use_emoji: bool) -> Line<'static> {
    let check = match (todo.completed, use_emoji) {
        (true, true) => "✅ ",
        (false, true) => "⬜ ",
        (true, false) => "[x] ",
        (false, false) => "[ ] ",
    };
    let text_style = if todo.completed { done_style() } else { default_style() };

    Line::from(vec![
        Span::raw(check),
        Span::styled(todo.text.clone(), text_style),
        Span::styled(format!("  {}", todo.created_at.format("%H:%M")), hint_style()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_line_open_and_done() {
        let mut todo = Todo::new("Read chapter 5".to_string());
        let line = todo_line(&todo, false);
        assert_eq!(line.spans[0].content, "[ ] ");
        assert_eq!(line.spans[1].content, "Read chapter 5");
        assert_eq!(line.spans[1].style, default_style());
        assert_eq!(line.spans[2].content, format!("  {}", todo.created_at.format("%H:%M")));

        todo.completed = true;
        let line = todo_line(&todo, true);
        assert_eq!(line.spans[0].content, "✅ ");
        assert_eq!(line.spans[1].style, done_style());
    }
}
