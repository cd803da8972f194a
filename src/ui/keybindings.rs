use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, ui_mode: UiMode, area: Rect) {
    let hints = match ui_mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" Space start/stop   "),
            Span::raw("Tab focus   "),
            Span::raw("↑/↓ adjust/select   "),
            Span::raw("←/→ ±5m   "),
            Span::raw("1-4 presets   "),
            Span::raw("a add   "),
            Span::raw("x done   "),
            Span::raw("d delete   "),
            Span::raw("c chart   "),
            Span::raw("s sound   "),
            Span::raw("q quit"),
        ]),
        UiMode::AddingTodo => Line::from(" Enter add   Esc cancel"),
        UiMode::Stats => Line::from(" c/Esc close   Space start/stop   q quit"),
        UiMode::DayChanged => Line::from(" Any key to continue"),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
