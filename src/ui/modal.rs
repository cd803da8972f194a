use crate::report::format_focus_time;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use crate::domain::AggregateCounters;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the new-day notice shown after midnight
pub fn render_day_changed_modal(f: &mut Frame, counters: AggregateCounters, area: Rect) {
    let modal_area = create_modal_area(area, 10);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw("  A new day has begun!"),
        Line::raw(""),
        Line::raw("  Today's session count starts from zero."),
        Line::raw(format!(
            "  All-time focus so far: {}",
            format_focus_time(counters.total_focus_minutes)
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [any key]", modal_title_style()),
            Span::raw(" Continue"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" \u{1F305} Day Changed ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
