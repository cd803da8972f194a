use crate::app::AppState;
use crate::domain::{AggregateCounters, WaypointSource};
use crate::persistence::KeyValueStore;
use crate::report::format_focus_time;
use crate::ui::styles::{celebrate_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the counters and the last status message
pub fn render_status_bar<S: KeyValueStore, R: WaypointSource>(f: &mut Frame, app: &AppState<S, R>, area: Rect) {
    let mut spans = counter_spans(app.stats.counters());

    let sound = match (app.ambience.is_enabled(), app.use_emoji) {
        (true, true) => "🔊",
        (false, true) => "🔇",
        (true, false) => "sound on",
        (false, false) => "sound off",
    };
    spans.push(Span::styled(format!("   {}", sound), hint_style()));
    if app.ambience.is_enabled() && !app.ambience.is_playing() {
        spans.push(Span::styled(" (silent)", hint_style()));
    }

    if let Some(status) = &app.status {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(status.clone(), celebrate_style()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn counter_spans(counters: AggregateCounters) -> Vec<Span<'static>> {
    vec![
        Span::styled(" Today: ", title_style()),
        Span::raw(format!("{} sessions", counters.sessions_today)),
        Span::styled("   Focus: ", title_style()),
        Span::raw(format_focus_time(counters.total_focus_minutes)),
        Span::styled("   Tasks: ", title_style()),
        Span::raw(counters.completed_tasks.to_string()),
    ]
}
