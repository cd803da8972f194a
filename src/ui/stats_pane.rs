use crate::app::AppState;
use crate::domain::{DailyStats, WaypointSource};
use crate::persistence::KeyValueStore;
use crate::report::{day_bars, format_focus_time, scale_max, summarize, DayBar, CHART_DAYS};
use crate::ui::layout::create_overlay_area;
use crate::ui::styles::{focus_bar_style, modal_bg_style, modal_title_style, sessions_bar_style, title_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the weekly chart overlay
pub fn render_stats_pane<S: KeyValueStore, R: WaypointSource>(f: &mut Frame, app: &AppState<S, R>, area: Rect) {
    let overlay = create_overlay_area(area);
    f.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Weekly Spellbook ", modal_title_style()))
        .style(modal_bg_style());
    let inner = block.inner(overlay);
    f.render_widget(block, overlay);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),      // Summary
            Constraint::Percentage(50), // Sessions
            Constraint::Percentage(50), // Focus minutes
        ])
        .split(inner);

    let bars = day_bars(&app.stats, app.stats.date(), CHART_DAYS);
    let summary = summarize(&bars);
    let counters = app.stats.counters();

    let summary_lines = vec![
        Line::from(vec![
            Span::styled("This week: ", title_style()),
            Span::raw(format!(
                "{} sessions · {} focused · {} tasks · avg {}",
                summary.sessions,
                format_focus_time(summary.focus_minutes),
                summary.tasks,
                format_focus_time(summary.avg_session_minutes())
            )),
        ]),
        Line::from(vec![
            Span::styled("All time:  ", title_style()),
            Span::raw(format!(
                "{} focused · {} tasks completed",
                format_focus_time(counters.total_focus_minutes),
                counters.completed_tasks
            )),
        ]),
        Line::from(vec![
            Span::styled("Active days: ", title_style()),
            Span::raw(format!("{}/{}", summary.active_days, bars.len())),
        ]),
    ];
    f.render_widget(Paragraph::new(summary_lines), chunks[0]);

    render_chart(f, &bars, " Sessions ", |s| s.sessions, sessions_bar_style(), chunks[1]);
    render_chart(f, &bars, " Focus minutes ", |s| s.focus_minutes, focus_bar_style(), chunks[2]);
}

fn render_chart<F>(f: &mut Frame, days: &[DayBar], title: &str, value: F, style: Style, area: Rect)
where
    F: Fn(&DailyStats) -> u32,
{
    let max = scale_max(days, &value);
    let bars: Vec<Bar> = days.iter().map(|day| chart_bar(day, value(&day.stats), style)).collect();
    let bar_width = bar_width_for(area.width, days.len());

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::TOP).title(Span::styled(title.to_string(), title_style())))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2)
        .max(u64::from(max));
    f.render_widget(chart, area);
}

fn chart_bar(day: &DayBar, value: u32, style: Style) -> Bar<'static> {
    let label = if day.is_today {
        Line::styled(day.label(), modal_title_style())
    } else {
        Line::raw(day.label())
    };
    Bar::default()
        .value(u64::from(value))
        .label(label)
        .text_value(value.to_string())
        .style(style)
}

/// Widest bar that still fits `count` bars with a gap of two
pub fn bar_width_for(width: u16, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let count = count as u16;
    (width.saturating_sub(2 * count) / count).clamp(3, 12)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_for() {
        assert_eq!(bar_width_for(80, 7), 9);
        assert_eq!(bar_width_for(200, 7), 12);
        assert_eq!(bar_width_for(10, 7), 3);
        assert_eq!(bar_width_for(10, 0), 1);
    }
}
