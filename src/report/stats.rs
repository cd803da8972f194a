use crate::domain::DailyStats;
use crate::persistence::{KeyValueStore, StatsStore};
use chrono::NaiveDate;

/// Days shown in the chart
pub const CHART_DAYS: u32 = 7;

/// Longest range the `stats` command will chart
pub const MAX_CHART_DAYS: u32 = 366;

/// Smallest bar height, as a fraction of the tallest, so empty days stay visible
pub const MIN_BAR_FRACTION: f64 = 0.05;

/// One column of the history chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBar {
    pub date: NaiveDate,
    pub stats: DailyStats,
    pub is_today: bool,
}

impl DayBar {
    /// Short weekday label, e.g. "Sun"
    pub fn label(&self) -> String {
        self.date.format("%a").to_string()
    }
}

/// Totals across the charted days
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekSummary {
    pub sessions: u32,
    pub focus_minutes: u32,
    pub tasks: u32,
    pub active_days: u32,
}

impl WeekSummary {
    pub fn avg_session_minutes(&self) -> u32 {
        if self.sessions == 0 {
            0
        } else {
            self.focus_minutes / self.sessions
        }
    }
}

/// The `days` columns ending at `today`, oldest first
pub fn day_bars<S: KeyValueStore>(stats: &StatsStore<S>, today: NaiveDate, days: u32) -> Vec<DayBar> {
    stats
        .last_days(today, days)
        .into_iter()
        .map(|(date, day)| DayBar {
            date,
            stats: day,
            is_today: date == today,
        })
        .collect()
}

pub fn summarize(bars: &[DayBar]) -> WeekSummary {
    bars.iter().fold(WeekSummary::default(), |mut acc, bar| {
        acc.sessions = acc.sessions.saturating_add(bar.stats.sessions);
        acc.focus_minutes = acc.focus_minutes.saturating_add(bar.stats.focus_minutes);
        acc.tasks = acc.tasks.saturating_add(bar.stats.tasks_completed);
        if bar.stats.sessions > 0 || bar.stats.focus_minutes > 0 || bar.stats.tasks_completed > 0 {
            acc.active_days = acc.active_days.saturating_add(1);
        }
        acc
    })
}

/// Largest value of a series, never below 1 so it can divide
pub fn scale_max<F>(bars: &[DayBar], value: F) -> u32
where
    F: Fn(&DailyStats) -> u32,
{
    bars.iter().map(|b| value(&b.stats)).max().unwrap_or(0).max(1)
}

/// Bar height as a fraction of the tallest bar, floored at `MIN_BAR_FRACTION`
pub fn bar_fraction(value: u32, max: u32) -> f64 {
    let fraction = f64::from(value) / f64::from(max.max(1));
    fraction.clamp(MIN_BAR_FRACTION, 1.0)
}

/// Minutes as "1h 5m", or "45m" under an hour
pub fn format_focus_time(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Countdown clock, "MM:SS"
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
