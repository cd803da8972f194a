use crate::domain::AggregateCounters;
use crate::persistence::{atomic_write, storage_file, FileStore, KeyValueStore, StatsStore};
use crate::report::stats::{
    bar_fraction, day_bars, format_focus_time, scale_max, summarize, DayBar, CHART_DAYS,
    MAX_CHART_DAYS,
};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

/// Widest text bar, in characters
const TEXT_BAR_WIDTH: usize = 30;

/// Format percentage with 1 decimal place
fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

fn text_bar(value: u32, max: u32) -> String {
    if value == 0 {
        return String::new();
    }
    let width = (bar_fraction(value, max) * TEXT_BAR_WIDTH as f64).round() as usize;
    "█".repeat(width.max(1))
}

/// Plain-text counters and focus chart for the `stats` command
pub fn render_text_stats(counters: AggregateCounters, bars: &[DayBar]) -> String {
    let summary = summarize(bars);
    let max = scale_max(bars, |s| s.focus_minutes);
    let mut out = String::new();

    out.push_str("Witchwatch stats\n\n");
    out.push_str(&format!("  Sessions today:   {}\n", counters.sessions_today));
    out.push_str(&format!(
        "  Total focus:      {}\n",
        format_focus_time(counters.total_focus_minutes)
    ));
    out.push_str(&format!("  Tasks completed:  {}\n\n", counters.completed_tasks));

    out.push_str(&format!("Focus, last {} days\n\n", bars.len()));
    for bar in bars {
        let marker = if bar.is_today { '*' } else { ' ' };
        out.push_str(&format!(
            "{}{} {:>5} {:>7} {}\n",
            marker,
            bar.label(),
            bar.date.format("%m-%d"),
            format_focus_time(bar.stats.focus_minutes),
            text_bar(bar.stats.focus_minutes, max),
        ));
    }

    out.push_str(&format!(
        "\n  {} sessions, {} focused, {} tasks over {} active days\n",
        summary.sessions,
        format_focus_time(summary.focus_minutes),
        summary.tasks,
        summary.active_days
    ));
    out
}

/// Markdown weekly report
pub fn render_markdown_report(
    counters: AggregateCounters,
    days_tracked: usize,
    bars: &[DayBar],
    today: NaiveDate,
) -> String {
    let summary = summarize(bars);
    let mut report = String::new();

    // Header
    report.push_str(&format!("# Weekly Report - week ending {}\n\n", today));

    // Summary Section
    report.push_str("## Summary\n\n");
    report.push_str(&format!("- **Sessions:** {}\n", summary.sessions));
    report.push_str(&format!("- **Focus Time:** {}\n", format_focus_time(summary.focus_minutes)));
    report.push_str(&format!("- **Tasks Completed:** {}\n", summary.tasks));
    report.push_str(&format!(
        "- **Average Session:** {}\n",
        format_focus_time(summary.avg_session_minutes())
    ));
    let active_pct = if bars.is_empty() {
        0.0
    } else {
        f64::from(summary.active_days) / bars.len() as f64 * 100.0
    };
    report.push_str(&format!(
        "- **Active Days:** {}/{} ({})\n\n",
        summary.active_days,
        bars.len(),
        format_percent(active_pct)
    ));

    // All-time Section
    report.push_str("## All Time\n\n");
    report.push_str(&format!(
        "- **Total Focus:** {}\n",
        format_focus_time(counters.total_focus_minutes)
    ));
    report.push_str(&format!("- **Tasks Completed:** {}\n", counters.completed_tasks));
    report.push_str(&format!("- **Days Tracked:** {}\n\n", days_tracked));

    // Daily Breakdown Section
    report.push_str("## Daily Breakdown\n\n");
    report.push_str("| Day | Date | Sessions | Focus | Tasks |\n");
    report.push_str("|-----|------|----------|-------|-------|\n");
    for bar in bars {
        report.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            bar.label(),
            bar.date,
            bar.stats.sessions,
            format_focus_time(bar.stats.focus_minutes),
            bar.stats.tasks_completed
        ));
    }

    if let Some(best) = bars.iter().filter(|b| b.stats.focus_minutes > 0).max_by_key(|b| b.stats.focus_minutes) {
        report.push_str(&format!(
            "\nBest day: {} {} with {} of focus.\n",
            best.label(),
            best.date,
            format_focus_time(best.stats.focus_minutes)
        ));
    }

    report
}

/// Print counters and a chart of the last `days` days
pub fn print_stats(data_dir: &Path, days: u32) -> Result<()> {
    let today = Local::now().date_naive();
    let stats = StatsStore::load_for(FileStore::open(storage_file(data_dir)), today);
    let bars = day_bars(&stats, today, days.clamp(1, MAX_CHART_DAYS));
    print!("{}", render_text_stats(stats.counters(), &bars));
    Ok(())
}

/// Write the weekly markdown report and return its path
pub fn generate_report(data_dir: &Path, output_path: Option<PathBuf>) -> Result<PathBuf> {
    let today = Local::now().date_naive();
    let stats = StatsStore::load_for(FileStore::open(storage_file(data_dir)), today);
    write_report(&stats, data_dir, today, output_path)
}

fn write_report<S: KeyValueStore>(
    stats: &StatsStore<S>,
    data_dir: &Path,
    today: NaiveDate,
    output_path: Option<PathBuf>,
) -> Result<PathBuf> {
    let bars = day_bars(stats, today, CHART_DAYS);
    let report = render_markdown_report(stats.counters(), stats.history().len(), &bars, today);

    // Determine output path
    let output = output_path.unwrap_or_else(|| data_dir.join(format!("report-week-{}.md", today)));

    atomic_write(&output, &report).with_context(|| format!("writing report to {}", output.display()))?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatsDelta;
    use crate::persistence::files::read_file;
    use crate::persistence::MemoryStore;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_stats() -> StatsStore<MemoryStore> {
        let mut stats = StatsStore::load_for(MemoryStore::new(), date(2026, 10, 17));
        stats.record_session_on(date(2026, 10, 17), StatsDelta::completed_session(25));
        stats.record_session_on(date(2026, 10, 18), StatsDelta::completed_session(60));
        stats.record_session_on(date(2026, 10, 18), StatsDelta::task_completed());
        stats
    }

    #[test]
    fn test_text_bar_widths() {
        assert_eq!(text_bar(0, 60), "");
        assert_eq!(text_bar(60, 60).chars().count(), TEXT_BAR_WIDTH);
        assert_eq!(text_bar(30, 60).chars().count(), TEXT_BAR_WIDTH / 2);
        assert_eq!(text_bar(1, 600).chars().count(), 2);
    }

    #[test]
    fn test_render_text_stats() {
        let today = date(2026, 10, 18);
        let stats = sample_stats();
        let bars = day_bars(&stats, today, CHART_DAYS);
        let text = render_text_stats(stats.counters(), &bars);

        assert!(text.contains("Sessions today:   1\n"));
        assert!(text.contains("Total focus:      1h 25m\n"));
        assert!(text.contains("Tasks completed:  1\n"));
        assert!(text.contains("*Sun 10-18   1h 0m"));
        assert!(text.contains(" Sat 10-17     25m"));
        assert!(text.contains("2 sessions, 1h 25m focused, 1 tasks over 2 active days"));
    }

    #[test]
    fn test_render_markdown_report() {
        let today = date(2026, 10, 18);
        let stats = sample_stats();
        let bars = day_bars(&stats, today, CHART_DAYS);
        let report = render_markdown_report(stats.counters(), stats.history().len(), &bars, today);

        assert!(report.starts_with("# Weekly Report - week ending 2026-10-18\n"));
        assert!(report.contains("- **Sessions:** 2\n"));
        assert!(report.contains("- **Average Session:** 42m\n"));
        assert!(report.contains("- **Active Days:** 2/7 (28.6%)\n"));
        assert!(report.contains("| Sun | 2026-10-18 | 1 | 1h 0m | 1 |\n"));
        assert!(report.contains("| Mon | 2026-10-12 | 0 | 0m | 0 |\n"));
        assert!(report.contains("- **Days Tracked:** 2\n"));
        assert!(report.contains("Best day: Sun 2026-10-18 with 1h 0m of focus."));
    }

    #[test]
    fn test_empty_report_has_no_best_day() {
        let today = date(2026, 10, 18);
        let stats = StatsStore::load_for(MemoryStore::new(), today);
        let bars = day_bars(&stats, today, CHART_DAYS);
        let report = render_markdown_report(stats.counters(), stats.history().len(), &bars, today);
        assert!(report.contains("- **Active Days:** 0/7 (0.0%)\n"));
        assert!(!report.contains("Best day"));
    }

    #[test]
    fn test_write_report_default_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let today = date(2026, 10, 18);
        let stats = sample_stats();

        let path = write_report(&stats, temp_dir.path(), today, None).unwrap();
        assert_eq!(path, temp_dir.path().join("report-week-2026-10-18.md"));
        let content = read_file(&path).unwrap();
        assert!(content.contains("## Daily Breakdown"));
    }

    #[test]
    fn test_write_report_explicit_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("mine.md");
        let path = write_report(&sample_stats(), temp_dir.path(), date(2026, 10, 18), Some(output.clone())).unwrap();
        assert_eq!(path, output);
        assert!(output.exists());
    }
}
