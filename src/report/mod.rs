pub mod generator;
pub mod stats;

pub use generator::{generate_report, print_stats};
pub use stats::{
    day_bars, format_clock, format_focus_time, scale_max, summarize, DayBar, CHART_DAYS,
    MAX_CHART_DAYS,
};
