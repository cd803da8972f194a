mod ambience;
mod app;
mod domain;
mod input;
mod notifications;
mod persistence;
mod report;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{MascotAnimator, SystemWaypoints};
use persistence::{
    ensure_data_dir, get_data_dir, init_local_data_dir, load_settings, log_file, settings_file, storage_file,
    FileStore, StatsStore,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "witchwatch")]
#[command(about = "A terminal focus timer with a roaming witch, a todo list and daily stats", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .witchwatch directory in the current directory
    Init,
    /// Print today's counters and a focus chart
    Stats {
        /// Number of days to chart, ending today
        #[arg(
            short,
            long,
            default_value_t = report::CHART_DAYS,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(report::MAX_CHART_DAYS))
        )]
        days: u32,
    },
    /// Generate a weekly report with statistics
    Report {
        /// Output file path. Defaults to <data dir>/report-week-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_data_dir()?;
            println!("Initialized witchwatch directory: {}", data_dir.display());
            println!();
            println!("Witchwatch will now keep its stats in this local directory.");
            println!("Run 'witchwatch' to start focusing.");
            Ok(())
        }
        Some(Commands::Stats { days }) => {
            let data_dir = get_data_dir()?;
            report::print_stats(&data_dir, days)
        }
        Some(Commands::Report { output }) => {
            let data_dir = ensure_data_dir()?;
            init_logging(&data_dir)?;

            println!("Generating weekly report...");
            let report_path = report::generate_report(&data_dir, output)?;
            info!(path = %report_path.display(), "report written");
            println!("Report generated: {}", report_path.display());
            Ok(())
        }
        None => run_tui(),
    }
}

/// Route tracing output to the log file so it never lands on the TUI screen
fn init_logging(data_dir: &Path) -> Result<()> {
    let path = log_file(data_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn run_tui() -> Result<()> {
    let data_dir = ensure_data_dir()?;
    init_logging(&data_dir)?;
    eprintln!("Using witchwatch directory: {}", data_dir.display());

    let settings_path = settings_file(&data_dir);
    let settings = load_settings(&settings_path);
    let stats = StatsStore::load(FileStore::open(storage_file(&data_dir)));
    info!(dir = %data_dir.display(), counters = ?stats.counters(), "starting");

    let mut app = AppState::new(stats, MascotAnimator::new(SystemWaypoints), settings).with_settings_path(settings_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    // A running session is banked as partial focus
    app.shutdown();
    info!("exiting");

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Midnight crossing: today's counter starts over
        if app.has_day_changed() {
            app.roll_over_day(chrono::Local::now().date_naive());
        }

        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if input::handle_key(app, key)? {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    if input::handle_mouse(app, mouse)? {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }

        // Tick timers
        app.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_days(args: &[&str]) -> Option<u32> {
        match Cli::try_parse_from(args).ok()?.command {
            Some(Commands::Stats { days }) => Some(days),
            _ => None,
        }
    }

    #[test]
    fn test_stats_days_default_and_bounds() {
        assert_eq!(stats_days(&["witchwatch", "stats"]), Some(report::CHART_DAYS));
        assert_eq!(stats_days(&["witchwatch", "stats", "--days", "30"]), Some(30));
        assert_eq!(stats_days(&["witchwatch", "stats", "--days", "366"]), Some(366));
        assert_eq!(stats_days(&["witchwatch", "stats", "--days", "0"]), None);
        assert_eq!(stats_days(&["witchwatch", "stats", "--days", "200000000"]), None);
    }
}
