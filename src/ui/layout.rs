use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub timer_area: Rect,
    pub mascot_area: Rect,
    pub todo_area: Rect,
    pub status_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Main area: Timer (40%) | right column
///   - Right column: Mascot (60%) above Todos (40%)
/// - Bottom bar: counters and status (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Timer pane
            Constraint::Percentage(60), // Mascot + todos
        ])
        .split(main_chunks[1]);

    let right_column = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Mascot pane
            Constraint::Percentage(40), // Todo pane
        ])
        .split(horizontal[1]);

    MainLayout {
        keybindings_area: main_chunks[0],
        timer_area: horizontal[0],
        mascot_area: right_column[0],
        todo_area: right_column[1],
        status_area: main_chunks[2],
    }
}

/// Split the timer pane into dial, countdown, progress gauge and presets
pub struct TimerLayout {
    pub dial_area: Rect,
    pub clock_area: Rect,
    pub gauge_area: Rect,
    pub presets_area: Rect,
}

pub fn create_timer_layout(inner: Rect) -> TimerLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Dial
            Constraint::Length(2), // Countdown
            Constraint::Length(1), // Gauge
            Constraint::Length(2), // Presets
        ])
        .split(inner);

    TimerLayout {
        dial_area: chunks[0],
        clock_area: chunks[1],
        gauge_area: chunks[2],
        presets_area: chunks[3],
    }
}

/// Create centered modal area with a fixed height
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(height),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

/// Large centered overlay for the stats chart
pub fn create_overlay_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(5),
            Constraint::Percentage(90),
            Constraint::Percentage(5),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
