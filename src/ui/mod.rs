pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod mascot_pane;
pub mod modal;
pub mod stats_pane;
pub mod status_bar;
pub mod styles;
pub mod timer_pane;
pub mod todo_pane;

use crate::app::AppState;
use crate::domain::{UiMode, WaypointSource};
use crate::persistence::KeyValueStore;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use mascot_pane::render_mascot_pane;
use modal::render_day_changed_modal;
use ratatui::Frame;
use stats_pane::render_stats_pane;
use status_bar::render_status_bar;
use timer_pane::render_timer_pane;
use todo_pane::render_todo_pane;

/// Main render function - draws the entire UI
pub fn render<S: KeyValueStore, R: WaypointSource>(f: &mut Frame, app: &mut AppState<S, R>) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app.ui_mode, layout.keybindings_area);

    // Render panes
    render_timer_pane(f, app, layout.timer_area);
    render_mascot_pane(f, app, layout.mascot_area);
    render_todo_pane(f, app, layout.todo_area);
    render_status_bar(f, app, layout.status_area);

    // Overlays
    match app.ui_mode {
        UiMode::DayChanged => render_day_changed_modal(f, app.stats.counters(), size),
        UiMode::Stats => render_stats_pane(f, app, size),
        UiMode::AddingTodo => render_input_form(f, app, size),
        UiMode::Normal => {}
    }
}
