use crate::app::AppState;
use crate::domain::dial::pointer_angle;
use crate::domain::{Focus, UiMode, WaypointSource};
use crate::persistence::KeyValueStore;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Minutes moved by Left/Right on the dial
const COARSE_STEP: u32 = 5;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key<S: KeyValueStore, R: WaypointSource>(app: &mut AppState<S, R>, key: KeyEvent) -> Result<bool> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTodo => handle_input_mode(app, key),
        UiMode::Stats => handle_stats_mode(app, key),
        UiMode::DayChanged => {
            app.dismiss_day_changed();
            Ok(false)
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_mode<S: KeyValueStore, R: WaypointSource>(app: &mut AppState<S, R>, key: KeyEvent) -> Result<bool> {
    app.status = None;

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_focus();
            Ok(false)
        }

        // Start / stop the spell
        KeyCode::Char(' ') => {
            app.toggle_session();
            Ok(false)
        }
        KeyCode::Enter => {
            match app.focus {
                Focus::Dial => app.toggle_session(),
                Focus::Todos => app.toggle_selected_todo(),
            }
            Ok(false)
        }

        // Up/Down act on whichever pane has focus
        KeyCode::Up => {
            match app.focus {
                Focus::Dial => app.dial_increment(),
                Focus::Todos => app.move_selection_up(),
            }
            Ok(false)
        }
        KeyCode::Down => {
            match app.focus {
                Focus::Dial => app.dial_decrement(),
                Focus::Todos => app.move_selection_down(),
            }
            Ok(false)
        }

        // Dial adjustments
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.dial_increment();
            Ok(false)
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            app.dial_decrement();
            Ok(false)
        }
        KeyCode::Right => {
            for _ in 0..COARSE_STEP {
                app.dial_increment();
            }
            Ok(false)
        }
        KeyCode::Left => {
            for _ in 0..COARSE_STEP {
                app.dial_decrement();
            }
            Ok(false)
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.select_preset(index);
            Ok(false)
        }

        // Todos
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_todo();
            Ok(false)
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            app.toggle_selected_todo();
            Ok(false)
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.remove_selected_todo();
            Ok(false)
        }

        // Views and preferences
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.toggle_stats();
            Ok(false)
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.toggle_sound();
            Ok(false)
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.use_emoji = !app.use_emoji;
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys while the chart overlay is open
fn handle_stats_mode<S: KeyValueStore, R: WaypointSource>(app: &mut AppState<S, R>, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Esc | KeyCode::Enter => {
            app.toggle_stats();
            Ok(false)
        }
        // The countdown keeps running behind the chart
        KeyCode::Char(' ') => {
            app.toggle_session();
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys in the add-todo form
fn handle_input_mode<S: KeyValueStore, R: WaypointSource>(app: &mut AppState<S, R>, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_input();
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_input();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.input_backspace();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.input_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle mouse input: clicking or dragging inside the dial sets its angle
pub fn handle_mouse<S: KeyValueStore, R: WaypointSource>(app: &mut AppState<S, R>, mouse: MouseEvent) -> Result<bool> {
    if app.ui_mode != UiMode::Normal {
        return Ok(false);
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            let Some(area) = app.dial_area else {
                return Ok(false);
            };
            let inside = mouse.column >= area.x
                && mouse.column < area.x + area.width
                && mouse.row >= area.y
                && mouse.row < area.y + area.height;
            if !inside {
                return Ok(false);
            }

            let cx = f64::from(area.x) + f64::from(area.width) / 2.0;
            let cy = f64::from(area.y) + f64::from(area.height) / 2.0;
            let dx = f64::from(mouse.column) + 0.5 - cx;
            // Terminal cells are roughly twice as tall as they are wide
            let dy = (f64::from(mouse.row) + 0.5 - cy) * 2.0;
            if dx == 0.0 && dy == 0.0 {
                return Ok(false);
            }

            app.focus = Focus::Dial;
            app.set_dial_angle(pointer_angle(dx, dy));
            Ok(false)
        }
        _ => Ok(false),
    }
}
