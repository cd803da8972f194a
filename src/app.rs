use crate::ambience::Ambience;
use crate::domain::{
    Effect, Focus, MascotAnimator, SessionError, SessionPhase, SessionState, SystemWaypoints, TimerDial, TodoList,
    UiMode, WaypointSource,
};
use crate::notifications;
use crate::persistence::{save_settings, FileStore, KeyValueStore, Settings, StatsStore};
use crate::ticker::{Tick, Ticker};
use chrono::{Local, NaiveDate};
use ratatui::layout::Rect;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Main application state
pub struct AppState<S: KeyValueStore = FileStore, R: WaypointSource = SystemWaypoints> {
    pub session: SessionState,
    pub stats: StatsStore<S>,
    pub todos: TodoList,
    pub dial: TimerDial,
    pub mascot: MascotAnimator<R>,
    pub ticker: Ticker,
    pub ambience: Ambience,
    pub settings: Settings,
    /// Where preference changes are written; `None` keeps them in memory
    pub settings_path: Option<PathBuf>,
    pub ui_mode: UiMode,
    pub focus: Focus,
    pub selected_index: usize,
    pub input: String,
    /// One-line feedback shown in the footer until the next key press
    pub status: Option<String>,
    pub last_tick: Instant,
    pub file_date: NaiveDate,
    /// Last rendered dial rectangle, used to map mouse clicks to angles
    pub dial_area: Option<Rect>,
    pub use_emoji: bool,
    pub notify: bool,
    /// Animation frame counter, bumped on every event-loop tick
    pub animation_frame: u32,
}

impl<S: KeyValueStore, R: WaypointSource> AppState<S, R> {
    pub fn new(stats: StatsStore<S>, mascot: MascotAnimator<R>, settings: Settings) -> Self {
        let mut ambience = Ambience::new(settings.sound_file.clone());
        ambience.set_enabled(settings.sound_enabled);

        Self {
            session: SessionState::new(),
            file_date: stats.date(),
            stats,
            todos: TodoList::seeded(),
            dial: TimerDial::new(settings.default_minutes),
            mascot,
            ticker: Ticker::new(),
            ambience,
            settings,
            settings_path: None,
            ui_mode: UiMode::Normal,
            focus: Focus::Dial,
            selected_index: 0,
            input: String::new(),
            status: None,
            last_tick: Instant::now(),
            dial_area: None,
            use_emoji: true,
            notify: true,
            animation_frame: 0,
        }
    }

    pub fn with_settings_path(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }

    /// Start a session with the minutes currently on the dial
    pub fn start_session(&mut self) -> Result<u32, SessionError> {
        let minutes = self.dial.confirm()?;
        let effects = self.session.start(minutes)?;
        info!(minutes, "focus session started");
        self.apply_effects(effects);
        Ok(minutes)
    }

    pub fn stop_session(&mut self) {
        if !self.session.active {
            return;
        }
        let elapsed = self.session.elapsed_secs();
        let effects = self.session.stop();
        info!(elapsed_secs = elapsed, "focus session stopped");
        self.apply_effects(effects);
    }

    /// Space bar: start when idle, stop when running
    pub fn toggle_session(&mut self) {
        if self.session.active {
            self.stop_session();
            self.status = Some("Spell interrupted".to_string());
            return;
        }
        match self.start_session() {
            Ok(minutes) => self.status = Some(format!("Casting a {} minute spell", minutes)),
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    /// Feed measured wall time into the tick scheduler and run whatever fell due
    pub fn advance(&mut self, elapsed: Duration) {
        for tick in self.ticker.advance(elapsed) {
            match tick {
                // Ticks from a batch that outlived the session are dropped
                Tick::Second if self.ticker.is_armed() => {
                    let total = self.session.total_secs;
                    let effects = self.session.tick();
                    if self.session.phase == SessionPhase::Completing && !effects.is_empty() {
                        let minutes = total / 60;
                        info!(minutes, "focus session complete");
                        self.status = Some("Spell complete!".to_string());
                        if self.notify {
                            notifications::notify_session_complete(minutes);
                        }
                    }
                    self.apply_effects(effects);
                }
                Tick::MascotStep if self.ticker.is_armed() => self.mascot.step(),
                Tick::Second | Tick::MascotStep => {}
                Tick::Timeout(timeout) => {
                    let effects = self.session.on_timeout(timeout);
                    self.apply_effects(effects);
                }
            }
        }
    }

    /// Called from the event loop on every poll timeout
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;

        self.advance(elapsed);
        self.ambience.poll();
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartTimers => {
                    self.ticker.arm();
                    self.mascot.start_roaming();
                    self.dial.lock();
                }
                Effect::StopTimers => {
                    self.ticker.cancel();
                    self.dial.unlock();
                }
                Effect::Record(delta) => self.stats.record_session(delta),
                Effect::RestMascot => self.mascot.rest(),
                Effect::Schedule(timeout, after) => self.ticker.schedule(timeout, after),
            }
        }
    }

    /// Check if the current date has changed (crossed midnight)
    pub fn has_day_changed(&self) -> bool {
        Local::now().date_naive() != self.file_date
    }

    /// Move today's counters to `today` and show the new-day notice
    pub fn roll_over_day(&mut self, today: NaiveDate) {
        if today == self.file_date {
            return;
        }
        info!(from = %self.file_date, to = %today, "new day");
        self.stats.roll_over(today);
        self.file_date = today;
        self.ui_mode = UiMode::DayChanged;
    }

    pub fn dismiss_day_changed(&mut self) {
        if self.ui_mode == UiMode::DayChanged {
            self.ui_mode = UiMode::Normal;
        }
    }

    // Dial

    pub fn dial_increment(&mut self) {
        let result = self.dial.increment(1);
        self.report_dial(result);
    }

    pub fn dial_decrement(&mut self) {
        let result = self.dial.decrement(1);
        self.report_dial(result);
    }

    pub fn select_preset(&mut self, index: usize) {
        let result = self.dial.select_preset(index);
        self.report_dial(result);
    }

    /// Set the dial from a pointer angle in degrees, 0 at twelve o'clock
    pub fn set_dial_angle(&mut self, angle_deg: f64) {
        let result = self.dial.set_from_angle(angle_deg);
        self.report_dial(result);
    }

    fn report_dial(&mut self, result: Result<u32, SessionError>) {
        if let Err(e) = result {
            self.status = Some(e.to_string());
        }
    }

    // Todos

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.todos.len() {
            self.selected_index += 1;
        }
    }

    /// Toggle the selected todo; a fresh completion is counted and celebrated
    pub fn toggle_selected_todo(&mut self) {
        let Some(id) = self.todos.get(self.selected_index).map(|t| t.id) else {
            return;
        };
        if self.todos.toggle(id) {
            info!(%id, "todo completed");
            let effects = self.session.on_task_completed();
            self.apply_effects(effects);
        }
    }

    pub fn remove_selected_todo(&mut self) {
        let Some(id) = self.todos.get(self.selected_index).map(|t| t.id) else {
            return;
        };
        self.todos.remove(id);
        if self.selected_index >= self.todos.len() && self.selected_index > 0 {
            self.selected_index = self.todos.len().saturating_sub(1);
        }
    }

    pub fn start_add_todo(&mut self) {
        self.input.clear();
        self.ui_mode = UiMode::AddingTodo;
    }

    pub fn input_add_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Append the typed todo and select it. Blank input just closes the form.
    pub fn submit_input(&mut self) {
        if self.todos.add(&self.input).is_some() {
            self.selected_index = self.todos.len() - 1;
            self.focus = Focus::Todos;
        }
        self.input.clear();
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.ui_mode = UiMode::Normal;
    }

    // View toggles

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    pub fn toggle_stats(&mut self) {
        self.ui_mode = match self.ui_mode {
            UiMode::Stats => UiMode::Normal,
            _ => UiMode::Stats,
        };
    }

    /// Flip the ambient sound and persist the preference
    pub fn toggle_sound(&mut self) {
        self.settings.sound_enabled = !self.settings.sound_enabled;
        self.ambience.set_enabled(self.settings.sound_enabled);
        self.status = Some(if self.settings.sound_enabled {
            "Forest sounds on".to_string()
        } else {
            "Forest sounds off".to_string()
        });

        if let Some(path) = &self.settings_path {
            if let Err(e) = save_settings(path, &self.settings) {
                warn!(error = %e, "could not save settings");
            }
        }
    }

    /// Leave cleanly: a running session is stopped so its partial focus is banked
    pub fn shutdown(&mut self) {
        self.stop_session();
        self.ambience.set_enabled(false);
    }
}
