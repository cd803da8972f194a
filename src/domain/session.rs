use super::enums::{MascotMode, SessionPhase};
use super::error::SessionError;
use super::stats::StatsDelta;
use chrono::{DateTime, Local};
use std::time::Duration;

pub const MIN_MINUTES: u32 = 1;
pub const MAX_MINUTES: u32 = 120;

/// Stopped sessions shorter than this earn no focus credit
pub const PARTIAL_CREDIT_FLOOR_SECS: u32 = 30;

/// How long the completion spell stays on screen
pub const COMPLETION_HOLD: Duration = Duration::from_secs(3);

/// How long a todo completion pulse lasts
pub const CELEBRATION_PULSE: Duration = Duration::from_secs(2);

/// One-shot timers the session asks the scheduler for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeout {
    CompletionHold,
    Celebration,
}

/// Side effects produced by a transition, applied by the caller in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Arm the countdown and mascot tick streams and send the witch roaming
    StartTimers,
    /// Cancel both periodic tick streams
    StopTimers,
    Record(StatsDelta),
    RestMascot,
    Schedule(Timeout, Duration),
}

/// Focus minutes credited for a manual stop after `elapsed_secs`
pub fn partial_credit(elapsed_secs: u32) -> u32 {
    if elapsed_secs < PARTIAL_CREDIT_FLOOR_SECS {
        0
    } else {
        elapsed_secs.div_ceil(60)
    }
}

/// Focus minutes credited for a session that ran to zero
pub fn full_credit(total_secs: u32) -> u32 {
    total_secs / 60
}

/// Countdown state. Never persisted.
///
/// Transitions are pure: they mutate the state and return the effects the
/// caller must apply, so they can be driven by synthetic ticks in tests.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub active: bool,
    pub phase: SessionPhase,
    pub remaining_secs: u32,
    pub total_secs: u32,
    pub started_at: Option<DateTime<Local>>,
    /// Celebration pulses still on screen
    pulses: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            active: false,
            phase: SessionPhase::Idle,
            remaining_secs: 0,
            total_secs: 0,
            started_at: None,
            pulses: 0,
        }
    }

    /// Animation mode derived from the phase and any running pulse
    pub fn mode(&self) -> MascotMode {
        if self.phase == SessionPhase::Completing || self.pulses > 0 {
            MascotMode::Celebrating
        } else if self.active {
            MascotMode::Active
        } else {
            MascotMode::Idle
        }
    }

    /// Seconds focused so far in the running session
    pub fn elapsed_secs(&self) -> u32 {
        self.total_secs - self.remaining_secs
    }

    /// Fraction of the session already elapsed, 0.0..=1.0
    pub fn progress(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        f64::from(self.elapsed_secs()) / f64::from(self.total_secs)
    }

    pub fn start(&mut self, minutes: u32) -> Result<Vec<Effect>, SessionError> {
        self.start_at(minutes, Local::now())
    }

    pub fn start_at(&mut self, minutes: u32, now: DateTime<Local>) -> Result<Vec<Effect>, SessionError> {
        if self.active {
            return Err(SessionError::AlreadyActive);
        }
        if !(MIN_MINUTES..=MAX_MINUTES).contains(&minutes) {
            return Err(SessionError::InvalidDuration(minutes));
        }

        self.total_secs = minutes * 60;
        self.remaining_secs = self.total_secs;
        self.active = true;
        self.phase = SessionPhase::Active;
        self.started_at = Some(now);

        Ok(vec![Effect::StartTimers])
    }

    /// One countdown second. No-op unless a session is running.
    pub fn tick(&mut self) -> Vec<Effect> {
        if !self.active {
            return Vec::new();
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return Vec::new();
        }

        let credit = full_credit(self.total_secs);
        self.reset_countdown();
        self.phase = SessionPhase::Completing;

        vec![
            Effect::StopTimers,
            Effect::Record(StatsDelta::completed_session(credit)),
            Effect::Schedule(Timeout::CompletionHold, COMPLETION_HOLD),
        ]
    }

    /// Manual cancellation. No-op unless a session is running.
    pub fn stop(&mut self) -> Vec<Effect> {
        if !self.active {
            return Vec::new();
        }

        let credit = partial_credit(self.elapsed_secs());
        self.reset_countdown();
        self.phase = SessionPhase::Idle;

        let mut effects = vec![Effect::StopTimers];
        if credit > 0 {
            effects.push(Effect::Record(StatsDelta::partial_focus(credit)));
        }
        effects.push(Effect::RestMascot);
        effects
    }

    /// A todo went from open to done. Independent of the countdown.
    pub fn on_task_completed(&mut self) -> Vec<Effect> {
        self.pulses += 1;
        vec![
            Effect::Record(StatsDelta::task_completed()),
            Effect::Schedule(Timeout::Celebration, CELEBRATION_PULSE),
        ]
    }

    pub fn on_timeout(&mut self, timeout: Timeout) -> Vec<Effect> {
        match timeout {
            // A session started during the hold owns the mascot now
            Timeout::CompletionHold if self.phase == SessionPhase::Completing => {
                self.phase = SessionPhase::Idle;
                vec![Effect::RestMascot]
            }
            Timeout::CompletionHold => Vec::new(),
            Timeout::Celebration => {
                self.pulses = self.pulses.saturating_sub(1);
                Vec::new()
            }
        }
    }

    fn reset_countdown(&mut self) {
        self.active = false;
        self.remaining_secs = 0;
        self.total_secs = 0;
        self.started_at = None;
    }
}
