use crate::domain::Timeout;
use std::time::Duration;

/// Mascot step interval in milliseconds
pub const MASCOT_STEP_MS: u64 = 100;

/// Countdown interval in milliseconds
pub const COUNTDOWN_MS: u64 = 1000;

/// How long the event loop waits for input before feeding the ticker
pub fn tick_duration() -> Duration {
    Duration::from_millis(MASCOT_STEP_MS)
}

/// Discrete event produced from elapsed wall time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Second,
    MascotStep,
    Timeout(Timeout),
}

/// Turns measured elapsed time into tick events.
///
/// The two periodic streams only run while armed; one-shot timeouts run regardless.
#[derive(Debug, Default)]
pub struct Ticker {
    armed: bool,
    countdown_acc: Duration,
    step_acc: Duration,
    timeouts: Vec<(Timeout, Duration)>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Start both periodic streams from zero
    pub fn arm(&mut self) {
        self.armed = true;
        self.countdown_acc = Duration::ZERO;
        self.step_acc = Duration::ZERO;
    }

    /// Stop both periodic streams; nothing partial carries over to the next arm
    pub fn cancel(&mut self) {
        self.armed = false;
        self.countdown_acc = Duration::ZERO;
        self.step_acc = Duration::ZERO;
    }

    pub fn schedule(&mut self, timeout: Timeout, after: Duration) {
        self.timeouts.push((timeout, after));
    }

    #[cfg(test)]
    pub fn pending_timeouts(&self) -> usize {
        self.timeouts.len()
    }

    /// Advance by `elapsed` and return every tick that fell due, in time order
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Tick> {
        let mut due: Vec<(Duration, Tick)> = Vec::new();

        if self.armed {
            collect_periodic(
                &mut self.step_acc,
                elapsed,
                Duration::from_millis(MASCOT_STEP_MS),
                Tick::MascotStep,
                &mut due,
            );
            collect_periodic(
                &mut self.countdown_acc,
                elapsed,
                Duration::from_millis(COUNTDOWN_MS),
                Tick::Second,
                &mut due,
            );
        }

        let mut pending = Vec::with_capacity(self.timeouts.len());
        for (timeout, remaining) in self.timeouts.drain(..) {
            if remaining <= elapsed {
                due.push((remaining, Tick::Timeout(timeout)));
            } else {
                pending.push((timeout, remaining - elapsed));
            }
        }
        self.timeouts = pending;

        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, tick)| tick).collect()
    }
}

fn collect_periodic(
    acc: &mut Duration,
    elapsed: Duration,
    interval: Duration,
    tick: Tick,
    due: &mut Vec<(Duration, Tick)>,
) {
    let mut total = *acc + elapsed;
    let mut at = interval - *acc;
    while total >= interval {
        due.push((at, tick));
        total -= interval;
        at += interval;
    }
    *acc = total;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn count(ticks: &[Tick], kind: Tick) -> usize {
        ticks.iter().filter(|t| **t == kind).count()
    }

    #[test]
    fn test_tick_duration() {
        assert_eq!(tick_duration(), Duration::from_millis(100));
    }

    #[test]
    fn test_disarmed_ticker_emits_nothing_periodic() {
        let mut ticker = Ticker::new();
        assert!(ticker.advance(Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_armed_ticker_counts() {
        let mut ticker = Ticker::new();
        ticker.arm();

        let ticks = ticker.advance(Duration::from_millis(2500));
        assert_eq!(count(&ticks, Tick::MascotStep), 25);
        assert_eq!(count(&ticks, Tick::Second), 2);
    }

    #[test]
    fn test_partial_intervals_accumulate() {
        let mut ticker = Ticker::new();
        ticker.arm();

        let mut seconds = 0;
        for _ in 0..30 {
            seconds += count(&ticker.advance(Duration::from_millis(70)), Tick::Second);
        }
        // 2100 ms
        assert_eq!(seconds, 2);
    }

    #[test]
    fn test_ticks_are_time_ordered() {
        let mut ticker = Ticker::new();
        ticker.arm();
        ticker.schedule(Timeout::Celebration, Duration::from_millis(250));

        let ticks = ticker.advance(Duration::from_millis(300));
        assert_eq!(
            ticks,
            vec![
                Tick::MascotStep,
                Tick::MascotStep,
                Tick::Timeout(Timeout::Celebration),
                Tick::MascotStep,
            ]
        );
    }

    #[test]
    fn test_cancel_drops_partial_progress() {
        let mut ticker = Ticker::new();
        ticker.arm();
        ticker.advance(Duration::from_millis(900));
        ticker.cancel();
        assert!(!ticker.is_armed());
        assert!(ticker.advance(Duration::from_millis(200)).is_empty());

        ticker.arm();
        let ticks = ticker.advance(Duration::from_millis(900));
        assert_eq!(count(&ticks, Tick::Second), 0);
    }

    #[test]
    fn test_timeouts_fire_once_while_disarmed() {
        let mut ticker = Ticker::new();
        ticker.schedule(Timeout::CompletionHold, Duration::from_secs(3));

        assert!(ticker.advance(Duration::from_secs(2)).is_empty());
        assert_eq!(ticker.pending_timeouts(), 1);
        assert_eq!(
            ticker.advance(Duration::from_secs(1)),
            vec![Tick::Timeout(Timeout::CompletionHold)]
        );
        assert_eq!(ticker.pending_timeouts(), 0);
        assert!(ticker.advance(Duration::from_secs(10)).is_empty());
    }
}
