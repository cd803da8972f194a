use crate::domain::{AggregateCounters, DailyStats, StatsDelta};
use crate::persistence::storage::KeyValueStore;
use chrono::{Days, Local, NaiveDate};
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub const TOTAL_FOCUS_KEY: &str = "totalFocusTime";
pub const COMPLETED_TASKS_KEY: &str = "completedTasks";
pub const DAILY_STATS_KEY: &str = "dailyStats";

/// Human-readable date used in storage keys, e.g. "Sun Oct 18 2026"
pub fn date_key(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Storage key for the session count of a given day
pub fn sessions_key(date: NaiveDate) -> String {
    format!("sessions_{}", date_key(date))
}

/// Durable focus statistics, mirrored between memory and a `KeyValueStore`
pub struct StatsStore<S: KeyValueStore> {
    store: S,
    date: NaiveDate,
    counters: AggregateCounters,
    history: BTreeMap<String, DailyStats>,
}

fn read_counter<S: KeyValueStore>(store: &S, key: &str) -> u32 {
    match store.get(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "stored counter is not a number, treating as zero");
            0
        }),
        None => 0,
    }
}

fn read_history<S: KeyValueStore>(store: &S) -> BTreeMap<String, DailyStats> {
    match store.get(DAILY_STATS_KEY) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "stored daily history is malformed, treating as empty");
            BTreeMap::new()
        }),
        None => BTreeMap::new(),
    }
}

impl<S: KeyValueStore> StatsStore<S> {
    /// Load counters for today from `store`
    pub fn load(store: S) -> Self {
        Self::load_for(store, Local::now().date_naive())
    }

    /// Load counters for an explicit date. Missing or malformed values default to zero.
    pub fn load_for(store: S, today: NaiveDate) -> Self {
        let counters = AggregateCounters {
            sessions_today: read_counter(&store, &sessions_key(today)),
            total_focus_minutes: read_counter(&store, TOTAL_FOCUS_KEY),
            completed_tasks: read_counter(&store, COMPLETED_TASKS_KEY),
        };
        let history = read_history(&store);

        Self {
            store,
            date: today,
            counters,
            history,
        }
    }

    pub fn counters(&self) -> AggregateCounters {
        self.counters
    }

    /// The date today's counters belong to
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn history(&self) -> &BTreeMap<String, DailyStats> {
        &self.history
    }

    /// History entry for a date (zero if none was recorded)
    pub fn day(&self, date: NaiveDate) -> DailyStats {
        self.history.get(&date_key(date)).copied().unwrap_or_default()
    }

    /// The `n` days ending at `today`, oldest first. Days before the calendar's start are skipped.
    pub fn last_days(&self, today: NaiveDate, n: u32) -> Vec<(NaiveDate, DailyStats)> {
        (0..n)
            .rev()
            .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
            .map(|date| (date, self.day(date)))
            .collect()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Switch the per-day counter to `today`. Returns true if the date moved.
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        if today == self.date {
            return false;
        }
        debug!(from = %self.date, to = %today, "day rolled over");
        self.date = today;
        self.counters.sessions_today = read_counter(&self.store, &sessions_key(today));
        true
    }

    /// Apply `delta` to today's counters and persist everything
    pub fn record_session(&mut self, delta: StatsDelta) {
        self.record_session_on(Local::now().date_naive(), delta);
    }

    /// Apply `delta` as of `today`, rolling the per-day counter over if the date moved
    pub fn record_session_on(&mut self, today: NaiveDate, delta: StatsDelta) {
        self.roll_over(today);
        if delta.is_empty() {
            return;
        }

        // Counters saturate instead of wrapping
        let counters = &mut self.counters;
        counters.sessions_today = counters.sessions_today.saturating_add(delta.sessions);
        counters.total_focus_minutes = counters.total_focus_minutes.saturating_add(delta.focus_minutes);
        counters.completed_tasks = counters.completed_tasks.saturating_add(delta.tasks);

        let entry = self.history.entry(date_key(today)).or_default();
        entry.sessions = entry.sessions.saturating_add(delta.sessions);
        entry.focus_minutes = entry.focus_minutes.saturating_add(delta.focus_minutes);
        entry.tasks_completed = entry.tasks_completed.saturating_add(delta.tasks);

        self.persist();
    }

    /// Write all scalar counters and the history map. Failures are logged, not returned.
    fn persist(&mut self) {
        let history_json = match serde_json::to_string(&self.history) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize daily history");
                return;
            }
        };

        let writes = [
            (sessions_key(self.date), self.counters.sessions_today.to_string()),
            (TOTAL_FOCUS_KEY.to_string(), self.counters.total_focus_minutes.to_string()),
            (COMPLETED_TASKS_KEY.to_string(), self.counters.completed_tasks.to_string()),
            (DAILY_STATS_KEY.to_string(), history_json),
        ];

        for (key, value) in writes.iter() {
            if let Err(e) = self.store.set(key, value) {
                warn!(key = %key, error = %e, "failed to persist stats value");
            }
        }
    }
}
